//=========================================================================
// Scene Registry
//=========================================================================
//
// Maps scene keys to constructors and builds fresh scene instances.
//
// Every construction receives a handle to the shared game state
// (dependency injection); nothing is reached through globals.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use log::{debug, warn};

//=== Internal Dependencies ===============================================

use super::{Scene, SceneKey};
use crate::core::error::SceneError;

//=== Shared State Handle =================================================

/// Shared, single-threaded handle to mutable game state.
pub type Shared<S> = Rc<RefCell<S>>;

//=== SceneFactory ========================================================

/// Builds a fresh scene for a key.
///
/// Implementations must construct exactly one instance per call and
/// have no side effects beyond that construction.
pub trait SceneFactory<K: SceneKey> {
    /// Constructs the scene registered for `key`.
    ///
    /// # Errors
    ///
    /// - [`SceneError::Unregistered`] if `key` has no constructor
    /// - [`SceneError::Construction`] if the scene's constructor fails
    fn create(&self, key: K) -> Result<Box<dyn Scene<K>>, SceneError>;
}

//=== SceneRegistry =======================================================

type Constructor<K, S> = Box<dyn Fn(Shared<S>) -> Result<Box<dyn Scene<K>>, SceneError>>;

/// Map-based [`SceneFactory`] holding the shared state handle.
///
/// The open-ended counterpart to a factory that matches on a closed key
/// enum (the game's own `GameScenes`): scenes are added at runtime, any
/// key may stay unregistered, and a request for one ends on the
/// controller's fallback scene.
///
/// # Example
///
/// ```rust
/// # use egresaditos::prelude::*;
/// # use std::cell::RefCell;
/// # use std::rc::Rc;
/// # #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// # enum Screen { Main }
/// # impl std::fmt::Display for Screen {
/// #     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "MAIN") }
/// # }
/// # impl SceneKey for Screen {}
/// # struct Blank;
/// # impl Scene<Screen> for Blank { fn draw(&self, _: &mut Canvas) {} }
/// let mut registry = SceneRegistry::new(Rc::new(RefCell::new(0u32)));
/// registry.register(Screen::Main, |_state| Ok(Box::new(Blank)));
///
/// assert!(registry.create(Screen::Main).is_ok());
/// ```
pub struct SceneRegistry<K: SceneKey, S> {
    state: Shared<S>,
    constructors: HashMap<K, Constructor<K, S>>,
}

impl<K: SceneKey, S: 'static> SceneRegistry<K, S> {
    //--- Construction -----------------------------------------------------

    /// Creates an empty registry sharing `state` with every scene it builds.
    pub fn new(state: Shared<S>) -> Self {
        Self {
            state,
            constructors: HashMap::new(),
        }
    }

    //--- Registration -----------------------------------------------------

    /// Registers the constructor for `key`.
    ///
    /// Registering a key twice replaces the previous constructor.
    pub fn register<F>(&mut self, key: K, constructor: F)
    where
        F: Fn(Shared<S>) -> Result<Box<dyn Scene<K>>, SceneError> + 'static,
    {
        if self.constructors.insert(key, Box::new(constructor)).is_some() {
            warn!(target: "scene", "Scene {} was already registered and has been replaced", key);
        }
    }

    //--- Queries ----------------------------------------------------------

    pub fn is_registered(&self, key: K) -> bool {
        self.constructors.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }

    /// The shared state handed to every constructor.
    pub fn state(&self) -> &Shared<S> {
        &self.state
    }
}

impl<K: SceneKey, S: 'static> SceneFactory<K> for SceneRegistry<K, S> {
    fn create(&self, key: K) -> Result<Box<dyn Scene<K>>, SceneError> {
        let constructor = self
            .constructors
            .get(&key)
            .ok_or_else(|| SceneError::unregistered(key))?;

        debug!(target: "scene", "Constructing scene {}", key);
        constructor(Rc::clone(&self.state))
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
