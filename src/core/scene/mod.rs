//=========================================================================
// Scene System
//=========================================================================
//
// Scene contract, scene construction by key, and the fade-transition
// controller that swaps scenes.
//
// Architecture:
//   TransitionController
//     ├─ active_scene: Box<dyn Scene<K>>   (exactly one live scene)
//     ├─ fade: Fade                        (Stable / FadingOut / FadingIn)
//     └─ factory: impl SceneFactory<K>     (key → fresh scene)
//
// Flow:
//   tick() → handle_input() → update() → request? → fade.advance()
//          → (at full black) factory.create() → draw() → overlay
//
//=========================================================================

//=== Internal Dependencies ===============================================

use std::fmt::{Debug, Display};
use std::hash::Hash;

use crate::core::canvas::Canvas;
use crate::core::input::InputEvent;

//=== Module Declarations =================================================

mod controller;
mod fade;
mod registry;

//=== Public API ==========================================================

pub use controller::TransitionController;
pub use fade::{Fade, FadeEvent, FadePhase, FADE_MAX};
pub use registry::{SceneFactory, SceneRegistry, Shared};

//=== Scene Key Trait =====================================================

/// Marker trait for scene identifiers.
///
/// Scene keys name scene types; the factory maps each key to one
/// constructible scene. Typically implemented by a game-specific enum.
/// `Display` provides the canonical name used in logs and errors.
pub trait SceneKey: Clone + Copy + Eq + Hash + Debug + Display + 'static {}

//=== Transition Request ==================================================

/// A scene's request to leave for another scene.
///
/// Returned from [`Scene::handle_input`] or [`Scene::update`]; the
/// controller consumes it in the same tick. Requests made while a
/// transition is already in flight are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionRequest<K: SceneKey> {
    pub target: K,
}

impl<K: SceneKey> TransitionRequest<K> {
    /// Requests a transition to `target`.
    pub fn to(target: K) -> Self {
        Self { target }
    }
}

//=== Scene Trait =========================================================

/// A self-contained screen of the game.
///
/// The controller owns exactly one live scene and drives it once per
/// tick: input first (only while input is enabled), then `update`,
/// then `draw`.
///
/// # Minimal Implementation
///
/// Only `draw()` is required:
///
/// ```rust
/// # use egresaditos::prelude::*;
/// # #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// # enum Screen { Main }
/// # impl std::fmt::Display for Screen {
/// #     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "MAIN") }
/// # }
/// # impl SceneKey for Screen {}
/// struct Blank;
///
/// impl Scene<Screen> for Blank {
///     fn draw(&self, canvas: &mut Canvas) {
///         canvas.clear(Color::BLACK);
///     }
/// }
/// ```
pub trait Scene<K: SceneKey> {
    /// Called for each input event while input is enabled.
    ///
    /// Button callbacks live here; returning a request starts a
    /// transition.
    fn handle_input(&mut self, _event: &InputEvent) -> Option<TransitionRequest<K>> {
        None
    }

    /// Called once per tick with the elapsed seconds.
    fn update(&mut self, _dt: f32) -> Option<TransitionRequest<K>> {
        None
    }

    /// Draws the scene into the frame.
    fn draw(&self, canvas: &mut Canvas);
}
