//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use egresaditos::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine core
pub use crate::engine::{Engine, EngineBuilder, EngineError};
pub use crate::core::config::GameConfig;
pub use crate::core::TickControl;

// Drawing
pub use crate::core::canvas::{Canvas, Color};
pub use crate::core::geometry::{Point, Rect};

// Input system
pub use crate::core::input::{InputEvent, KeyCode, Modifiers, MouseButton, StateTracker};

// Scene system
pub use crate::core::error::SceneError;
pub use crate::core::scene::{
    FadePhase, Scene, SceneFactory, SceneKey, SceneRegistry, Shared, TransitionController,
    TransitionRequest,
};
