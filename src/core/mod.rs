//=========================================================================
// Core Systems
//
// Platform-independent building blocks that run on the logic thread.
//
// Responsibilities:
// - Scene contract, scene factories and the fade-transition controller
// - Engine-level input events and held-input tracking
// - Software frame buffer that scenes draw into
// - Fixed-step frame pacing and runtime configuration
//
// Notes:
// Nothing in `core` touches winit or the window. The platform layer
// feeds input in and takes finished frames out through the
// `platform_bridge` channel types.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod canvas;
pub mod clock;
pub mod config;
pub mod error;
pub mod geometry;
pub mod input;
pub mod scene;

pub(crate) mod platform_bridge;

//=== Public API ==========================================================

pub use canvas::{Canvas, Color};
pub use clock::FrameClock;
pub use config::{ConfigError, GameConfig};
pub use error::SceneError;
pub use geometry::{Point, Rect};
pub use scene::{Scene, SceneFactory, SceneKey, SceneRegistry, TransitionController, TransitionRequest};

//=== TickControl =========================================================

/// Frame loop control signal returned by every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickControl {
    Continue,
    Exit,
}
