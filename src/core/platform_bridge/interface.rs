//=========================================================================
// Platform Bridge Interface
//=========================================================================
//
// Messages crossing the thread boundary, plus the platform's error type.
//
// ```text
//   main thread ──PlatformEvent──► logic thread
//   main thread ◄──FrameMessage─── logic thread
// ```
//
//=========================================================================

use thiserror::Error;

use crate::core::input::event::InputEvent;

//=== PlatformEvent =======================================================

#[derive(Debug, Clone)]
pub(crate) enum PlatformEvent {
    /// Everything buffered between two redraws. `continuous` holds at
    /// most the newest pointer position that arrived after the last
    /// entry of `discrete`; earlier motion is already inside `discrete`.
    Inputs {
        discrete: Vec<InputEvent>,
        continuous: Vec<InputEvent>,
    },

    /// The player closed the window.
    WindowClosed,
}

//=== FrameMessage ========================================================

#[derive(Debug, Clone)]
pub(crate) enum FrameMessage {
    /// Canvas pixels as row-major RGBA8.
    Frame(Vec<u8>),

    /// The logic loop has ended; close the window.
    Shutdown,
}

//=== PlatformError =======================================================

/// Failures of the windowing and presentation layer.
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("event loop creation failed: {0}")]
    EventLoopCreation(String),

    #[error("event loop error: {0}")]
    EventLoopExecution(String),

    #[error("window creation failed: {0}")]
    WindowCreation(String),

    /// The pixels surface could not be built, resized or rendered.
    #[error("surface error: {0}")]
    Surface(String),
}
