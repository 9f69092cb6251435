//=========================================================================
// Input
//=========================================================================
//
// Platform-independent input representation.
//
// Components:
// - `event`: InputEvent and its key/button/modifier vocabulary
// - `state_tracker`: held keys, owned per scene
//
// Events arrive from the platform in per-frame batches and are handed
// to the transition controller, which gates them before the active
// scene sees them.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod event;
mod state_tracker;

//=== Public API ==========================================================

pub use event::{InputEvent, KeyCode, Modifiers, MouseButton};
pub use state_tracker::StateTracker;
