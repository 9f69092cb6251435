//=========================================================================
// Platform Bridge
//=========================================================================
//
// Bridges the platform layer (winit + pixels) with core systems.
//
// This module defines the contract between the platform implementation
// and core logic, so the core never depends on windowing types.
//
// Components:
// - `interface`: Channel message types and platform errors (the contract)
// - `event_collector`: Core-side event draining into per-tick input
//
//=========================================================================

//=== Module Declarations =================================================

pub(crate) mod event_collector;
pub(crate) mod interface;

//=== Internal API ========================================================

pub(crate) use event_collector::EventCollector;
pub(crate) use interface::{FrameMessage, PlatformEvent};

pub use interface::PlatformError;
