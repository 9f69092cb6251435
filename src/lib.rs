//=========================================================================
// Egresaditos: Library Root
//
// A small narrative dress-up game built around a fade-to-black scene
// transition controller.
//
// Responsibilities:
// - Expose the scene system (`core::scene`) and its collaborators
// - Expose the concrete game content (`game`)
// - Keep the windowing layer (`platform`) hidden from users
//
// Typical usage:
// ```no_run
// use egresaditos::game::{GameScene, GameScenes};
// use egresaditos::{EngineBuilder, GameConfig};
//
// fn main() {
//     let config = GameConfig::load().expect("config");
//     EngineBuilder::<GameScene>::new()
//         .with_config(config)
//         .build()
//         .run(GameScenes::new)
//         .expect("engine");
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the platform-independent systems: scenes, transitions,
// input, canvas, clock and configuration. `game` holds the scenes of
// the game itself.
//
pub mod core;
pub mod game;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` contains the winit/pixels integration and is not part of
// the public API surface.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use crate::core::config::GameConfig;
pub use crate::core::platform_bridge::PlatformError;
pub use engine::{Engine, EngineBuilder, EngineError};
