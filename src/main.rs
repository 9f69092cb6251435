//=========================================================================
// Egresaditos: binary entry point
//
// Initializes logging (`RUST_LOG`), loads `egresaditos.toml` plus
// environment overrides, installs the label font, and runs the game
// until the window closes.
//
//=========================================================================

use std::process::ExitCode;

use log::{error, warn};

use egresaditos::game::widgets::{install_font_file, install_system_font};
use egresaditos::game::{GameScene, GameScenes, Layout};
use egresaditos::{EngineBuilder, GameConfig};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match GameConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let font = match &config.ui.font {
        Some(path) => install_font_file(path),
        None => install_system_font(),
    };
    if let Err(e) = font {
        warn!(target: "ui", "Label font unavailable, using block glyphs: {}", e);
    }

    let layout = Layout::new(config.window.width as f32, config.window.height as f32);
    let result = EngineBuilder::<GameScene>::new()
        .with_config(config)
        .build()
        .run(move || GameScenes::with_layout(layout));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Game stopped: {}", e);
            ExitCode::FAILURE
        }
    }
}
