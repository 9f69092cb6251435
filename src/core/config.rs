//=========================================================================
// Game Configuration
//=========================================================================
//
// Runtime settings loaded from `egresaditos.toml`, with environment
// variable overrides.
//
// Resolution order (later wins):
// ```text
//   defaults → egresaditos.toml (or $EGRESADITOS_CONFIG) → EGRESADITOS_* env
// ```
//
// Every section is `#[serde(default)]`, so a partial file (or no file at
// all) is valid.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::{info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

//=== Constants ===========================================================

/// Default configuration file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "egresaditos.toml";

/// Environment variable naming an alternative configuration file.
pub const CONFIG_PATH_VAR: &str = "EGRESADITOS_CONFIG";

//=== ConfigError =========================================================

/// Configuration loading and validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A scene name that no scene key parses from.
    #[error("unknown scene '{0}'")]
    UnknownScene(String),

    #[error("invalid setting {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

//=== GameConfig ==========================================================

/// Top-level game configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub timing: TimingConfig,
    pub scenes: ScenesConfig,
    pub ui: UiConfig,
}

/// Window settings. The canvas has the same size as the window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

/// Frame pacing and fade settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TimingConfig {
    /// Target frames (ticks) per second.
    pub fps: f64,

    /// Fade speed in alpha units per second.
    pub fade_rate: f32,

    /// Longest frame time handed to a tick, in seconds.
    pub max_dt: f32,
}

/// Scene selection, by canonical scene name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScenesConfig {
    /// Scene shown at startup.
    pub initial: String,

    /// Scene built when a target scene fails to load.
    pub fallback: String,
}

/// Presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    /// TTF/OTF file for labels. Unset means the system sans-serif face.
    pub font: Option<PathBuf>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Egresaditos: La Última Semana".to_string(),
            width: 1280,
            height: 720,
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            fps: 60.0,
            fade_rate: 350.0,
            max_dt: 0.25,
        }
    }
}

impl Default for ScenesConfig {
    fn default() -> Self {
        Self {
            initial: "TITLE".to_string(),
            fallback: "TITLE".to_string(),
        }
    }
}

impl GameConfig {
    //--- Loading ----------------------------------------------------------

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Read`] if the file cannot be read,
    /// [`ConfigError::Parse`] if it is not valid configuration TOML.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parses configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads `path`, or returns defaults if the file does not exist.
    ///
    /// # Errors
    ///
    /// A file that exists but fails to read or parse is an error rather
    /// than silently replaced by defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            info!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let config = Self::load_from_file(path)?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Full startup resolution: file (honouring `EGRESADITOS_CONFIG`),
    /// environment overrides, then validation.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var(CONFIG_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE));

        let mut config = Self::load_or_default(&path)?;
        config.merge_with_env();
        config.validate()?;
        Ok(config)
    }

    //--- Environment Overrides --------------------------------------------

    /// Applies `EGRESADITOS_*` environment variables over file values.
    pub fn merge_with_env(&mut self) {
        self.merge_with(|name| std::env::var(name).ok());
    }

    /// Applies overrides from an arbitrary variable lookup.
    ///
    /// Unparsable numbers are logged and ignored.
    pub fn merge_with<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("EGRESADITOS_FPS") {
            match val.parse::<f64>() {
                Ok(fps) => self.timing.fps = fps,
                Err(_) => warn!("Ignoring EGRESADITOS_FPS={:?}: not a number", val),
            }
        }
        if let Some(val) = lookup("EGRESADITOS_FADE_RATE") {
            match val.parse::<f32>() {
                Ok(rate) => self.timing.fade_rate = rate,
                Err(_) => warn!("Ignoring EGRESADITOS_FADE_RATE={:?}: not a number", val),
            }
        }
        if let Some(scene) = lookup("EGRESADITOS_INITIAL_SCENE") {
            self.scenes.initial = scene;
        }
        if let Some(scene) = lookup("EGRESADITOS_FALLBACK_SCENE") {
            self.scenes.fallback = scene;
        }
        if let Some(path) = lookup("EGRESADITOS_FONT") {
            self.ui.font = Some(PathBuf::from(path));
        }
    }

    //--- Validation -------------------------------------------------------

    /// Rejects values the engine cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::Invalid {
                field: "window.width/height",
                reason: format!("{}x{} has no pixels", self.window.width, self.window.height),
            });
        }
        if !(self.timing.fps.is_finite() && self.timing.fps > 0.0) {
            return Err(invalid_positive("timing.fps", self.timing.fps));
        }
        if !(self.timing.fade_rate.is_finite() && self.timing.fade_rate > 0.0) {
            return Err(invalid_positive("timing.fade_rate", self.timing.fade_rate));
        }
        if !(self.timing.max_dt.is_finite() && self.timing.max_dt > 0.0) {
            return Err(invalid_positive("timing.max_dt", self.timing.max_dt));
        }
        Ok(())
    }

    //--- Scene Keys -------------------------------------------------------

    /// Parses the initial scene name into a key.
    pub fn initial_scene<K: FromStr>(&self) -> Result<K, ConfigError> {
        parse_scene(&self.scenes.initial)
    }

    /// Parses the fallback scene name into a key.
    pub fn fallback_scene<K: FromStr>(&self) -> Result<K, ConfigError> {
        parse_scene(&self.scenes.fallback)
    }
}

//=== Helpers =============================================================

fn parse_scene<K: FromStr>(name: &str) -> Result<K, ConfigError> {
    name.parse()
        .map_err(|_| ConfigError::UnknownScene(name.to_string()))
}

fn invalid_positive(field: &'static str, value: impl std::fmt::Display) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: format!("must be a positive number, got {}", value),
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
