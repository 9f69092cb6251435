//=========================================================================
// Scene Errors
//=========================================================================
//
// Failure taxonomy for scene construction.
//
// Construction is the only failure path of the transition controller:
//   Unregistered     → the factory has no constructor for the key
//   Construction     → the scene's own constructor refused to build
//   FallbackFailed   → even the fallback scene could not be built (fatal)
//
//=========================================================================

//=== External Dependencies ===============================================

use thiserror::Error;

//=== SceneError ==========================================================

/// Errors raised while constructing a scene.
///
/// Keys are stored by their display name so the error stays independent
/// of the concrete key type.
#[derive(Debug, Error)]
pub enum SceneError {
    /// No constructor is registered for the key.
    #[error("no scene registered for key {0}")]
    Unregistered(String),

    /// The scene constructor itself failed.
    #[error("scene {key} failed to construct: {reason}")]
    Construction { key: String, reason: String },

    /// The fallback scene could not be constructed either.
    ///
    /// Non-recoverable: the controller has no valid scene to run.
    #[error("fallback scene {key} failed to construct")]
    FallbackFailed {
        key: String,
        #[source]
        source: Box<SceneError>,
    },
}

impl SceneError {
    /// Shorthand for [`SceneError::Unregistered`].
    pub fn unregistered(key: impl std::fmt::Display) -> Self {
        Self::Unregistered(key.to_string())
    }

    /// Shorthand for [`SceneError::Construction`].
    pub fn construction(key: impl std::fmt::Display, reason: impl Into<String>) -> Self {
        Self::Construction {
            key: key.to_string(),
            reason: reason.into(),
        }
    }

    /// Returns `true` for the non-recoverable variant.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::FallbackFailed { .. })
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
