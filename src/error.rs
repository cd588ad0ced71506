//! Error types
//!
//! Every error in here is a setup or programming defect, not a runtime
//! condition: startup aborts on them, or the offending transition does.

use thiserror::Error;

/// Problems reading or validating `flabod.ron`
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: ron::error::SpannedError,
    },

    #[error("invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// A required sprite or sound could not be loaded
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to load texture {path}: {message}")]
    Texture { path: String, message: String },

    #[error("failed to load sound {path}: {message}")]
    Sound { path: String, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SceneError {
    #[error("unknown scene: {0}")]
    UnknownScene(String),
}

/// Top-level error, reported by `main` before exiting
#[derive(Debug, Error)]
pub enum FlabodError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Asset(#[from] AssetError),

    #[error(transparent)]
    Scene(#[from] SceneError),
}

pub type Result<T> = std::result::Result<T, FlabodError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_error_converts() {
        let err: FlabodError = SceneError::UnknownScene("menu".to_string()).into();
        assert_eq!(err.to_string(), "unknown scene: menu");
    }

    #[test]
    fn test_invalid_config_message() {
        let err = ConfigError::Invalid {
            field: "gravity",
            reason: "must be finite".to_string(),
        };
        assert_eq!(err.to_string(), "invalid config value for gravity: must be finite");
    }
}
