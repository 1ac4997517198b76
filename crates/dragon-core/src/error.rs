//! Error types for the core crate.

use thiserror::Error;

/// Errors raised while reading or overriding a [`CanvasConfig`](crate::config::CanvasConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Unknown value '{value}' for option '{option}'")]
    UnknownValue { option: &'static str, value: String },
}

impl ConfigError {
    pub(crate) fn unknown(option: &'static str, value: &str) -> Self {
        Self::UnknownValue {
            option,
            value: value.to_string(),
        }
    }
}

/// Errors raised while turning a user file into a placeable image.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Not an image file: {0}")]
    NotAnImage(String),
    #[error("Image has zero width or height")]
    EmptyImage,
    #[error("Decode failed: {0}")]
    Decode(String),
}
