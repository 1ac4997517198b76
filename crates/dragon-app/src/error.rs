//! Application errors.

use dragon_core::ConfigError;
use dragon_render::RendererError;
use thiserror::Error;

/// Errors raised while setting up or driving the page.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Element #{0} not found")]
    MissingElement(&'static str),
    #[error("JavaScript error: {0}")]
    Js(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Render(#[from] RendererError),
}
