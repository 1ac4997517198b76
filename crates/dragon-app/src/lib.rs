//! DragON Application
//!
//! Browser shell for the DragON canvas: the `CanvasRenderingContext2d`
//! surface, DOM event wiring, asynchronous image decoding and the theme
//! toggle. URL parameter parsing and color conversion are platform
//! independent and compile natively for tests.

pub mod css;
mod error;
pub mod params;

pub use error::AppError;
pub use params::UrlParams;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod loader;
#[cfg(target_arch = "wasm32")]
mod surface;
#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::run_wasm;
