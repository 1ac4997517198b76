//! DragON Render Library
//!
//! Drawing-surface abstraction and the per-frame render driver.
//! Backends implement [`Surface`]; the browser backend lives in the app crate.

mod frame;
mod renderer;
pub mod text;

pub use frame::{draw_frame, draw_instructions};
pub use renderer::{RenderContext, RenderResult, RendererError, Surface, TextAlign, TextStyle};
