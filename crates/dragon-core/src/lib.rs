//! DragON Core Library
//!
//! Platform-agnostic model and interaction logic for the DragON image canvas:
//! placed images in z-order, initial placement, hit-testing and the
//! drag/resize/delete gesture state machine.

pub mod canvas;
pub mod config;
pub mod controller;
pub mod error;
pub mod hit;
pub mod image;
pub mod input;
pub mod placement;
pub mod selection;

pub use canvas::ImageCollection;
pub use config::{
    CanvasConfig, DeletePlacement, HandleShape, HitConfig, InteractionStyle, PlacementConfig,
    PlacementStrategy, SerializableColor, StyleConfig, Theme,
};
pub use controller::{Action, CanvasController, CanvasState};
pub use error::{ConfigError, LoadError};
pub use hit::{Hit, HitPart, hit_test};
pub use image::{DecodedImage, ImageId, PlacedImage, is_image_mime};
pub use input::{Gesture, PointerEvent};
pub use selection::{Anchor, Handle, HandleKind};
