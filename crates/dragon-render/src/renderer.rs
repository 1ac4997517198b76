//! Drawing-surface abstraction.

use dragon_core::config::StyleConfig;
use dragon_core::{CanvasController, Gesture, ImageCollection, ImageId, PlacedImage};
use kurbo::{BezPath, Point, Rect, Size};
use peniko::Color;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Surface error: {0}")]
    Surface(String),
    #[error("No bitmap loaded for image {0}")]
    MissingBitmap(ImageId),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Horizontal anchoring of drawn text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
}

/// Font and layout of a text block.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    /// CSS font shorthand.
    pub font: String,
    pub color: Color,
    pub align: TextAlign,
    pub line_height: f64,
}

impl TextStyle {
    /// Style of the empty-canvas instructions.
    pub fn instructions() -> Self {
        Self {
            font: "24px Arial".to_string(),
            color: Color::from_rgba8(128, 128, 128, 255),
            align: TextAlign::Center,
            line_height: 38.0,
        }
    }
}

/// A 2D drawing surface.
///
/// All coordinates are canvas units. Bitmaps are referenced by [`ImageId`];
/// the surface owns the pixel data.
pub trait Surface {
    /// Current surface size.
    fn size(&self) -> Size;

    /// Reset `region` to transparent.
    fn clear(&mut self, region: Rect) -> RenderResult<()>;

    /// Draw the `src` part of a bitmap scaled into `dst`.
    fn blit(&mut self, image: ImageId, src: Rect, dst: Rect) -> RenderResult<()>;

    fn fill_rect(&mut self, rect: Rect, color: Color) -> RenderResult<()>;

    fn fill_path(&mut self, path: &BezPath, color: Color) -> RenderResult<()>;

    fn stroke_path(&mut self, path: &BezPath, color: Color, width: f64) -> RenderResult<()>;

    /// Width `text` would take when drawn with `style`.
    fn measure_text_width(&mut self, text: &str, style: &TextStyle) -> RenderResult<f64>;

    /// Draw one line of text; `origin.x` is interpreted per `style.align`.
    fn draw_text(&mut self, text: &str, origin: Point, style: &TextStyle) -> RenderResult<()>;
}

/// Context for a single render frame.
pub struct RenderContext<'a> {
    pub images: &'a ImageCollection,
    /// Index of the selected image.
    pub selection: Option<usize>,
    pub gesture: Gesture,
    pub style: StyleConfig,
    pub viewport_size: Size,
}

impl<'a> RenderContext<'a> {
    pub fn new(images: &'a ImageCollection, viewport_size: Size) -> Self {
        Self {
            images,
            selection: None,
            gesture: Gesture::Idle,
            style: StyleConfig::default(),
            viewport_size,
        }
    }

    /// Build a context mirroring the controller's current state.
    pub fn from_controller(controller: &'a CanvasController) -> Self {
        Self::new(controller.images(), controller.canvas_size())
            .with_selection(controller.selection())
            .with_gesture(*controller.gesture())
            .with_style(controller.config().style)
    }

    pub fn with_selection(mut self, selection: Option<usize>) -> Self {
        self.selection = selection;
        self
    }

    pub fn with_gesture(mut self, gesture: Gesture) -> Self {
        self.gesture = gesture;
        self
    }

    pub fn with_style(mut self, style: StyleConfig) -> Self {
        self.style = style;
        self
    }

    pub fn selected_image(&self) -> Option<&'a PlacedImage> {
        self.selection.and_then(|index| self.images.get(index))
    }

    /// Whether border, handles and delete control are drawn this frame.
    pub fn show_decorations(&self) -> bool {
        !(self.style.hide_handles_while_dragging && self.gesture.is_dragging())
    }
}
