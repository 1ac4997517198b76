//! Page-level application state.

use crate::error::AppError;
use crate::surface::CanvasSurface;
use dragon_core::input::to_canvas;
use dragon_core::{Action, CanvasConfig, CanvasController, DecodedImage, PointerEvent, Theme};
use dragon_render::{RenderContext, draw_frame};
use kurbo::{Point, Size, Vec2};
use web_sys::{HtmlCanvasElement, ImageBitmap};

/// One canvas on the page: controller plus its drawing surface.
pub struct App {
    controller: CanvasController,
    surface: CanvasSurface,
    /// On-screen offset of the canvas, refreshed on layout changes.
    canvas_origin: Vec2,
}

impl App {
    pub fn new(
        canvas: HtmlCanvasElement,
        config: CanvasConfig,
        seed: u64,
    ) -> Result<Self, AppError> {
        let size = Size::new(f64::from(canvas.width()), f64::from(canvas.height()));
        let surface = CanvasSurface::new(canvas)?;
        let mut app = Self {
            controller: CanvasController::new(config, size, seed),
            surface,
            canvas_origin: Vec2::ZERO,
        };
        app.update_origin();
        Ok(app)
    }

    /// Map client coordinates of a mouse event onto the canvas.
    pub fn to_canvas(&self, client: Point) -> Point {
        to_canvas(client, self.canvas_origin)
    }

    pub fn handle_pointer(&mut self, event: PointerEvent) {
        let action = self.controller.handle_pointer(event);
        if let Action::Removed(id) = action {
            self.surface.remove_bitmap(id);
        }
        if action.needs_redraw() {
            self.redraw();
        }
    }

    /// Take ownership of a decoded bitmap and place it on the canvas.
    pub fn add_image(&mut self, decoded: DecodedImage, bitmap: ImageBitmap) {
        self.surface.insert_bitmap(decoded.id(), bitmap);
        self.controller.add_image(decoded);
        self.redraw();
    }

    /// Match the canvas to a new window size.
    pub fn resize(&mut self, size: Size) {
        self.surface.resize(size);
        self.controller.set_canvas_size(size);
        self.update_origin();
        log::debug!("Canvas resized to {}x{}", size.width, size.height);
        self.redraw();
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.controller.toggle_theme()
    }

    /// Repaint; failures are logged.
    pub fn redraw(&mut self) {
        if let Err(err) = self.try_redraw() {
            log::error!("Render failed: {err}");
        }
    }

    fn try_redraw(&mut self) -> Result<(), AppError> {
        let ctx = RenderContext::from_controller(&self.controller);
        draw_frame(&mut self.surface, &ctx)?;
        Ok(())
    }

    fn update_origin(&mut self) {
        let rect = self.surface.canvas().get_bounding_client_rect();
        self.canvas_origin = Vec2::new(rect.left(), rect.top());
    }
}
