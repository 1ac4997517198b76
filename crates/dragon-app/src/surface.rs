//! `CanvasRenderingContext2d` backend.

use crate::css::{css_color, text_align};
use crate::error::AppError;
use dragon_core::ImageId;
use dragon_render::{RenderResult, RendererError, Surface, TextStyle};
use kurbo::{BezPath, PathEl, Point, Rect, Size};
use peniko::Color;
use std::collections::HashMap;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, ImageBitmap};

fn js_err(err: JsValue) -> RendererError {
    RendererError::Surface(format!("{err:?}"))
}

/// Draws onto an HTML canvas and owns the decoded bitmaps.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    bitmaps: HashMap<ImageId, ImageBitmap>,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, AppError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|err| AppError::Js(format!("{err:?}")))?
            .ok_or_else(|| AppError::Js("2d context unavailable".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| AppError::Js("unexpected context type".to_string()))?;
        Ok(Self {
            canvas,
            ctx,
            bitmaps: HashMap::new(),
        })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Set the backing store size in canvas pixels.
    pub fn resize(&self, size: Size) {
        self.canvas.set_width(size.width.max(0.0) as u32);
        self.canvas.set_height(size.height.max(0.0) as u32);
    }

    pub fn insert_bitmap(&mut self, id: ImageId, bitmap: ImageBitmap) {
        self.bitmaps.insert(id, bitmap);
    }

    /// Drop a bitmap and release its pixel memory.
    pub fn remove_bitmap(&mut self, id: ImageId) {
        if let Some(bitmap) = self.bitmaps.remove(&id) {
            bitmap.close();
        }
    }

    fn trace(&self, path: &BezPath) {
        self.ctx.begin_path();
        for el in path.elements() {
            match *el {
                PathEl::MoveTo(p) => self.ctx.move_to(p.x, p.y),
                PathEl::LineTo(p) => self.ctx.line_to(p.x, p.y),
                PathEl::QuadTo(c, p) => self.ctx.quadratic_curve_to(c.x, c.y, p.x, p.y),
                PathEl::CurveTo(c1, c2, p) => {
                    self.ctx.bezier_curve_to(c1.x, c1.y, c2.x, c2.y, p.x, p.y)
                }
                PathEl::ClosePath => self.ctx.close_path(),
            }
        }
    }

    fn apply_font(&self, style: &TextStyle) {
        self.ctx.set_font(&style.font);
        self.ctx.set_text_align(text_align(style.align));
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> Size {
        Size::new(f64::from(self.canvas.width()), f64::from(self.canvas.height()))
    }

    fn clear(&mut self, region: Rect) -> RenderResult<()> {
        self.ctx
            .clear_rect(region.x0, region.y0, region.width(), region.height());
        Ok(())
    }

    fn blit(&mut self, image: ImageId, src: Rect, dst: Rect) -> RenderResult<()> {
        let bitmap = self
            .bitmaps
            .get(&image)
            .ok_or(RendererError::MissingBitmap(image))?;
        self.ctx
            .draw_image_with_image_bitmap_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
                bitmap,
                src.x0,
                src.y0,
                src.width(),
                src.height(),
                dst.x0,
                dst.y0,
                dst.width(),
                dst.height(),
            )
            .map_err(js_err)
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> RenderResult<()> {
        self.ctx.set_fill_style_str(&css_color(color));
        self.ctx
            .fill_rect(rect.x0, rect.y0, rect.width(), rect.height());
        Ok(())
    }

    fn fill_path(&mut self, path: &BezPath, color: Color) -> RenderResult<()> {
        self.ctx.set_fill_style_str(&css_color(color));
        self.trace(path);
        self.ctx.fill();
        Ok(())
    }

    fn stroke_path(&mut self, path: &BezPath, color: Color, width: f64) -> RenderResult<()> {
        self.ctx.set_stroke_style_str(&css_color(color));
        self.ctx.set_line_width(width);
        self.trace(path);
        self.ctx.stroke();
        Ok(())
    }

    fn measure_text_width(&mut self, text: &str, style: &TextStyle) -> RenderResult<f64> {
        self.apply_font(style);
        let metrics = self.ctx.measure_text(text).map_err(js_err)?;
        Ok(metrics.width())
    }

    fn draw_text(&mut self, text: &str, origin: Point, style: &TextStyle) -> RenderResult<()> {
        self.apply_font(style);
        self.ctx.set_fill_style_str(&css_color(style.color));
        self.ctx.fill_text(text, origin.x, origin.y).map_err(js_err)
    }
}
