//! Per-frame render driver.

use crate::renderer::{RenderContext, RenderResult, Surface, TextStyle};
use crate::text::{INSTRUCTIONS, wrap_text};
use dragon_core::PlacedImage;
use dragon_core::config::{HandleShape, StyleConfig};
use dragon_core::selection::{corner_handles, delete_position};
use kurbo::{BezPath, Circle, Point, Rect, Shape, Size};

/// Extra width of the white outline drawn under the selection border.
const OUTLINE_EXTRA: f64 = 4.0;
/// Share of the delete control's size covered by each arm of its cross.
const DELETE_MARK_RATIO: f64 = 0.35;

/// Repaint the whole surface.
///
/// An empty canvas shows the instructions. Otherwise every image is blitted
/// back to front and the selected one gets its border, handles and delete
/// control.
pub fn draw_frame(surface: &mut impl Surface, ctx: &RenderContext) -> RenderResult<()> {
    surface.clear(ctx.viewport_size.to_rect())?;

    if ctx.images.is_empty() {
        return draw_instructions(surface, ctx.viewport_size);
    }

    for image in ctx.images {
        surface.blit(image.id(), image.source_rect(), image.bounds())?;
    }

    match ctx.selected_image() {
        Some(image) if ctx.show_decorations() => draw_selection(surface, image, &ctx.style),
        _ => Ok(()),
    }
}

/// Draw the centered instruction block.
pub fn draw_instructions(surface: &mut impl Surface, viewport: Size) -> RenderResult<()> {
    let style = TextStyle::instructions();
    let max_width = viewport.width * 0.9;
    let lines = wrap_text(INSTRUCTIONS, max_width, |line| {
        surface.measure_text_width(line, &style)
    })?;

    let x = viewport.width / 2.0;
    let mut y = viewport.height / 3.0 - style.line_height * 3.0;
    for line in &lines {
        surface.draw_text(line, Point::new(x, y), &style)?;
        y += style.line_height;
    }
    Ok(())
}

fn draw_selection(
    surface: &mut impl Surface,
    image: &PlacedImage,
    style: &StyleConfig,
) -> RenderResult<()> {
    if style.show_border {
        let half = style.border_width / 2.0;
        let outline_half = half + OUTLINE_EXTRA / 2.0;
        let outline = image.bounds().inflate(outline_half, outline_half);
        surface.stroke_path(
            &outline.to_path(0.1),
            style.outline_color.into(),
            style.border_width + OUTLINE_EXTRA,
        )?;
        let border = image.bounds().inflate(half, half);
        surface.stroke_path(&border.to_path(0.1), style.border_color.into(), style.border_width)?;
    }

    if let Some(shape) = style.handle_shape {
        for handle in corner_handles(image, style) {
            draw_handle(surface, handle.position, shape, style)?;
        }
    }

    draw_delete_button(surface, delete_position(image, style), style)
}

fn draw_handle(
    surface: &mut impl Surface,
    center: Point,
    shape: HandleShape,
    style: &StyleConfig,
) -> RenderResult<()> {
    let path = match shape {
        HandleShape::Square => centered_square(center, style.handle_size).to_path(0.1),
        HandleShape::Circle => Circle::new(center, style.handle_size / 2.0).to_path(0.1),
    };
    surface.fill_path(&path, style.handle_color.into())?;
    surface.stroke_path(&path, style.outline_color.into(), 1.5)
}

fn draw_delete_button(
    surface: &mut impl Surface,
    center: Point,
    style: &StyleConfig,
) -> RenderResult<()> {
    let button = centered_square(center, style.delete_size);
    surface.fill_rect(button, style.delete_color.into())?;

    let arm = style.delete_size * DELETE_MARK_RATIO;
    let mut cross = BezPath::new();
    cross.move_to(Point::new(center.x - arm, center.y - arm));
    cross.line_to(Point::new(center.x + arm, center.y + arm));
    cross.move_to(Point::new(center.x + arm, center.y - arm));
    cross.line_to(Point::new(center.x - arm, center.y + arm));
    surface.stroke_path(&cross, style.delete_mark_color.into(), 2.0)
}

fn centered_square(center: Point, size: f64) -> Rect {
    Rect::from_center_size(center, Size::new(size, size))
}
