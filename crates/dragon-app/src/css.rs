//! CSS helpers for the canvas backend.

use dragon_core::Theme;
use dragon_render::TextAlign;
use peniko::Color;

/// Format a color as a CSS `rgba()` string.
pub fn css_color(color: Color) -> String {
    let rgba = color.to_rgba8();
    if rgba.a == 255 {
        format!("rgb({}, {}, {})", rgba.r, rgba.g, rgba.b)
    } else {
        format!(
            "rgba({}, {}, {}, {})",
            rgba.r,
            rgba.g,
            rgba.b,
            f64::from(rgba.a) / 255.0
        )
    }
}

/// Value for `CanvasRenderingContext2d.textAlign`.
pub fn text_align(align: TextAlign) -> &'static str {
    match align {
        TextAlign::Left => "left",
        TextAlign::Center => "center",
    }
}

/// Id of the icon element shown for `theme`.
pub fn theme_icon_id(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "darkIcon",
        Theme::Light => "lightIcon",
    }
}
