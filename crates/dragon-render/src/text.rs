//! Text layout for the empty-canvas instructions.

use crate::renderer::RenderResult;

/// Shown while the canvas holds no images.
pub const INSTRUCTIONS: &str = "DragON Canvas \n\n\
Drag images directly onto the canvas. \n\
Or use button (top left) to load them.\n\
Highlight file names and press open. \n\
You can load multiple images at once. \n\n\
Resize images using the red borders. \n\
Drag and position images. \n\n\
Page reload removes all images. \n\
No data is shared or stored.";

/// Greedy word wrap.
///
/// Newlines are hard breaks. Each word is followed by a space, so lines keep
/// a trailing space. The first word of a line is never wrapped, even when it
/// alone exceeds `max_width`.
pub fn wrap_text<F>(text: &str, max_width: f64, mut measure: F) -> RenderResult<Vec<String>>
where
    F: FnMut(&str) -> RenderResult<f64>,
{
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut current = String::new();
        for (n, word) in paragraph.split(' ').enumerate() {
            let candidate = format!("{current}{word} ");
            if n > 0 && measure(&candidate)? > max_width {
                lines.push(std::mem::take(&mut current));
                current = format!("{word} ");
            } else {
                current = candidate;
            }
        }
        lines.push(current);
    }
    Ok(lines)
}
