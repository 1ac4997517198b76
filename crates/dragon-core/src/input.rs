//! Pointer events and gesture state.

use crate::selection::Anchor;
use kurbo::{Point, Vec2};

/// Pointer event in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down { position: Point },
    Move { position: Point },
    Up,
    /// Pointer left the canvas; handled like [`PointerEvent::Up`].
    Leave,
}

/// Convert a client-space position into canvas coordinates.
///
/// `canvas_origin` is the canvas's current on-screen offset and must be
/// refreshed whenever the layout changes.
pub fn to_canvas(client: Point, canvas_origin: Vec2) -> Point {
    client - canvas_origin
}

/// The gesture opened by the last pointer-down, if any.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Gesture {
    #[default]
    Idle,
    /// Moving an image by incremental pointer deltas.
    Dragging { index: usize, last_pointer: Point },
    /// Resizing an image from one corner.
    Resizing {
        index: usize,
        anchor: Anchor,
        /// Anchor center when the gesture started.
        anchor_origin: Point,
        pointer_origin: Point,
    },
}

impl Gesture {
    /// Index of the image the gesture acts on.
    pub fn target(&self) -> Option<usize> {
        match *self {
            Gesture::Idle => None,
            Gesture::Dragging { index, .. } | Gesture::Resizing { index, .. } => Some(index),
        }
    }

    pub fn is_active(&self) -> bool {
        !matches!(self, Gesture::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Gesture::Dragging { .. })
    }
}
