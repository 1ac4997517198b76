//! Selection handles and corner resize.

use crate::config::{HandleShape, StyleConfig};
use crate::image::PlacedImage;
use kurbo::{Point, Vec2};

/// Corner anchor of an image, in hit-test order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    TopLeft = 0,
    TopRight = 1,
    BottomRight = 2,
    BottomLeft = 3,
}

impl Anchor {
    /// All anchors in the order they are hit-tested.
    pub const ALL: [Anchor; 4] = [
        Anchor::TopLeft,
        Anchor::TopRight,
        Anchor::BottomRight,
        Anchor::BottomLeft,
    ];

    /// Numeric anchor id (0 = top-left, clockwise).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Anchor center for `image`, pushed outward by `offset` on both axes.
    pub fn position(self, image: &PlacedImage, offset: f64) -> Point {
        match self {
            Anchor::TopLeft => Point::new(image.x() - offset, image.y() - offset),
            Anchor::TopRight => Point::new(image.right() + offset, image.y() - offset),
            Anchor::BottomRight => Point::new(image.right() + offset, image.bottom() + offset),
            Anchor::BottomLeft => Point::new(image.x() - offset, image.bottom() + offset),
        }
    }
}

/// What a handle does when pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleKind {
    Corner(Anchor),
    Delete,
}

/// A selection handle with its position and type.
#[derive(Debug, Clone, Copy)]
pub struct Handle {
    pub kind: HandleKind,
    /// Center in canvas coordinates.
    pub position: Point,
    pub shape: HandleShape,
}

impl Handle {
    pub fn new(kind: HandleKind, position: Point) -> Self {
        Self {
            kind,
            position,
            shape: HandleShape::default(),
        }
    }

    pub fn with_shape(mut self, shape: HandleShape) -> Self {
        self.shape = shape;
        self
    }

    /// Check if `point` lies within `radius` of the handle center (inclusive).
    pub fn hit_test(&self, point: Point, radius: f64) -> bool {
        let dx = point.x - self.position.x;
        let dy = point.y - self.position.y;
        dx * dx + dy * dy <= radius * radius
    }
}

/// Center of the delete control for `image`.
pub fn delete_position(image: &PlacedImage, style: &StyleConfig) -> Point {
    Point::new(image.right(), image.y()) + style.delete_placement.offset()
}

/// The four corner handles of `image` in hit-test order.
pub fn corner_handles(image: &PlacedImage, style: &StyleConfig) -> [Handle; 4] {
    let offset = style.anchor_offset();
    let shape = style.handle_shape.unwrap_or_default();
    Anchor::ALL.map(|anchor| {
        Handle::new(HandleKind::Corner(anchor), anchor.position(image, offset)).with_shape(shape)
    })
}

/// Every interactive handle of `image`: the delete control first, then the corners.
pub fn handles_for(image: &PlacedImage, style: &StyleConfig) -> Vec<Handle> {
    let mut handles = Vec::with_capacity(5);
    handles.push(Handle::new(HandleKind::Delete, delete_position(image, style)));
    handles.extend(corner_handles(image, style));
    handles
}

/// Resize `image` by dragging `anchor` to `pointer`.
///
/// The new size keeps the bitmap's aspect ratio using the smaller implied
/// dimension, then both sides are clamped to `min_size`. The clamp may bend
/// the displayed ratio for very small images.
pub fn apply_corner_resize(image: &mut PlacedImage, anchor: Anchor, pointer: Point, min_size: f64) {
    let (width, height) = match anchor {
        Anchor::TopLeft => (image.right() - pointer.x, image.bottom() - pointer.y),
        Anchor::TopRight => (pointer.x - image.x(), image.bottom() - pointer.y),
        Anchor::BottomRight => (pointer.x - image.x(), pointer.y - image.y()),
        Anchor::BottomLeft => (image.right() - pointer.x, pointer.y - image.y()),
    };

    let (width, height) = keep_aspect_ratio(width, height, image.aspect_ratio());
    let width = width.max(min_size);
    let height = height.max(min_size);

    let position = match anchor {
        Anchor::TopLeft => pointer,
        Anchor::TopRight => Point::new(image.x(), pointer.y),
        Anchor::BottomRight => image.position,
        Anchor::BottomLeft => Point::new(pointer.x, image.y()),
    };

    image.set_frame(position, width, height);
}

fn keep_aspect_ratio(width: f64, height: f64, aspect: f64) -> (f64, f64) {
    if width / height > aspect {
        (height * aspect, height)
    } else {
        (width, width / aspect)
    }
}

/// Move `image` by the pointer delta between two successive events.
pub fn apply_drag(image: &mut PlacedImage, from: Point, to: Point) {
    let delta: Vec2 = to - from;
    image.translate(delta);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DeletePlacement;
    use crate::image::DecodedImage;
    use kurbo::Size;

    fn image(x: f64, y: f64, w: f64, h: f64, src_w: u32, src_h: u32) -> PlacedImage {
        let decoded = DecodedImage::new(src_w, src_h).unwrap();
        PlacedImage::new(&decoded, Point::new(x, y), Size::new(w, h))
    }

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn test_anchor_positions_with_border() {
        let img = image(100.0, 100.0, 200.0, 100.0, 200, 100);
        let handles = corner_handles(&img, &StyleConfig::default());
        assert_eq!(handles[0].position, Point::new(90.0, 90.0));
        assert_eq!(handles[1].position, Point::new(310.0, 90.0));
        assert_eq!(handles[2].position, Point::new(310.0, 210.0));
        assert_eq!(handles[3].position, Point::new(90.0, 210.0));
        assert!(matches!(handles[2].kind, HandleKind::Corner(Anchor::BottomRight)));
    }

    #[test]
    fn test_anchor_positions_without_border() {
        let img = image(0.0, 0.0, 50.0, 50.0, 1, 1);
        let style = StyleConfig {
            show_border: false,
            handle_shape: Some(HandleShape::Circle),
            ..Default::default()
        };
        let handles = corner_handles(&img, &style);
        assert_eq!(handles[0].position, Point::new(0.0, 0.0));
        assert_eq!(handles[2].position, Point::new(50.0, 50.0));
        assert_eq!(handles[0].shape, HandleShape::Circle);
    }

    #[test]
    fn test_delete_position() {
        let img = image(10.0, 40.0, 100.0, 100.0, 1, 1);
        let mut style = StyleConfig::default();
        assert_eq!(delete_position(&img, &style), Point::new(140.0, 10.0));
        style.delete_placement = DeletePlacement::Inside;
        assert_eq!(delete_position(&img, &style), Point::new(100.0, 50.0));

        let handles = handles_for(&img, &style);
        assert_eq!(handles.len(), 5);
        assert_eq!(handles[0].kind, HandleKind::Delete);
    }

    #[test]
    fn test_handle_hit_test() {
        let handle = Handle::new(HandleKind::Delete, Point::new(50.0, 50.0));
        assert!(handle.hit_test(Point::new(50.0, 50.0), 10.0));
        assert!(handle.hit_test(Point::new(56.0, 58.0), 10.0));
        assert!(!handle.hit_test(Point::new(57.0, 58.0), 10.0));
    }

    #[test]
    fn test_bottom_right_uses_smaller_dimension() {
        let mut img = image(0.0, 0.0, 100.0, 100.0, 100, 100);
        apply_corner_resize(&mut img, Anchor::BottomRight, Point::new(40.0, 200.0), 25.0);
        assert_close(img.width, 40.0);
        assert_close(img.height, 40.0);
        assert_eq!(img.position, Point::ZERO);
        assert_close(img.right(), 40.0);
        assert_close(img.bottom(), 40.0);
    }

    #[test]
    fn test_resize_keeps_aspect_ratio() {
        let mut img = image(100.0, 100.0, 200.0, 100.0, 400, 200);
        apply_corner_resize(&mut img, Anchor::BottomRight, Point::new(500.0, 180.0), 25.0);
        assert_close(img.width / img.height, 2.0);
        assert_close(img.height, 80.0);
        assert_close(img.width, 160.0);
    }

    #[test]
    fn test_top_left_moves_origin_to_pointer() {
        let mut img = image(100.0, 100.0, 100.0, 100.0, 10, 10);
        apply_corner_resize(&mut img, Anchor::TopLeft, Point::new(50.0, 80.0), 25.0);
        assert_eq!(img.position, Point::new(50.0, 80.0));
        assert_close(img.width, 120.0);
        assert_close(img.height, 120.0);
    }

    #[test]
    fn test_top_right_moves_only_y() {
        let mut img = image(100.0, 100.0, 100.0, 100.0, 10, 10);
        apply_corner_resize(&mut img, Anchor::TopRight, Point::new(260.0, 60.0), 25.0);
        assert_eq!(img.position, Point::new(100.0, 60.0));
        assert_close(img.width, 140.0);
        assert_close(img.height, 140.0);
    }

    #[test]
    fn test_bottom_left_moves_only_x() {
        let mut img = image(100.0, 100.0, 100.0, 100.0, 10, 10);
        apply_corner_resize(&mut img, Anchor::BottomLeft, Point::new(120.0, 300.0), 25.0);
        assert_eq!(img.position, Point::new(120.0, 100.0));
        assert_close(img.width, 80.0);
        assert_close(img.height, 80.0);
    }

    #[test]
    fn test_resize_clamps_to_minimum() {
        let mut img = image(0.0, 0.0, 100.0, 50.0, 200, 100);
        apply_corner_resize(&mut img, Anchor::BottomRight, Point::new(10.0, 10.0), 25.0);
        assert!(img.width >= 25.0);
        assert!(img.height >= 25.0);

        // Pointer past the opposite corner gives negative extents.
        apply_corner_resize(&mut img, Anchor::BottomRight, Point::new(-80.0, -80.0), 25.0);
        assert_close(img.width, 25.0);
        assert_close(img.height, 25.0);
        assert_close(img.right(), img.x() + 25.0);
    }

    #[test]
    fn test_apply_drag_is_incremental() {
        let mut img = image(10.0, 10.0, 20.0, 20.0, 1, 1);
        apply_drag(&mut img, Point::new(0.0, 0.0), Point::new(5.0, 7.0));
        apply_drag(&mut img, Point::new(5.0, 7.0), Point::new(6.0, 7.0));
        assert_eq!(img.position, Point::new(16.0, 17.0));
        assert_close(img.right(), 36.0);
        assert_close(img.bottom(), 37.0);
    }
}
