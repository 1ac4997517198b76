//! Placed image records.

use crate::error::LoadError;
use kurbo::{Point, Rect, Size, Vec2};
use uuid::Uuid;

/// Opaque handle of a decoded bitmap.
///
/// The core never touches pixels; the rendering backend resolves this id
/// through its own bitmap cache.
pub type ImageId = Uuid;

/// Check whether a MIME type names an image file.
pub fn is_image_mime(mime: &str) -> bool {
    mime.starts_with("image/")
}

/// A bitmap that finished decoding and is ready to be placed on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedImage {
    id: ImageId,
    width: u32,
    height: u32,
}

impl DecodedImage {
    /// Describe a decoded bitmap by its native size.
    ///
    /// Zero-sized bitmaps have no aspect ratio and are rejected.
    pub fn new(width: u32, height: u32) -> Result<Self, LoadError> {
        Self::with_id(Uuid::new_v4(), width, height)
    }

    /// Same as [`DecodedImage::new`] but with a caller-chosen id.
    pub fn with_id(id: ImageId, width: u32, height: u32) -> Result<Self, LoadError> {
        if width == 0 || height == 0 {
            return Err(LoadError::EmptyImage);
        }
        Ok(Self { id, width, height })
    }

    pub fn id(&self) -> ImageId {
        self.id
    }

    /// Native width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Native height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Native size as canvas units.
    pub fn size(&self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }
}

/// An image placed on the canvas.
///
/// `right` and `bottom` are derived from position and size on every read,
/// so they always agree with the current geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedImage {
    pub(crate) id: ImageId,
    /// Top-left corner position.
    pub position: Point,
    /// Display width.
    pub width: f64,
    /// Display height.
    pub height: f64,
    /// Original bitmap width in pixels.
    pub source_width: u32,
    /// Original bitmap height in pixels.
    pub source_height: u32,
}

impl PlacedImage {
    /// Place a decoded bitmap at `position` with the given display size.
    pub fn new(decoded: &DecodedImage, position: Point, size: Size) -> Self {
        Self {
            id: decoded.id,
            position,
            width: size.width,
            height: size.height,
            source_width: decoded.width,
            source_height: decoded.height,
        }
    }

    pub fn id(&self) -> ImageId {
        self.id
    }

    pub fn x(&self) -> f64 {
        self.position.x
    }

    pub fn y(&self) -> f64 {
        self.position.y
    }

    pub fn right(&self) -> f64 {
        self.position.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.position.y + self.height
    }

    /// Aspect ratio of the original bitmap (width / height).
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.source_width) / f64::from(self.source_height)
    }

    /// Displayed rectangle on the canvas.
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x(), self.y(), self.right(), self.bottom())
    }

    /// Full source rectangle of the bitmap.
    pub fn source_rect(&self) -> Rect {
        Rect::new(
            0.0,
            0.0,
            f64::from(self.source_width),
            f64::from(self.source_height),
        )
    }

    /// Strict containment: points on the edges are outside.
    pub fn contains(&self, point: Point) -> bool {
        point.x > self.x() && point.x < self.right() && point.y > self.y() && point.y < self.bottom()
    }

    /// Move the image by `delta` without changing its size.
    pub fn translate(&mut self, delta: Vec2) {
        self.position += delta;
    }

    /// Replace position and size in one step.
    pub fn set_frame(&mut self, position: Point, width: f64, height: f64) {
        self.position = position;
        self.width = width;
        self.height = height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(x: f64, y: f64, w: f64, h: f64) -> PlacedImage {
        let decoded = DecodedImage::new(200, 100).unwrap();
        PlacedImage::new(&decoded, Point::new(x, y), Size::new(w, h))
    }

    #[test]
    fn test_mime_filter() {
        assert!(is_image_mime("image/png"));
        assert!(is_image_mime("image/svg+xml"));
        assert!(!is_image_mime("text/plain"));
        assert!(!is_image_mime(""));
    }

    #[test]
    fn test_empty_bitmap_rejected() {
        assert!(matches!(DecodedImage::new(0, 10), Err(LoadError::EmptyImage)));
        assert!(matches!(DecodedImage::new(10, 0), Err(LoadError::EmptyImage)));
        assert!(DecodedImage::new(1, 1).is_ok());
    }

    #[test]
    fn test_derived_bounds_follow_geometry() {
        let mut img = sample(10.0, 20.0, 100.0, 50.0);
        assert!((img.right() - 110.0).abs() < f64::EPSILON);
        assert!((img.bottom() - 70.0).abs() < f64::EPSILON);

        img.translate(Vec2::new(5.0, -5.0));
        assert!((img.right() - 115.0).abs() < f64::EPSILON);
        assert!((img.bottom() - 65.0).abs() < f64::EPSILON);

        img.set_frame(Point::new(0.0, 0.0), 40.0, 30.0);
        let bounds = img.bounds();
        assert!((bounds.x1 - 40.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_aspect_ratio_uses_source_size() {
        let mut img = sample(0.0, 0.0, 30.0, 30.0);
        assert!((img.aspect_ratio() - 2.0).abs() < f64::EPSILON);
        img.width = 500.0;
        assert!((img.aspect_ratio() - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_contains_is_exclusive() {
        let img = sample(0.0, 0.0, 100.0, 100.0);
        assert!(img.contains(Point::new(50.0, 50.0)));
        assert!(!img.contains(Point::new(0.0, 50.0)));
        assert!(!img.contains(Point::new(100.0, 50.0)));
        assert!(!img.contains(Point::new(50.0, 100.0)));
    }
}
