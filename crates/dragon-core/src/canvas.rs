//! Image collection in z-order.

use crate::image::{ImageId, PlacedImage};

/// All images on the canvas, back to front.
///
/// The last entry is topmost: drawn last and hit-tested first for bodies.
/// The collection does not validate geometry; minimum size and aspect
/// ratio belong to the resize code in [`crate::selection`].
#[derive(Debug, Clone, Default)]
pub struct ImageCollection {
    images: Vec<PlacedImage>,
}

impl ImageCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an image on top of all others.
    pub fn append(&mut self, image: PlacedImage) {
        self.images.push(image);
    }

    /// Remove the image at `index`.
    pub fn remove_at(&mut self, index: usize) -> Option<PlacedImage> {
        if index < self.images.len() {
            Some(self.images.remove(index))
        } else {
            None
        }
    }

    /// Bring the image at `index` to the front.
    /// Returns its new index, or `None` if `index` is out of range.
    pub fn move_to_end(&mut self, index: usize) -> Option<usize> {
        if index >= self.images.len() {
            return None;
        }
        let image = self.images.remove(index);
        self.images.push(image);
        Some(self.images.len() - 1)
    }

    pub fn get(&self, index: usize) -> Option<&PlacedImage> {
        self.images.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut PlacedImage> {
        self.images.get_mut(index)
    }

    /// Current index of the image with the given id.
    pub fn index_of(&self, id: ImageId) -> Option<usize> {
        self.images.iter().position(|img| img.id() == id)
    }

    /// Index of the topmost image.
    pub fn top_index(&self) -> Option<usize> {
        self.images.len().checked_sub(1)
    }

    /// Images back to front.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &PlacedImage> + ExactSizeIterator {
        self.images.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Drop every image.
    pub fn clear(&mut self) {
        self.images.clear();
    }
}

impl<'a> IntoIterator for &'a ImageCollection {
    type Item = &'a PlacedImage;
    type IntoIter = std::slice::Iter<'a, PlacedImage>;

    fn into_iter(self) -> Self::IntoIter {
        self.images.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::DecodedImage;
    use kurbo::{Point, Size};

    fn image_at(x: f64) -> PlacedImage {
        let decoded = DecodedImage::new(10, 10).unwrap();
        PlacedImage::new(&decoded, Point::new(x, 0.0), Size::new(10.0, 10.0))
    }

    fn xs(images: &ImageCollection) -> Vec<f64> {
        images.iter().map(|img| img.x()).collect()
    }

    #[test]
    fn test_append_is_topmost() {
        let mut images = ImageCollection::new();
        assert_eq!(images.top_index(), None);
        images.append(image_at(0.0));
        images.append(image_at(1.0));
        assert_eq!(images.len(), 2);
        assert_eq!(images.top_index(), Some(1));
        assert_eq!(xs(&images), vec![0.0, 1.0]);
    }

    #[test]
    fn test_move_to_end() {
        let mut images = ImageCollection::new();
        for x in [0.0, 1.0, 2.0] {
            images.append(image_at(x));
        }
        assert_eq!(images.move_to_end(0), Some(2));
        assert_eq!(xs(&images), vec![1.0, 2.0, 0.0]);
        assert_eq!(images.move_to_end(2), Some(2));
        assert_eq!(xs(&images), vec![1.0, 2.0, 0.0]);
        assert_eq!(images.move_to_end(3), None);
    }

    #[test]
    fn test_remove_at() {
        let mut images = ImageCollection::new();
        images.append(image_at(0.0));
        images.append(image_at(1.0));
        let id = images.get(0).unwrap().id();

        let removed = images.remove_at(0).unwrap();
        assert_eq!(removed.id(), id);
        assert_eq!(images.len(), 1);
        assert_eq!(images.index_of(id), None);
        assert!(images.remove_at(5).is_none());
        assert_eq!(images.len(), 1);
    }
}
