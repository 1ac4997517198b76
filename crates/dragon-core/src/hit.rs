//! Pointer hit-testing.

use crate::canvas::ImageCollection;
use crate::config::{HitConfig, StyleConfig};
use crate::selection::{Anchor, Handle, HandleKind, corner_handles, delete_position};
use kurbo::Point;

/// Which part of an image a pointer landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitPart {
    Delete,
    Corner(Anchor),
    Body,
}

/// Result of a successful hit test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    /// Index into the collection at the time of the test.
    pub index: usize,
    pub part: HitPart,
}

/// Resolve `point` to an image control or body.
///
/// Controls are checked on every image, lowest index first, with the
/// delete control before the corners. Only if no control matches are the
/// bodies scanned, topmost first. `None` means empty canvas.
pub fn hit_test(
    images: &ImageCollection,
    point: Point,
    hit: &HitConfig,
    style: &StyleConfig,
) -> Option<Hit> {
    hit_test_controls(images, point, hit, style).or_else(|| hit_test_body(images, point))
}

fn hit_test_controls(
    images: &ImageCollection,
    point: Point,
    hit: &HitConfig,
    style: &StyleConfig,
) -> Option<Hit> {
    for (index, image) in images.iter().enumerate() {
        let delete = Handle::new(HandleKind::Delete, delete_position(image, style));
        if delete.hit_test(point, hit.delete_radius) {
            return Some(Hit {
                index,
                part: HitPart::Delete,
            });
        }
        let corner = corner_handles(image, style)
            .into_iter()
            .find(|handle| handle.hit_test(point, hit.anchor_radius));
        if let Some(Handle {
            kind: HandleKind::Corner(anchor),
            ..
        }) = corner
        {
            return Some(Hit {
                index,
                part: HitPart::Corner(anchor),
            });
        }
    }
    None
}

/// Topmost image whose rectangle strictly contains `point`.
pub fn hit_test_body(images: &ImageCollection, point: Point) -> Option<Hit> {
    images
        .iter()
        .enumerate()
        .rev()
        .find(|(_, image)| image.contains(point))
        .map(|(index, _)| Hit {
            index,
            part: HitPart::Body,
        })
}
