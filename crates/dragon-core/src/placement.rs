//! Initial size and position of newly loaded images.

use crate::canvas::ImageCollection;
use crate::config::{PlacementConfig, PlacementStrategy};
use kurbo::{Point, Rect, Size};
use rand::Rng;

/// Scale `source` down so its height does not exceed `max_height`.
///
/// Images already within the cap keep their native size.
pub fn fit_to_height(source: Size, max_height: f64) -> Size {
    if source.height <= max_height {
        return source;
    }
    let scale = max_height / source.height;
    Size::new(source.width * scale, max_height)
}

/// Pick the top-left corner for an image of `size` on a `canvas`.
pub fn place(
    size: Size,
    canvas: Size,
    images: &ImageCollection,
    config: &PlacementConfig,
    rng: &mut impl Rng,
) -> Point {
    match config.strategy {
        PlacementStrategy::Centered => centered(size, canvas),
        PlacementStrategy::Scatter => Point::new(
            rng.random::<f64>() * config.scatter_range,
            rng.random::<f64>() * config.scatter_range,
        ),
        PlacementStrategy::AvoidOverlap => avoid_overlap(size, canvas, images, config, rng),
    }
}

fn centered(size: Size, canvas: Size) -> Point {
    Point::new(
        (canvas.width - size.width) / 2.0,
        (canvas.height - size.height) / 2.0,
    )
}

/// Uniform sample over positions that keep the image on the canvas.
fn sample(size: Size, canvas: Size, rng: &mut impl Rng) -> Point {
    let max_x = (canvas.width - size.width).max(0.0);
    let max_y = (canvas.height - size.height).max(0.0);
    Point::new(rng.random::<f64>() * max_x, rng.random::<f64>() * max_y)
}

fn avoid_overlap(
    size: Size,
    canvas: Size,
    images: &ImageCollection,
    config: &PlacementConfig,
    rng: &mut impl Rng,
) -> Point {
    let bounds = canvas.to_rect();
    let mut candidate = centered(size, canvas);

    for _ in 0..config.max_attempts {
        if !fits(bounds, Rect::from_origin_size(candidate, size)) {
            candidate = sample(size, canvas, rng);
        }
        let crowded = images.iter().any(|image| {
            (candidate.x - image.x()).abs() < config.min_distance
                && (candidate.y - image.y()).abs() < config.min_distance
        });
        if !crowded {
            return candidate;
        }
        candidate = sample(size, canvas, rng);
    }

    log::warn!(
        "No free spot after {} attempts, placing image at ({:.0}, {:.0})",
        config.max_attempts,
        candidate.x,
        candidate.y
    );
    candidate
}

fn fits(bounds: Rect, rect: Rect) -> bool {
    rect.x0 >= bounds.x0 && rect.y0 >= bounds.y0 && rect.x1 <= bounds.x1 && rect.y1 <= bounds.y1
}
