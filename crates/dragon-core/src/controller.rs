//! The canvas controller: image collection, selection and gesture state.

use crate::canvas::ImageCollection;
use crate::config::{CanvasConfig, InteractionStyle, Theme};
use crate::hit::{HitPart, hit_test};
use crate::image::{DecodedImage, ImageId, PlacedImage};
use crate::input::{Gesture, PointerEvent};
use crate::placement::{fit_to_height, place};
use crate::selection::{Anchor, apply_corner_resize, apply_drag};
use kurbo::{Point, Size};
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// What the caller should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Nothing changed.
    None,
    /// Geometry, z-order or selection changed.
    Redraw,
    /// An image was deleted; its bitmap can be released.
    Removed(ImageId),
}

impl Action {
    pub fn needs_redraw(self) -> bool {
        !matches!(self, Action::None)
    }
}

/// Observable interaction state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasState {
    Idle,
    Selected(usize),
    Dragging(usize),
    Resizing(usize, Anchor),
}

/// Owns everything one canvas instance needs to react to input.
#[derive(Debug, Clone)]
pub struct CanvasController {
    images: ImageCollection,
    selection: Option<usize>,
    gesture: Gesture,
    config: CanvasConfig,
    canvas_size: Size,
    rng: SmallRng,
}

impl CanvasController {
    /// Create a controller for a canvas of `canvas_size`.
    ///
    /// `seed` drives random placement.
    pub fn new(config: CanvasConfig, canvas_size: Size, seed: u64) -> Self {
        Self {
            images: ImageCollection::new(),
            selection: None,
            gesture: Gesture::Idle,
            config,
            canvas_size,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn images(&self) -> &ImageCollection {
        &self.images
    }

    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    pub fn selected_image(&self) -> Option<&PlacedImage> {
        self.selection.and_then(|index| self.images.get(index))
    }

    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn canvas_size(&self) -> Size {
        self.canvas_size
    }

    /// Update the canvas size after a window resize.
    pub fn set_canvas_size(&mut self, size: Size) {
        self.canvas_size = size;
    }

    pub fn theme(&self) -> Theme {
        self.config.theme
    }

    /// Switch between dark and light background.
    pub fn toggle_theme(&mut self) -> Theme {
        self.config.theme = self.config.theme.toggle();
        log::debug!("Theme switched to {}", self.config.theme.name());
        self.config.theme
    }

    pub fn state(&self) -> CanvasState {
        match (self.gesture, self.selection) {
            (Gesture::Dragging { index, .. }, _) => CanvasState::Dragging(index),
            (Gesture::Resizing { index, anchor, .. }, _) => CanvasState::Resizing(index, anchor),
            (Gesture::Idle, Some(index)) => CanvasState::Selected(index),
            (Gesture::Idle, None) => CanvasState::Idle,
        }
    }

    /// Size, place and append a decoded image on top of all others.
    pub fn add_image(&mut self, decoded: DecodedImage) -> ImageId {
        let size = fit_to_height(decoded.size(), self.config.placement.max_height);
        let position = place(
            size,
            self.canvas_size,
            &self.images,
            &self.config.placement,
            &mut self.rng,
        );
        self.images.append(PlacedImage::new(&decoded, position, size));
        log::info!(
            "Added {}x{} image at ({:.0}, {:.0}) as {:.0}x{:.0}",
            decoded.width(),
            decoded.height(),
            position.x,
            position.y,
            size.width,
            size.height
        );
        decoded.id()
    }

    /// Dispatch a pointer event.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Action {
        match event {
            PointerEvent::Down { position } => self.pointer_down(position),
            PointerEvent::Move { position } => self.pointer_move(position),
            PointerEvent::Up | PointerEvent::Leave => self.pointer_up(),
        }
    }

    pub fn pointer_down(&mut self, point: Point) -> Action {
        let Some(hit) = hit_test(&self.images, point, &self.config.hit, &self.config.style) else {
            self.gesture = Gesture::Idle;
            return match self.selection.take() {
                Some(_) => Action::Redraw,
                None => Action::None,
            };
        };

        if hit.part == HitPart::Delete {
            return self.delete(hit.index);
        }

        if self.config.interaction == InteractionStyle::SelectThenDrag
            && self.selection != Some(hit.index)
        {
            self.select(hit.index);
            self.gesture = Gesture::Idle;
            return Action::Redraw;
        }

        let Some(index) = self.select(hit.index) else {
            return Action::None;
        };
        self.gesture = match hit.part {
            HitPart::Corner(anchor) => {
                let anchor_origin = self
                    .images
                    .get(index)
                    .map(|image| anchor.position(image, self.config.style.anchor_offset()))
                    .unwrap_or(point);
                log::debug!("Resizing image {index} from {anchor:?}");
                Gesture::Resizing {
                    index,
                    anchor,
                    anchor_origin,
                    pointer_origin: point,
                }
            }
            _ => {
                log::debug!("Dragging image {index}");
                Gesture::Dragging {
                    index,
                    last_pointer: point,
                }
            }
        };
        Action::Redraw
    }

    pub fn pointer_move(&mut self, point: Point) -> Action {
        match &mut self.gesture {
            Gesture::Idle => Action::None,
            Gesture::Dragging {
                index,
                last_pointer,
            } => {
                let Some(image) = self.images.get_mut(*index) else {
                    return Action::None;
                };
                apply_drag(image, *last_pointer, point);
                *last_pointer = point;
                Action::Redraw
            }
            Gesture::Resizing { index, anchor, .. } => {
                let Some(image) = self.images.get_mut(*index) else {
                    return Action::None;
                };
                apply_corner_resize(image, *anchor, point, self.config.min_size);
                Action::Redraw
            }
        }
    }

    /// Close the active gesture. Selection is kept.
    pub fn pointer_up(&mut self) -> Action {
        let was_active = self.gesture.is_active();
        self.gesture = Gesture::Idle;
        if was_active { Action::Redraw } else { Action::None }
    }

    /// Remove every image and reset selection.
    pub fn clear(&mut self) {
        self.images.clear();
        self.selection = None;
        self.gesture = Gesture::Idle;
    }

    /// Select `index`, promoting it to the top. Returns the new index.
    fn select(&mut self, index: usize) -> Option<usize> {
        let index = self.images.move_to_end(index)?;
        self.selection = Some(index);
        Some(index)
    }

    fn delete(&mut self, index: usize) -> Action {
        self.selection = None;
        self.gesture = Gesture::Idle;
        match self.images.remove_at(index) {
            Some(image) => {
                log::info!("Deleted image {}", image.id());
                Action::Removed(image.id())
            }
            None => Action::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlacementStrategy;

    fn config() -> CanvasConfig {
        let mut config = CanvasConfig::default();
        config.placement.strategy = PlacementStrategy::Centered;
        config
    }

    fn controller() -> CanvasController {
        CanvasController::new(config(), Size::new(800.0, 800.0), 42)
    }

    /// Add an image and move it to an exact frame.
    fn add_at(ctrl: &mut CanvasController, x: f64, y: f64, w: u32, h: u32) -> ImageId {
        let id = ctrl.add_image(DecodedImage::new(w, h).unwrap());
        let index = ctrl.images.index_of(id).unwrap();
        let image = ctrl.images.get_mut(index).unwrap();
        image.set_frame(Point::new(x, y), f64::from(w), f64::from(h));
        id
    }

    fn down(ctrl: &mut CanvasController, x: f64, y: f64) -> Action {
        ctrl.handle_pointer(PointerEvent::Down {
            position: Point::new(x, y),
        })
    }

    fn mv(ctrl: &mut CanvasController, x: f64, y: f64) -> Action {
        ctrl.handle_pointer(PointerEvent::Move {
            position: Point::new(x, y),
        })
    }

    fn assert_bounds_consistent(ctrl: &CanvasController) {
        for image in ctrl.images() {
            assert!((image.right() - (image.x() + image.width)).abs() < 1e-9);
            assert!((image.bottom() - (image.y() + image.height)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_load_caps_height() {
        let mut ctrl = controller();
        ctrl.add_image(DecodedImage::new(600, 300).unwrap());
        ctrl.add_image(DecodedImage::new(1200, 600).unwrap());
        for image in ctrl.images() {
            assert!((image.width - 600.0).abs() < f64::EPSILON);
            assert!((image.height - 300.0).abs() < f64::EPSILON);
        }
        assert_eq!(ctrl.images().get(0).unwrap().position, Point::new(100.0, 250.0));
        assert_eq!(ctrl.state(), CanvasState::Idle);
    }

    #[test]
    fn test_avoid_overlap_on_load() {
        let mut config = CanvasConfig::default();
        config.placement.strategy = PlacementStrategy::AvoidOverlap;
        let mut ctrl = CanvasController::new(config, Size::new(1600.0, 1200.0), 9);
        ctrl.add_image(DecodedImage::new(400, 200).unwrap());
        ctrl.add_image(DecodedImage::new(400, 200).unwrap());
        let a = ctrl.images().get(0).unwrap().position;
        let b = ctrl.images().get(1).unwrap().position;
        assert!((a.x - b.x).abs() >= 50.0 || (a.y - b.y).abs() >= 50.0);
    }

    #[test]
    fn test_click_selects_and_drags() {
        let mut ctrl = controller();
        add_at(&mut ctrl, 100.0, 100.0, 100, 100);
        assert_eq!(down(&mut ctrl, 150.0, 150.0), Action::Redraw);
        assert_eq!(ctrl.state(), CanvasState::Dragging(0));

        assert_eq!(mv(&mut ctrl, 160.0, 155.0), Action::Redraw);
        assert_eq!(mv(&mut ctrl, 170.0, 165.0), Action::Redraw);
        let image = ctrl.selected_image().unwrap();
        assert_eq!(image.position, Point::new(120.0, 115.0));
        assert_bounds_consistent(&ctrl);

        assert_eq!(ctrl.handle_pointer(PointerEvent::Up), Action::Redraw);
        assert_eq!(ctrl.state(), CanvasState::Selected(0));
        assert_eq!(mv(&mut ctrl, 300.0, 300.0), Action::None);
    }

    #[test]
    fn test_selecting_promotes_to_top() {
        let mut ctrl = controller();
        let bottom = add_at(&mut ctrl, 0.0, 0.0, 200, 200);
        let top = add_at(&mut ctrl, 300.0, 300.0, 100, 100);
        down(&mut ctrl, 50.0, 50.0);
        assert_eq!(ctrl.selection(), Some(1));
        assert_eq!(ctrl.images().index_of(bottom), Some(1));
        assert_eq!(ctrl.images().index_of(top), Some(0));
        assert_eq!(ctrl.state(), CanvasState::Dragging(1));
    }

    #[test]
    fn test_corner_starts_resize() {
        let mut ctrl = controller();
        add_at(&mut ctrl, 100.0, 100.0, 100, 100);
        down(&mut ctrl, 210.0, 210.0);
        assert_eq!(ctrl.state(), CanvasState::Resizing(0, Anchor::BottomRight));
        match ctrl.gesture() {
            Gesture::Resizing { anchor_origin, pointer_origin, .. } => {
                assert_eq!(*anchor_origin, Point::new(210.0, 210.0));
                assert_eq!(*pointer_origin, Point::new(210.0, 210.0));
            }
            other => panic!("unexpected gesture {other:?}"),
        }

        mv(&mut ctrl, 140.0, 300.0);
        let image = ctrl.selected_image().unwrap();
        assert!((image.width - 40.0).abs() < 1e-9);
        assert!((image.height - 40.0).abs() < 1e-9);

        mv(&mut ctrl, 101.0, 101.0);
        let image = ctrl.selected_image().unwrap();
        assert!(image.width >= 25.0 && image.height >= 25.0);
        assert_bounds_consistent(&ctrl);

        ctrl.handle_pointer(PointerEvent::Leave);
        assert_eq!(ctrl.state(), CanvasState::Selected(0));
    }

    #[test]
    fn test_resize_keeps_ratio_across_moves() {
        let mut ctrl = controller();
        add_at(&mut ctrl, 0.0, 0.0, 300, 150);
        down(&mut ctrl, 310.0, 160.0);
        for (x, y) in [(400.0, 250.0), (200.0, 400.0), (350.0, 120.0)] {
            mv(&mut ctrl, x, y);
            let image = ctrl.selected_image().unwrap();
            assert!((image.width / image.height - 2.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_delete() {
        let mut ctrl = controller();
        add_at(&mut ctrl, 0.0, 200.0, 100, 100);
        let id = add_at(&mut ctrl, 300.0, 300.0, 100, 100);
        down(&mut ctrl, 350.0, 350.0);
        ctrl.handle_pointer(PointerEvent::Up);
        assert_eq!(ctrl.selection(), Some(1));

        // Delete control sits at (right + 30, y - 30).
        assert_eq!(down(&mut ctrl, 430.0, 270.0), Action::Removed(id));
        assert_eq!(ctrl.images().len(), 1);
        assert_eq!(ctrl.selection(), None);
        assert_eq!(ctrl.state(), CanvasState::Idle);
        assert!(ctrl.images().index_of(id).is_none());
    }

    #[test]
    fn test_empty_click_clears_selection() {
        let mut ctrl = controller();
        add_at(&mut ctrl, 100.0, 100.0, 100, 100);
        down(&mut ctrl, 150.0, 150.0);
        ctrl.pointer_up();
        assert!(ctrl.selected_image().is_some());

        assert_eq!(down(&mut ctrl, 700.0, 700.0), Action::Redraw);
        assert_eq!(ctrl.selection(), None);
        assert_eq!(ctrl.state(), CanvasState::Idle);
        assert_eq!(down(&mut ctrl, 700.0, 700.0), Action::None);
    }

    #[test]
    fn test_select_then_drag() {
        let mut config = config();
        config.interaction = InteractionStyle::SelectThenDrag;
        let mut ctrl = CanvasController::new(config, Size::new(800.0, 800.0), 1);
        add_at(&mut ctrl, 100.0, 100.0, 100, 100);

        down(&mut ctrl, 150.0, 150.0);
        assert_eq!(ctrl.state(), CanvasState::Selected(0));
        assert_eq!(mv(&mut ctrl, 160.0, 160.0), Action::None);
        ctrl.pointer_up();

        down(&mut ctrl, 150.0, 150.0);
        assert_eq!(ctrl.state(), CanvasState::Dragging(0));
        mv(&mut ctrl, 160.0, 160.0);
        assert_eq!(ctrl.selected_image().unwrap().position, Point::new(110.0, 110.0));
    }

    #[test]
    fn test_toggle_theme_and_clear() {
        let mut ctrl = controller();
        assert_eq!(ctrl.toggle_theme(), Theme::Light);
        assert_eq!(ctrl.theme(), Theme::Light);

        add_at(&mut ctrl, 0.0, 0.0, 50, 50);
        down(&mut ctrl, 25.0, 25.0);
        ctrl.clear();
        assert!(ctrl.images().is_empty());
        assert_eq!(ctrl.state(), CanvasState::Idle);
    }
}
