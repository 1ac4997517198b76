//! Canvas configuration.
//!
//! One parameterized configuration covers every visual and behavioral
//! variant of the canvas: handle style, delete control placement, border
//! offsets, placement strategy and interaction style.

use crate::error::ConfigError;
use kurbo::Vec2;
use peniko::Color;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Height cap applied to newly loaded images.
pub const DEFAULT_MAX_HEIGHT: f64 = 300.0;
/// Smallest width or height a resize may produce.
pub const MIN_IMAGE_SIZE: f64 = 25.0;
/// Hit radius of a corner anchor.
pub const ANCHOR_RADIUS: f64 = 8.0;
/// Hit radius of the delete control.
pub const DELETE_RADIUS: f64 = 10.0;
/// Minimum top-left separation enforced by overlap-avoiding placement.
pub const MIN_PLACEMENT_DISTANCE: f64 = 50.0;
/// Retry cap for overlap-avoiding placement.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 100;

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }

    pub fn red() -> Self {
        Self::new(255, 0, 0, 255)
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// How a pointer press on an image turns into a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InteractionStyle {
    /// One press selects the image and starts dragging or resizing it.
    #[default]
    Immediate,
    /// The first press only selects; pressing the selected image again starts the gesture.
    SelectThenDrag,
}

impl FromStr for InteractionStyle {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "immediate" => Ok(Self::Immediate),
            "select-then-drag" | "select-first" => Ok(Self::SelectThenDrag),
            _ => Err(ConfigError::unknown("interaction", s)),
        }
    }
}

/// Where a newly loaded image lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlacementStrategy {
    /// Centered on the canvas.
    Centered,
    /// A small random offset from the canvas origin.
    Scatter,
    /// Start centered, then re-sample until clear of other images.
    #[default]
    AvoidOverlap,
}

impl FromStr for PlacementStrategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "centered" | "center" => Ok(Self::Centered),
            "scatter" => Ok(Self::Scatter),
            "avoid-overlap" | "avoid" => Ok(Self::AvoidOverlap),
            _ => Err(ConfigError::unknown("placement", s)),
        }
    }
}

/// Visual shape of a corner handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HandleShape {
    #[default]
    Square,
    Circle,
}

impl FromStr for HandleShape {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "square" => Ok(Self::Square),
            "circle" | "round" => Ok(Self::Circle),
            _ => Err(ConfigError::unknown("handles", s)),
        }
    }
}

/// Placement of the delete control relative to the image's top-right corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeletePlacement {
    /// Diagonally outside the corner, clear of the border.
    #[default]
    Outside,
    /// Just inside the corner, over the image.
    Inside,
}

impl DeletePlacement {
    /// Offset of the control's center from the top-right corner.
    pub fn offset(self) -> Vec2 {
        match self {
            DeletePlacement::Outside => Vec2::new(30.0, -30.0),
            DeletePlacement::Inside => Vec2::new(-10.0, 10.0),
        }
    }
}

impl FromStr for DeletePlacement {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "outside" => Ok(Self::Outside),
            "inside" => Ok(Self::Inside),
            _ => Err(ConfigError::unknown("delete", s)),
        }
    }
}

/// Canvas background theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Switch to the other theme.
    pub fn toggle(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Canvas background color.
    pub fn background(self) -> Color {
        match self {
            Theme::Dark => Color::from_rgba8(0x20, 0x21, 0x23, 255),
            Theme::Light => Color::from_rgba8(0xf9, 0xf4, 0xf1, 255),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

impl FromStr for Theme {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            _ => Err(ConfigError::unknown("theme", s)),
        }
    }
}

/// Initial placement settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementConfig {
    pub strategy: PlacementStrategy,
    /// Images taller than this are scaled down to it.
    pub max_height: f64,
    /// Minimum per-axis separation of top-left corners (avoid-overlap only).
    pub min_distance: f64,
    /// Samples tried before accepting an overlapping position.
    pub max_attempts: usize,
    /// Extent of the random offset used by the scatter strategy.
    pub scatter_range: f64,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            strategy: PlacementStrategy::default(),
            max_height: DEFAULT_MAX_HEIGHT,
            min_distance: MIN_PLACEMENT_DISTANCE,
            max_attempts: MAX_PLACEMENT_ATTEMPTS,
            scatter_range: 100.0,
        }
    }
}

/// Hit radii of the interactive controls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HitConfig {
    pub anchor_radius: f64,
    pub delete_radius: f64,
}

impl Default for HitConfig {
    fn default() -> Self {
        Self {
            anchor_radius: ANCHOR_RADIUS,
            delete_radius: DELETE_RADIUS,
        }
    }
}

/// Look of the selection decorations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Corner handle shape, or `None` to draw only the border.
    pub handle_shape: Option<HandleShape>,
    /// Drawn size of a corner handle.
    pub handle_size: f64,
    /// Draw a border around the selected image.
    pub show_border: bool,
    /// Border stroke width; anchors sit on the border's centerline.
    pub border_width: f64,
    pub delete_placement: DeletePlacement,
    /// Edge length of the delete control square.
    pub delete_size: f64,
    pub border_color: SerializableColor,
    pub outline_color: SerializableColor,
    pub handle_color: SerializableColor,
    pub delete_color: SerializableColor,
    pub delete_mark_color: SerializableColor,
    /// Hide handles and border while an image is being dragged.
    pub hide_handles_while_dragging: bool,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            handle_shape: None,
            handle_size: 12.0,
            show_border: true,
            border_width: 20.0,
            delete_placement: DeletePlacement::default(),
            delete_size: 20.0,
            border_color: SerializableColor::red(),
            outline_color: SerializableColor::white(),
            handle_color: SerializableColor::red(),
            delete_color: SerializableColor::red(),
            delete_mark_color: SerializableColor::white(),
            hide_handles_while_dragging: false,
        }
    }
}

impl StyleConfig {
    /// Distance the anchors sit outside the image corners.
    pub fn anchor_offset(&self) -> f64 {
        if self.show_border {
            self.border_width / 2.0
        } else {
            0.0
        }
    }
}

/// Complete canvas configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub interaction: InteractionStyle,
    pub placement: PlacementConfig,
    pub hit: HitConfig,
    /// Minimum width and height after a resize.
    pub min_size: f64,
    pub style: StyleConfig,
    pub theme: Theme,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            interaction: InteractionStyle::default(),
            placement: PlacementConfig::default(),
            hit: HitConfig::default(),
            min_size: MIN_IMAGE_SIZE,
            style: StyleConfig::default(),
            theme: Theme::default(),
        }
    }
}

impl CanvasConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Apply a single `key=value` override.
    ///
    /// Returns `Ok(false)` when `key` is not a configuration option.
    pub fn set_option(&mut self, key: &str, value: &str) -> Result<bool, ConfigError> {
        match key {
            "handles" => {
                self.style.handle_shape = match value.to_lowercase().as_str() {
                    "none" | "off" => None,
                    _ => Some(value.parse()?),
                };
            }
            "delete" => self.style.delete_placement = value.parse()?,
            "border" => self.style.show_border = parse_switch("border", value)?,
            "placement" => self.placement.strategy = value.parse()?,
            "interaction" => self.interaction = value.parse()?,
            "theme" => self.theme = value.parse()?,
            _ => return Ok(false),
        }
        Ok(true)
    }
}

fn parse_switch(option: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Ok(true),
        "off" | "false" | "no" | "0" => Ok(false),
        _ => Err(ConfigError::unknown(option, value)),
    }
}
