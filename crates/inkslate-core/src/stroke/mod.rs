//! Stroke definitions for the whiteboard.
//!
//! A stroke is one persisted drawing primitive in absolute (world) space.
//! Freehand kinds carry a growable point list; shape kinds carry a fixed
//! anchor/endpoint pair.

mod anchored;
mod freehand;

pub use anchored::AnchoredShape;
pub use freehand::Freehand;

use kurbo::Point;
use peniko::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Color parsing errors.
#[derive(Debug, Error)]
pub enum ColorError {
    #[error("Invalid color {value:?}: {reason}")]
    Invalid { value: String, reason: String },
}

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StrokeColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl StrokeColor {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    /// Parse any CSS color string (`#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb(...)`, named colors).
    pub fn parse(value: &str) -> Result<Self, ColorError> {
        let parsed = csscolorparser::parse(value.trim()).map_err(|err| ColorError::Invalid {
            value: value.to_string(),
            reason: err.to_string(),
        })?;
        let [r, g, b, a] = parsed.to_rgba8();
        Ok(Self::new(r, g, b, a))
    }

    /// Format as an 8-digit CSS hex string (`#rrggbbaa`).
    pub fn to_css(&self) -> String {
        format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

impl Default for StrokeColor {
    fn default() -> Self {
        Self::black()
    }
}

impl fmt::Display for StrokeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl FromStr for StrokeColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Color> for StrokeColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self::new(rgba.r, rgba.g, rgba.b, rgba.a)
    }
}

impl From<StrokeColor> for Color {
    fn from(color: StrokeColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Color painted by erase strokes, independent of the color control.
pub const ERASE_COLOR: StrokeColor = StrokeColor::black();

/// Color and line width captured when a stroke starts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    pub color: StrokeColor,
    pub thickness: f64,
}

impl StrokeStyle {
    pub fn new(color: StrokeColor, thickness: f64) -> Self {
        Self { color, thickness }
    }
}

/// Discriminant of [`Stroke`], used for logging and dispatch tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrokeKind {
    FreehandDraw,
    FreehandErase,
    Line,
    Rectangle,
    Circle,
}

impl StrokeKind {
    /// Whether strokes of this kind grow by one point per move.
    pub fn is_freehand(self) -> bool {
        matches!(self, StrokeKind::FreehandDraw | StrokeKind::FreehandErase)
    }
}

/// One drawing primitive, in absolute coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Stroke {
    Draw(Freehand),
    Erase(Freehand),
    Line(AnchoredShape),
    Rectangle(AnchoredShape),
    Circle(AnchoredShape),
}

impl Stroke {
    /// Start a stroke of `kind` at `at`.
    ///
    /// Freehand strokes start with one point, shape strokes with anchor and
    /// endpoint both at `at`. Erase strokes ignore `style.color`.
    pub fn begin(kind: StrokeKind, at: Point, style: StrokeStyle) -> Self {
        match kind {
            StrokeKind::FreehandDraw => Stroke::Draw(Freehand::starting_at(at, style)),
            StrokeKind::FreehandErase => Stroke::Erase(Freehand::starting_at(
                at,
                StrokeStyle::new(ERASE_COLOR, style.thickness),
            )),
            StrokeKind::Line => Stroke::Line(AnchoredShape::at(at, style)),
            StrokeKind::Rectangle => Stroke::Rectangle(AnchoredShape::at(at, style)),
            StrokeKind::Circle => Stroke::Circle(AnchoredShape::at(at, style)),
        }
    }

    pub fn kind(&self) -> StrokeKind {
        match self {
            Stroke::Draw(_) => StrokeKind::FreehandDraw,
            Stroke::Erase(_) => StrokeKind::FreehandErase,
            Stroke::Line(_) => StrokeKind::Line,
            Stroke::Rectangle(_) => StrokeKind::Rectangle,
            Stroke::Circle(_) => StrokeKind::Circle,
        }
    }

    pub fn style(&self) -> &StrokeStyle {
        match self {
            Stroke::Draw(s) | Stroke::Erase(s) => &s.style,
            Stroke::Line(s) | Stroke::Rectangle(s) | Stroke::Circle(s) => &s.style,
        }
    }

    /// All stored points in order. Shape kinds always yield exactly two.
    pub fn points(&self) -> Vec<Point> {
        match self {
            Stroke::Draw(s) | Stroke::Erase(s) => s.points.clone(),
            Stroke::Line(s) | Stroke::Rectangle(s) | Stroke::Circle(s) => vec![s.anchor, s.end],
        }
    }

    pub fn point_count(&self) -> usize {
        match self {
            Stroke::Draw(s) | Stroke::Erase(s) => s.len(),
            Stroke::Line(_) | Stroke::Rectangle(_) | Stroke::Circle(_) => 2,
        }
    }

    /// Feed a move to the stroke: freehand kinds append, shape kinds
    /// overwrite their endpoint.
    pub fn extend_to(&mut self, point: Point) {
        match self {
            Stroke::Draw(s) | Stroke::Erase(s) => s.add_point(point),
            Stroke::Line(s) | Stroke::Rectangle(s) | Stroke::Circle(s) => s.set_end(point),
        }
    }
}
