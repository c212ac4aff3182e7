//! Two-point shapes: lines, rectangles and circles.

use super::StrokeStyle;
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// A shape defined by a fixed anchor and a live endpoint.
///
/// Lines run anchor to endpoint. Rectangles are anchored at `anchor` with a
/// signed extent of `end - anchor`. Circles are centered on `anchor` and pass
/// through `end`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnchoredShape {
    /// Point where the drag started.
    pub anchor: Point,
    /// Most recent drag position.
    pub end: Point,
    /// Color and width snapshot from stroke start.
    pub style: StrokeStyle,
}

impl AnchoredShape {
    /// Create a zero-size shape with both points at `point`.
    pub fn at(point: Point, style: StrokeStyle) -> Self {
        Self {
            anchor: point,
            end: point,
            style,
        }
    }

    pub fn set_end(&mut self, point: Point) {
        self.end = point;
    }

    /// Signed width and height. Negative components extend left/up.
    pub fn extent(&self) -> Vec2 {
        self.end - self.anchor
    }

    /// Euclidean distance from anchor to endpoint.
    pub fn radius(&self) -> f64 {
        self.anchor.distance(self.end)
    }
}
