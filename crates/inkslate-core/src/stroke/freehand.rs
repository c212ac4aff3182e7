//! Freehand drawing and erasing paths.

use super::StrokeStyle;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// A freehand path (series of points). Never empty once started.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Freehand {
    /// Points in the path, in capture order.
    pub points: Vec<Point>,
    /// Color and width snapshot from stroke start.
    pub style: StrokeStyle,
}

impl Freehand {
    /// Start a path with a single point.
    pub fn starting_at(point: Point, style: StrokeStyle) -> Self {
        Self {
            points: vec![point],
            style,
        }
    }

    /// Add a point to the path.
    pub fn add_point(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Get the number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the path is empty.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// A path needs at least one segment to leave a mark.
    pub fn is_drawable(&self) -> bool {
        self.points.len() >= 2
    }
}
