//! Camera module for the pan offset.

use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// Camera holds the view translation for the infinite canvas.
///
/// The offset is applied at render time only. Stored stroke points never
/// include it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// Current translation offset (pan), in screen pixels.
    pub offset: Vec2,
}

impl Camera {
    /// Create a new camera at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a camera already panned to `offset`.
    pub fn with_offset(offset: Vec2) -> Self {
        Self { offset }
    }

    /// Convert a screen point to world coordinates.
    pub fn screen_to_world(&self, screen_point: Point) -> Point {
        screen_point - self.offset
    }

    /// Convert a world point to screen coordinates.
    pub fn world_to_screen(&self, world_point: Point) -> Point {
        world_point + self.offset
    }

    /// Pan the camera by a delta in screen coordinates.
    pub fn pan(&mut self, delta: Vec2) {
        self.offset += delta;
    }

    /// Move the view back to the origin.
    pub fn reset(&mut self) {
        self.offset = Vec2::ZERO;
    }

    pub fn is_at_origin(&self) -> bool {
        self.offset == Vec2::ZERO
    }
}
