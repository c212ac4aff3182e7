//! Coordinate translation from raw input positions.
//!
//! Input arrives in client (page viewport) coordinates. The screen space used
//! here is relative to the drawing surface's top-left corner; absolute space
//! additionally removes the current pan offset.

use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// Client-space position carried by a raw input event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ClientPosition {
    /// A single pointer (mouse, pen reported as mouse).
    Pointer(Point),
    /// Active touch points, in the order the host reports them.
    Touches(Vec<Point>),
}

impl ClientPosition {
    /// The point that drives the action. Multi-touch uses the first touch.
    pub fn primary(&self) -> Option<Point> {
        match self {
            ClientPosition::Pointer(point) => Some(*point),
            ClientPosition::Touches(touches) => touches.first().copied(),
        }
    }
}

/// Position relative to the surface origin, or `None` when the event carries
/// no usable coordinate.
pub fn to_screen(position: &ClientPosition, surface_bounds: Rect) -> Option<Point> {
    let client = position.primary()?;
    Some(client - surface_bounds.origin().to_vec2())
}

/// Offset-independent world position: screen position minus the pan offset.
pub fn to_absolute(position: &ClientPosition, surface_bounds: Rect, offset: Vec2) -> Option<Point> {
    to_screen(position, surface_bounds).map(|screen| screen - offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> Rect {
        Rect::new(10.0, 20.0, 810.0, 620.0)
    }

    #[test]
    fn test_pointer_to_screen() {
        let pos = ClientPosition::Pointer(Point::new(110.0, 220.0));
        assert_eq!(to_screen(&pos, bounds()), Some(Point::new(100.0, 200.0)));
    }

    #[test]
    fn test_touch_uses_first_touch() {
        let pos = ClientPosition::Touches(vec![Point::new(60.0, 70.0), Point::new(500.0, 500.0)]);
        assert_eq!(to_screen(&pos, bounds()), Some(Point::new(50.0, 50.0)));
    }

    #[test]
    fn test_pointer_and_touch_agree() {
        let pointer = ClientPosition::Pointer(Point::new(42.0, 43.0));
        let touch = ClientPosition::Touches(vec![Point::new(42.0, 43.0)]);
        assert_eq!(to_screen(&pointer, bounds()), to_screen(&touch, bounds()));
    }

    #[test]
    fn test_missing_coordinate() {
        let pos = ClientPosition::Touches(Vec::new());
        assert_eq!(to_screen(&pos, bounds()), None);
        assert_eq!(to_absolute(&pos, bounds(), Vec2::new(5.0, 5.0)), None);
    }

    #[test]
    fn test_absolute_subtracts_offset() {
        let pos = ClientPosition::Pointer(Point::new(110.0, 220.0));
        let abs = to_absolute(&pos, bounds(), Vec2::new(30.0, -40.0));
        assert_eq!(abs, Some(Point::new(70.0, 240.0)));
    }
}
