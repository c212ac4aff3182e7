//! Renderer trait abstraction and the stroke replay.

use inkslate_core::{AnchoredShape, Camera, Document, Freehand, Stroke, StrokeColor, Whiteboard};
use kurbo::{Cap, Join, Point, Rect, Size, Vec2};
use std::f64::consts::TAU;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error, PartialEq)]
pub enum RendererError {
    #[error("Surface rejected {primitive}: {reason}")]
    Primitive {
        primitive: &'static str,
        reason: String,
    },
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// An immediate-mode 2D drawing context.
///
/// Mirrors the subset of an HTML canvas 2D context the renderer needs. All
/// coordinates are screen pixels.
pub trait DrawingSurface {
    /// Current pixel dimensions.
    fn size(&self) -> Size;

    /// Reset every pixel in `rect` to transparent.
    ///
    /// `render` only ever clears the whole surface. Retained-scene surfaces
    /// may support that case alone.
    fn clear_rect(&mut self, rect: Rect);

    fn set_stroke_color(&mut self, color: StrokeColor);

    fn set_line_width(&mut self, width: f64);

    fn set_line_cap(&mut self, cap: Cap);

    fn set_line_join(&mut self, join: Join);

    /// Start a new, empty path.
    fn begin_path(&mut self);

    fn move_to(&mut self, point: Point);

    fn line_to(&mut self, point: Point);

    /// Outline the current path with the current color and width.
    fn stroke(&mut self);

    /// Outline a rectangle anchored at `origin`. `extent` may be negative.
    fn stroke_rect(&mut self, origin: Point, extent: Vec2);

    /// Add a circular arc to the current path, angles in radians.
    fn arc(&mut self, center: Point, radius: f64, start_angle: f64, end_angle: f64) -> RenderResult<()>;
}

/// Context for a single render frame.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    /// The strokes to replay.
    pub document: &'a Document,
    /// View offset applied at draw time.
    pub camera: &'a Camera,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context.
    pub fn new(document: &'a Document, camera: &'a Camera) -> Self {
        Self { document, camera }
    }
}

impl<'a> From<&'a Whiteboard> for RenderContext<'a> {
    fn from(board: &'a Whiteboard) -> Self {
        Self::new(board.document(), board.camera())
    }
}

/// Replay every stroke onto `surface`.
///
/// Clears the whole surface, then draws strokes in insertion order. Never
/// mutates the document or the camera, so identical inputs always produce
/// identical drawing calls.
pub fn render(ctx: &RenderContext, surface: &mut dyn DrawingSurface) -> RenderResult<()> {
    let size = surface.size();
    surface.clear_rect(Rect::from_origin_size(Point::ORIGIN, size));
    surface.set_line_cap(Cap::Round);
    surface.set_line_join(Join::Round);

    let camera = ctx.camera;
    log::trace!(
        "render {} strokes at offset ({}, {})",
        ctx.document.len(),
        camera.offset.x,
        camera.offset.y
    );
    for stroke in ctx.document {
        let style = stroke.style();
        surface.set_stroke_color(style.color);
        surface.set_line_width(style.thickness);

        match stroke {
            Stroke::Draw(path) | Stroke::Erase(path) => render_freehand(surface, path, camera),
            Stroke::Line(shape) => render_line(surface, shape, camera),
            Stroke::Rectangle(shape) => render_rectangle(surface, shape, camera),
            Stroke::Circle(shape) => render_circle(surface, shape, camera)?,
        }
    }
    Ok(())
}

fn render_freehand(surface: &mut dyn DrawingSurface, path: &Freehand, camera: &Camera) {
    if !path.is_drawable() {
        return;
    }
    let mut points = path.points.iter().map(|p| camera.world_to_screen(*p));
    surface.begin_path();
    if let Some(first) = points.next() {
        surface.move_to(first);
    }
    for point in points {
        surface.line_to(point);
    }
    surface.stroke();
}

fn render_line(surface: &mut dyn DrawingSurface, shape: &AnchoredShape, camera: &Camera) {
    surface.begin_path();
    surface.move_to(camera.world_to_screen(shape.anchor));
    surface.line_to(camera.world_to_screen(shape.end));
    surface.stroke();
}

fn render_rectangle(surface: &mut dyn DrawingSurface, shape: &AnchoredShape, camera: &Camera) {
    surface.begin_path();
    surface.stroke_rect(camera.world_to_screen(shape.anchor), shape.extent());
}

fn render_circle(surface: &mut dyn DrawingSurface, shape: &AnchoredShape, camera: &Camera) -> RenderResult<()> {
    surface.begin_path();
    surface.arc(camera.world_to_screen(shape.anchor), shape.radius(), 0.0, TAU)?;
    surface.stroke();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::{DrawCommand, RecordingSurface};
    use inkslate_core::{StrokeKind, StrokeStyle};

    fn style() -> StrokeStyle {
        StrokeStyle::new(StrokeColor::black(), 2.0)
    }

    #[test]
    fn test_single_point_freehand_is_skipped() {
        let mut document = Document::new();
        document.push(Stroke::begin(StrokeKind::FreehandDraw, Point::new(4.0, 4.0), style()));
        let camera = Camera::new();

        let mut surface = RecordingSurface::new(Size::new(10.0, 10.0));
        render(&RenderContext::new(&document, &camera), &mut surface).unwrap();
        assert_eq!(surface.outlines_drawn(), 0);
        assert!(!surface.commands().contains(&DrawCommand::BeginPath));
    }

    #[test]
    fn test_circle_uses_full_turn_around_anchor() {
        let mut document = Document::new();
        let mut circle = Stroke::begin(StrokeKind::Circle, Point::new(10.0, 10.0), style());
        circle.extend_to(Point::new(13.0, 14.0));
        document.push(circle);
        let camera = Camera::with_offset(Vec2::new(1.0, 1.0));

        let mut surface = RecordingSurface::new(Size::new(50.0, 50.0));
        render(&RenderContext::new(&document, &camera), &mut surface).unwrap();
        assert!(surface.commands().contains(&DrawCommand::Arc {
            center: Point::new(11.0, 11.0),
            radius: 5.0,
            start_angle: 0.0,
            end_angle: TAU,
        }));
    }
}
