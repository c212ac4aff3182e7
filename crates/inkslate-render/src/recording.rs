//! Headless surface that records drawing calls.

use crate::renderer::{DrawingSurface, RenderResult};
use inkslate_core::StrokeColor;
use kurbo::{Cap, Join, Point, Rect, Size, Vec2};

/// One call made on a [`DrawingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    ClearRect(Rect),
    SetStrokeColor(StrokeColor),
    SetLineWidth(f64),
    SetLineCap(Cap),
    SetLineJoin(Join),
    BeginPath,
    MoveTo(Point),
    LineTo(Point),
    Stroke,
    StrokeRect { origin: Point, extent: Vec2 },
    Arc {
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    },
}

/// A surface that keeps every call in order instead of rasterizing.
///
/// Two frames are pixel-identical when their command lists are equal.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordingSurface {
    size: Size,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded commands, leaving the surface empty.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Commands after the most recent full clear, i.e. the last frame.
    pub fn last_frame(&self) -> &[DrawCommand] {
        let start = self
            .commands
            .iter()
            .rposition(|cmd| matches!(cmd, DrawCommand::ClearRect(_)))
            .unwrap_or(0);
        &self.commands[start..]
    }

    /// Number of `Stroke`/`StrokeRect` calls in the last frame.
    pub fn outlines_drawn(&self) -> usize {
        self.last_frame()
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::Stroke | DrawCommand::StrokeRect { .. }))
            .count()
    }
}

impl DrawingSurface for RecordingSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn clear_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::ClearRect(rect));
    }

    fn set_stroke_color(&mut self, color: StrokeColor) {
        self.commands.push(DrawCommand::SetStrokeColor(color));
    }

    fn set_line_width(&mut self, width: f64) {
        self.commands.push(DrawCommand::SetLineWidth(width));
    }

    fn set_line_cap(&mut self, cap: Cap) {
        self.commands.push(DrawCommand::SetLineCap(cap));
    }

    fn set_line_join(&mut self, join: Join) {
        self.commands.push(DrawCommand::SetLineJoin(join));
    }

    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, point: Point) {
        self.commands.push(DrawCommand::MoveTo(point));
    }

    fn line_to(&mut self, point: Point) {
        self.commands.push(DrawCommand::LineTo(point));
    }

    fn stroke(&mut self) {
        self.commands.push(DrawCommand::Stroke);
    }

    fn stroke_rect(&mut self, origin: Point, extent: Vec2) {
        self.commands.push(DrawCommand::StrokeRect { origin, extent });
    }

    fn arc(&mut self, center: Point, radius: f64, start_angle: f64, end_angle: f64) -> RenderResult<()> {
        self.commands.push(DrawCommand::Arc {
            center,
            radius,
            start_angle,
            end_angle,
        });
        Ok(())
    }
}
