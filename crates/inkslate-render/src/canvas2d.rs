//! Canvas2D surface.
//!
//! Draws straight onto an HTML `<canvas>` through `CanvasRenderingContext2d`.

use crate::renderer::{DrawingSurface, RenderResult, RendererError};
use inkslate_core::StrokeColor;
use kurbo::{Cap, Join, Point, Rect, Size, Vec2};
use web_sys::CanvasRenderingContext2d;

fn cap_name(cap: Cap) -> &'static str {
    match cap {
        Cap::Butt => "butt",
        Cap::Square => "square",
        Cap::Round => "round",
    }
}

fn join_name(join: Join) -> &'static str {
    match join {
        Join::Bevel => "bevel",
        Join::Miter => "miter",
        Join::Round => "round",
    }
}

impl DrawingSurface for CanvasRenderingContext2d {
    fn size(&self) -> Size {
        match self.canvas() {
            Some(canvas) => Size::new(canvas.width() as f64, canvas.height() as f64),
            None => Size::ZERO,
        }
    }

    fn clear_rect(&mut self, rect: Rect) {
        CanvasRenderingContext2d::clear_rect(self, rect.x0, rect.y0, rect.width(), rect.height());
    }

    fn set_stroke_color(&mut self, color: StrokeColor) {
        self.set_stroke_style_str(&color.to_css());
    }

    fn set_line_width(&mut self, width: f64) {
        CanvasRenderingContext2d::set_line_width(self, width);
    }

    fn set_line_cap(&mut self, cap: Cap) {
        CanvasRenderingContext2d::set_line_cap(self, cap_name(cap));
    }

    fn set_line_join(&mut self, join: Join) {
        CanvasRenderingContext2d::set_line_join(self, join_name(join));
    }

    fn begin_path(&mut self) {
        CanvasRenderingContext2d::begin_path(self);
    }

    fn move_to(&mut self, point: Point) {
        CanvasRenderingContext2d::move_to(self, point.x, point.y);
    }

    fn line_to(&mut self, point: Point) {
        CanvasRenderingContext2d::line_to(self, point.x, point.y);
    }

    fn stroke(&mut self) {
        CanvasRenderingContext2d::stroke(self);
    }

    fn stroke_rect(&mut self, origin: Point, extent: Vec2) {
        CanvasRenderingContext2d::stroke_rect(self, origin.x, origin.y, extent.x, extent.y);
    }

    fn arc(&mut self, center: Point, radius: f64, start_angle: f64, end_angle: f64) -> RenderResult<()> {
        CanvasRenderingContext2d::arc(self, center.x, center.y, radius, start_angle, end_angle).map_err(
            |err| {
                log::warn!("arc at ({}, {}) r={} rejected: {:?}", center.x, center.y, radius, err);
                RendererError::Primitive {
                    primitive: "arc",
                    reason: format!("{err:?}"),
                }
            },
        )
    }
}
