//! Vello scene surface.
//!
//! Builds a `vello::Scene` from the same drawing calls the Canvas2D surface
//! receives, so native GPU hosts can present a frame with `vello::Renderer`.

use crate::renderer::{DrawingSurface, RenderResult};
use inkslate_core::StrokeColor;
use kurbo::{Affine, Arc, BezPath, Cap, Join, Point, Rect, Shape as KurboShape, Size, Stroke, Vec2};
use vello::Scene;
use vello::peniko::Color;

/// Path flattening tolerance for arcs, in pixels.
const ARC_TOLERANCE: f64 = 0.1;

/// Surface that encodes drawing calls into a Vello scene.
pub struct VelloSurface {
    /// The Vello scene being built.
    scene: Scene,
    size: Size,
    color: Color,
    stroke: Stroke,
    path: BezPath,
}

impl VelloSurface {
    pub fn new(size: Size) -> Self {
        Self {
            scene: Scene::new(),
            size,
            color: StrokeColor::black().into(),
            stroke: Stroke::new(1.0),
            path: BezPath::new(),
        }
    }

    /// Get the built scene for rendering.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }
}

impl DrawingSurface for VelloSurface {
    fn size(&self) -> Size {
        self.size
    }

    // Scenes are rebuilt every frame and composited over the render target's
    // base color, so clearing drops everything encoded so far. Only
    // full-surface clears are supported.
    fn clear_rect(&mut self, rect: Rect) {
        let full = Rect::from_origin_size(Point::ORIGIN, self.size);
        debug_assert!(
            rect.union(full) == rect,
            "partial clears are not supported by the Vello surface"
        );
        self.scene.reset();
        self.path = BezPath::new();
    }

    fn set_stroke_color(&mut self, color: StrokeColor) {
        self.color = color.into();
    }

    fn set_line_width(&mut self, width: f64) {
        self.stroke.width = width;
    }

    fn set_line_cap(&mut self, cap: Cap) {
        self.stroke = self.stroke.clone().with_caps(cap);
    }

    fn set_line_join(&mut self, join: Join) {
        self.stroke = self.stroke.clone().with_join(join);
    }

    fn begin_path(&mut self) {
        self.path = BezPath::new();
    }

    fn move_to(&mut self, point: Point) {
        self.path.move_to(point);
    }

    fn line_to(&mut self, point: Point) {
        self.path.line_to(point);
    }

    fn stroke(&mut self) {
        self.scene
            .stroke(&self.stroke, Affine::IDENTITY, self.color, None, &self.path);
    }

    fn stroke_rect(&mut self, origin: Point, extent: Vec2) {
        let mut outline = BezPath::new();
        let far = origin + extent;
        outline.move_to(origin);
        outline.line_to(Point::new(far.x, origin.y));
        outline.line_to(far);
        outline.line_to(Point::new(origin.x, far.y));
        outline.close_path();
        self.scene
            .stroke(&self.stroke, Affine::IDENTITY, self.color, None, &outline);
    }

    fn arc(&mut self, center: Point, radius: f64, start_angle: f64, end_angle: f64) -> RenderResult<()> {
        let arc = Arc::new(center, Vec2::new(radius, radius), start_angle, end_angle - start_angle, 0.0);
        self.path.extend(arc.path_elements(ARC_TOLERANCE));
        Ok(())
    }
}
