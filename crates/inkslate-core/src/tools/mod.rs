//! Tool system and the action state machine.

use crate::camera::Camera;
use crate::document::Document;
use crate::stroke::{Stroke, StrokeColor, StrokeKind, StrokeStyle};
use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Tool and brush setting errors.
#[derive(Debug, Error, PartialEq)]
pub enum ToolError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),
    #[error("Thickness must be a positive number, got {0}")]
    InvalidThickness(f64),
    #[error("Thickness is not a number: {0:?}")]
    UnparsableThickness(String),
}

/// Available tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ToolKind {
    #[default]
    Draw,
    Erase,
    Line,
    Rectangle,
    Circle,
}

impl ToolKind {
    pub const ALL: [ToolKind; 5] = [
        ToolKind::Draw,
        ToolKind::Erase,
        ToolKind::Line,
        ToolKind::Rectangle,
        ToolKind::Circle,
    ];

    /// Short name used by the tool controls.
    pub fn name(self) -> &'static str {
        match self {
            ToolKind::Draw => "draw",
            ToolKind::Erase => "erase",
            ToolKind::Line => "line",
            ToolKind::Rectangle => "rect",
            ToolKind::Circle => "circle",
        }
    }

    /// Kind of stroke this tool creates.
    pub fn stroke_kind(self) -> StrokeKind {
        match self {
            ToolKind::Draw => StrokeKind::FreehandDraw,
            ToolKind::Erase => StrokeKind::FreehandErase,
            ToolKind::Line => StrokeKind::Line,
            ToolKind::Rectangle => StrokeKind::Rectangle,
            ToolKind::Circle => StrokeKind::Circle,
        }
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ToolKind {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ToolKind::ALL
            .into_iter()
            .find(|tool| tool.name() == s)
            .ok_or_else(|| ToolError::UnknownTool(s.to_string()))
    }
}

/// Current values of the color and size controls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Brush {
    color: StrokeColor,
    thickness: f64,
}

impl Default for Brush {
    fn default() -> Self {
        Self {
            color: StrokeColor::black(),
            thickness: 5.0,
        }
    }
}

impl Brush {
    pub fn new(color: StrokeColor, thickness: f64) -> Result<Self, ToolError> {
        let mut brush = Self {
            color,
            ..Self::default()
        };
        brush.set_thickness(thickness)?;
        Ok(brush)
    }

    pub fn color(&self) -> StrokeColor {
        self.color
    }

    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    pub fn set_color(&mut self, color: StrokeColor) {
        self.color = color;
    }

    /// Set the line width. Rejects zero, negative and non-finite values.
    pub fn set_thickness(&mut self, thickness: f64) -> Result<(), ToolError> {
        if !thickness.is_finite() || thickness <= 0.0 {
            return Err(ToolError::InvalidThickness(thickness));
        }
        self.thickness = thickness;
        Ok(())
    }

    /// Parse and set a thickness delivered as text (slider value).
    pub fn set_thickness_str(&mut self, raw: &str) -> Result<f64, ToolError> {
        let value: f64 = raw
            .trim()
            .parse()
            .map_err(|_| ToolError::UnparsableThickness(raw.to_string()))?;
        self.set_thickness(value)?;
        Ok(value)
    }

    /// Style snapshot for a new stroke.
    pub fn style(&self) -> StrokeStyle {
        StrokeStyle::new(self.color, self.thickness)
    }
}

/// State of the current action.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ActionState {
    /// Waiting for an action to start.
    #[default]
    Idle,
    /// Appending points to the last freehand stroke.
    DrawingFreehand,
    /// Dragging the endpoint of the last shape stroke.
    DrawingShape,
    /// Moving the view. `anchor` is the last seen screen position.
    Panning { anchor: Point },
}

impl ActionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, ActionState::Idle)
    }
}

/// Manages the current tool, brush and action state.
#[derive(Debug, Clone, Default)]
pub struct ToolManager {
    /// Currently selected tool. Read only when an action starts.
    pub current_tool: ToolKind,
    /// Current state of the action.
    pub state: ActionState,
    /// Color and size applied to new strokes.
    pub brush: Brush,
}

impl ToolManager {
    /// Create a new tool manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the current tool. An in-progress stroke keeps its kind.
    pub fn set_tool(&mut self, tool: ToolKind) {
        self.current_tool = tool;
    }

    /// Begin a stroke with the current tool at an absolute position.
    pub fn begin_stroke(&mut self, document: &mut Document, at: Point) {
        let kind = self.current_tool.stroke_kind();
        log::debug!("begin {:?} stroke at ({}, {})", kind, at.x, at.y);
        document.push(Stroke::begin(kind, at, self.brush.style()));
        self.state = if kind.is_freehand() {
            ActionState::DrawingFreehand
        } else {
            ActionState::DrawingShape
        };
    }

    /// Begin panning from a screen position.
    pub fn begin_pan(&mut self, screen: Point) {
        log::debug!("begin pan at ({}, {})", screen.x, screen.y);
        self.state = ActionState::Panning { anchor: screen };
    }

    /// Advance the current action to a new screen position.
    ///
    /// Returns whether anything changed and a re-render is needed.
    pub fn update(&mut self, document: &mut Document, camera: &mut Camera, screen: Point) -> bool {
        match &mut self.state {
            ActionState::Idle => false,
            ActionState::DrawingFreehand | ActionState::DrawingShape => {
                let at = camera.screen_to_world(screen);
                match document.last_mut() {
                    Some(stroke) => {
                        log::trace!("extend {:?} to ({}, {})", stroke.kind(), at.x, at.y);
                        stroke.extend_to(at);
                        true
                    }
                    None => false,
                }
            }
            ActionState::Panning { anchor } => {
                camera.pan(screen - *anchor);
                *anchor = screen;
                true
            }
        }
    }

    /// End the current action. The last stroke is left exactly as drawn.
    pub fn end(&mut self) {
        if !self.state.is_idle() {
            log::debug!("end {:?}", self.state);
        }
        self.state = ActionState::Idle;
    }

    /// Check if an action is in progress.
    pub fn is_active(&self) -> bool {
        !self.state.is_idle()
    }
}
