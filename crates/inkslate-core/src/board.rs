//! Whiteboard session: the single owner of document, view and tool state.

use crate::camera::Camera;
use crate::coords::{self, ClientPosition};
use crate::document::Document;
use crate::input::{EventOutcome, InputEvent, MouseButton};
use crate::stroke::StrokeColor;
use crate::tools::{ActionState, Brush, ToolError, ToolKind, ToolManager};
use kurbo::{Rect, Vec2};

/// A whiteboard session.
///
/// All mutation of the document and the view goes through this type. It is
/// not internally synchronized; hosts with more than one thread must keep it
/// behind a single owner.
#[derive(Debug, Clone, Default)]
pub struct Whiteboard {
    /// The strokes drawn so far.
    document: Document,
    /// Pan offset.
    camera: Camera,
    /// Tool, brush and action state.
    tool_manager: ToolManager,
}

impl Whiteboard {
    /// Create an empty board at the origin with the draw tool selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty board with a preset brush.
    pub fn with_brush(brush: Brush) -> Self {
        let mut board = Self::new();
        board.tool_manager.brush = brush;
        board
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn tool(&self) -> ToolKind {
        self.tool_manager.current_tool
    }

    pub fn brush(&self) -> &Brush {
        &self.tool_manager.brush
    }

    pub fn action_state(&self) -> ActionState {
        self.tool_manager.state
    }

    pub fn set_tool(&mut self, tool: ToolKind) {
        if tool != self.tool_manager.current_tool {
            log::info!("tool: {}", tool);
        }
        self.tool_manager.set_tool(tool);
    }

    pub fn set_color(&mut self, color: StrokeColor) {
        self.tool_manager.brush.set_color(color);
    }

    pub fn set_thickness(&mut self, thickness: f64) -> Result<(), ToolError> {
        self.tool_manager.brush.set_thickness(thickness)
    }

    /// Set the thickness from a control's text value. Returns the new thickness.
    pub fn set_thickness_str(&mut self, raw: &str) -> Result<f64, ToolError> {
        self.tool_manager.brush.set_thickness_str(raw)
    }

    /// Route one input event through the action state machine.
    ///
    /// `surface_bounds` is the drawing surface's rectangle in client
    /// coordinates at the time of the event. Events without a usable
    /// coordinate are ignored.
    pub fn handle_event(&mut self, event: &InputEvent, surface_bounds: Rect) -> EventOutcome {
        let redraw = if event.is_action_end() {
            self.tool_manager.end();
            false
        } else {
            match event {
                InputEvent::PointerDown { position, button } => {
                    self.start_action(position, *button, surface_bounds)
                }
                // Touch input only ever draws.
                InputEvent::TouchStart { position } => {
                    self.start_action(position, MouseButton::Primary, surface_bounds)
                }
                InputEvent::PointerMove { position } => {
                    self.move_action(position, surface_bounds, true)
                }
                // A touch never advances a pan started by the mouse.
                InputEvent::TouchMove { position } => {
                    self.move_action(position, surface_bounds, false)
                }
                _ => false,
            }
        };

        EventOutcome {
            redraw,
            prevent_default: event.suppresses_default(),
        }
    }

    fn start_action(&mut self, position: &ClientPosition, button: MouseButton, bounds: Rect) -> bool {
        let Some(screen) = coords::to_screen(position, bounds) else {
            log::debug!("action start without coordinate ignored");
            return false;
        };

        // A new start while an action is running implicitly ends it.
        if self.tool_manager.is_active() {
            self.tool_manager.end();
        }

        if button.pans() {
            self.tool_manager.begin_pan(screen);
            false
        } else {
            let at = self.camera.screen_to_world(screen);
            self.tool_manager.begin_stroke(&mut self.document, at);
            true
        }
    }

    fn move_action(&mut self, position: &ClientPosition, bounds: Rect, may_pan: bool) -> bool {
        if !self.tool_manager.is_active() {
            return false;
        }
        if !may_pan && matches!(self.tool_manager.state, ActionState::Panning { .. }) {
            return false;
        }
        match coords::to_screen(position, bounds) {
            Some(screen) => self
                .tool_manager
                .update(&mut self.document, &mut self.camera, screen),
            None => false,
        }
    }

    /// Pan the view by a screen-space delta.
    pub fn pan(&mut self, delta: Vec2) {
        self.camera.pan(delta);
    }

    /// Move the view back to the origin. The document is untouched.
    pub fn reset_view(&mut self) {
        log::info!("reset view from ({}, {})", self.camera.offset.x, self.camera.offset.y);
        self.camera.reset();
    }

    /// Remove every stroke and abandon any in-progress action.
    pub fn clear(&mut self) {
        let removed = self.document.clear();
        self.tool_manager.end();
        log::info!("cleared {} strokes", removed);
    }
}
