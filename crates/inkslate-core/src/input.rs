//! Raw input events for mouse and touch.

use crate::coords::ClientPosition;
use serde::{Deserialize, Serialize};

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Primary,
    Middle,
    Secondary,
    Other(i16),
}

impl MouseButton {
    /// Map a DOM `MouseEvent.button` code.
    pub fn from_code(code: i16) -> Self {
        match code {
            0 => MouseButton::Primary,
            1 => MouseButton::Middle,
            2 => MouseButton::Secondary,
            other => MouseButton::Other(other),
        }
    }

    /// Whether pressing this button starts a pan instead of a stroke.
    pub fn pans(self) -> bool {
        self == MouseButton::Secondary
    }
}

/// An input event delivered to the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    PointerDown {
        position: ClientPosition,
        button: MouseButton,
    },
    PointerMove {
        position: ClientPosition,
    },
    PointerUp,
    /// The pointer left the drawing surface.
    PointerLeave,
    TouchStart {
        position: ClientPosition,
    },
    TouchMove {
        position: ClientPosition,
    },
    TouchEnd,
    TouchCancel,
    /// The host is about to open a context menu over the surface.
    ContextMenu,
}

impl InputEvent {
    /// Whether the host's default handling must be suppressed.
    ///
    /// Touch scroll/zoom gestures and the context menu would otherwise fight
    /// drawing and panning on the surface.
    pub fn suppresses_default(&self) -> bool {
        matches!(
            self,
            InputEvent::TouchStart { .. } | InputEvent::TouchMove { .. } | InputEvent::ContextMenu
        )
    }

    /// Whether this event ends the current action.
    pub fn is_action_end(&self) -> bool {
        matches!(
            self,
            InputEvent::PointerUp
                | InputEvent::PointerLeave
                | InputEvent::TouchEnd
                | InputEvent::TouchCancel
        )
    }
}

/// What the host must do after the board handled an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventOutcome {
    /// The document or view changed; re-render.
    pub redraw: bool,
    /// Call `preventDefault` (or the platform equivalent).
    pub prevent_default: bool,
}

impl EventOutcome {
    pub fn ignored() -> Self {
        Self::default()
    }
}
