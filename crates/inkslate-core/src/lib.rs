//! Inkslate Core Library
//!
//! Platform-agnostic data model and input handling for the Inkslate
//! whiteboard: strokes in absolute space, the pan camera, coordinate
//! translation and the action state machine.

pub mod board;
pub mod camera;
pub mod coords;
pub mod document;
pub mod input;
pub mod stroke;
pub mod tools;

pub use board::Whiteboard;
pub use camera::Camera;
pub use coords::ClientPosition;
pub use document::Document;
pub use input::{EventOutcome, InputEvent, MouseButton};
pub use stroke::{AnchoredShape, ColorError, Freehand, Stroke, StrokeColor, StrokeKind, StrokeStyle};
pub use tools::{ActionState, Brush, ToolError, ToolKind, ToolManager};
