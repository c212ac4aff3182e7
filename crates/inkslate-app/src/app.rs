//! Platform-independent application state.

use inkslate_core::{
    Brush, ColorError, EventOutcome, InputEvent, StrokeColor, ToolError, ToolKind, Whiteboard,
};
use inkslate_render::{DrawingSurface, RenderContext, RendererError, render};
use kurbo::Rect;
use serde::Deserialize;
use thiserror::Error;

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
    #[error(transparent)]
    Color(#[from] ColorError),
    #[error(transparent)]
    Tool(#[from] ToolError),
    #[error("Render failed: {0}")]
    Render(#[from] RendererError),
    #[error("Missing page element: #{0}")]
    MissingElement(String),
    #[error("Platform error: {0}")]
    Platform(String),
}

/// Application configuration.
///
/// Every field has a default, so a partial JSON object is a valid config.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub canvas_id: String,
    pub color_picker_id: String,
    pub size_slider_id: String,
    pub size_label_id: String,
    pub clear_button_id: String,
    pub reset_view_button_id: String,
    /// Tool buttons have id `<tool name><suffix>`, e.g. `rectTool`.
    pub tool_button_suffix: String,
    pub active_tool_class: String,
    pub inactive_tool_class: String,
    pub initial_color: String,
    pub initial_thickness: f64,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            canvas_id: "whiteboardCanvas".to_string(),
            color_picker_id: "colorPicker".to_string(),
            size_slider_id: "sizeSlider".to_string(),
            size_label_id: "sizeValue".to_string(),
            clear_button_id: "clearButton".to_string(),
            reset_view_button_id: "resetViewButton".to_string(),
            tool_button_suffix: "Tool".to_string(),
            active_tool_class: "bg-blue-500".to_string(),
            inactive_tool_class: "bg-gray-500".to_string(),
            initial_color: "#000000".to_string(),
            initial_thickness: 5.0,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Parse a JSON object of overrides.
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The `log` level filter named by `log_level`, falling back to `Info`.
    pub fn level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }

    /// Element id of the button that selects `tool`.
    pub fn tool_button_id(&self, tool: ToolKind) -> String {
        format!("{}{}", tool.name(), self.tool_button_suffix)
    }
}

/// Main application struct: the board plus the control plumbing around it.
#[derive(Debug)]
pub struct App {
    config: AppConfig,
    board: Whiteboard,
}

impl App {
    /// Create a new application with default configuration.
    pub fn new() -> Result<Self, AppError> {
        Self::with_config(AppConfig::default())
    }

    /// Create a new application with custom configuration.
    pub fn with_config(config: AppConfig) -> Result<Self, AppError> {
        let color = StrokeColor::parse(&config.initial_color)?;
        let brush = Brush::new(color, config.initial_thickness)?;
        Ok(Self {
            board: Whiteboard::with_brush(brush),
            config,
        })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn board(&self) -> &Whiteboard {
        &self.board
    }

    /// Feed an input event to the board.
    pub fn handle_event(&mut self, event: &InputEvent, surface_bounds: Rect) -> EventOutcome {
        self.board.handle_event(event, surface_bounds)
    }

    /// Select a tool by its control name (`draw`, `erase`, `line`, `rect`, `circle`).
    pub fn select_tool(&mut self, name: &str) -> Result<ToolKind, AppError> {
        let tool: ToolKind = name.parse()?;
        self.board.set_tool(tool);
        Ok(tool)
    }

    /// Apply the color control's value.
    pub fn set_color(&mut self, value: &str) -> Result<StrokeColor, AppError> {
        let color = StrokeColor::parse(value)?;
        self.board.set_color(color);
        Ok(color)
    }

    /// Apply the size control's value; returns the accepted thickness.
    pub fn set_thickness(&mut self, value: &str) -> Result<f64, AppError> {
        Ok(self.board.set_thickness_str(value)?)
    }

    /// Empty the document. The host should redraw afterwards.
    pub fn clear(&mut self) {
        self.board.clear();
    }

    /// Pan back to the origin. The host should redraw afterwards.
    pub fn reset_view(&mut self) {
        self.board.reset_view();
    }

    /// Render the whole document onto `surface`.
    pub fn redraw(&self, surface: &mut dyn DrawingSurface) -> Result<(), AppError> {
        render(&RenderContext::from(&self.board), surface)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.canvas_id, "whiteboardCanvas");
        assert_eq!(config.tool_button_id(ToolKind::Rectangle), "rectTool");
        assert_eq!(config.level(), log::Level::Info);
    }

    #[test]
    fn test_partial_json_config() {
        let config = AppConfig::from_json(r##"{"canvas_id": "board", "initial_color": "#ff0000", "log_level": "debug"}"##).unwrap();
        assert_eq!(config.canvas_id, "board");
        assert_eq!(config.color_picker_id, "colorPicker");
        assert_eq!(config.level(), log::Level::Debug);
    }

    #[test]
    fn test_bad_json_config() {
        assert!(matches!(AppConfig::from_json("{not json"), Err(AppError::Config(_))));
        assert!(matches!(
            AppConfig::from_json(r#"{"initial_thickness": "thick"}"#),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn test_unknown_log_level_falls_back() {
        let config = AppConfig {
            log_level: "chatty".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.level(), log::Level::Info);
    }

    #[test]
    fn test_initial_brush_from_config() {
        let config = AppConfig {
            initial_color: "#00ff00".to_string(),
            initial_thickness: 9.0,
            ..AppConfig::default()
        };
        let app = App::with_config(config).unwrap();
        assert_eq!(app.board().brush().color(), StrokeColor::new(0, 255, 0, 255));
        assert!((app.board().brush().thickness() - 9.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_invalid_initial_settings() {
        let bad_color = AppConfig {
            initial_color: "nope".to_string(),
            ..AppConfig::default()
        };
        assert!(matches!(App::with_config(bad_color), Err(AppError::Color(_))));

        let bad_size = AppConfig {
            initial_thickness: 0.0,
            ..AppConfig::default()
        };
        assert!(matches!(App::with_config(bad_size), Err(AppError::Tool(_))));
    }

    #[test]
    fn test_control_values() {
        let mut app = App::new().unwrap();
        assert_eq!(app.select_tool("circle").unwrap(), ToolKind::Circle);
        assert!(app.select_tool("lasso").is_err());
        assert_eq!(app.board().tool(), ToolKind::Circle);

        assert_eq!(app.set_thickness("12").unwrap(), 12.0);
        assert!(app.set_thickness("-1").is_err());
        assert!((app.board().brush().thickness() - 12.0).abs() < f64::EPSILON);

        assert_eq!(app.set_color("#123456").unwrap(), StrokeColor::new(0x12, 0x34, 0x56, 255));
    }
}
