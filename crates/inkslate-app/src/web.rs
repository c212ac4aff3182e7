//! WebAssembly entry point and DOM wiring.

use crate::app::{App, AppConfig, AppError};
use inkslate_core::{ClientPosition, InputEvent, MouseButton, ToolKind};
use kurbo::{Point, Rect};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    AddEventListenerOptions, CanvasRenderingContext2d, Document, Event, EventTarget,
    HtmlCanvasElement, HtmlElement, HtmlInputElement, MouseEvent, TouchEvent,
};

/// Optional `<script type="application/json">` element holding config overrides.
const CONFIG_ELEMENT_ID: &str = "inkslate-config";

/// The app bound to its canvas.
struct WebApp {
    app: App,
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

type Shared = Rc<RefCell<WebApp>>;

impl WebApp {
    /// Canvas rectangle in client coordinates, read fresh for every event.
    fn bounds(&self) -> Rect {
        let r = self.canvas.get_bounding_client_rect();
        Rect::new(r.left(), r.top(), r.right(), r.bottom())
    }

    fn dispatch(&mut self, event: InputEvent, raw: &Event) {
        let bounds = self.bounds();
        let outcome = self.app.handle_event(&event, bounds);
        if outcome.prevent_default {
            raw.prevent_default();
        }
        if outcome.redraw {
            self.redraw();
        }
    }

    fn redraw(&mut self) {
        if let Err(err) = self.app.redraw(&mut self.ctx) {
            log::error!("redraw failed: {}", err);
        }
    }

    /// Match the backing store to the laid-out size, then redraw.
    fn resize(&mut self) {
        let width = self.canvas.offset_width().max(0) as u32;
        let height = self.canvas.offset_height().max(0) as u32;
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        log::debug!("canvas resized to {}x{}", width, height);
        self.redraw();
    }
}

fn platform(err: JsValue) -> AppError {
    AppError::Platform(format!("{err:?}"))
}

fn element<T: JsCast>(document: &Document, id: &str) -> Result<T, AppError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| AppError::MissingElement(id.to_string()))?
        .dyn_into::<T>()
        .map_err(|_| AppError::Platform(format!("#{id} has an unexpected element type")))
}

/// Like [`element`], but a missing control only disables that control.
fn optional_element<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    match element(document, id) {
        Ok(el) => Some(el),
        Err(err) => {
            log::warn!("{}", err);
            None
        }
    }
}

/// Attach a listener for the lifetime of the page.
fn listen(
    target: &EventTarget,
    kind: &str,
    passive: bool,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), AppError> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    let options = AddEventListenerOptions::new();
    options.set_passive(passive);
    target
        .add_event_listener_with_callback_and_add_event_listener_options(
            kind,
            closure.as_ref().unchecked_ref(),
            &options,
        )
        .map_err(platform)?;
    closure.forget();
    Ok(())
}

fn mouse_position(event: &MouseEvent) -> ClientPosition {
    ClientPosition::Pointer(Point::new(event.client_x() as f64, event.client_y() as f64))
}

fn touch_position(event: &TouchEvent) -> ClientPosition {
    let list = event.touches();
    let touches = (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|t| Point::new(t.client_x() as f64, t.client_y() as f64))
        .collect();
    ClientPosition::Touches(touches)
}

/// Translate a DOM event into a board event. `None` for foreign event types.
fn translate(kind: &str, event: &Event) -> Option<InputEvent> {
    let mouse = || event.dyn_ref::<MouseEvent>();
    let touch = || event.dyn_ref::<TouchEvent>();
    Some(match kind {
        "mousedown" => {
            let e = mouse()?;
            InputEvent::PointerDown {
                position: mouse_position(e),
                button: MouseButton::from_code(e.button()),
            }
        }
        "mousemove" => InputEvent::PointerMove {
            position: mouse_position(mouse()?),
        },
        "mouseup" => InputEvent::PointerUp,
        "mouseout" => InputEvent::PointerLeave,
        "contextmenu" => InputEvent::ContextMenu,
        "touchstart" => InputEvent::TouchStart {
            position: touch_position(touch()?),
        },
        "touchmove" => InputEvent::TouchMove {
            position: touch_position(touch()?),
        },
        "touchend" => InputEvent::TouchEnd,
        "touchcancel" => InputEvent::TouchCancel,
        _ => return None,
    })
}

/// Move the active class to `selected`'s button.
fn highlight_tool(document: &Document, config: &AppConfig, selected: ToolKind) {
    for tool in ToolKind::ALL {
        let Some(button) = document.get_element_by_id(&config.tool_button_id(tool)) else {
            continue;
        };
        let classes = button.class_list();
        let (add, remove) = if tool == selected {
            (&config.active_tool_class, &config.inactive_tool_class)
        } else {
            (&config.inactive_tool_class, &config.active_tool_class)
        };
        if let Err(err) = classes.remove_1(remove).and_then(|_| classes.add_1(add)) {
            log::warn!("could not restyle tool button: {:?}", err);
        }
    }
}

fn read_config(document: &Document) -> Result<AppConfig, AppError> {
    match document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    {
        Some(json) => AppConfig::from_json(&json),
        None => Ok(AppConfig::default()),
    }
}

fn wire_canvas(shared: &Shared) -> Result<(), AppError> {
    let canvas: EventTarget = shared.borrow().canvas.clone().into();
    for kind in [
        "mousedown",
        "mousemove",
        "mouseup",
        "mouseout",
        "contextmenu",
        "touchstart",
        "touchmove",
        "touchend",
        "touchcancel",
    ] {
        let state = Rc::clone(shared);
        // Touch listeners must be non-passive so scrolling can be suppressed.
        let passive = !kind.starts_with("touch") && kind != "contextmenu";
        listen(&canvas, kind, passive, move |event: Event| {
            if let Some(input) = translate(kind, &event) {
                state.borrow_mut().dispatch(input, &event);
            }
        })?;
    }
    Ok(())
}

fn wire_controls(shared: &Shared, document: &Document) -> Result<(), AppError> {
    let config = shared.borrow().app.config().clone();

    for tool in ToolKind::ALL {
        let Some(button) = optional_element::<HtmlElement>(document, &config.tool_button_id(tool)) else {
            continue;
        };
        let state = Rc::clone(shared);
        let doc = document.clone();
        let cfg = config.clone();
        listen(&button, "click", true, move |_| {
            if let Err(err) = state.borrow_mut().app.select_tool(tool.name()) {
                log::warn!("{}", err);
                return;
            }
            highlight_tool(&doc, &cfg, tool);
        })?;
    }
    highlight_tool(document, &config, shared.borrow().app.board().tool());

    if let Some(picker) = optional_element::<HtmlInputElement>(document, &config.color_picker_id) {
        if let Err(err) = shared.borrow_mut().app.set_color(&picker.value()) {
            log::warn!("initial color ignored: {}", err);
        }
        let state = Rc::clone(shared);
        let input = picker.clone();
        listen(&picker, "input", true, move |_| {
            if let Err(err) = state.borrow_mut().app.set_color(&input.value()) {
                log::warn!("color ignored: {}", err);
            }
        })?;
    }

    if let Some(slider) = optional_element::<HtmlInputElement>(document, &config.size_slider_id) {
        let label = optional_element::<HtmlElement>(document, &config.size_label_id);
        let state = Rc::clone(shared);
        let input = slider.clone();
        let apply = move || {
            let value = input.value();
            match state.borrow_mut().app.set_thickness(&value) {
                Ok(_) => {
                    if let Some(label) = &label {
                        label.set_text_content(Some(&value));
                    }
                }
                Err(err) => log::warn!("size ignored: {}", err),
            }
        };
        apply();
        listen(&slider, "input", true, move |_| apply())?;
    }

    if let Some(button) = optional_element::<HtmlElement>(document, &config.clear_button_id) {
        let state = Rc::clone(shared);
        listen(&button, "click", true, move |_| {
            let mut web = state.borrow_mut();
            web.app.clear();
            web.redraw();
        })?;
    }

    if let Some(button) = optional_element::<HtmlElement>(document, &config.reset_view_button_id) {
        let state = Rc::clone(shared);
        listen(&button, "click", true, move |_| {
            let mut web = state.borrow_mut();
            web.app.reset_view();
            web.redraw();
        })?;
    }

    Ok(())
}

/// Mount the whiteboard on the page described by `config`.
fn mount(document: &Document, config: AppConfig) -> Result<(), AppError> {
    let window = web_sys::window().ok_or_else(|| AppError::Platform("no window".to_string()))?;
    let canvas: HtmlCanvasElement = element(document, &config.canvas_id)?;
    let ctx = canvas
        .get_context("2d")
        .map_err(platform)?
        .ok_or_else(|| AppError::Platform("2d context unavailable".to_string()))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| AppError::Platform("unexpected context type".to_string()))?;

    let shared: Shared = Rc::new(RefCell::new(WebApp {
        app: App::with_config(config)?,
        canvas,
        ctx,
    }));

    wire_canvas(&shared)?;
    wire_controls(&shared, document)?;

    let state = Rc::clone(&shared);
    listen(&window, "resize", true, move |_| state.borrow_mut().resize())?;
    shared.borrow_mut().resize();

    log::info!("Inkslate mounted");
    Ok(())
}

/// Initialize and run the WASM application.
#[wasm_bindgen(start)]
pub fn run_wasm() -> Result<(), JsValue> {
    // Set up panic hook for better error messages
    console_error_panic_hook::set_once();

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let (config, config_error) = match read_config(&document) {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };

    if console_log::init_with_level(config.level()).is_err() {
        web_sys::console::warn_1(&JsValue::from_str("logger already initialised"));
    }
    if let Some(err) = config_error {
        log::warn!("using default config: {}", err);
    }

    log::info!("Starting Inkslate (WASM)");
    mount(&document, config).map_err(|err| JsValue::from_str(&err.to_string()))
}
