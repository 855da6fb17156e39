//! WebAssembly entry point and the JavaScript-facing canvas controller.

use crate::annotator::Annotator;
use crate::controls::ControlsState;
use crate::shortcuts::ShortcutRegistry;
use kurbo::Point;
use textmark_core::{AnnotatorConfig, Modifiers, PointerEvent};
use textmark_render::Canvas2dSurface;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

/// Canvas annotator exposed to JavaScript.
///
/// The page forwards form changes, button clicks and canvas mouse events
/// here; all drawing happens on the wrapped canvas.
#[wasm_bindgen]
pub struct AnnotationCanvas {
    annotator: Annotator<Canvas2dSurface>,
    controls: ControlsState,
}

#[wasm_bindgen]
impl AnnotationCanvas {
    /// Attach to `canvas`. `config_json` may override any config field.
    #[wasm_bindgen(constructor)]
    pub fn new(
        canvas: HtmlCanvasElement,
        config_json: Option<String>,
    ) -> Result<AnnotationCanvas, JsValue> {
        let config = match config_json {
            Some(json) => AnnotatorConfig::from_json(&json).map_err(to_js)?,
            None => AnnotatorConfig::default(),
        };
        let surface = Canvas2dSurface::new(canvas).map_err(to_js)?;
        let (width, height) = config.canvas_pixels();
        surface.resize(width, height);
        Ok(Self {
            annotator: Annotator::with_config(surface, config),
            controls: ControlsState::new(),
        })
    }

    pub fn set_text(&mut self, text: &str) {
        self.controls.set_text(text);
    }

    pub fn set_font_size(&mut self, size: f64) {
        self.controls.set_font_size(size);
    }

    /// Set the font style from a selector value (`normal`, `italic`, `bold`,
    /// `bold italic`).
    pub fn set_font_style(&mut self, style: &str) -> Result<(), JsValue> {
        self.controls.set_font_style_str(style).map_err(to_js)
    }

    /// Place the current text at the default position.
    pub fn add_text(&mut self) {
        self.annotator.add_from(&self.controls);
    }

    pub fn undo(&mut self) -> bool {
        self.annotator.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.annotator.redo()
    }

    pub fn can_undo(&self) -> bool {
        self.annotator.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.annotator.can_redo()
    }

    /// Handle pointer down in client coordinates, relative to the canvas'
    /// bounding rect. Returns true if a drag started.
    pub fn pointer_down(&mut self, client_x: f64, client_y: f64) -> bool {
        let event = PointerEvent::down(client_x, client_y).relative_to(self.canvas_origin());
        self.annotator.handle_pointer(event)
    }

    /// Handle pointer move. Returns true if an entry moved.
    pub fn pointer_move(&mut self, client_x: f64, client_y: f64) -> bool {
        let event = PointerEvent::moved(client_x, client_y).relative_to(self.canvas_origin());
        self.annotator.handle_pointer(event)
    }

    /// Handle pointer up. Returns true if a drag ended.
    pub fn pointer_up(&mut self, client_x: f64, client_y: f64) -> bool {
        let event = PointerEvent::up(client_x, client_y).relative_to(self.canvas_origin());
        self.annotator.handle_pointer(event)
    }

    /// Handle a key press. Returns true if it was bound to an action.
    pub fn key_down(&mut self, key: &str, ctrl: bool, shift: bool, meta: bool) -> bool {
        let modifiers = Modifiers {
            shift,
            ctrl,
            alt: false,
            meta,
        };
        match ShortcutRegistry::resolve(key, modifiers) {
            Some(action) => {
                self.annotator.apply(action, &self.controls);
                true
            }
            None => false,
        }
    }

    /// Current history as a JSON array.
    pub fn entries_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.annotator.entries()).map_err(to_js)
    }

    /// Redraw the whole history (e.g. after the page resized the canvas).
    pub fn redraw(&mut self) {
        self.annotator.redraw();
    }
}

impl AnnotationCanvas {
    fn canvas_origin(&self) -> Point {
        let rect = self.annotator.surface().canvas().get_bounding_client_rect();
        Point::new(rect.left(), rect.top())
    }
}

fn to_js(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Initialize logging and panic reporting.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("Logger already initialized: {e}").into());
    }

    log::info!("Starting textmark (WASM)");
}
