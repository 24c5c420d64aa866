use inkspire_app::{App, AppError, Command};
use inkspire_editor::{Confirm, ContentStorage};
use serde_json::{Map, Value};
use wasm_bindgen::prelude::*;

mod browser;

pub use browser::{BrowserConfirm, BrowserStorage};

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// The running site, owned by the page script
#[wasm_bindgen]
pub struct InkSpire {
    app: App,
}

#[wasm_bindgen]
impl InkSpire {
    /// Load content from browser storage. `config_json` may be absent.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<InkSpire, JsValue> {
        Self::with_storage(config_json.as_deref(), Box::new(BrowserStorage)).map_err(to_js)
    }

    /// Apply `{"action": "...", ...payload}` and return the update as JSON
    pub fn dispatch(&mut self, command_json: &str) -> Result<String, JsValue> {
        self.dispatch_with(command_json, &mut BrowserConfirm)
            .map_err(to_js)
    }

    /// Full page as an HTML document
    #[wasm_bindgen(js_name = renderPage)]
    pub fn render_page(&self) -> String {
        self.app.render_page()
    }

    #[wasm_bindgen(getter, js_name = isAdmin)]
    pub fn is_admin(&self) -> bool {
        self.app.editor().is_admin()
    }

    #[wasm_bindgen(getter, js_name = testimonialIntervalMs)]
    pub fn testimonial_interval_ms(&self) -> f64 {
        self.app.editor().config().testimonial_interval_ms as f64
    }

    #[wasm_bindgen(getter, js_name = splashDelayMs)]
    pub fn splash_delay_ms(&self) -> f64 {
        self.app.editor().config().splash_delay_ms as f64
    }
}

impl InkSpire {
    pub fn with_storage(
        config_json: Option<&str>,
        storage: Box<dyn ContentStorage>,
    ) -> Result<Self, AppError> {
        Ok(Self {
            app: App::from_config_json(config_json, storage)?,
        })
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn dispatch_with(
        &mut self,
        command_json: &str,
        confirm: &mut dyn Confirm,
    ) -> Result<String, AppError> {
        let command = parse_command(command_json)?;
        let update = self.app.dispatch(command, confirm)?;
        serde_json::to_string(&update).map_err(|e| AppError::InvalidPayload {
            action: "update".to_string(),
            message: e.to_string(),
        })
    }
}

/// Split `{"action": ..., rest}` into an action id and its payload
fn parse_command(command_json: &str) -> Result<Command, AppError> {
    let invalid = |message: String| AppError::InvalidPayload {
        action: String::new(),
        message,
    };

    let mut object: Map<String, Value> =
        serde_json::from_str(command_json).map_err(|e| invalid(e.to_string()))?;
    let action = match object.remove("action") {
        Some(Value::String(action)) => action,
        _ => return Err(invalid("missing \"action\"".to_string())),
    };

    Command::from_action(&action, Value::Object(object))
}

fn to_js(error: AppError) -> JsValue {
    JsValue::from_str(&error.to_string())
}
