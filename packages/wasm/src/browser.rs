//! Browser-backed storage and confirmation.

use inkspire_editor::{Confirm, ContentStorage, Prompt, StorageError, StorageScope};
use tracing::warn;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = localStorage, js_name = getItem)]
    fn local_get(key: &str) -> Result<Option<String>, JsValue>;

    #[wasm_bindgen(catch, js_namespace = localStorage, js_name = setItem)]
    fn local_set(key: &str, value: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_namespace = localStorage, js_name = removeItem)]
    fn local_remove(key: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_namespace = sessionStorage, js_name = getItem)]
    fn session_get(key: &str) -> Result<Option<String>, JsValue>;

    #[wasm_bindgen(catch, js_namespace = sessionStorage, js_name = setItem)]
    fn session_set(key: &str, value: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_namespace = sessionStorage, js_name = removeItem)]
    fn session_remove(key: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(js_name = confirm)]
    fn window_confirm(message: &str) -> bool;
}

/// `localStorage` / `sessionStorage`
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStorage;

impl ContentStorage for BrowserStorage {
    fn load(&self, scope: StorageScope, key: &str) -> Option<String> {
        let result = match scope {
            StorageScope::Local => local_get(key),
            StorageScope::Session => session_get(key),
        };
        // Blocked storage throws a SecurityError; fall back to defaults
        result.unwrap_or_else(|e| {
            warn!(key, reason = %describe(&e), "Storage read failed");
            None
        })
    }

    fn save(&mut self, scope: StorageScope, key: &str, value: &str) -> Result<(), StorageError> {
        let result = match scope {
            StorageScope::Local => local_set(key, value),
            StorageScope::Session => session_set(key, value),
        };
        // Quota errors surface as a thrown DOMException
        result.map_err(|e| {
            let reason = describe(&e);
            warn!(key, %reason, "Storage write failed");
            StorageError::Unavailable(reason)
        })
    }

    fn remove(&mut self, scope: StorageScope, key: &str) {
        let result = match scope {
            StorageScope::Local => local_remove(key),
            StorageScope::Session => session_remove(key),
        };
        if let Err(e) = result {
            warn!(key, reason = %describe(&e), "Storage remove failed");
        }
    }
}

fn describe(error: &JsValue) -> String {
    error.as_string().unwrap_or_else(|| format!("{:?}", error))
}

/// `window.confirm`
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserConfirm;

impl Confirm for BrowserConfirm {
    fn confirm(&mut self, prompt: &Prompt) -> bool {
        window_confirm(&prompt.message())
    }
}
