//! Page Configuration
//!
//! Looks for overrides on the host page: a `window.__LOST_FOUND_CONFIG__`
//! object first, then an inline `<script id="lost-found-config">` JSON block.

use lost_found_core::AppConfig;
use wasm_bindgen::JsValue;

const GLOBAL_KEY: &str = "__LOST_FOUND_CONFIG__";
const SCRIPT_ID: &str = "lost-found-config";

/// Load the config. The second value describes a source that failed to parse.
pub fn load() -> (AppConfig, Option<String>) {
    match from_global() {
        Ok(Some(config)) => return (config, None),
        Ok(None) => {}
        Err(e) => return (AppConfig::default(), Some(e)),
    }
    match from_script() {
        Ok(Some(config)) => (config, None),
        Ok(None) => (AppConfig::default(), None),
        Err(e) => (AppConfig::default(), Some(e)),
    }
}

fn from_global() -> Result<Option<AppConfig>, String> {
    let Some(window) = web_sys::window() else {
        return Ok(None);
    };
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(GLOBAL_KEY))
        .map_err(|e| format!("{}: {:?}", GLOBAL_KEY, e))?;
    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }
    serde_wasm_bindgen::from_value::<AppConfig>(value)
        .map(|config| Some(config.normalized()))
        .map_err(|e| format!("{}: {}", GLOBAL_KEY, e))
}

fn from_script() -> Result<Option<AppConfig>, String> {
    let text = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(SCRIPT_ID))
        .and_then(|el| el.text_content());
    match text {
        Some(json) if !json.trim().is_empty() => AppConfig::from_json(&json)
            .map(Some)
            .map_err(|e| format!("#{}: {}", SCRIPT_ID, e)),
        _ => Ok(None),
    }
}
