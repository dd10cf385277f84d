use std::sync::atomic::{AtomicBool, Ordering};

use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::JsValue;

static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);

pub fn set_debug_enabled(enabled: bool) {
    DEBUG_ENABLED.store(enabled, Ordering::Relaxed);
}

// Context goes out as a plain JS object so devtools can expand it.
fn send(level: &str, message: &str, context: Value) {
    let label = JsValue::from_str(&format!("[vidsync] [{level}] {message}"));
    let ctx = context
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .unwrap_or_else(|_| JsValue::from_str(&context.to_string()));

    match level {
        "error" => web_sys::console::error_2(&label, &ctx),
        "warn" => web_sys::console::warn_2(&label, &ctx),
        "debug" => web_sys::console::debug_2(&label, &ctx),
        _ => web_sys::console::info_2(&label, &ctx),
    }
}

pub fn info(message: &str, context: Value)  { send("info",  message, context); }
pub fn warn(message: &str, context: Value)  { send("warn",  message, context); }
pub fn error(message: &str, context: Value) { send("error", message, context); }
pub fn debug(message: &str, context: Value) {
    if DEBUG_ENABLED.load(Ordering::Relaxed) {
        send("debug", message, context);
    }
}
