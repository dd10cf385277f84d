use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::error::ClipboardError;

fn prop(target: &JsValue, name: &str) -> Option<JsValue> {
    Reflect::get(target, &JsValue::from_str(name))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

/// `navigator.clipboard.readText()`, looked up dynamically so browsers
/// without the async clipboard API report `Unavailable` instead of throwing.
pub async fn read_text() -> Result<String, ClipboardError> {
    let window = web_sys::window().ok_or(ClipboardError::Unavailable)?;
    let clipboard = prop(window.navigator().as_ref(), "clipboard").ok_or(ClipboardError::Unavailable)?;
    let read = prop(&clipboard, "readText")
        .and_then(|f| f.dyn_into::<Function>().ok())
        .ok_or(ClipboardError::Unavailable)?;

    let promise = read
        .call0(&clipboard)
        .map_err(|e| ClipboardError::Denied(format!("{e:?}")))?
        .dyn_into::<Promise>()
        .map_err(|_| ClipboardError::Unavailable)?;

    JsFuture::from(promise)
        .await
        .map_err(|e| ClipboardError::Denied(format!("{e:?}")))?
        .as_string()
        .ok_or_else(|| ClipboardError::Denied("clipboard did not return text".into()))
}
