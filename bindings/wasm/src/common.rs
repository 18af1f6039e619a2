use anyhow::{Result, anyhow};
use serde::Serialize;
use wasm_bindgen::JsValue;

use archetype_map_core::Archetype;

pub(crate) fn js_err(e: impl ToString) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Serialize through a JSON string so `null` and nested maps arrive as plain JS values.
pub(crate) fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue> {
    let json = serde_json::to_string(value)
        .map_err(|e| anyhow!("Failed to serialize value to JSON: {}", e))?;
    js_sys::JSON::parse(&json).map_err(|e| anyhow!("Failed to parse JSON in JS: {:?}", e))
}

pub(crate) fn parse_archetype(key: &str) -> Result<Archetype> {
    Archetype::from_key(key).ok_or_else(|| {
        anyhow!("Unknown archetype {:?}. Expected one of: destination, opportunity, risk, origin", key)
    })
}
