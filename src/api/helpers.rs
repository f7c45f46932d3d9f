//! Shared helpers for WASM API operations
//!
//! Console logging, serde conversion from JavaScript values, error
//! conversion, and the browser-side read of the persisted display preference.

use wasm_bindgen::prelude::*;
use serde::de::DeserializeOwned;

use crate::error::PcSetError;
use crate::models::preferences::{DisplayPreference, DISPLAY_PREFERENCE_KEY};

// ============================================================================
// Console Logging Functions
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn warn(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn error(s: &str);
}

// ============================================================================
// Logging Macros
// ============================================================================

/// Log a debug message with [WASM] prefix
#[macro_export]
macro_rules! wasm_log {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_debug(&format!($($arg)*))
    };
}

/// Log a warning message with [WASM] ⚠️ prefix
#[macro_export]
macro_rules! wasm_warn {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_warn(&format!($($arg)*))
    };
}

/// Log an error message with [WASM] ❌ prefix
#[macro_export]
macro_rules! wasm_error {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_error(&format!($($arg)*))
    };
}

// ============================================================================
// Logging Helper Functions (called by macros)
// ============================================================================

pub fn log_debug(msg: &str) {
    log(&format!("[WASM] {}", msg));
}

pub fn log_warn(msg: &str) {
    warn(&format!("[WASM] ⚠️ {}", msg));
}

pub fn log_error(msg: &str) {
    error(&format!("[WASM] ❌ {}", msg));
}

// ============================================================================
// Deserialization and Error Helpers
// ============================================================================

/// Deserialize a value from JavaScript with automatic error handling
pub fn deserialize<T: DeserializeOwned>(
    value: JsValue,
    error_context: &str,
) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| {
        crate::wasm_error!("{}: {}", error_context, e);
        JsValue::from_str(&format!("{}: {}", error_context, e))
    })
}

/// Log a helper error and convert it for JavaScript
pub fn to_js_error(err: PcSetError, error_context: &str) -> JsValue {
    crate::wasm_error!("{}: {}", error_context, err);
    JsValue::from_str(&format!("{}: {}", error_context, err))
}

// ============================================================================
// Preference Store
// ============================================================================

/// Read the `dag` display setting from `localStorage`
///
/// A missing window, blocked storage or absent key all mean "no preference".
pub fn read_display_preference() -> DisplayPreference {
    let value = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(DISPLAY_PREFERENCE_KEY).ok().flatten());

    DisplayPreference::new(value)
}
