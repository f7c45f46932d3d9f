//! JavaScript-facing pitch-class set helpers
//!
//! Thin wrappers over `crate::pcset` and `crate::transposition` using the
//! camelCase names the front-end calls.

use wasm_bindgen::prelude::*;

use crate::api::helpers::{deserialize, read_display_preference, to_js_error};
use crate::error::PcSetError;
use crate::models::preferences::{DisplayPreference, FormatSettings};
use crate::models::set_record::SetFormat;
use crate::pcset;
use crate::transposition;
use crate::{wasm_log, wasm_warn};

/// Format a set record for display
///
/// # Parameters
/// - `record`: pipe-delimited set record
/// - `format`: `"prime"` (default), `"forte"` or `"vec"`
/// - `remove_inversion`: defaults to true
///
/// # Returns
/// The formatted string, or `""` for an unknown format. The `dag` setting
/// is read from `localStorage`.
#[wasm_bindgen(js_name = formatSetToString)]
pub fn format_set_to_string(
    record: &str,
    format: Option<String>,
    remove_inversion: Option<bool>,
) -> Result<String, JsValue> {
    let format = match format.as_deref().map(str::parse::<SetFormat>) {
        None => SetFormat::default(),
        Some(Ok(format)) => format,
        Some(Err(PcSetError::UnknownFormat(name))) => {
            wasm_warn!("formatSetToString: unknown format {:?}, returning empty string", name);
            return Ok(String::new());
        }
        Some(Err(e)) => return Err(to_js_error(e, "formatSetToString")),
    };

    let settings = FormatSettings {
        format,
        remove_inversion: remove_inversion.unwrap_or(true),
        display_preference: read_display_preference(),
    };

    format_with_settings(record, &settings)
}

/// Format a set record with explicit settings
///
/// `settings_js` is a `FormatSettings` object; missing fields take their
/// defaults. Storage is not consulted.
#[wasm_bindgen(js_name = formatSetToStringWith)]
pub fn format_set_to_string_with(record: &str, settings_js: JsValue) -> Result<String, JsValue> {
    let settings: FormatSettings = if settings_js.is_undefined() || settings_js.is_null() {
        FormatSettings::default()
    } else {
        deserialize(settings_js, "Invalid format settings")?
    };

    format_with_settings(record, &settings)
}

fn format_with_settings(record: &str, settings: &FormatSettings) -> Result<String, JsValue> {
    wasm_log!(
        "formatSetToString: format={}, removeInversion={}",
        settings.format,
        settings.remove_inversion
    );

    pcset::format_set_to_string(
        record,
        settings.format,
        settings.remove_inversion,
        &settings.display_preference,
    )
    .map_err(|e| to_js_error(e, "formatSetToString"))
}

/// MIDI note number (as a string) for a pitch class in an octave
#[wasm_bindgen(js_name = toMidiNote)]
pub fn to_midi_note(pitch_class: &str, octave: i32) -> Result<String, JsValue> {
    pcset::to_midi_note(pitch_class, octave).map_err(|e| to_js_error(e, "toMidiNote"))
}

/// Prime form of a set record as a JavaScript array of numbers
#[wasm_bindgen(js_name = toFormattedPrimeFormArray)]
pub fn to_formatted_prime_form_array(record: &str) -> Result<js_sys::Array, JsValue> {
    let pitch_classes = pcset::to_formatted_prime_form_array(record)
        .map_err(|e| to_js_error(e, "toFormattedPrimeFormArray"))?;

    let result = js_sys::Array::new();
    for pc in pitch_classes {
        result.push(&JsValue::from(pc));
    }

    Ok(result)
}

#[wasm_bindgen(js_name = isBlackKey)]
pub fn is_black_key(n: i32) -> bool {
    pcset::is_black_key(n)
}

/// `"white"` or `"black"`, for keyboard CSS classes
#[wasm_bindgen(js_name = keyColor)]
pub fn key_color(n: i32) -> String {
    pcset::key_color(n).to_string()
}

/// Transpose a pitch class; empty input gives an empty string
#[wasm_bindgen(js_name = transpose)]
pub fn transpose(pitch_class: &str, interval: i32) -> Result<String, JsValue> {
    transposition::transpose(pitch_class, interval).map_err(|e| to_js_error(e, "transpose"))
}

/// Current `dag` display setting, as stored
#[wasm_bindgen(js_name = getDisplayPreference)]
pub fn get_display_preference() -> Option<String> {
    let preference: DisplayPreference = read_display_preference();
    preference.value().map(str::to_string)
}
