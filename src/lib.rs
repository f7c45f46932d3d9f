//! Pitch-Class Set Helpers WASM Module
//!
//! Presentation helpers for the set analysis front-end: prime form, Forte
//! label and interval vector formatting, MIDI note placement, keyboard key
//! colouring and transposition.

pub mod api;
pub mod error;
pub mod models;
pub mod pcset;
pub mod transposition;
pub mod utils;

// Re-export commonly used types
pub use error::PcSetError;
pub use models::*;
pub use pcset::{
    format_set_to_string, is_black_key, key_color, midi_note, to_formatted_prime_form_array,
    to_midi_note, KeyColor, MidiNote,
};
pub use transposition::transpose;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        crate::wasm_warn!("logger already initialized: {}", e);
    }

    log::info!("Pitch-class set helpers WASM module initialized");
}
