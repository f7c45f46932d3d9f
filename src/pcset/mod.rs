//! Pitch-class set display helpers
//!
//! Pure functions behind the set analysis views: record formatting,
//! prime-form parsing, keyboard colouring and MIDI note placement.
//! Transposition lives in `crate::transposition`.

pub mod format;
pub mod keyboard;

pub use format::{format_set_to_string, to_formatted_prime_form_array};
pub use keyboard::{is_black_key, key_color, midi_note, to_midi_note, KeyColor, MidiNote};
