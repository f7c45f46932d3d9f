//! Error types for pitch-class set helpers
//!
//! Every fallible helper returns `PcSetError`. The WASM layer turns these
//! into JavaScript string errors (see `api::helpers::to_js_error`).

use thiserror::Error;

/// Top-level error type for record parsing and pitch-class conversion
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PcSetError {
    /// The record has no segment at the requested position
    #[error("Malformed set record: missing {segment} segment in {record:?}")]
    MalformedRecord {
        segment: &'static str,
        record: String,
    },

    /// Format name is not one of prime, forte, vec
    #[error("Unknown set format: {0}")]
    UnknownFormat(String),

    /// Pitch-class text could not be parsed as an integer
    #[error("Invalid pitch class: {0:?}")]
    InvalidPitchClass(String),

    /// Prime-form segment is not a JSON array
    #[error("Invalid prime form: {0}")]
    InvalidPrimeForm(String),

    /// MIDI note outside 0..=127
    #[error("MIDI note {0} out of range (0-127)")]
    MidiOutOfRange(i32),
}

pub type Result<T> = std::result::Result<T, PcSetError>;
