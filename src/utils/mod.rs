//! Utility modules for the pitch-class set helpers
//!
//! Shared parsing and octave arithmetic used by the formatting,
//! keyboard and transposition modules.

pub mod pitch_utils;

pub use pitch_utils::*;
