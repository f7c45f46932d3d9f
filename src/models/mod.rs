//! Models module for the pitch-class set helpers
//!
//! Value types shared by the formatting, keyboard and transposition helpers.

pub mod pitch_class;
pub mod preferences;
pub mod set_record;

// Re-export commonly used types
pub use pitch_class::PitchClass;
pub use preferences::{DisplayPreference, FormatSettings};
pub use set_record::{SetFormat, SetRecord};
