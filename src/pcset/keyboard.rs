//! Piano keyboard mapping
//!
//! Key colouring for the on-screen keyboard and pitch-class to MIDI note
//! conversion for playback.

use midly::num::u7;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{PcSetError, Result};
use crate::models::pitch_class::PitchClass;
use crate::utils::pitch_utils::{parse_integer, OCTAVE};

/// Highest valid MIDI note number
pub const MIDI_NOTE_MAX: i32 = 127;

/// Colour of a piano key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyColor {
    White,
    Black,
}

impl KeyColor {
    /// CSS class name used by the keyboard component
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyColor::White => "white",
            KeyColor::Black => "black",
        }
    }
}

impl fmt::Display for KeyColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// True when key `n` (any integer, counted from C) is a black key
pub fn is_black_key(n: i32) -> bool {
    PitchClass::wrapping(n).is_black_key()
}

pub fn key_color(n: i32) -> KeyColor {
    if is_black_key(n) {
        KeyColor::Black
    } else {
        KeyColor::White
    }
}

/// MIDI note number after octave placement
///
/// Not guaranteed to be in 0..=127, see `to_u7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MidiNote(i32);

impl MidiNote {
    pub fn value(&self) -> i32 {
        self.0
    }

    /// Validate as a 7-bit MIDI key
    pub fn to_u7(&self) -> Result<u7> {
        if (0..=MIDI_NOTE_MAX).contains(&self.0) {
            Ok(u7::new(self.0 as u8))
        } else {
            Err(PcSetError::MidiOutOfRange(self.0))
        }
    }
}

impl fmt::Display for MidiNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Place a pitch class in an octave
///
/// Results above 127 drop one octave and results below 0 rise one octave.
/// Only one correction step is applied, so octaves far outside the MIDI
/// range still produce out-of-range notes. Arithmetic that would overflow
/// `i32` is reported as `MidiOutOfRange`.
pub fn midi_note(pitch_class: &str, octave: i32) -> Result<MidiNote> {
    let pc = parse_integer(pitch_class)?;
    let value = OCTAVE
        .checked_mul(octave)
        .and_then(|offset| offset.checked_add(pc))
        .ok_or_else(|| {
            PcSetError::MidiOutOfRange(OCTAVE.saturating_mul(octave).saturating_add(pc))
        })?;

    let corrected = if value > MIDI_NOTE_MAX {
        value - OCTAVE
    } else if value < 0 {
        value + OCTAVE
    } else {
        value
    };

    if !(0..=MIDI_NOTE_MAX).contains(&corrected) {
        log::warn!(
            "MIDI note for pitch class {:?} in octave {} is out of range: {}",
            pitch_class,
            octave,
            corrected
        );
    }

    Ok(MidiNote(corrected))
}

/// String form of `midi_note`
pub fn to_midi_note(pitch_class: &str, octave: i32) -> Result<String> {
    midi_note(pitch_class, octave).map(|note| note.to_string())
}
