/// Chromatic pitch class (0-11)
///
/// 0=C, 1=C#, 2=D, 3=D#, 4=E, 5=F, 6=F#, 7=G, 8=G#, 9=A, 10=A#, 11=B
///
/// Set records write 10 and 11 as `T` and `E` so every pitch class fits in
/// one character. Both spellings parse; `Display` always writes decimal.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PcSetError;
use crate::utils::pitch_utils::{parse_encoded_integer, pitch_class_of, OCTAVE};

/// Pitch classes that fall on black piano keys (C#, D#, F#, G#, A#)
pub const BLACK_KEY_CLASSES: [u8; 5] = [1, 3, 6, 8, 10];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct PitchClass(u8);

impl PitchClass {
    /// Create a pitch class, rejecting values outside 0..=11
    pub fn new(value: i32) -> Result<Self, PcSetError> {
        if (0..12).contains(&value) {
            Ok(PitchClass(value as u8))
        } else {
            Err(PcSetError::InvalidPitchClass(value.to_string()))
        }
    }

    /// Create a pitch class from any integer, reducing mod 12
    pub fn wrapping(value: i32) -> Self {
        PitchClass(pitch_class_of(value) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Transpose by `interval` semitones (either direction)
    pub fn transpose(self, interval: i32) -> Self {
        PitchClass::wrapping(self.0 as i32 + interval.rem_euclid(OCTAVE))
    }

    pub fn is_black_key(&self) -> bool {
        BLACK_KEY_CLASSES.contains(&self.0)
    }

    /// Single-character set-record spelling (`0`-`9`, `T`, `E`)
    pub fn to_encoded(&self) -> char {
        match self.0 {
            10 => 'T',
            11 => 'E',
            n => (b'0' + n) as char,
        }
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PitchClass {
    type Err = PcSetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = parse_encoded_integer(s)?;
        PitchClass::new(value).map_err(|_| PcSetError::InvalidPitchClass(s.to_string()))
    }
}

impl TryFrom<i32> for PitchClass {
    type Error = PcSetError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        PitchClass::new(value)
    }
}

impl From<PitchClass> for i32 {
    fn from(pc: PitchClass) -> i32 {
        pc.0 as i32
    }
}
