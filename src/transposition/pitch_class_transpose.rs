/// Pitch-class transposition
///
/// Plain semitone arithmetic mod 12. Input uses the set-record spelling, so
/// `T` and `E` are accepted for 10 and 11; output is always decimal.

use crate::error::Result;
use crate::models::pitch_class::PitchClass;
use crate::utils::pitch_utils::parse_encoded_integer;

/// Transpose a pitch class by `interval` semitones
///
/// Empty input gives an empty string (nothing selected yet). Negative
/// intervals and out-of-range inputs are reduced to 0..=11.
pub fn transpose(pitch_class: &str, interval: i32) -> Result<String> {
    if pitch_class.is_empty() {
        return Ok(String::new());
    }

    let value = parse_encoded_integer(pitch_class)?;
    Ok(PitchClass::wrapping(value).transpose(interval).to_string())
}
