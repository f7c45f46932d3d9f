//! Shared pitch utility functions
//!
//! Parsing helpers for the textual pitch-class encoding used by set records
//! (`T` = 10, `E` = 11) and the octave arithmetic shared by transposition and
//! keyboard mapping.

use crate::error::{PcSetError, Result};

/// Semitones per octave
pub const OCTAVE: i32 = 12;

/// Replace the first `T` with `10` and the first `E` with `11`
///
/// Only the first occurrence of each letter is substituted. Records carry at
/// most one of each per segment.
pub fn substitute_decimal_letters(text: &str) -> String {
    text.replacen('T', "10", 1).replacen('E', "11", 1)
}

/// Parse a decimal integer, ignoring surrounding whitespace
pub fn parse_integer(text: &str) -> Result<i32> {
    text.trim()
        .parse::<i32>()
        .map_err(|_| PcSetError::InvalidPitchClass(text.to_string()))
}

/// Parse pitch-class text that may use the `T`/`E` encoding
pub fn parse_encoded_integer(text: &str) -> Result<i32> {
    parse_integer(&substitute_decimal_letters(text))
        .map_err(|_| PcSetError::InvalidPitchClass(text.to_string()))
}

/// Reduce to 0..=11 regardless of the sign of `n`
pub fn pitch_class_of(n: i32) -> i32 {
    n.rem_euclid(OCTAVE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitute_decimal_letters() {
        assert_eq!(substitute_decimal_letters("T"), "10");
        assert_eq!(substitute_decimal_letters("E"), "11");
        assert_eq!(substitute_decimal_letters("[\"0\",\"T\",\"E\"]"), "[\"0\",\"10\",\"11\"]");
    }

    #[test]
    fn test_substitute_only_first_occurrence() {
        assert_eq!(substitute_decimal_letters("TT"), "10T");
        assert_eq!(substitute_decimal_letters("EE"), "11E");
    }

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer("7"), Ok(7));
        assert_eq!(parse_integer(" 11 "), Ok(11));
        assert_eq!(parse_integer("-3"), Ok(-3));
        assert!(parse_integer("x").is_err());
        assert!(parse_integer("").is_err());
    }

    #[test]
    fn test_parse_encoded_integer_keeps_original_text_in_error() {
        assert_eq!(parse_encoded_integer("T"), Ok(10));
        assert_eq!(
            parse_encoded_integer("Q"),
            Err(PcSetError::InvalidPitchClass("Q".to_string()))
        );
    }

    #[test]
    fn test_pitch_class_of_negative() {
        assert_eq!(pitch_class_of(-1), 11);
        assert_eq!(pitch_class_of(-12), 0);
        assert_eq!(pitch_class_of(-13), 11);
        assert_eq!(pitch_class_of(25), 1);
    }
}
