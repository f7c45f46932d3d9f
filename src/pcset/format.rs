//! Set record formatting
//!
//! Turns analysis-engine records into display strings and pitch-class arrays.

use serde::Deserialize;

use crate::error::{PcSetError, Result};
use crate::models::pitch_class::PitchClass;
use crate::models::preferences::DisplayPreference;
use crate::models::set_record::{SetFormat, SetRecord};
use crate::utils::pitch_utils::{parse_integer, substitute_decimal_letters};

/// Render one view of a set record
///
/// # Parameters
/// - `record`: pipe-delimited set record (or a bare prime form)
/// - `format`: which segment to render
/// - `remove_inversion`: drop a trailing `A` from Forte labels when the
///   preference asks for original labels
/// - `preference`: current value of the `dag` display setting
///
/// # Returns
/// `{0,1,4}` for prime, `3-1A`/`3-1` for forte, `<1,0,0,0,1,0>` for vec
pub fn format_set_to_string(
    record: &str,
    format: SetFormat,
    remove_inversion: bool,
    preference: &DisplayPreference,
) -> Result<String> {
    let formatted = SetRecord::parse(record).format(format, remove_inversion, preference)?;
    log::debug!("formatted {:?} as {} -> {:?}", record, format, formatted);
    Ok(formatted)
}

/// Prime-form elements arrive quoted, but bare integers are accepted too
#[derive(Deserialize)]
#[serde(untagged)]
enum PrimeFormElement {
    Text(String),
    Number(i64),
}

/// Parse the prime form segment of a record into integers
///
/// `T` and `E` are substituted once each before parsing, so a segment such as
/// `["0","T","E"]` gives `[0, 10, 11]`. A second `T` or `E` is left in place
/// and rejected as an invalid pitch class, as is any value outside 0..=11.
pub fn to_formatted_prime_form_array(record: &str) -> Result<Vec<i32>> {
    let segment = substitute_decimal_letters(SetRecord::parse(record).prime_form());

    let elements: Vec<PrimeFormElement> = serde_json::from_str(&segment)
        .map_err(|e| PcSetError::InvalidPrimeForm(format!("{}: {}", segment, e)))?;

    elements
        .into_iter()
        .map(|element| {
            let value = match element {
                PrimeFormElement::Text(text) => parse_integer(&text)?,
                PrimeFormElement::Number(n) => {
                    i32::try_from(n).map_err(|_| PcSetError::InvalidPitchClass(n.to_string()))?
                }
            };
            PitchClass::new(value).map(i32::from)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECORD: &str = r#"["0","1","4"]|3-1A|<1,0,0,0,1,0>"#;

    #[test]
    fn test_format_prime_and_vec() {
        let pref = DisplayPreference::default();
        assert_eq!(format_set_to_string(RECORD, SetFormat::Prime, true, &pref).unwrap(), "{0,1,4}");
        assert_eq!(
            format_set_to_string(RECORD, SetFormat::Vec, true, &pref).unwrap(),
            "<1,0,0,0,1,0>"
        );
    }

    #[test]
    fn test_format_keeps_letter_encoding_in_prime() {
        let pref = DisplayPreference::default();
        let out = format_set_to_string(r#"["0","T","E"]|3-1|<2,1,0,0,0,0>"#, SetFormat::Prime, true, &pref)
            .unwrap();
        assert_eq!(out, "{0,T,E}");
    }

    #[test]
    fn test_format_missing_vector_is_malformed() {
        let pref = DisplayPreference::default();
        let err = format_set_to_string(r#"["0","1","4"]|3-1A"#, SetFormat::Vec, true, &pref).unwrap_err();
        assert!(matches!(err, PcSetError::MalformedRecord { segment: "interval vector", .. }));
    }

    #[test]
    fn test_prime_form_array_with_letters() {
        assert_eq!(
            to_formatted_prime_form_array(r#"["0","T","E"]|3-1|<2,1,0,0,0,0>"#).unwrap(),
            vec![0, 10, 11]
        );
    }

    #[test]
    fn test_prime_form_array_bare_segment() {
        assert_eq!(to_formatted_prime_form_array(r#"["0","1","4"]"#).unwrap(), vec![0, 1, 4]);
        assert_eq!(to_formatted_prime_form_array("[0,2,7]").unwrap(), vec![0, 2, 7]);
        assert_eq!(to_formatted_prime_form_array("[]").unwrap(), Vec::<i32>::new());
    }

    #[test]
    fn test_prime_form_array_second_letter_rejected() {
        let err = to_formatted_prime_form_array(r#"["T","T"]"#).unwrap_err();
        assert_eq!(err, PcSetError::InvalidPitchClass("T".to_string()));
    }

    #[test]
    fn test_prime_form_array_rejects_out_of_range() {
        assert_eq!(
            to_formatted_prime_form_array(r#"["-5","99"]"#),
            Err(PcSetError::InvalidPitchClass("-5".to_string()))
        );
        assert_eq!(
            to_formatted_prime_form_array("[0,12]"),
            Err(PcSetError::InvalidPitchClass("12".to_string()))
        );
    }

    #[test]
    fn test_prime_form_array_invalid_json() {
        let err = to_formatted_prime_form_array("{0,1,4}").unwrap_err();
        assert!(matches!(err, PcSetError::InvalidPrimeForm(_)));
    }
}
