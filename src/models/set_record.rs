//! Set records produced by the pitch-class set analysis engine
//!
//! A record joins three views of one set class with `|`:
//!
//! ```text
//! ["0","1","4"]|3-1A|<1,0,0,0,1,0>
//!  prime form    forte  interval vector
//! ```
//!
//! Some callers pass the prime form alone, with no delimiter. The prime form
//! segment is therefore always present; the other two are optional.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{PcSetError, Result};
use crate::models::preferences::DisplayPreference;

pub const SEGMENT_DELIMITER: char = '|';

/// Suffix marking the inversionally related form of a Forte class
pub const INVERSION_MARKER: char = 'A';

/// Which view of a set record to display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SetFormat {
    #[default]
    Prime,
    Forte,
    Vec,
}

impl SetFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            SetFormat::Prime => "prime",
            SetFormat::Forte => "forte",
            SetFormat::Vec => "vec",
        }
    }
}

impl fmt::Display for SetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SetFormat {
    type Err = PcSetError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "prime" => Ok(SetFormat::Prime),
            "forte" => Ok(SetFormat::Forte),
            "vec" => Ok(SetFormat::Vec),
            other => Err(PcSetError::UnknownFormat(other.to_string())),
        }
    }
}

/// Borrowed view over the segments of one set record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetRecord<'a> {
    raw: &'a str,
    prime_form: &'a str,
    forte: Option<&'a str>,
    interval_vector: Option<&'a str>,
}

impl<'a> SetRecord<'a> {
    /// Split a record into its segments. Never fails; missing segments are
    /// reported by the accessors that need them.
    pub fn parse(raw: &'a str) -> Self {
        let mut segments = raw.split(SEGMENT_DELIMITER);
        let prime_form = segments.next().unwrap_or_default();
        let forte = segments.next();
        let interval_vector = segments.next();

        Self {
            raw,
            prime_form,
            forte,
            interval_vector,
        }
    }

    pub fn raw(&self) -> &'a str {
        self.raw
    }

    /// Prime form segment as written, e.g. `["0","1","4"]`
    pub fn prime_form(&self) -> &'a str {
        self.prime_form
    }

    /// Forte label, e.g. `3-1A`
    pub fn forte(&self) -> Result<&'a str> {
        self.forte.ok_or_else(|| self.missing("forte"))
    }

    /// Interval vector, e.g. `<1,0,0,0,1,0>`
    pub fn interval_vector(&self) -> Result<&'a str> {
        self.interval_vector.ok_or_else(|| self.missing("interval vector"))
    }

    /// Render one view of the record for display
    pub fn format(
        &self,
        format: SetFormat,
        remove_inversion: bool,
        preference: &DisplayPreference,
    ) -> Result<String> {
        match format {
            SetFormat::Prime => Ok(format!("{{{}}}", strip_quotes(strip_outer(self.prime_form)))),
            SetFormat::Forte => {
                let label = self.forte()?;
                if remove_inversion && preference.shows_original() {
                    if let Some(stripped) = label.strip_suffix(INVERSION_MARKER) {
                        return Ok(stripped.to_string());
                    }
                }
                Ok(label.to_string())
            }
            SetFormat::Vec => Ok(self.interval_vector()?.to_string()),
        }
    }

    fn missing(&self, segment: &'static str) -> PcSetError {
        PcSetError::MalformedRecord {
            segment,
            record: self.raw.to_string(),
        }
    }
}

/// Drop the first and last character (the brackets around the prime form)
fn strip_outer(segment: &str) -> &str {
    let mut chars = segment.chars();
    chars.next();
    chars.next_back();
    chars.as_str()
}

fn strip_quotes(text: &str) -> String {
    text.chars().filter(|&c| c != '"').collect()
}
