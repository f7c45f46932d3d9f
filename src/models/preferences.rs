//! Display preferences and formatting settings
//!
//! The front-end persists a display setting under the `dag` key. When its
//! value mentions `original`, Forte labels are shown without the inversion
//! suffix. The value is handed in explicitly; nothing here touches storage.

use serde::{Deserialize, Serialize};

use crate::models::set_record::SetFormat;

/// Storage key of the persisted display setting
pub const DISPLAY_PREFERENCE_KEY: &str = "dag";

/// Token that switches Forte labels to their original (uninverted) form
pub const ORIGINAL_TOKEN: &str = "original";

/// Current value of the `dag` display setting, if any
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DisplayPreference(Option<String>);

impl DisplayPreference {
    pub fn new(value: Option<String>) -> Self {
        DisplayPreference(value)
    }

    pub fn value(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// Whether the setting asks for original Forte labels
    pub fn shows_original(&self) -> bool {
        self.0
            .as_deref()
            .is_some_and(|value| value.contains(ORIGINAL_TOKEN))
    }
}

impl From<Option<String>> for DisplayPreference {
    fn from(value: Option<String>) -> Self {
        DisplayPreference(value)
    }
}

/// Settings for formatting a set record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormatSettings {
    /// Which view of the record to render
    pub format: SetFormat,

    /// Strip the inversion suffix from Forte labels (subject to the preference)
    pub remove_inversion: bool,

    /// Value of the `dag` display setting
    pub display_preference: DisplayPreference,
}

impl Default for FormatSettings {
    fn default() -> Self {
        Self {
            format: SetFormat::Prime,
            remove_inversion: true,
            display_preference: DisplayPreference::default(),
        }
    }
}
