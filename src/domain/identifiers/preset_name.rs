use std::fmt;

use serde::{Deserialize, Deserializer};

use super::validation::validate_identifier;
use crate::domain::AppError;

/// A validated preset name.
///
/// Guarantees:
/// - Non-empty
/// - Contains only alphanumeric characters, `-`, `_`, or `.`
/// - No path traversal components (/, \, ., ..)
///
/// The name doubles as the preset's file stem, so these rules keep every
/// preset inside the presets directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PresetName(String);

impl PresetName {
    /// Validate and create a new preset name.
    pub fn new(name: &str) -> Result<Self, AppError> {
        if validate_identifier(name, true) {
            Ok(Self(name.to_string()))
        } else {
            Err(AppError::InvalidPresetName(name.to_string()))
        }
    }

    /// Return the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name of the preset inside the presets directory.
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.0, crate::domain::PRESET_EXTENSION)
    }
}

impl std::ops::Deref for PresetName {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for PresetName {
    fn as_ref(&self) -> &str {
        self
    }
}

impl fmt::Display for PresetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<PresetName> for String {
    fn from(val: PresetName) -> Self {
        val.0
    }
}

impl std::str::FromStr for PresetName {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PresetName::new(s)
    }
}

impl<'de> Deserialize<'de> for PresetName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PresetName::new(&s).map_err(serde::de::Error::custom)
    }
}
