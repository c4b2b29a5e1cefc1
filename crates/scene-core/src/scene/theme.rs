//! Environment theme presets.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// One value from the fixed catalogue of visual environment presets.
///
/// Parsing is case-insensitive so that `"Sunset"` and `"sunset"` resolve to
/// the same preset. The wire form is lowercase.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(try_from = "String", into = "String")]
pub enum ThemePreset {
    Apartment,
    City,
    Dawn,
    Forest,
    Lobby,
    Night,
    Park,
    Studio,
    Sunset,
    Warehouse,
}

impl TryFrom<String> for ThemePreset {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        ThemePreset::from_str(value.trim()).map_err(|_| format!("unknown theme preset '{value}'"))
    }
}

impl From<ThemePreset> for String {
    fn from(preset: ThemePreset) -> Self {
        preset.as_ref().to_string()
    }
}
