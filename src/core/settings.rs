use indexmap::IndexMap;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// A single configuration value held by a component or data-item bag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl SettingValue {
    /// Converts a decimal into a numeric value; fails when the decimal has no
    /// `f64` representation.
    pub fn from_decimal(value: Decimal, field_name: &str) -> ChartResult<Self> {
        value.to_f64().map(Self::Number).ok_or_else(|| {
            ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
        })
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }
}

impl From<bool> for SettingValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for SettingValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for SettingValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Where a setting's current value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SettingSource {
    /// Set directly by the host application.
    Explicit,
    /// Merged in by the active theme.
    Theme,
    /// Contributed by the post-construction defaults pass.
    InternalDefault,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct SettingEntry {
    value: SettingValue,
    source: SettingSource,
}

/// One row of source data, keyed by data source field name.
pub type DataRow = IndexMap<String, SettingValue>;

/// Insertion-ordered property bag with value provenance.
///
/// Merge precedence: explicit values always win; theme values replace
/// theme- or default-sourced entries; internal defaults only fill gaps or
/// replace an earlier internal default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    entries: IndexMap<String, SettingEntry>,
}

impl Settings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores an explicit value. Explicit entries survive every later theme
    /// or defaults merge.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<SettingValue>) {
        self.entries.insert(
            name.into(),
            SettingEntry {
                value: value.into(),
                source: SettingSource::Explicit,
            },
        );
    }

    /// Merges a theme-supplied value; explicit entries are preserved.
    pub fn merge_from_theme(&mut self, name: &str, value: SettingValue) {
        match self.entries.get_mut(name) {
            Some(entry) if entry.source == SettingSource::Explicit => {}
            Some(entry) => {
                entry.value = value;
                entry.source = SettingSource::Theme;
            }
            None => {
                self.entries.insert(
                    name.to_owned(),
                    SettingEntry {
                        value,
                        source: SettingSource::Theme,
                    },
                );
            }
        }
    }

    /// Merges an internal default; only fills a gap or replaces an earlier
    /// internal default.
    pub fn merge_default(&mut self, name: &str, value: SettingValue) {
        match self.entries.get_mut(name) {
            Some(entry) if entry.source == SettingSource::InternalDefault => {
                entry.value = value;
            }
            Some(_) => {}
            None => {
                self.entries.insert(
                    name.to_owned(),
                    SettingEntry {
                        value,
                        source: SettingSource::InternalDefault,
                    },
                );
            }
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SettingValue> {
        self.entries.get(name).map(|entry| &entry.value)
    }

    #[must_use]
    pub fn source(&self, name: &str) -> Option<SettingSource> {
        self.entries.get(name).map(|entry| entry.source)
    }

    /// Provenance query, not a truthiness check: an explicitly set empty
    /// string still counts as explicit.
    #[must_use]
    pub fn has_explicit(&self, name: &str) -> bool {
        self.source(name) == Some(SettingSource::Explicit)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SettingValue)> {
        self.entries
            .iter()
            .map(|(name, entry)| (name.as_str(), &entry.value))
    }
}
