// SPDX-License-Identifier: MPL-2.0
//! Breed record as returned by the data source.
//!
//! Records are immutable once fetched: the controller only ever reorders
//! references to them, never the records themselves.

use std::fmt;

/// Opaque unique key of a breed within a displayed list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BreedId(String);

impl BreedId {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BreedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A measurement expressed as free-text ranges in both unit systems
/// (e.g. metric `"58 - 66"`, imperial `"23 - 26"`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Measurement {
    pub metric: String,
    pub imperial: String,
}

/// One dog breed's descriptive data.
#[derive(Debug, Clone, PartialEq)]
pub struct Breed {
    pub id: BreedId,
    pub name: String,
    pub bred_for: Option<String>,
    pub breed_group: Option<String>,
    pub height: Measurement,
    pub weight: Measurement,
    /// Comma-separated temperament traits. Absent for a few upstream records.
    pub temperament: Option<String>,
    /// Free-text life span, e.g. `"10 - 13 years"` or `"12 years"`.
    pub life_span: String,
    pub reference_image_id: Option<String>,
}

impl Breed {
    /// Returns the individual temperament traits, trimmed and without empties.
    pub fn temperament_traits(&self) -> impl Iterator<Item = &str> {
        self.temperament
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }

    /// Whether the card should display the group / bred-for badge.
    #[must_use]
    pub fn has_badge(&self) -> bool {
        self.breed_group.as_deref().is_some_and(|g| !g.is_empty())
            || self.bred_for.as_deref().is_some_and(|b| !b.is_empty())
    }
}
