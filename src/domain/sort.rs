// SPDX-License-Identifier: MPL-2.0
//! Tri-state sort toggles and the breed comparator.
//!
//! Each sortable field cycles `Unsorted → Ascending → Descending → Unsorted`.
//! Clicking one field resets the others, so at most one field is active at
//! any time. Sorting is applied to a vector of references: fetched data keeps
//! its original order.

use super::breed::Breed;
use super::range::parse_average;
use std::cmp::Ordering;

/// Fields the list can be sorted by, in toggle-bar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    Name,
    Height,
    LifeSpan,
}

impl SortField {
    /// All fields in declaration order (also the scan order for the active sort).
    pub const ALL: [SortField; 3] = [SortField::Name, SortField::Height, SortField::LifeSpan];

    fn index(self) -> usize {
        match self {
            SortField::Name => 0,
            SortField::Height => 1,
            SortField::LifeSpan => 2,
        }
    }

    /// Returns the i18n message key for the toggle label.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            SortField::Name => "sort-field-name",
            SortField::Height => "sort-field-height",
            SortField::LifeSpan => "sort-field-life-span",
        }
    }
}

/// Toggle state of a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    #[default]
    Unsorted,
    Ascending,
    Descending,
}

impl SortMode {
    /// Next state in the toggle cycle.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            SortMode::Unsorted => SortMode::Ascending,
            SortMode::Ascending => SortMode::Descending,
            SortMode::Descending => SortMode::Unsorted,
        }
    }

    #[must_use]
    pub fn direction(self) -> Option<SortDirection> {
        match self {
            SortMode::Unsorted => None,
            SortMode::Ascending => Some(SortDirection::Ascending),
            SortMode::Descending => Some(SortDirection::Descending),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// The single field currently sorting the list, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveSort {
    pub field: SortField,
    pub direction: SortDirection,
}

/// Per-field toggle modes. At most one entry is ever non-`Unsorted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    modes: [SortMode; 3],
}

impl SortState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn mode(&self, field: SortField) -> SortMode {
        self.modes[field.index()]
    }

    /// Resets every other field, then advances `field` one step in its cycle.
    pub fn toggle(&mut self, field: SortField) {
        let next = self.mode(field).next();
        self.modes = [SortMode::Unsorted; 3];
        self.modes[field.index()] = next;
    }

    /// Sets every field back to `Unsorted`.
    pub fn reset(&mut self) {
        self.modes = [SortMode::Unsorted; 3];
    }

    #[must_use]
    pub fn is_unsorted(&self) -> bool {
        self.modes.iter().all(|mode| *mode == SortMode::Unsorted)
    }

    /// First field (in [`SortField::ALL`] order) with a non-`Unsorted` mode.
    #[must_use]
    pub fn active(&self) -> Option<ActiveSort> {
        SortField::ALL.into_iter().find_map(|field| {
            self.mode(field)
                .direction()
                .map(|direction| ActiveSort { field, direction })
        })
    }
}

/// Compares two parsed averages; unparseable values sort after numbers.
fn compare_averages(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Ascending comparison of two breeds on `field`.
#[must_use]
pub fn compare_by_field(field: SortField, a: &Breed, b: &Breed) -> Ordering {
    match field {
        SortField::Name => a.name.cmp(&b.name),
        SortField::Height => compare_averages(
            parse_average(&a.height.metric),
            parse_average(&b.height.metric),
        ),
        SortField::LifeSpan => {
            compare_averages(parse_average(&a.life_span), parse_average(&b.life_span))
        }
    }
}

/// Full comparator honoring the sort direction; `None` compares everything equal.
#[must_use]
pub fn compare(active: Option<ActiveSort>, a: &Breed, b: &Breed) -> Ordering {
    match active {
        None => Ordering::Equal,
        Some(ActiveSort {
            field,
            direction: SortDirection::Ascending,
        }) => compare_by_field(field, a, b),
        Some(ActiveSort {
            field,
            direction: SortDirection::Descending,
        }) => compare_by_field(field, b, a),
    }
}

/// Returns a sorted view of `breeds` without touching the source order.
///
/// The sort is stable: ties (and the whole list when nothing is active)
/// keep their fetch order.
pub fn sorted_view<'a, I>(breeds: I, active: Option<ActiveSort>) -> Vec<&'a Breed>
where
    I: IntoIterator<Item = &'a Breed>,
{
    let mut view: Vec<&Breed> = breeds.into_iter().collect();
    if active.is_some() {
        view.sort_by(|a, b| compare(active, a, b));
    }
    view
}
