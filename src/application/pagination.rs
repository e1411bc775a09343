// SPDX-License-Identifier: MPL-2.0
//! Paginated breed listing.
//!
//! Pages are stored by their zero-based index, so a completion always lands
//! in its own slot whatever order responses arrive in. The browse dataset is
//! the concatenation of the contiguous run of loaded pages starting at 0.
//!
//! A page that comes back empty marks the end of the data; later requests
//! for more pages are no-ops. [`PageSet::reset_to_first`] drops everything
//! past the first page and bumps the generation, so responses to requests
//! issued before the reset are recognized as stale and discarded.

use crate::domain::Breed;
use std::collections::{BTreeMap, BTreeSet};

/// Identifies one page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageTicket {
    generation: u64,
    index: u32,
}

impl PageTicket {
    /// Zero-based page index this ticket was issued for.
    #[must_use]
    pub fn index(self) -> u32 {
        self.index
    }
}

/// What a page completion did to the set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageOutcome {
    /// Breeds were stored under the ticket's index.
    Stored,
    /// The page was empty: no further pages will be requested.
    EndOfData,
    /// The ticket predates a reset, or the slot is no longer awaited.
    Stale,
}

#[derive(Debug, Clone, Default)]
pub struct PageSet {
    pages: BTreeMap<u32, Vec<Breed>>,
    in_flight: BTreeSet<u32>,
    /// Index of the first page that came back empty.
    end: Option<u32>,
    generation: u64,
}

impl PageSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of contiguous pages loaded from index 0.
    #[must_use]
    pub fn loaded_pages(&self) -> u32 {
        let mut count = 0;
        while self.pages.contains_key(&count) {
            count += 1;
        }
        count
    }

    /// Breeds of the contiguous loaded pages, in page order.
    pub fn breeds(&self) -> impl Iterator<Item = &Breed> {
        let contiguous = self.loaded_pages();
        self.pages
            .range(..contiguous)
            .flat_map(|(_, breeds)| breeds.iter())
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        !self.in_flight.is_empty()
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.end.is_some_and(|end| self.loaded_pages() >= end)
    }

    fn issue(&mut self, index: u32) -> PageTicket {
        self.in_flight.insert(index);
        PageTicket {
            generation: self.generation,
            index,
        }
    }

    /// Requests page 0 unless it is loaded, awaited, or known to be empty.
    pub fn request_first(&mut self) -> Option<PageTicket> {
        if self.pages.contains_key(&0) || self.in_flight.contains(&0) || self.end == Some(0) {
            return None;
        }
        Some(self.issue(0))
    }

    /// Requests the page after the loaded run.
    ///
    /// Returns `None` while any page is in flight or once the end of the data
    /// has been reached, so repeated bottom-of-list signals are idempotent.
    pub fn request_next(&mut self) -> Option<PageTicket> {
        if self.is_loading() || self.is_exhausted() {
            return None;
        }
        let next = self.loaded_pages();
        Some(self.issue(next))
    }

    /// Records a successful response.
    pub fn complete(&mut self, ticket: PageTicket, breeds: Vec<Breed>) -> PageOutcome {
        if ticket.generation != self.generation || !self.in_flight.remove(&ticket.index) {
            return PageOutcome::Stale;
        }
        if breeds.is_empty() {
            self.end = Some(self.end.map_or(ticket.index, |end| end.min(ticket.index)));
            PageOutcome::EndOfData
        } else {
            self.pages.insert(ticket.index, breeds);
            PageOutcome::Stored
        }
    }

    /// Records a failed response. The page can be requested again.
    ///
    /// Returns `false` when the ticket was stale.
    pub fn fail(&mut self, ticket: PageTicket) -> bool {
        ticket.generation == self.generation && self.in_flight.remove(&ticket.index)
    }

    /// Keeps only the first page and invalidates every outstanding request.
    pub fn reset_to_first(&mut self) {
        self.generation += 1;
        self.in_flight.clear();
        self.pages.retain(|index, _| *index == 0);
        self.end = self.end.filter(|end| *end == 0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::breed::fixtures::breed;

    fn page(prefix: &str, len: usize) -> Vec<Breed> {
        (0..len)
            .map(|i| breed(&format!("{prefix}{i}"), &format!("{prefix}{i}"), "10", "10 years"))
            .collect()
    }

    fn names(set: &PageSet) -> Vec<String> {
        set.breeds().map(|b| b.name.clone()).collect()
    }

    #[test]
    fn first_request_is_page_zero_and_not_duplicated() {
        let mut set = PageSet::new();
        let ticket = set.request_first().expect("first page should be requested");
        assert_eq!(ticket.index(), 0);
        assert!(set.request_first().is_none());
        assert!(set.request_next().is_none(), "page 0 still in flight");
    }

    #[test]
    fn pages_concatenate_in_index_order() {
        let mut set = PageSet::new();
        let t0 = set.request_first().unwrap();
        assert_eq!(set.complete(t0, page("a", 2)), PageOutcome::Stored);
        let t1 = set.request_next().unwrap();
        assert_eq!(t1.index(), 1);
        assert_eq!(set.complete(t1, page("b", 1)), PageOutcome::Stored);

        assert_eq!(names(&set), vec!["a0", "a1", "b0"]);
        assert_eq!(set.loaded_pages(), 2);
    }

    #[test]
    fn out_of_order_completions_fill_their_own_slot() {
        let mut set = PageSet::new();
        let t0 = set.issue(0);
        let t1 = set.issue(1);

        assert_eq!(set.complete(t1, page("b", 1)), PageOutcome::Stored);
        assert!(names(&set).is_empty(), "gap at page 0 hides page 1");

        assert_eq!(set.complete(t0, page("a", 1)), PageOutcome::Stored);
        assert_eq!(names(&set), vec!["a0", "b0"]);
    }

    #[test]
    fn empty_page_ends_pagination_idempotently() {
        let mut set = PageSet::new();
        let t0 = set.request_first().unwrap();
        set.complete(t0, page("a", 3));
        let t1 = set.request_next().unwrap();
        assert_eq!(set.complete(t1, Vec::new()), PageOutcome::EndOfData);

        assert!(set.is_exhausted());
        for _ in 0..5 {
            assert!(set.request_next().is_none());
        }
        assert!(!set.is_loading());
    }

    #[test]
    fn failed_page_can_be_retried() {
        let mut set = PageSet::new();
        let t0 = set.request_first().unwrap();
        assert!(set.fail(t0));
        assert!(!set.is_exhausted());

        let retry = set.request_next().expect("failed page should be retried");
        assert_eq!(retry.index(), 0);
    }

    #[test]
    fn reset_keeps_first_page_and_drops_stale_responses() {
        let mut set = PageSet::new();
        let t0 = set.request_first().unwrap();
        set.complete(t0, page("a", 1));
        let t1 = set.request_next().unwrap();
        set.complete(t1, page("b", 1));
        let t2 = set.request_next().unwrap();

        set.reset_to_first();

        assert_eq!(names(&set), vec!["a0"]);
        assert!(!set.is_loading());
        assert_eq!(set.complete(t2, page("c", 1)), PageOutcome::Stale);
        assert!(!set.fail(t2));
        assert_eq!(names(&set), vec!["a0"]);

        let next = set.request_next().unwrap();
        assert_eq!(next.index(), 1);
    }

    #[test]
    fn reset_clears_end_marker_beyond_first_page() {
        let mut set = PageSet::new();
        let t0 = set.request_first().unwrap();
        set.complete(t0, page("a", 1));
        let t1 = set.request_next().unwrap();
        set.complete(t1, Vec::new());
        assert!(set.is_exhausted());

        set.reset_to_first();
        assert!(!set.is_exhausted());
    }

    #[test]
    fn reset_before_first_page_arrives_allows_new_request() {
        let mut set = PageSet::new();
        let stale = set.request_first().unwrap();
        set.reset_to_first();

        assert_eq!(set.complete(stale, page("a", 1)), PageOutcome::Stale);
        let fresh = set.request_first().expect("page 0 should be requested again");
        assert_eq!(set.complete(fresh, page("a", 1)), PageOutcome::Stored);
        assert_eq!(names(&set), vec!["a0"]);
    }

    #[test]
    fn empty_first_page_means_no_data() {
        let mut set = PageSet::new();
        let t0 = set.request_first().unwrap();
        assert_eq!(set.complete(t0, Vec::new()), PageOutcome::EndOfData);
        assert!(set.is_exhausted());
        assert!(set.request_first().is_none());
        assert!(set.request_next().is_none());
    }
}
