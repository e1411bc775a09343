// SPDX-License-Identifier: MPL-2.0
//! Search-mode dataset.
//!
//! Each committed query is issued under a fresh [`SearchTicket`]. Only the
//! response for the latest ticket may replace the displayed results, so a
//! slow earlier search can never overwrite a newer one.
//!
//! Successful results are kept in a small LRU cache keyed by query. When a
//! cached query is committed again its previous results are displayed at
//! once while the new request revalidates them.

use crate::domain::Breed;
use crate::error::Result;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Arc;

/// Identifies one search request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SearchTicket(u64);

#[derive(Debug)]
pub struct SearchState {
    next: u64,
    latest: Option<SearchTicket>,
    in_flight: bool,
    results: Option<Arc<[Breed]>>,
    cache: LruCache<String, Arc<[Breed]>>,
}

impl SearchState {
    #[must_use]
    pub fn new(cache_entries: usize) -> Self {
        let capacity = NonZeroUsize::new(cache_entries).unwrap_or(NonZeroUsize::MIN);
        Self {
            next: 0,
            latest: None,
            in_flight: false,
            results: None,
            cache: LruCache::new(capacity),
        }
    }

    /// Starts a search for `query`, superseding any earlier one.
    pub fn begin(&mut self, query: &str) -> SearchTicket {
        self.next += 1;
        let ticket = SearchTicket(self.next);
        self.latest = Some(ticket);
        self.in_flight = true;
        self.results = self.cache.get(query).cloned();
        ticket
    }

    /// Applies a completed search.
    ///
    /// Successful results are cached even when stale. Returns `false` when
    /// the ticket is not the latest and the displayed results were kept.
    pub fn complete(&mut self, ticket: SearchTicket, query: &str, result: Result<Vec<Breed>>) -> bool {
        let fresh = match result {
            Ok(breeds) => {
                let breeds: Arc<[Breed]> = breeds.into();
                self.cache.put(query.to_string(), Arc::clone(&breeds));
                Some(breeds)
            }
            Err(err) => {
                tracing::warn!(query, error = %err, "breed search failed");
                None
            }
        };

        if self.latest != Some(ticket) {
            return false;
        }
        self.in_flight = false;
        // A failed revalidation keeps the cached list; otherwise the search
        // degrades to an empty result.
        self.results = fresh.or_else(|| self.results.take()).or_else(|| Some(Arc::from([])));
        true
    }

    /// Leaves search mode; outstanding responses become stale.
    pub fn clear(&mut self) {
        self.latest = None;
        self.in_flight = false;
        self.results = None;
    }

    /// Results for the latest query, `None` while the first response is awaited.
    #[must_use]
    pub fn results(&self) -> Option<&[Breed]> {
        self.results.as_deref()
    }

    /// Nothing to display yet for the latest query.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.in_flight && self.results.is_none()
    }
}
