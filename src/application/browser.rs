// SPDX-License-Identifier: MPL-2.0
//! Sort/filter controller for the breed list.
//!
//! [`BreedBrowser`] owns the raw and committed search text, the sort toggles,
//! the paginated listing and the search results. Every handler mutates state
//! synchronously and returns the [`Effect`]s the caller must carry out; the
//! results of those effects come back through [`BreedBrowser::on_page_loaded`],
//! [`BreedBrowser::on_search_completed`] and
//! [`BreedBrowser::on_debounce_elapsed`] together with the ticket they were
//! issued under.
//!
//! The displayed list is derived on demand: the active dataset (search
//! results when the committed query is non-empty, loaded pages otherwise) is
//! sorted as a vector of references, so the fetched order is always
//! recoverable by resetting the sort.

use super::debounce::{DebounceTicket, Debouncer};
use super::pagination::{PageOutcome, PageSet, PageTicket};
use super::search::{SearchState, SearchTicket};
use crate::config::{defaults, Config};
use crate::domain::sort::sorted_view;
use crate::domain::{Breed, SortField, SortState};
use crate::error::Result;
use std::time::Duration;

/// Tunables taken from the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrowserSettings {
    pub page_size: u32,
    pub debounce: Duration,
    pub search_cache_entries: usize,
}

impl Default for BrowserSettings {
    fn default() -> Self {
        Self {
            page_size: defaults::DEFAULT_PAGE_SIZE,
            debounce: Duration::from_millis(defaults::DEFAULT_DEBOUNCE_MS),
            search_cache_entries: defaults::DEFAULT_SEARCH_CACHE_ENTRIES,
        }
    }
}

impl From<&Config> for BrowserSettings {
    fn from(config: &Config) -> Self {
        Self {
            page_size: config.api.page_size(),
            debounce: config.search.debounce(),
            search_cache_entries: config.search.cache_entries(),
        }
    }
}

/// Work requested by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch listing page `page` with `limit` breeds per page.
    FetchPage {
        ticket: PageTicket,
        page: u32,
        limit: u32,
    },
    /// Run a search for `query`.
    Search { ticket: SearchTicket, query: String },
    /// Report `ticket` back after `delay`.
    ScheduleDebounce {
        ticket: DebounceTicket,
        delay: Duration,
    },
    /// Scroll the breed list back to its top.
    ScrollToTop,
}

/// Which dataset the displayed list is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Browse,
    Search,
}

#[derive(Debug)]
pub struct BreedBrowser {
    settings: BrowserSettings,
    raw_query: String,
    committed_query: String,
    debouncer: Debouncer,
    sort: SortState,
    pages: PageSet,
    search: SearchState,
    /// Breeds needed before the list overflows the viewport and can scroll.
    fill_target: usize,
}

impl BreedBrowser {
    #[must_use]
    pub fn new(settings: BrowserSettings) -> Self {
        Self {
            settings,
            raw_query: String::new(),
            committed_query: String::new(),
            debouncer: Debouncer::new(settings.debounce),
            sort: SortState::new(),
            pages: PageSet::new(),
            search: SearchState::new(settings.search_cache_entries),
            fill_target: 0,
        }
    }

    /// Requests the first listing page.
    pub fn start(&mut self) -> Vec<Effect> {
        self.request_first_page().into_iter().collect()
    }

    pub fn on_search_text_changed(&mut self, text: String) -> Vec<Effect> {
        self.raw_query = text;
        if self.raw_query.trim().is_empty() {
            self.debouncer.cancel();
            return self.commit(String::new());
        }
        let ticket = self.debouncer.schedule();
        vec![Effect::ScheduleDebounce {
            ticket,
            delay: self.debouncer.delay(),
        }]
    }

    pub fn on_debounce_elapsed(&mut self, ticket: DebounceTicket) -> Vec<Effect> {
        if !self.debouncer.fire(ticket) {
            return Vec::new();
        }
        let query = self.raw_query.trim().to_string();
        self.commit(query)
    }

    pub fn on_toggle_clicked(&mut self, field: SortField) {
        self.sort.toggle(field);
    }

    pub fn on_reset_clicked(&mut self) {
        self.sort.reset();
    }

    /// Empties the search text and returns to the listing.
    ///
    /// Also re-requests the first page if it never arrived, so the button
    /// on the empty-result card doubles as a retry.
    pub fn on_clear_search_clicked(&mut self) -> Vec<Effect> {
        let mut effects = self.on_search_text_changed(String::new());
        if !effects
            .iter()
            .any(|effect| matches!(effect, Effect::FetchPage { .. }))
        {
            effects.extend(self.request_first_page());
        }
        effects
    }

    /// Requests the next listing page. No-op in search mode, while a page is
    /// in flight, or after the end of the data.
    pub fn on_scroll_near_bottom(&mut self) -> Vec<Effect> {
        if self.mode() == Mode::Search {
            return Vec::new();
        }
        self.pages
            .request_next()
            .map(|ticket| self.fetch(ticket))
            .into_iter()
            .collect()
    }

    /// Sets how many breeds fill the viewport.
    ///
    /// A list shorter than the viewport cannot scroll, so no bottom signal
    /// would ever arrive; the next page is requested instead.
    pub fn set_fill_target(&mut self, breeds: usize) -> Vec<Effect> {
        self.fill_target = breeds;
        self.fill_viewport()
    }

    /// Stores a page response. Returns the next page request while the
    /// listing is still too short to scroll.
    pub fn on_page_loaded(&mut self, ticket: PageTicket, result: Result<Vec<Breed>>) -> Vec<Effect> {
        match result {
            Ok(breeds) => match self.pages.complete(ticket, breeds) {
                PageOutcome::Stored => return self.fill_viewport(),
                PageOutcome::EndOfData => {
                    tracing::debug!(page = ticket.index(), "end of breed listing reached");
                }
                PageOutcome::Stale => {
                    tracing::debug!(page = ticket.index(), "dropping stale page");
                }
            },
            Err(err) => {
                tracing::warn!(page = ticket.index(), error = %err, "breed page request failed");
                if !self.pages.fail(ticket) {
                    tracing::debug!(page = ticket.index(), "dropping stale page failure");
                }
            }
        }
        Vec::new()
    }

    pub fn on_search_completed(
        &mut self,
        ticket: SearchTicket,
        query: &str,
        result: Result<Vec<Breed>>,
    ) {
        if !self.search.complete(ticket, query, result) {
            tracing::debug!(query, "dropping stale search response");
        }
    }

    #[must_use]
    pub fn raw_query(&self) -> &str {
        &self.raw_query
    }

    #[must_use]
    pub fn committed_query(&self) -> &str {
        &self.committed_query
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        if self.committed_query.is_empty() {
            Mode::Browse
        } else {
            Mode::Search
        }
    }

    #[must_use]
    pub fn sort_state(&self) -> &SortState {
        &self.sort
    }

    /// The active dataset ordered by the active sort.
    #[must_use]
    pub fn sorted_view(&self) -> Vec<&Breed> {
        let active = self.sort.active();
        match self.mode() {
            Mode::Browse => sorted_view(self.pages.breeds(), active),
            Mode::Search => sorted_view(self.search.results().unwrap_or_default(), active),
        }
    }

    /// The active dataset has nothing to show yet and is being fetched.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        match self.mode() {
            Mode::Browse => self.pages.is_loading() && self.pages.loaded_pages() == 0,
            Mode::Search => self.search.is_loading(),
        }
    }

    /// A further listing page is being fetched below the loaded ones.
    #[must_use]
    pub fn is_loading_more(&self) -> bool {
        self.mode() == Mode::Browse && self.pages.is_loading() && self.pages.loaded_pages() > 0
    }

    #[must_use]
    pub fn is_end_of_data(&self) -> bool {
        self.mode() == Mode::Browse && self.pages.is_exhausted()
    }

    /// Nothing to show and nothing on the way, distinct from loading.
    #[must_use]
    pub fn is_empty_result(&self) -> bool {
        match self.mode() {
            Mode::Browse => !self.pages.is_loading() && self.pages.breeds().next().is_none(),
            Mode::Search => self.search.results().is_some_and(<[Breed]>::is_empty),
        }
    }

    fn commit(&mut self, query: String) -> Vec<Effect> {
        if query == self.committed_query {
            return Vec::new();
        }
        self.committed_query = query;
        self.pages.reset_to_first();

        let mut effects = vec![Effect::ScrollToTop];
        if self.committed_query.is_empty() {
            self.search.clear();
            match self.request_first_page() {
                Some(fetch) => effects.push(fetch),
                None => effects.extend(self.fill_viewport()),
            }
        } else {
            let ticket = self.search.begin(&self.committed_query);
            tracing::debug!(query = %self.committed_query, "search committed");
            effects.push(Effect::Search {
                ticket,
                query: self.committed_query.clone(),
            });
        }
        effects
    }

    fn fill_viewport(&mut self) -> Vec<Effect> {
        if self.mode() == Mode::Browse
            && self.pages.loaded_pages() > 0
            && self.pages.breeds().count() < self.fill_target
        {
            self.on_scroll_near_bottom()
        } else {
            Vec::new()
        }
    }

    fn request_first_page(&mut self) -> Option<Effect> {
        self.pages.request_first().map(|ticket| self.fetch(ticket))
    }

    fn fetch(&self, ticket: PageTicket) -> Effect {
        Effect::FetchPage {
            ticket,
            page: ticket.index(),
            limit: self.settings.page_size,
        }
    }
}
