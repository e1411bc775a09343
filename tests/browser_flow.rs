// SPDX-License-Identifier: MPL-2.0
//! Drives the breed browser controller against an in-memory breed source.

use doggie_see::application::port::BreedSource;
use doggie_see::application::{BreedBrowser, BrowserSettings, Effect, Mode};
use doggie_see::domain::{Breed, BreedId, Measurement, SortField};
use doggie_see::error::{Error, Result};
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

fn breed(id: u32, name: &str, height: &str, life_span: &str) -> Breed {
    Breed {
        id: BreedId::new(id.to_string()),
        name: name.to_string(),
        bred_for: None,
        breed_group: None,
        height: Measurement {
            metric: height.to_string(),
            imperial: String::new(),
        },
        weight: Measurement::default(),
        temperament: None,
        life_span: life_span.to_string(),
        reference_image_id: None,
    }
}

fn catalog() -> Vec<Breed> {
    vec![
        breed(1, "Beagle", "33 - 41", "13 - 16 years"),
        breed(2, "Akita", "61 - 71", "10 - 14 years"),
        breed(3, "Dachshund", "20 - 23", "12 - 16 years"),
        breed(4, "Collie", "51 - 61", "12 - 14 years"),
        breed(5, "Basenji", "41 - 43", "10 - 12 years"),
    ]
}

/// Serves a fixed catalog; can be switched offline.
#[derive(Clone)]
struct MemorySource {
    breeds: Arc<Vec<Breed>>,
    offline: Arc<AtomicBool>,
}

impl MemorySource {
    fn new(breeds: Vec<Breed>) -> Self {
        Self {
            breeds: Arc::new(breeds),
            offline: Arc::new(AtomicBool::new(false)),
        }
    }

    fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }
}

impl BreedSource for MemorySource {
    fn list_page(
        &self,
        page: u32,
        limit: u32,
    ) -> impl Future<Output = Result<Vec<Breed>>> + Send + 'static {
        let breeds = Arc::clone(&self.breeds);
        let offline = self.offline.load(Ordering::SeqCst);
        async move {
            if offline {
                return Err(Error::Network("offline".into()));
            }
            Ok(breeds
                .iter()
                .skip((page * limit) as usize)
                .take(limit as usize)
                .cloned()
                .collect())
        }
    }

    fn search(&self, query: String) -> impl Future<Output = Result<Vec<Breed>>> + Send + 'static {
        let breeds = Arc::clone(&self.breeds);
        let offline = self.offline.load(Ordering::SeqCst);
        async move {
            if offline {
                return Err(Error::Http { status: 503 });
            }
            let needle = query.to_lowercase();
            Ok(breeds
                .iter()
                .filter(|breed| breed.name.to_lowercase().contains(&needle))
                .cloned()
                .collect())
        }
    }
}

/// Runs effects to completion, treating every debounce as already elapsed.
async fn drive(browser: &mut BreedBrowser, source: &MemorySource, effects: Vec<Effect>) {
    let mut pending = effects;
    while let Some(effect) = pending.pop() {
        match effect {
            Effect::FetchPage {
                ticket,
                page,
                limit,
            } => {
                let result = source.list_page(page, limit).await;
                pending.extend(browser.on_page_loaded(ticket, result));
            }
            Effect::Search { ticket, query } => {
                let result = source.search(query.clone()).await;
                browser.on_search_completed(ticket, &query, result);
            }
            Effect::ScheduleDebounce { ticket, .. } => {
                pending.extend(browser.on_debounce_elapsed(ticket));
            }
            Effect::ScrollToTop => {}
        }
    }
}

fn names(browser: &BreedBrowser) -> Vec<&str> {
    browser
        .sorted_view()
        .into_iter()
        .map(|breed| breed.name.as_str())
        .collect()
}

fn settings() -> BrowserSettings {
    BrowserSettings {
        page_size: 2,
        debounce: Duration::from_millis(10),
        search_cache_entries: 8,
    }
}

#[tokio::test]
async fn infinite_scroll_loads_until_end_of_data() {
    let source = MemorySource::new(catalog());
    let mut browser = BreedBrowser::new(settings());

    let effects = browser.start();
    drive(&mut browser, &source, effects).await;
    assert_eq!(names(&browser), ["Beagle", "Akita"]);

    for _ in 0..5 {
        let effects = browser.on_scroll_near_bottom();
        drive(&mut browser, &source, effects).await;
    }

    assert_eq!(browser.sorted_view().len(), 5);
    assert!(browser.is_end_of_data());
    assert!(!browser.is_loading_more());
    assert!(browser.on_scroll_near_bottom().is_empty());
}

#[tokio::test]
async fn single_breed_pages_fill_the_window_without_scrolling() {
    let source = MemorySource::new(catalog());
    let mut browser = BreedBrowser::new(BrowserSettings {
        page_size: 1,
        ..settings()
    });

    let mut effects = browser.start();
    effects.extend(browser.set_fill_target(3));
    drive(&mut browser, &source, effects).await;

    assert_eq!(names(&browser), ["Beagle", "Akita", "Dachshund"]);
    assert!(!browser.is_end_of_data());

    let effects = browser.on_scroll_near_bottom();
    drive(&mut browser, &source, effects).await;
    assert_eq!(browser.sorted_view().len(), 4);
}

#[tokio::test]
async fn sorting_reorders_view_and_reset_restores_fetch_order() {
    let source = MemorySource::new(catalog());
    let mut browser = BreedBrowser::new(settings());
    let effects = browser.start();
    drive(&mut browser, &source, effects).await;
    let effects = browser.on_scroll_near_bottom();
    drive(&mut browser, &source, effects).await;
    assert_eq!(names(&browser), ["Beagle", "Akita", "Dachshund", "Collie"]);

    browser.on_toggle_clicked(SortField::Name);
    assert_eq!(names(&browser), ["Akita", "Beagle", "Collie", "Dachshund"]);

    browser.on_toggle_clicked(SortField::Height);
    assert_eq!(names(&browser), ["Dachshund", "Beagle", "Collie", "Akita"]);

    browser.on_reset_clicked();
    assert_eq!(names(&browser), ["Beagle", "Akita", "Dachshund", "Collie"]);
}

#[tokio::test]
async fn search_replaces_listing_and_clear_returns_to_it() {
    let source = MemorySource::new(catalog());
    let mut browser = BreedBrowser::new(settings());
    let effects = browser.start();
    drive(&mut browser, &source, effects).await;

    let effects = browser.on_search_text_changed("  ba ".into());
    drive(&mut browser, &source, effects).await;
    assert_eq!(browser.mode(), Mode::Search);
    assert_eq!(browser.committed_query(), "ba");
    assert_eq!(names(&browser), ["Basenji"]);
    assert!(browser.on_scroll_near_bottom().is_empty());

    let effects = browser.on_clear_search_clicked();
    drive(&mut browser, &source, effects).await;
    assert_eq!(browser.mode(), Mode::Browse);
    assert_eq!(names(&browser), ["Beagle", "Akita"]);
}

#[tokio::test]
async fn search_without_matches_is_an_empty_result() {
    let source = MemorySource::new(catalog());
    let mut browser = BreedBrowser::new(settings());
    let effects = browser.start();
    drive(&mut browser, &source, effects).await;

    let effects = browser.on_search_text_changed("poodle".into());
    drive(&mut browser, &source, effects).await;

    assert!(browser.sorted_view().is_empty());
    assert!(browser.is_empty_result());
    assert!(!browser.is_loading());
}

#[tokio::test]
async fn failed_search_keeps_previously_cached_results() {
    let source = MemorySource::new(catalog());
    let mut browser = BreedBrowser::new(settings());
    let effects = browser.start();
    drive(&mut browser, &source, effects).await;

    let effects = browser.on_search_text_changed("ak".into());
    drive(&mut browser, &source, effects).await;
    assert_eq!(names(&browser), ["Akita"]);

    let effects = browser.on_search_text_changed("".into());
    drive(&mut browser, &source, effects).await;

    source.set_offline(true);
    let effects = browser.on_search_text_changed("ak".into());
    drive(&mut browser, &source, effects).await;
    assert_eq!(names(&browser), ["Akita"]);
}

#[tokio::test]
async fn clear_search_retries_failed_first_page() {
    let source = MemorySource::new(catalog());
    source.set_offline(true);
    let mut browser = BreedBrowser::new(settings());

    let effects = browser.start();
    drive(&mut browser, &source, effects).await;
    assert!(browser.is_empty_result());

    source.set_offline(false);
    let effects = browser.on_clear_search_clicked();
    drive(&mut browser, &source, effects).await;
    assert_eq!(names(&browser), ["Beagle", "Akita"]);
}
