// SPDX-License-Identifier: MPL-2.0
//! Update handlers: turn controller effects into Iced tasks.

use super::Message;
use crate::application::port::{BreedSource, ImageSource};
use crate::application::{BreedBrowser, Effect};
use crate::error::Error;
use crate::infrastructure::DogApiClient;
use crate::ui::browser;
use crate::ui::images::ImageCache;
use crate::ui::widgets::SpinnerState;
use iced::Task;

/// Mutable view of the application state used by the handlers.
pub struct UpdateContext<'a> {
    pub browser: &'a mut BreedBrowser,
    pub source: Option<&'a DogApiClient>,
    pub images: &'a mut ImageCache,
    pub spinner: &'a mut SpinnerState,
    pub notices: &'a mut Vec<String>,
}

pub fn handle_browser_message(ctx: &mut UpdateContext<'_>, message: browser::Message) -> Task<Message> {
    match message {
        browser::Message::SearchChanged(text) => {
            let effects = ctx.browser.on_search_text_changed(text);
            run_effects(ctx, effects)
        }
        browser::Message::ClearSearch => {
            let effects = ctx.browser.on_clear_search_clicked();
            run_effects(ctx, effects)
        }
        browser::Message::ToggleSort(field) => {
            ctx.browser.on_toggle_clicked(field);
            Task::none()
        }
        browser::Message::ResetSort => {
            ctx.browser.on_reset_clicked();
            Task::none()
        }
        browser::Message::Scrolled { distance_to_bottom } => {
            if browser::is_near_bottom(distance_to_bottom) {
                let effects = ctx.browser.on_scroll_near_bottom();
                run_effects(ctx, effects)
            } else {
                Task::none()
            }
        }
        browser::Message::DismissNotice => {
            if !ctx.notices.is_empty() {
                ctx.notices.remove(0);
            }
            Task::none()
        }
    }
}

/// Runs controller effects. A commit that changed the displayed dataset
/// also requests the images it needs.
pub fn run_effects(ctx: &mut UpdateContext<'_>, effects: Vec<Effect>) -> Task<Message> {
    if effects.is_empty() {
        return Task::none();
    }
    let dataset_changed = effects.contains(&Effect::ScrollToTop);
    let mut tasks: Vec<Task<Message>> = effects
        .into_iter()
        .map(|effect| run_effect(ctx.source, effect))
        .collect();
    if dataset_changed {
        tasks.push(request_images(ctx));
    }
    Task::batch(tasks)
}

fn run_effect(source: Option<&DogApiClient>, effect: Effect) -> Task<Message> {
    match effect {
        Effect::FetchPage {
            ticket,
            page,
            limit,
        } => match source {
            Some(source) => Task::perform(source.list_page(page, limit), move |result| {
                Message::PageLoaded { ticket, result }
            }),
            None => Task::done(Message::PageLoaded {
                ticket,
                result: Err(unavailable()),
            }),
        },
        Effect::Search { ticket, query } => match source {
            Some(source) => Task::perform(source.search(query.clone()), move |result| {
                Message::SearchCompleted {
                    ticket,
                    query,
                    result,
                }
            }),
            None => Task::done(Message::SearchCompleted {
                ticket,
                query,
                result: Err(unavailable()),
            }),
        },
        // tokio timers must be created inside the runtime.
        Effect::ScheduleDebounce { ticket, delay } => Task::perform(
            async move { tokio::time::sleep(delay).await },
            move |()| Message::DebounceElapsed(ticket),
        ),
        Effect::ScrollToTop => browser::scroll_to_top(),
    }
}

/// Starts downloads for displayed breeds whose image is not cached.
pub fn request_images(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let displayed = ctx.browser.sorted_view();
    let missing = ctx.images.request(
        displayed
            .into_iter()
            .filter_map(|breed| breed.reference_image_id.as_deref()),
    );

    Task::batch(missing.into_iter().map(|image_id| match ctx.source {
        Some(source) => Task::perform(source.fetch_image(image_id.clone()), move |result| {
            Message::ImageLoaded { image_id, result }
        }),
        None => Task::done(Message::ImageLoaded {
            image_id,
            result: Err(unavailable()),
        }),
    }))
}

fn unavailable() -> Error {
    Error::Network("HTTP client unavailable".to_string())
}
