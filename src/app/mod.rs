// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires the breed browser controller to the TheDogAPI
//! client, localization and the image cache, and translates controller
//! effects into Iced tasks.

mod message;
pub mod paths;
mod subscription;
mod update;

pub use message::{Flags, Message};

use crate::application::{BreedBrowser, BrowserSettings};
use crate::config::{self, ApiConfig, Config};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::infrastructure::DogApiClient;
use crate::ui::browser::{self, ViewContext};
use crate::ui::images::ImageCache;
use crate::ui::theming::ThemeMode;
use crate::ui::widgets::SpinnerState;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme_mode: ThemeMode,
    browser: BreedBrowser,
    /// `None` only if no HTTP client could be built at all.
    source: Option<DogApiClient>,
    images: ImageCache,
    spinner: SpinnerState,
    /// Fluent keys of warnings waiting to be dismissed, oldest first.
    notices: Vec<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("mode", &self.browser.mode())
            .field("query", &self.browser.committed_query())
            .field("notices", &self.notices)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 900;
pub const WINDOW_DEFAULT_WIDTH: u32 = 720;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 420;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; flags are consumed on the first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Builds the HTTP client, dropping an unusable API key.
///
/// Returns the client (if any) and the Fluent key of a warning to show.
fn build_source(api: &ApiConfig) -> (Option<DogApiClient>, Option<String>) {
    match DogApiClient::new(api) {
        Ok(client) => (Some(client), None),
        Err(Error::Config(reason)) => {
            tracing::warn!(%reason, "ignoring configured API key");
            let without_key = ApiConfig {
                api_key: None,
                ..api.clone()
            };
            let client = DogApiClient::new(&without_key)
                .inspect_err(|err| tracing::error!(error = %err, "cannot build HTTP client"))
                .ok();
            (client, Some("notification-api-key-error".to_string()))
        }
        Err(err) => {
            tracing::error!(error = %err, "cannot build HTTP client");
            (None, None)
        }
    }
}

impl App {
    /// Initializes application state and requests the first listing page.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir);
        let (config, config_warning) = config::load();
        Self::with_config(flags.lang, &config, config_warning)
    }

    fn with_config(
        lang: Option<String>,
        config: &Config,
        config_warning: Option<String>,
    ) -> (Self, Task<Message>) {
        let i18n = I18n::new(lang, config);
        let (source, source_warning) = build_source(&config.api);

        let mut app = App {
            i18n,
            theme_mode: config.general.theme_mode,
            browser: BreedBrowser::new(BrowserSettings::from(config)),
            source,
            images: ImageCache::new(config::DEFAULT_IMAGE_CACHE_ENTRIES),
            spinner: SpinnerState::default(),
            notices: config_warning.into_iter().chain(source_warning).collect(),
        };

        tracing::info!(
            locale = %app.i18n.current_locale(),
            base_url = %config.api.base_url,
            "starting breed browser"
        );

        let mut effects = app.browser.start();
        effects.extend(
            app.browser
                .set_fill_target(browser::fill_target(WINDOW_DEFAULT_HEIGHT as f32)),
        );
        let task = update::run_effects(&mut app.context(), effects);
        (app, task)
    }

    fn context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            browser: &mut self.browser,
            source: self.source.as_ref(),
            images: &mut self.images,
            spinner: &mut self.spinner,
            notices: &mut self.notices,
        }
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.resolve()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_tick_subscription(
                self.browser.is_loading()
                    || self.browser.is_loading_more()
                    || self.images.is_loading(),
            ),
            subscription::create_resize_subscription(),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = self.context();

        match message {
            Message::Browser(browser_message) => {
                update::handle_browser_message(&mut ctx, browser_message)
            }
            Message::DebounceElapsed(ticket) => {
                let effects = ctx.browser.on_debounce_elapsed(ticket);
                update::run_effects(&mut ctx, effects)
            }
            Message::PageLoaded { ticket, result } => {
                let effects = ctx.browser.on_page_loaded(ticket, result);
                let images = update::request_images(&mut ctx);
                Task::batch([update::run_effects(&mut ctx, effects), images])
            }
            Message::SearchCompleted {
                ticket,
                query,
                result,
            } => {
                ctx.browser.on_search_completed(ticket, &query, result);
                update::request_images(&mut ctx)
            }
            Message::ImageLoaded { image_id, result } => {
                ctx.images.complete(image_id, result);
                Task::none()
            }
            Message::Tick(_) => {
                ctx.spinner.tick();
                Task::none()
            }
            Message::WindowResized(size) => {
                let effects = ctx.browser.set_fill_target(browser::fill_target(size.height));
                update::run_effects(&mut ctx, effects)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        browser::view(ViewContext {
            i18n: &self.i18n,
            browser: &self.browser,
            images: &self.images,
            spinner: self.spinner,
            notice: self.notices.first().map(String::as_str),
        })
        .map(Message::Browser)
    }
}
