// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::application::{DebounceTicket, PageTicket, SearchTicket};
use crate::domain::Breed;
use crate::error::Error;
use crate::ui::browser;
use iced::Size;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. User interactions arrive
/// through [`Message::Browser`]; the other variants report completed tasks
/// with the ticket they were issued under.
#[derive(Debug, Clone)]
pub enum Message {
    Browser(browser::Message),
    DebounceElapsed(DebounceTicket),
    PageLoaded {
        ticket: PageTicket,
        result: Result<Vec<Breed>, Error>,
    },
    SearchCompleted {
        ticket: SearchTicket,
        query: String,
        result: Result<Vec<Breed>, Error>,
    },
    ImageLoaded {
        image_id: String,
        result: Result<Vec<u8>, Error>,
    },
    Tick(Instant), // Spinner animation while loading
    WindowResized(Size),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `DOGGIE_SEE_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
