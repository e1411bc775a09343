// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! - [`port`]: Trait definitions (interfaces) for the breed data source
//! - [`browser`]: The sort/filter controller driving the breed list
//! - [`debounce`], [`pagination`], [`search`]: State machines the controller
//!   is built from
//!
//! # Architecture
//!
//! Nothing in this layer performs I/O. Handlers mutate state synchronously
//! and return [`Effect`](browser::Effect)s; the Iced shell in [`crate::app`]
//! turns those into tasks against a [`BreedSource`](port::BreedSource) and
//! feeds completions back with the ticket they were issued under.

pub mod browser;
pub mod debounce;
pub mod pagination;
pub mod port;
pub mod search;

pub use browser::{BreedBrowser, BrowserSettings, Effect, Mode};
pub use debounce::{DebounceTicket, Debouncer};
pub use pagination::{PageOutcome, PageSet, PageTicket};
pub use search::{SearchState, SearchTicket};
