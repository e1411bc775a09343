// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! Infrastructure adapters implement these traits; the controller never sees
//! them. The Iced shell calls them to build `Task`s, tests call them with an
//! in-memory source.
//!
//! # Design Notes
//!
//! - Traits use domain types only (no `reqwest` or Iced types)
//! - Returned futures are `Send + 'static` so they can be handed to
//!   `Task::perform` without borrowing the source
//! - Failures are reported with the crate [`Error`](crate::error::Error)

pub mod breeds;

pub use breeds::{BreedSource, ImageSource};
