// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) so the sorting
//! rules can be tested without a network or a window.
//!
//! # Modules
//!
//! - [`breed`]: The breed record ([`Breed`](breed::Breed), [`BreedId`](breed::BreedId))
//! - [`range`]: Parsing of free-text numeric ranges ("10 - 13 years")
//! - [`sort`]: Tri-state sort toggles and the breed comparator

pub mod breed;
pub mod range;
pub mod sort;

pub use breed::{Breed, BreedId, Measurement};
pub use sort::{ActiveSort, SortDirection, SortField, SortMode, SortState};
