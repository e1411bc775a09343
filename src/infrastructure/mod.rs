// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`dog_api`]: TheDogAPI over HTTP (implements [`BreedSource`] and [`ImageSource`])
//!
//! [`BreedSource`]: crate::application::port::BreedSource
//! [`ImageSource`]: crate::application::port::ImageSource

pub mod dog_api;

pub use dog_api::DogApiClient;
