// SPDX-License-Identifier: MPL-2.0
//! `doggie_see` is a small dog breed browser built with the Iced GUI framework.
//!
//! It lists breeds from TheDogAPI with infinite scrolling, debounced search
//! and client-side sorting, with Fluent localization and a TOML settings file.

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;

#[cfg(test)]
mod test_utils;
