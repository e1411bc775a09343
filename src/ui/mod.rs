// SPDX-License-Identifier: MPL-2.0
//! User interface components and styling.
//!
//! Views follow the Elm-style "state down, messages up" pattern: they borrow
//! application state and return elements producing component messages.
//!
//! # Screens
//!
//! - [`browser`] - Breed list with search, sorting and infinite scroll
//!
//! # Shared Infrastructure
//!
//! - [`images`] - Breed image cache with placeholder fallback
//! - [`widgets`] - Custom Iced widgets (spinner)
//! - [`styles`] - Centralized styling (buttons, containers, tooltips)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod browser;
pub mod design_tokens;
pub mod images;
pub mod styles;
pub mod theming;
pub mod widgets;
