// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! takes a `ViewContext` (or a translator) and returns an element emitting its
//! own message type, which the application maps into its top-level message.
//!
//! # Page
//!
//! - [`header`] - Brand, app title, [`language_switcher`] and theme toggle
//! - [`hero`] - Headline, calls to action and the [`counter_demo`]
//! - [`not_found`] - Screen for unsupported routes
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark theme mode management

pub mod counter_demo;
pub mod design_tokens;
pub mod header;
pub mod hero;
pub mod language_switcher;
pub mod not_found;
pub mod styles;
pub mod theming;
