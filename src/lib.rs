// SPDX-License-Identifier: MPL-2.0
//! `iced_landing` is a localized landing page built with the Iced GUI framework.
//!
//! It serves a single page in English, Armenian and Russian behind
//! locale-prefixed routes, demonstrates a small observable store shared by
//! two counter views, and can export the page as static HTML with full
//! per-locale metadata.

#![doc(html_root_url = "https://docs.rs/iced_landing/0.1.0")]

pub mod app;
pub mod domain;
pub mod error;
pub mod export;
pub mod i18n;
pub mod render;
pub mod routing;
pub mod store;
pub mod ui;
