// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the landing page.
//!
//! This module provides localization using the Fluent localization system.
//! Catalogs are embedded at build time from `assets/i18n/<locale>.ftl`.
//!
//! # Guarantees
//!
//! - One catalog per supported [`Locale`](crate::domain::Locale), loaded whole
//! - Every [`MessageKey`] resolves in every catalog, or loading fails
//! - No fallback between locales: a missing key is a configuration defect

pub mod fluent;
pub mod keys;

pub use fluent::{Catalog, I18n, Translator};
pub use keys::MessageKey;
