// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core types with ZERO external dependencies.
//!
//! This module contains pure value objects and rules that are independent
//! of the presentation framework and of the catalog format.
//!
//! # Modules
//!
//! - [`locale`]: Supported locales and validation ([`Locale`](locale::Locale),
//!   [`UnsupportedLocale`](locale::UnsupportedLocale))

pub mod locale;

pub use locale::{Locale, UnsupportedLocale};
