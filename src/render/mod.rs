// SPDX-License-Identifier: MPL-2.0
//! HTML rendering of the landing page.
//!
//! - [`metadata`]: title, description, canonical and Open Graph data per locale
//! - [`html`]: complete documents (page, not-found, root redirect)

pub mod html;
pub mod metadata;

pub use html::{render_not_found, render_page, render_redirect, PageContext};
pub use metadata::PageMetadata;
