// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.

/// Base URL used for canonical and Open Graph links when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Environment variable overriding `site.base_url`.
pub const ENV_BASE_URL: &str = "ICED_LANDING_BASE_URL";

/// Upstream documentation linked by the "get started" button.
pub const GET_STARTED_URL: &str = "https://nextjs.org/docs";

/// Repository linked by the "view on GitHub" button.
pub const GITHUB_URL: &str = "https://github.com/vahagnvardanyan1/next-template";
