// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::header;
use crate::ui::hero;
use crate::ui::not_found;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Header(header::Message),
    Hero(hero::Message),
    NotFound(not_found::Message),
    /// Go to a route path (`/hy`, `/`).
    Navigate(String),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Preferred locale for the root redirect (e.g. `hy`, `ru-RU`).
    pub lang: Option<String>,
    /// Route to open on startup. Defaults to `/`.
    pub path: Option<String>,
    /// Optional directory containing Fluent `.ftl` files for custom builds.
    pub i18n_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_LANDING_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
