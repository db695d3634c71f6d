// SPDX-License-Identifier: MPL-2.0
//! Configuration persistence logic.

use super::config::{self, Config};
use crate::ui::theming::ThemeMode;
use std::path::PathBuf;

/// Stores the chosen theme mode in `config` and writes it to disk.
///
/// A failed write is logged and otherwise ignored: the in-memory mode still
/// applies for this session.
pub fn persist_theme_mode(config: &mut Config, config_dir: Option<PathBuf>, mode: ThemeMode) {
    config.general.theme_mode = Some(mode);
    match config::save_with_override(config, config_dir) {
        Ok(()) => tracing::debug!(mode = mode.as_str(), "theme mode saved"),
        Err(error) => tracing::warn!(%error, "failed to save config"),
    }
}
