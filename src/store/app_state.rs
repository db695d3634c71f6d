// SPDX-License-Identifier: MPL-2.0
//! State shared by the landing page components.

use super::Merge;

/// The shared counter. Not persisted: every session starts at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppState {
    pub counter: i64,
}

/// Partial [`AppState`]; absent fields keep their current value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppStatePatch {
    pub counter: Option<i64>,
}

impl Merge for AppState {
    type Patch = AppStatePatch;

    fn merge(&mut self, patch: AppStatePatch) {
        if let Some(counter) = patch.counter {
            self.counter = counter;
        }
    }
}

/// Adds one to the counter.
#[must_use]
pub fn increment(state: &AppState) -> AppStatePatch {
    AppStatePatch {
        counter: Some(state.counter.saturating_add(1)),
    }
}

/// Subtracts one from the counter.
#[must_use]
pub fn decrement(state: &AppState) -> AppStatePatch {
    AppStatePatch {
        counter: Some(state.counter.saturating_sub(1)),
    }
}
