#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::util::theme::{Theme, ThemeConfig};

/// UI state for the page chrome.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    /// Theme currently applied to `<html>`.
    pub theme: Theme,
    /// Storage key and system-hint policy for this page.
    pub theme_config: ThemeConfig,
}

impl UiState {
    /// State seeded from a resolved preference.
    pub fn with_theme(theme_config: ThemeConfig, theme: Theme) -> Self {
        Self { theme, theme_config }
    }
}
