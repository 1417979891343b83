//! Theme initialization and toggle.
//!
//! Reads the stored preference from `localStorage`, falls back to the
//! system `prefers-color-scheme` hint, and applies a `data-theme` attribute
//! to the `<html>` element. Toggle writes back to `localStorage` and updates
//! that attribute. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; storage
//! errors leave the in-memory theme in place, and native builds no-op.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// The two supported page themes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Token written to storage and to the `data-theme` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored token. Anything other than `light`/`dark` is rejected.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Glyph shown on the toggle button: the theme a click switches to.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Self::Dark => "🌞",
            Self::Light => "🌙",
        }
    }

    /// Accessible label for the toggle button.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Dark => "تبديل إلى الوضع الفاتح",
            Self::Light => "تبديل إلى الوضع الداكن",
        }
    }
}

/// Per-page theme settings: where the preference lives and how the system
/// hint maps onto a theme when nothing is stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeConfig {
    /// `localStorage` key holding the preference token.
    pub storage_key: &'static str,
    /// Media query consulted when no valid preference is stored.
    pub system_query: &'static str,
    /// Theme used when the media query matches.
    pub on_match: Theme,
    /// Theme used when the media query does not match or is unavailable.
    pub on_miss: Theme,
}

impl ThemeConfig {
    /// Main CV page: light unless the system asks for dark.
    pub const SITE: Self = Self {
        storage_key: "preferred-theme",
        system_query: "(prefers-color-scheme: dark)",
        on_match: Theme::Dark,
        on_miss: Theme::Light,
    };

    /// Standalone asset pages: dark unless the system asks for light.
    ///
    /// Not mounted by this build; `App` uses [`ThemeConfig::SITE`]. Kept so a
    /// page built on the asset stylesheet resolves its theme the same way.
    pub const ASSETS: Self = Self {
        storage_key: "theme-preference",
        system_query: "(prefers-color-scheme: light)",
        on_match: Theme::Light,
        on_miss: Theme::Dark,
    };

    /// Pick the initial theme from a stored token and the system hint.
    pub fn resolve(&self, stored: Option<&str>, hint_matches: bool) -> Theme {
        if let Some(theme) = stored.and_then(Theme::parse) {
            return theme;
        }
        if hint_matches { self.on_match } else { self.on_miss }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self::SITE
    }
}

/// Read the theme preference for `config`.
///
/// A valid stored token wins; otherwise the system media query decides.
pub fn read_preference(config: &ThemeConfig) -> Theme {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return config.resolve(None, false);
        };

        let stored = window
            .local_storage()
            .ok()
            .flatten()
            .and_then(|storage| storage.get_item(config.storage_key).ok().flatten());

        let hint_matches = window
            .match_media(config.system_query)
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches());

        config.resolve(stored.as_deref(), hint_matches)
    }
    #[cfg(not(feature = "csr"))]
    {
        config.resolve(None, false)
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute("data-theme", theme.as_str());
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}

/// Flip the theme, apply it, and persist the new preference.
pub fn toggle(config: &ThemeConfig, current: Theme) -> Theme {
    let next = current.toggled();
    apply(next);
    #[cfg(feature = "csr")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        match storage {
            Some(storage) => {
                if storage.set_item(config.storage_key, next.as_str()).is_err() {
                    log::warn!("theme: could not persist preference under {}", config.storage_key);
                }
            }
            None => log::warn!("theme: localStorage unavailable"),
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = config;
    }
    next
}
