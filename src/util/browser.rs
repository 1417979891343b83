//! Small browser affordances: print, external links, and the clock.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components call these instead of touching `web_sys` directly so native
//! builds compile them down to no-ops.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

/// Browsing-context target for links that leave the page.
pub const EXTERNAL_TARGET: &str = "_blank";

/// `rel` attribute paired with [`EXTERNAL_TARGET`].
pub const EXTERNAL_REL: &str = "noopener noreferrer";

/// `window.open` features matching [`EXTERNAL_REL`], so the opened page
/// gets no `window.opener` and no referrer.
pub const EXTERNAL_FEATURES: &str = "noopener,noreferrer";

/// Open the browser print dialog.
pub fn print_page() {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if window.print().is_err() {
                log::warn!("print dialog unavailable");
            }
        }
    }
}

/// Open `url` in a new browsing context without an opener reference.
pub fn open_external(url: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.open_with_url_and_target_and_features(url, EXTERNAL_TARGET, EXTERNAL_FEATURES);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = url;
    }
}

/// Current calendar year from the browser clock. `None` outside a browser.
pub fn current_year() -> Option<u32> {
    #[cfg(feature = "csr")]
    {
        Some(js_sys::Date::new_0().get_full_year())
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}
