//! Smooth scrolling for in-page `#anchor` links.
//!
//! One delegated click listener on the page root covers every fragment
//! link, including anchors inside the Markdown summary.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Matches the links whose clicks are intercepted.
pub const FRAGMENT_LINK_SELECTOR: &str = "a[href^=\"#\"]";

/// Return the selector for an in-page link, or `None` when the href is not
/// a fragment or is the bare `#`.
pub fn anchor_target(href: &str) -> Option<&str> {
    if href.len() > 1 && href.starts_with('#') {
        Some(href)
    } else {
        None
    }
}

/// Build the fragment href for a section id.
pub fn section_href(id: &str) -> String {
    format!("#{id}")
}

/// Scroll smoothly to the element named by `href` and push the fragment
/// onto history.
///
/// Returns `true` when the scroll was handled, in which case the caller
/// should prevent the default navigation. Missing targets return `false`
/// and leave the browser's default behavior alone.
pub fn smooth_scroll(href: &str) -> bool {
    let Some(selector) = anchor_target(href) else {
        return false;
    };
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        let Some(el) = window
            .document()
            .and_then(|doc| doc.query_selector(selector).ok().flatten())
        else {
            return false;
        };

        let opts = web_sys::ScrollIntoViewOptions::new();
        opts.set_behavior(web_sys::ScrollBehavior::Smooth);
        opts.set_block(web_sys::ScrollLogicalPosition::Start);
        el.scroll_into_view_with_scroll_into_view_options(&opts);

        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(selector));
        }
        true
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = selector;
        false
    }
}

/// Delegated click handler: if the click landed inside a fragment link whose
/// target exists, scroll to it and cancel the default jump.
pub fn handle_page_click(ev: &leptos::ev::MouseEvent) {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast as _;

        if ev.default_prevented() {
            return;
        }
        let Some(link) = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
            .and_then(|el| el.closest(FRAGMENT_LINK_SELECTOR).ok().flatten())
        else {
            return;
        };
        let Some(href) = link.get_attribute("href") else {
            return;
        };
        if smooth_scroll(&href) {
            ev.prevent_default();
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = ev;
    }
}
