//! Page header with identity block and page actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! The action buttons render before the profile arrives so the theme toggle
//! and print work even when the document fails to load.

use leptos::prelude::*;

use crate::components::theme_toggle::ThemeToggle;
use crate::state::profile::ProfileState;
use crate::util::browser;

/// Header showing name, title, and location, plus theme and print buttons.
#[component]
pub fn SiteHeader() -> impl IntoView {
    let state = expect_context::<RwSignal<ProfileState>>();

    let name = move || state.get().profile.and_then(|p| p.name).unwrap_or_default();
    let title = move || state.get().profile.and_then(|p| p.title);
    let location = move || state.get().profile.and_then(|p| p.location);

    view! {
        <header class="site-header">
            <div class="site-header__identity">
                <h1 class="site-header__name">{name}</h1>
                {move || title().map(|t| view! { <p class="site-header__title">{t}</p> })}
                {move || location().map(|l| view! { <p class="site-header__location">{l}</p> })}
            </div>
            <div class="site-header__actions">
                <ThemeToggle/>
                <button
                    id="print-btn"
                    class="btn site-header__print"
                    type="button"
                    on:click=move |_| browser::print_page()
                    title="طباعة"
                >
                    "🖨"
                </button>
            </div>
        </header>
    }
}
