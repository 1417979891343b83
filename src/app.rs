//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::provide_meta_context;

use crate::pages::resume::ResumePage;
use crate::state::{profile::ProfileState, ui::UiState};
use crate::util::theme::{self, ThemeConfig};

/// Root application component.
///
/// Resolves and applies the initial theme before the first paint, then
/// provides shared state for the resume page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let theme_config = ThemeConfig::SITE;
    let initial = theme::read_preference(&theme_config);
    theme::apply(initial);

    let ui = RwSignal::new(UiState::with_theme(theme_config, initial));
    let profile = RwSignal::new(ProfileState::default());

    provide_context(ui);
    provide_context(profile);

    view! { <ResumePage/> }
}
