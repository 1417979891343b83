//! Light/dark toggle button.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::theme;

/// Button that flips the page theme and persists the choice.
///
/// The glyph and aria-label describe the theme a click switches to.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_click = move |_| {
        let state = ui.get_untracked();
        let next = theme::toggle(&state.theme_config, state.theme);
        ui.update(|u| u.theme = next);
    };

    view! {
        <button
            id="theme-toggle"
            class="btn site-header__theme-toggle"
            type="button"
            on:click=on_click
            aria-label=move || ui.get().theme.toggle_label()
            title=move || ui.get().theme.toggle_label()
        >
            {move || ui.get().theme.toggle_icon()}
        </button>
    }
}
