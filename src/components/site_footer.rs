//! Page footer with the copyright line.

use leptos::prelude::*;

use crate::state::profile::ProfileState;
use crate::util::browser;
use crate::util::profile_view::copyright_line;

#[component]
pub fn SiteFooter() -> impl IntoView {
    let state = expect_context::<RwSignal<ProfileState>>();
    let year = browser::current_year();

    let line = move || {
        let name = state.get().profile.and_then(|p| p.name);
        copyright_line(name.as_deref(), year)
    };

    view! {
        <footer class="site-footer">
            <span id="year" class="site-footer__copyright">{line}</span>
        </footer>
    }
}
