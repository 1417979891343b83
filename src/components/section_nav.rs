//! In-page navigation bar.

use leptos::prelude::*;

use crate::util::profile_view::Section;
use crate::util::scroll;

/// Navigation bar linking to each visible section.
#[component]
pub fn SectionNav(sections: Vec<Section>) -> impl IntoView {
    view! {
        <nav class="section-nav">
            {sections
                .into_iter()
                .map(|section| view! { <ScrollLink href=scroll::section_href(section.id()) label=section.heading()/> })
                .collect_view()}
        </nav>
    }
}

/// Fragment link; the page-level click handler scrolls to its target.
#[component]
pub fn ScrollLink(href: String, label: &'static str) -> impl IntoView {
    view! {
        <a class="section-nav__link" href=href>
            {label}
        </a>
    }
}
