//! Chip list for skills, languages, interests, and project tech.

use leptos::prelude::*;

#[component]
pub fn TagList(tags: Vec<String>) -> impl IntoView {
    view! {
        <ul class="tag-list">
            {tags.into_iter().map(|tag| view! { <li class="tag-list__tag">{tag}</li> }).collect_view()}
        </ul>
    }
}
