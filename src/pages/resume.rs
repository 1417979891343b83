//! Resume page: loads the profile document and renders every section.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only screen of the site. The fetch runs once on mount; until it
//! resolves the header and footer render with empty identity fields.

#[cfg(test)]
#[path = "resume_test.rs"]
mod resume_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};
use leptos_meta::Title;

use crate::components::card_list::CardList;
use crate::components::contact_list::ContactList;
use crate::components::section_nav::SectionNav;
use crate::components::site_footer::SiteFooter;
use crate::components::site_header::SiteHeader;
use crate::components::tag_list::TagList;
use crate::net::types::Profile;
use crate::state::profile::ProfileState;
use crate::util::markdown::render_markdown_html;
use crate::util::profile_view::{self, Section};
use crate::util::scroll;

/// Browser tab title when no name is known.
const BASE_TITLE: &str = "السيرة الذاتية";

/// What the main area shows for a given load state.
#[derive(Debug, PartialEq)]
enum PageBody {
    Loading,
    /// Fallback messages; at most one.
    Failed(Vec<String>),
    Ready(Profile),
    Empty,
}

fn page_body(state: ProfileState) -> PageBody {
    if state.loading {
        return PageBody::Loading;
    }
    let messages = state.error_messages();
    if !messages.is_empty() {
        return PageBody::Failed(messages);
    }
    match state.profile {
        Some(profile) => PageBody::Ready(profile),
        None => PageBody::Empty,
    }
}

/// Resume page root.
#[component]
pub fn ResumePage() -> impl IntoView {
    let state = expect_context::<RwSignal<ProfileState>>();

    #[cfg(feature = "csr")]
    {
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_profile().await;
            match &result {
                Ok(_) => log::debug!("profile loaded from {}", crate::net::api::PROFILE_PATH),
                Err(e) => log::error!("failed to load profile: {e}"),
            }
            state.update(|s| s.finish(result));
        });
    }

    let tab_title = move || document_title(state.get().profile.as_ref());

    let body = move || match page_body(state.get()) {
        PageBody::Loading => view! { <p class="resume-page__loading">"…"</p> }.into_any(),
        PageBody::Failed(messages) => messages
            .into_iter()
            .map(|message| view! { <p class="resume-page__error" role="alert">{message}</p> })
            .collect_view()
            .into_any(),
        PageBody::Ready(profile) => view! { <ResumeBody profile/> }.into_any(),
        PageBody::Empty => ().into_any(),
    };

    view! {
        <Title text=tab_title/>
        <div class="resume-page" on:click=move |ev| scroll::handle_page_click(&ev)>
            <SiteHeader/>
            <main class="resume-page__main">{body}</main>
            <SiteFooter/>
        </div>
    }
}

/// All sections for a loaded profile. Sections without content are omitted.
#[component]
fn ResumeBody(profile: Profile) -> impl IntoView {
    let sections = profile_view::visible_sections(&profile);
    let contacts = profile_view::contact_items(&profile);

    let rendered = sections
        .iter()
        .map(|&section| {
            let content = section_content(section, &profile);
            view! {
                <section id=section.id() class="resume-section">
                    <h2 class="resume-section__heading">{section.heading()}</h2>
                    {content}
                </section>
            }
        })
        .collect_view();

    view! {
        <SectionNav sections/>
        {(!contacts.is_empty()).then(|| view! { <ContactList items=contacts/> })}
        {rendered}
    }
}

fn section_content(section: Section, profile: &Profile) -> AnyView {
    match section {
        Section::Summary => {
            let html = render_markdown_html(profile.summary.as_deref().unwrap_or_default());
            view! { <div class="resume-section__summary" inner_html=html></div> }.into_any()
        }
        Section::Experience => view! { <CardList cards=profile_view::experience_cards(profile)/> }.into_any(),
        Section::Projects => view! { <CardList cards=profile_view::project_cards(profile)/> }.into_any(),
        Section::Education => view! { <CardList cards=profile_view::education_cards(profile)/> }.into_any(),
        Section::Skills => view! { <TagList tags=profile.skills.clone()/> }.into_any(),
        Section::Languages => view! { <TagList tags=profile_view::language_tags(profile)/> }.into_any(),
        Section::Interests => view! { <TagList tags=profile.interests.clone()/> }.into_any(),
    }
}

/// Browser tab title: the profile name followed by the site label.
fn document_title(profile: Option<&Profile>) -> String {
    match profile.and_then(|p| p.name.as_deref()).map(str::trim) {
        Some(name) if !name.is_empty() => format!("{name} | {BASE_TITLE}"),
        _ => BASE_TITLE.to_owned(),
    }
}
