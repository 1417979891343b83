//! Card list for experience, projects, and education entries.
//!
//! DESIGN
//! ======
//! Cards are built by `util::profile_view`; this module only lays them out.
//! Linked titles open in a new browsing context.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::tag_list::TagList;
use crate::util::browser;
use crate::util::profile_view::Card;

/// Vertical list of cards. Renders nothing for an empty list.
#[component]
pub fn CardList(cards: Vec<Card>) -> impl IntoView {
    view! {
        <div class="card-list">
            {cards.into_iter().map(|card| view! { <CardView card/> }).collect_view()}
        </div>
    }
}

#[component]
fn CardView(card: Card) -> impl IntoView {
    let title = match card.link {
        Some(link) => {
            let url = link.url.clone();
            let on_click = move |ev: leptos::ev::MouseEvent| {
                ev.prevent_default();
                browser::open_external(&url);
            };
            view! {
                <a class="card__link" href=link.url target=link.target rel=link.rel on:click=on_click>
                    {card.title}
                </a>
            }
            .into_any()
        }
        None => card.title.into_any(),
    };

    view! {
        <article class="card">
            <header class="card__header">
                <h3 class="card__title">{title}</h3>
                {card.meta.map(|meta| view! { <span class="card__meta">{meta}</span> })}
            </header>
            {card.subtitle.map(|subtitle| view! { <p class="card__subtitle">{subtitle}</p> })}
            {(!card.body.is_empty())
                .then(|| {
                    view! {
                        <ul class="card__body">
                            {card.body.into_iter().map(|line| view! { <li>{line}</li> }).collect_view()}
                        </ul>
                    }
                })}
            {(!card.tags.is_empty()).then(|| view! { <TagList tags=card.tags/> })}
        </article>
    }
}
