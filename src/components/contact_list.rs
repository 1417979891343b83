//! Contact links under the header.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::util::browser::{EXTERNAL_REL, EXTERNAL_TARGET};
use crate::util::profile_view::ContactItem;

#[component]
pub fn ContactList(items: Vec<ContactItem>) -> impl IntoView {
    view! {
        <ul class="contact-list">
            {items
                .into_iter()
                .map(|item| {
                    let value = match item.href {
                        Some(href) => {
                            let is_web = href.starts_with("http");
                            view! {
                                <a
                                    class="contact-list__value"
                                    href=href
                                    target=is_web.then_some(EXTERNAL_TARGET)
                                    rel=is_web.then_some(EXTERNAL_REL)
                                >
                                    {item.value}
                                </a>
                            }
                                .into_any()
                        }
                        None => view! { <span class="contact-list__value">{item.value}</span> }.into_any(),
                    };
                    view! {
                        <li class="contact-list__item">
                            <span class="contact-list__label">{item.label}</span>
                            {value}
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}
