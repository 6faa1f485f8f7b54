use leptos::prelude::*;

use crate::style::{badge_class, button_class, card_class, BadgeVariant, ButtonSize, ButtonVariant};

#[component]
pub fn Button(
    children: Children,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] on_click: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <button
            class=button_class(variant, size, &class)
            on:click=move |_| {
                if let Some(cb) = on_click {
                    cb.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

#[component]
pub fn Card(children: Children, #[prop(optional, into)] class: String) -> impl IntoView {
    view! { <div class=card_class(&class)>{children()}</div> }
}

#[component]
pub fn Badge(
    children: Children,
    #[prop(optional)] variant: BadgeVariant,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    view! { <div class=badge_class(variant, &class)>{children()}</div> }
}
