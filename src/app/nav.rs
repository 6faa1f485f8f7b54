use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use super::Site;
use crate::content::{BRAND, BRAND_HREF};
use crate::menu::Section;
use crate::state::Intent;
use crate::style::cn;
use crate::theme::Theme;

/// Smooth-scrolls to the section's element. Does nothing if the page has no
/// such element.
pub fn scroll_to_section(section: Section) {
    let Some(el) = document().get_element_by_id(section.id()) else {
        log::debug!("no element for section {section}");
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&options);
}

#[component]
pub fn NavBar() -> impl IntoView {
    let site = expect_context::<Site>();
    let mobile_open = move || site.menu().mobile_menu_open();

    view! {
        <nav class="fixed top-0 w-full nav-bg backdrop-blur-md border-b nav-border z-50">
            <div class="max-w-6xl mx-auto px-4 py-4">
                <div class="flex justify-between items-center">
                    <a
                        href=BRAND_HREF
                        class="text-xl font-bold nav-brand transition-transform hover:scale-105"
                    >
                        "<"
                        {BRAND}
                        "/>"
                    </a>
                    <div class="flex items-center space-x-4">
                        <div class="hidden md:flex space-x-8">
                            <SectionLinks class="nav-link transition-colors duration-200 hover:scale-105" />
                        </div>
                        <ThemeSelector />
                        <button
                            class="md:hidden nav-link text-2xl"
                            aria-label="Toggle navigation"
                            on:click=move |_| site.dispatch(Intent::ToggleMobileMenu)
                        >
                            <i class=move || {
                                if mobile_open() { "extra-close" } else { "extra-menu" }
                            } />
                        </button>
                    </div>
                </div>
                <Show when=mobile_open>
                    <div class="md:hidden border-t nav-border mt-4 pt-4 animate-fade-in">
                        <SectionLinks class="block w-full text-left py-2 nav-link transition-colors duration-200" />
                    </div>
                </Show>
            </div>
        </nav>
    }
}

#[component]
fn SectionLinks(class: &'static str) -> impl IntoView {
    let site = expect_context::<Site>();
    Section::ALL
        .into_iter()
        .map(|section| {
            view! {
                <button class=class on:click=move |_| site.dispatch(Intent::Navigate(section))>
                    {section.label()}
                </button>
            }
        })
        .collect_view()
}

#[component]
fn ThemeSelector() -> impl IntoView {
    let site = expect_context::<Site>();
    let is_open = move || site.menu().theme_menu_open();

    view! {
        <div class="relative">
            <button
                class="flex items-center space-x-2 theme-selector-button px-3 py-2 rounded-lg transition-transform hover:scale-105"
                aria-haspopup="listbox"
                aria-expanded=move || is_open().to_string()
                on:click=move |_| site.dispatch(Intent::ToggleThemeMenu)
            >
                <i class="extra-palette" />
                <span class="hidden sm:inline">{move || site.theme().name()}</span>
                <i class=move || {
                    cn(&["extra-chevron-down transition-transform", if is_open() { "rotate-180" } else { "" }])
                } />
            </button>
            <Show when=is_open>
                <div class="absolute top-full right-0 mt-2 w-64 theme-selector-dropdown rounded-lg shadow-xl border animate-fade-in">
                    <div class="p-2" role="listbox">
                        {Theme::ALL
                            .into_iter()
                            .map(|option| {
                                let item_class = move || {
                                    let state = if site.theme() == option {
                                        "theme-selector-active"
                                    } else {
                                        "theme-selector-item"
                                    };
                                    cn(&["w-full text-left p-3 rounded-lg transition-colors", state])
                                };
                                view! {
                                    <button
                                        class=item_class
                                        role="option"
                                        on:click=move |_| site.dispatch(Intent::SelectTheme(option))
                                    >
                                        <div class="font-medium">{option.name()}</div>
                                        <div class="text-sm opacity-70">{option.description()}</div>
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </Show>
        </div>
    }
}
