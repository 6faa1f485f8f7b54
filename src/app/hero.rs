use leptos::prelude::*;

use super::ui::Button;
use super::Site;
use crate::content::{GITHUB_HOME, HERO_DESCRIPTION, HERO_GLYPHS, NAME};
use crate::menu::Section;
use crate::state::Intent;
use crate::style::{button_class, floating_glyph_style, ButtonSize, ButtonVariant};

#[component]
pub fn Hero() -> impl IntoView {
    let site = expect_context::<Site>();

    view! {
        <section class="hero-section relative min-h-screen flex items-center justify-center overflow-hidden">
            <div class="hero-background absolute inset-0 z-0" />
            <div class="hero-overlay absolute inset-0 z-10" />
            <div class="floating-elements absolute inset-0 z-20 pointer-events-none">
                {HERO_GLYPHS
                    .into_iter()
                    .enumerate()
                    .map(|(index, glyph)| {
                        view! {
                            <div
                                class="floating-element absolute text-2xl font-bold opacity-30"
                                style=floating_glyph_style(index)
                            >
                                {glyph.to_string()}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="relative z-30 max-w-6xl mx-auto px-4 text-center animate-fade-in">
                <p class="hero-greeting text-lg">"Hello, I'm"</p>
                <h1 class="hero-name text-5xl md:text-8xl font-bold py-10">{NAME}</h1>
                <div class="hero-title text-xl md:text-3xl mb-8 h-12">
                    {move || site.typed_text()}
                    <span class="animate-pulse hero-cursor">"|"</span>
                </div>
                <p class="hero-description text-lg md:text-xl max-w-2xl mx-auto mb-12 leading-relaxed">
                    {HERO_DESCRIPTION}
                </p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center">
                    <Button
                        size=ButtonSize::Lg
                        on_click=move |_| site.dispatch(Intent::Navigate(Section::Contact))
                    >
                        <i class="extra-email mr-2" />
                        "Get In Touch"
                    </Button>
                    <a
                        href=GITHUB_HOME
                        target="_blank"
                        rel="noopener noreferrer"
                        class=button_class(ButtonVariant::Outline, ButtonSize::Lg, "")
                    >
                        <i class="devicon-github-plain mr-2" />
                        "View GitHub"
                    </a>
                </div>
                <button
                    class="absolute bottom-8 left-1/2 transform -translate-x-1/2 hero-scroll-indicator"
                    aria-label="Scroll to About"
                    on:click=move |_| site.dispatch(Intent::Navigate(Section::About))
                >
                    <i class="extra-arrow-down animate-bounce" />
                </button>
            </div>
        </section>
    }
}
