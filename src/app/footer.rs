use leptos::prelude::*;

use super::sections::SocialLinks;
use crate::content::NAME;

const BUILD_YEAR: &str = env!("BUILD_YEAR");

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer py-8 px-4 border-t">
            <div class="flex max-w-6xl mx-auto text-center justify-center space-x-4 items-center">
                <p class="footer-text">{format!("© {BUILD_YEAR} {NAME}.")}</p>
                <div class="flex justify-center items-center space-x-8 pb-2">
                    <SocialLinks />
                </div>
            </div>
        </footer>
    }
}
