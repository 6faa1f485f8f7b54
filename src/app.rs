mod footer;
mod hero;
mod nav;
mod sections;
#[cfg(feature = "hydrate")]
mod storage;
mod ui;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::{HERO_TITLE, NAME};
use crate::menu::MenuState;
use crate::reveal::{RevealTimer, TimerHandle, TICK_INTERVAL};
use crate::state::{Intent, Outcome, SiteState};
use crate::theme::{Theme, ThemePreference};

use footer::Footer;
use hero::Hero;
use nav::NavBar;
use sections::{About, Contact, Projects, Skills};

#[cfg(feature = "hydrate")]
type SiteStore = storage::BrowserStore;
#[cfg(not(feature = "hydrate"))]
type SiteStore = crate::theme::MemoryStore;

#[cfg(feature = "hydrate")]
fn site_store() -> SiteStore {
    storage::BrowserStore::new(crate::theme::STORAGE_KEY)
}

// no client storage while rendering on the server
#[cfg(not(feature = "hydrate"))]
fn site_store() -> SiteStore {
    SiteStore::default()
}

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title text=format!("{NAME} - Portfolio") />
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=Portfolio />
            </Routes>
        </Router>
    }
}

impl TimerHandle for IntervalHandle {
    fn cancel(self) {
        self.clear();
    }
}

/// Handle to the page state, shared with every section through context.
#[derive(Clone, Copy)]
pub struct Site {
    state: RwSignal<SiteState>,
    preference: StoredValue<ThemePreference<SiteStore>>,
}

impl Site {
    pub fn dispatch(self, intent: Intent) {
        let outcome = self
            .state
            .try_update(|s| s.apply(intent))
            .unwrap_or(Outcome::None);
        self.perform(outcome);
    }

    fn mount(self) {
        let outcome = self
            .preference
            .with_value(|p| self.state.try_update(|s| s.mount(p)))
            .unwrap_or(Outcome::None);
        self.perform(outcome);
    }

    fn perform(self, outcome: Outcome) {
        match outcome {
            Outcome::Persist(theme) => self.preference.with_value(|p| p.save(theme)),
            Outcome::ScrollTo(section) => nav::scroll_to_section(section),
            Outcome::None => {}
        }
    }

    pub fn theme(self) -> Theme {
        self.state.with(SiteState::theme)
    }

    pub fn menu(self) -> MenuState {
        self.state.with(SiteState::menu)
    }

    pub fn typed_text(self) -> String {
        self.state.with(|s| s.typed_text().to_string())
    }
}

/// One interval tick. Stops the timer once the text is complete; the
/// interval may still fire after the page was torn down.
fn tick_reveal<H>(state: RwSignal<SiteState>, timer: StoredValue<RevealTimer<H>>)
where
    H: TimerHandle + Send + Sync + 'static,
{
    let more = state.try_update(SiteState::tick).unwrap_or(false);
    if !more {
        timer.try_update_value(RevealTimer::cancel);
    }
}

#[component]
fn Portfolio() -> impl IntoView {
    let state = RwSignal::new(SiteState::new(HERO_TITLE));
    let preference = StoredValue::new(ThemePreference::new(site_store()));
    let timer = StoredValue::new(RevealTimer::<IntervalHandle>::default());
    let site = Site { state, preference };
    provide_context(site);

    // runs once, in the browser only
    Effect::watch(
        || (),
        move |_, _, _| {
            site.mount();
            if state.with_untracked(SiteState::reveal_done) {
                return;
            }
            let started = timer.try_update_value(|t| {
                t.start(|| {
                    set_interval_with_handle(move || tick_reveal(state, timer), TICK_INTERVAL)
                })
            });
            if let Some(Err(err)) = started {
                log::warn!("typing effect unavailable: {err:?}");
                state.update(SiteState::finish_reveal);
            }
        },
        true,
    );

    on_cleanup(move || {
        timer.try_update_value(RevealTimer::cancel);
    });

    view! {
        <Show when=move || state.with(SiteState::is_ready) fallback=|| view! { <Loading /> }>
            <div class=move || {
                format!(
                    "{} min-h-screen transition-colors duration-300",
                    state.with(SiteState::theme).class(),
                )
            }>
                <NavBar />
                <Hero />
                <About />
                <Skills />
                <Projects />
                <Contact />
                <Footer />
            </div>
        </Show>
    }
}

#[component]
fn Loading() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-slate-950 flex items-center justify-center">
            <div class="animate-spin rounded-full h-32 w-32 border-t-2 border-b-2 border-emerald-500"></div>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct CountingHandle(Arc<AtomicUsize>);

    impl TimerHandle for CountingHandle {
        fn cancel(self) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn running(
        cancelled: &Arc<AtomicUsize>,
    ) -> (RwSignal<SiteState>, StoredValue<RevealTimer<CountingHandle>>) {
        let state = RwSignal::new(SiteState::new("Hi"));
        let timer = StoredValue::new(RevealTimer::default());
        let handle = CountingHandle(cancelled.clone());
        timer.update_value(|t| {
            let _ = t.start(|| Ok::<_, ()>(handle));
        });
        (state, timer)
    }

    #[test]
    fn test_tick_reveal_stops_timer_at_end() {
        let cancelled = Arc::new(AtomicUsize::new(0));
        let owner = Owner::new();
        owner.with(|| {
            let (state, timer) = running(&cancelled);
            tick_reveal(state, timer);
            assert_eq!(cancelled.load(Ordering::SeqCst), 0);
            tick_reveal(state, timer);
            assert_eq!(cancelled.load(Ordering::SeqCst), 1);
            assert_eq!(state.with_untracked(|s| s.typed_text().to_string()), "Hi");
            assert!(!timer.with_value(RevealTimer::is_running));
        });
    }

    #[test]
    fn test_tick_reveal_after_dispose() {
        let cancelled = Arc::new(AtomicUsize::new(0));
        let owner = Owner::new();
        let (state, timer) = owner.with(|| running(&cancelled));
        owner.cleanup();
        drop(owner);
        tick_reveal(state, timer);
        tick_reveal(state, timer);
    }
}
