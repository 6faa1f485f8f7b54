//! Everything the page reads besides static content, in one place.
//!
//! Views send an [`Intent`] and perform whatever [`Outcome`] comes back.
//! Nothing in here touches the browser.

use crate::menu::{MenuState, Section};
use crate::reveal::Reveal;
use crate::theme::{PreferenceStore, Theme, ThemePreference};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    SelectTheme(Theme),
    ToggleThemeMenu,
    ToggleMobileMenu,
    Navigate(Section),
}

/// Side effect the caller is expected to carry out after [`SiteState::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    None,
    Persist(Theme),
    ScrollTo(Section),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteState {
    ready: bool,
    theme: Theme,
    reveal: Reveal,
    menu: MenuState,
}

impl SiteState {
    pub fn new(reveal_target: impl Into<String>) -> Self {
        Self {
            ready: false,
            theme: Theme::default(),
            reveal: Reveal::new(reveal_target),
            menu: MenuState::default(),
        }
    }

    /// Mount sequence: mark ready, load the stored theme, rewind the reveal.
    /// The caller starts the reveal timer afterwards.
    ///
    /// Returns [`Outcome::Persist`] when the slot does not already hold the
    /// loaded theme (empty or invalid), so the slot ends up clean.
    pub fn mount<S: PreferenceStore>(&mut self, preference: &ThemePreference<S>) -> Outcome {
        self.ready = true;
        self.theme = preference.load();
        self.reveal.reset();
        log::debug!("mounted with theme {}", self.theme);
        if preference.holds(self.theme) {
            Outcome::None
        } else {
            Outcome::Persist(self.theme)
        }
    }

    pub fn apply(&mut self, intent: Intent) -> Outcome {
        match intent {
            Intent::SelectTheme(theme) => {
                self.menu.close_theme_menu();
                let changed = self.theme != theme;
                self.theme = theme;
                if changed && self.ready {
                    log::debug!("theme changed to {theme}");
                    Outcome::Persist(theme)
                } else {
                    Outcome::None
                }
            }
            Intent::ToggleThemeMenu => {
                self.menu.toggle_theme_menu();
                Outcome::None
            }
            Intent::ToggleMobileMenu => {
                self.menu.toggle_mobile_menu();
                Outcome::None
            }
            Intent::Navigate(section) => {
                self.menu.close_mobile_menu();
                Outcome::ScrollTo(section)
            }
        }
    }

    /// Advances the typing effect by one character. Returns whether more
    /// characters remain.
    pub fn tick(&mut self) -> bool {
        self.reveal.tick();
        !self.reveal.is_done()
    }

    pub fn finish_reveal(&mut self) {
        self.reveal.finish();
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn typed_text(&self) -> &str {
        self.reveal.visible()
    }

    pub fn reveal_done(&self) -> bool {
        self.reveal.is_done()
    }

    pub fn menu(&self) -> MenuState {
        self.menu
    }
}
