//! Visual themes and the persisted theme preference.
//!
//! The preference lives in a single client-side slot. Anything in that slot
//! that isn't one of the known [`Theme`] identifiers is ignored and the
//! default theme is used instead.

use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Key of the client-side storage slot holding the selected theme.
pub const STORAGE_KEY: &str = "portfolio-theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
    Cyberpunk,
    Corporate,
    Gradient,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown theme: {0:?}")]
pub struct UnknownTheme(pub String);

impl Theme {
    /// Every theme, in the order the selector lists them.
    pub const ALL: [Theme; 5] = [
        Theme::Dark,
        Theme::Light,
        Theme::Cyberpunk,
        Theme::Corporate,
        Theme::Gradient,
    ];

    /// Identifier used for storage and for the root `theme-*` class.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
            Self::Cyberpunk => "cyberpunk",
            Self::Corporate => "corporate",
            Self::Gradient => "gradient",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Light => "Light Minimal",
            Self::Cyberpunk => "Cyberpunk",
            Self::Corporate => "Corporate",
            Self::Gradient => "Gradient",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Dark => "Professional dark theme",
            Self::Light => "Clean minimal light theme",
            Self::Cyberpunk => "Futuristic neon theme",
            Self::Corporate => "Professional business theme",
            Self::Gradient => "Colorful gradient theme",
        }
    }

    /// Class applied to the root of the page while this theme is active.
    pub fn class(self) -> &'static str {
        match self {
            Self::Dark => "theme-dark",
            Self::Light => "theme-light",
            Self::Cyberpunk => "theme-cyberpunk",
            Self::Corporate => "theme-corporate",
            Self::Gradient => "theme-gradient",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownTheme(s.to_string()))
    }
}

/// A single persistent string slot.
///
/// Implementations never fail loudly: a slot that can't be read behaves as
/// empty and a write that can't be performed is dropped.
pub trait PreferenceStore {
    fn get(&self) -> Option<String>;
    fn set(&self, value: &str);
}

/// Process-local slot. Used when no client storage exists (server rendering).
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryStore {
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(value.into()))),
        }
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self) -> Option<String> {
        self.slot.lock().ok().and_then(|slot| slot.clone())
    }

    fn set(&self, value: &str) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = Some(value.to_string());
        }
    }
}

/// Validation and default-selection policy on top of a [`PreferenceStore`].
#[derive(Debug, Clone)]
pub struct ThemePreference<S> {
    store: S,
}

impl<S: PreferenceStore> ThemePreference<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The stored theme, or [`Theme::default`] when the slot is empty or
    /// holds something that isn't a theme identifier.
    pub fn load(&self) -> Theme {
        let Some(raw) = self.store.get() else {
            return Theme::default();
        };
        match raw.parse() {
            Ok(theme) => theme,
            Err(err) => {
                log::debug!("ignoring stored preference: {err}");
                Theme::default()
            }
        }
    }

    pub fn save(&self, theme: Theme) {
        self.store.set(theme.as_str());
    }

    /// Whether the slot holds exactly `theme`'s identifier.
    pub fn holds(&self, theme: Theme) -> bool {
        self.store.get().as_deref() == Some(theme.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// A slot that was never available: reads are empty, writes vanish.
    struct Unavailable;

    impl PreferenceStore for Unavailable {
        fn get(&self) -> Option<String> {
            None
        }

        fn set(&self, _value: &str) {}
    }

    #[test]
    fn test_parse_known_identifiers() {
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
        assert_eq!("cyberpunk".parse::<Theme>(), Ok(Theme::Cyberpunk));
        assert_eq!("corporate".parse::<Theme>(), Ok(Theme::Corporate));
        assert_eq!("gradient".parse::<Theme>(), Ok(Theme::Gradient));
    }

    #[test]
    fn test_parse_is_exact() {
        assert!("Dark".parse::<Theme>().is_err());
        assert!(" dark".parse::<Theme>().is_err());
        assert!("Light Minimal".parse::<Theme>().is_err());
        assert_eq!("".parse::<Theme>(), Err(UnknownTheme(String::new())));
    }

    #[test]
    fn test_catalogue_metadata() {
        assert_eq!(Theme::ALL.len(), 5);
        assert_eq!(Theme::Light.name(), "Light Minimal");
        assert_eq!(Theme::Gradient.description(), "Colorful gradient theme");
        for theme in Theme::ALL {
            assert_eq!(theme.class(), format!("theme-{theme}"));
        }
    }

    #[test]
    fn test_serde_form_matches_storage_form() {
        for theme in Theme::ALL {
            let json = serde_json::to_string(&theme).unwrap();
            assert_eq!(json, format!("\"{}\"", theme.as_str()));
            let back: Theme = serde_json::from_str(&json).unwrap();
            assert_eq!(back, theme);
        }
    }

    #[test]
    fn test_load_empty_slot() {
        let pref = ThemePreference::new(MemoryStore::default());
        assert_eq!(pref.load(), Theme::Dark);
    }

    #[test]
    fn test_load_without_storage_capability() {
        let pref = ThemePreference::new(Unavailable);
        pref.save(Theme::Cyberpunk);
        assert_eq!(pref.load(), Theme::default());
    }

    #[test]
    fn test_save_writes_identifier() {
        let store = MemoryStore::default();
        let pref = ThemePreference::new(store.clone());
        pref.save(Theme::Corporate);
        assert_eq!(store.get().as_deref(), Some("corporate"));
    }

    #[test]
    fn test_save_overwrites_invalid_value() {
        let store = MemoryStore::with_value("solarized");
        let pref = ThemePreference::new(store.clone());
        assert_eq!(pref.load(), Theme::Dark);
        pref.save(Theme::Light);
        assert_eq!(pref.load(), Theme::Light);
    }

    #[test]
    fn test_holds_exact_identifier() {
        let pref = ThemePreference::new(MemoryStore::with_value("light"));
        assert!(pref.holds(Theme::Light));
        assert!(!pref.holds(Theme::Dark));
        assert!(!ThemePreference::new(MemoryStore::default()).holds(Theme::Dark));
        assert!(!ThemePreference::new(MemoryStore::with_value("neon")).holds(Theme::Dark));
    }

    proptest! {
        #[test]
        fn test_unknown_values_load_default(raw in ".*") {
            prop_assume!(raw.parse::<Theme>().is_err());
            let pref = ThemePreference::new(MemoryStore::with_value(raw));
            prop_assert_eq!(pref.load(), Theme::default());
        }

        #[test]
        fn test_save_then_load(index in 0usize..5, start in 0usize..5) {
            let store = MemoryStore::with_value(Theme::ALL[start].as_str());
            let pref = ThemePreference::new(store);
            pref.save(Theme::ALL[index]);
            prop_assert_eq!(pref.load(), Theme::ALL[index]);
        }
    }
}
