use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Open/closed state of the theme dropdown and the mobile navigation overlay.
///
/// The two toggles are independent; opening one never closes the other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    theme_menu_open: bool,
    mobile_menu_open: bool,
}

impl MenuState {
    pub fn theme_menu_open(&self) -> bool {
        self.theme_menu_open
    }

    pub fn mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    pub fn toggle_theme_menu(&mut self) {
        self.theme_menu_open = !self.theme_menu_open;
    }

    pub fn open_theme_menu(&mut self) {
        self.theme_menu_open = true;
    }

    pub fn close_theme_menu(&mut self) {
        self.theme_menu_open = false;
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    pub fn close_mobile_menu(&mut self) {
        self.mobile_menu_open = false;
    }
}

/// Page sections reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    About,
    Skills,
    Projects,
    Contact,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("no such section: {0:?}")]
pub struct UnknownSection(pub String);

impl Section {
    pub const ALL: [Section; 4] = [
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    /// Element id of the section.
    pub fn id(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Section {
    type Err = UnknownSection;

    /// Accepts a bare id (`about`) or a fragment (`#about`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.strip_prefix('#').unwrap_or(s);
        Self::ALL
            .into_iter()
            .find(|section| section.id() == id)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_closed() {
        let menu = MenuState::default();
        assert!(!menu.theme_menu_open());
        assert!(!menu.mobile_menu_open());
    }

    #[test]
    fn test_toggles_flip() {
        let mut menu = MenuState::default();
        menu.toggle_theme_menu();
        assert!(menu.theme_menu_open());
        menu.toggle_theme_menu();
        assert!(!menu.theme_menu_open());

        menu.toggle_mobile_menu();
        assert!(menu.mobile_menu_open());
        menu.toggle_mobile_menu();
        assert!(!menu.mobile_menu_open());
    }

    #[test]
    fn test_toggles_are_independent() {
        let mut menu = MenuState::default();
        menu.toggle_theme_menu();
        menu.toggle_mobile_menu();
        assert!(menu.theme_menu_open() && menu.mobile_menu_open());

        menu.close_mobile_menu();
        assert!(menu.theme_menu_open());
        assert!(!menu.mobile_menu_open());

        menu.toggle_mobile_menu();
        menu.close_theme_menu();
        assert!(menu.mobile_menu_open());
    }

    #[test]
    fn test_close_is_one_way() {
        let mut menu = MenuState::default();
        menu.close_theme_menu();
        menu.close_mobile_menu();
        assert_eq!(menu, MenuState::default());

        menu.open_theme_menu();
        menu.open_theme_menu();
        assert!(menu.theme_menu_open());
        menu.close_theme_menu();
        assert!(!menu.theme_menu_open());
    }

    #[test]
    fn test_section_parsing() {
        assert_eq!("about".parse::<Section>(), Ok(Section::About));
        assert_eq!("#contact".parse::<Section>(), Ok(Section::Contact));
        assert_eq!(
            "#Skills".parse::<Section>(),
            Err(UnknownSection("#Skills".to_string()))
        );
        assert!("".parse::<Section>().is_err());
        assert!("##about".parse::<Section>().is_err());
        for section in Section::ALL {
            assert_eq!(format!("#{section}").parse::<Section>(), Ok(section));
            assert_eq!(section.label().to_lowercase(), section.id());
        }
    }
}
