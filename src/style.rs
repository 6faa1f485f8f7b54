//! Class-name composition for the shared UI primitives.

pub const BUTTON_BASE: &str = "inline-flex items-center justify-center whitespace-nowrap rounded-md text-sm font-medium transition-all duration-200 hover:scale-105 active:scale-95 focus-visible:outline-none disabled:pointer-events-none disabled:opacity-50";
pub const BADGE_BASE: &str =
    "inline-flex items-center rounded-full px-2.5 py-0.5 text-xs font-semibold";
pub const CARD_BASE: &str = "card-base rounded-lg border shadow-sm";

/// Joins the non-empty fragments with single spaces.
pub fn cn(classes: &[&str]) -> String {
    classes
        .iter()
        .map(|c| c.trim())
        .filter(|c| !c.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Default,
    Outline,
    Ghost,
}

impl ButtonVariant {
    pub fn class(self) -> &'static str {
        match self {
            Self::Default => "btn-primary",
            Self::Outline => "btn-outline border",
            Self::Ghost => "btn-ghost hover:bg-accent",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    #[default]
    Default,
    Sm,
    Lg,
}

impl ButtonSize {
    pub fn class(self) -> &'static str {
        match self {
            Self::Default => "h-10 px-4 py-2",
            Self::Sm => "h-9 px-3",
            Self::Lg => "h-11 px-8",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    #[default]
    Default,
    Secondary,
    Outline,
}

impl BadgeVariant {
    pub fn class(self) -> &'static str {
        match self {
            Self::Default => "badge-default",
            Self::Secondary => "badge-secondary",
            Self::Outline => "badge-outline border",
        }
    }
}

pub fn button_class(variant: ButtonVariant, size: ButtonSize, extra: &str) -> String {
    cn(&[BUTTON_BASE, variant.class(), size.class(), extra])
}

pub fn badge_class(variant: BadgeVariant, extra: &str) -> String {
    cn(&[BADGE_BASE, variant.class(), extra])
}

pub fn card_class(extra: &str) -> String {
    cn(&[CARD_BASE, extra])
}

/// Inline placement for the `index`-th floating hero glyph: four per row,
/// each starting half a second after the previous one.
pub fn floating_glyph_style(index: usize) -> String {
    format!(
        "left: {}%; top: {}%; animation-delay: {}ms;",
        10 + (index % 4) * 20,
        20 + (index / 4) * 30,
        index * 500
    )
}

/// Inline width of a skill level bar.
pub fn level_width(level: u8) -> String {
    format!("width: {}%;", level.min(100))
}
