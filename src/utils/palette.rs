//! Design tokens shared by every screen.

use crate::utils::ResolvedTheme;

/// Color tokens for one resolved theme.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub text: &'static str,
    pub text_secondary: &'static str,
    pub text_tertiary: &'static str,
    pub background: &'static str,
    pub background_secondary: &'static str,
    pub background_tertiary: &'static str,

    pub tint: &'static str,
    pub tint_light: &'static str,
    pub icon: &'static str,
    pub icon_muted: &'static str,

    pub tab_icon_default: &'static str,
    pub tab_icon_selected: &'static str,

    pub card: &'static str,
    pub card_hover: &'static str,
    pub border: &'static str,
    pub border_light: &'static str,

    pub overlay: &'static str,
    pub scrim: &'static str,

    pub link: &'static str,
    pub button_primary: &'static str,
    pub button_primary_text: &'static str,

    pub primary: &'static str,
    pub primary_light: &'static str,
    pub primary_dark: &'static str,
    pub secondary: &'static str,
    pub secondary_light: &'static str,

    pub success: &'static str,
    pub warning: &'static str,
    pub error: &'static str,
    pub info: &'static str,
}

const PRIMARY: &str = "#6366F1";
const PRIMARY_LIGHT: &str = "#818CF8";
const PRIMARY_DARK: &str = "#4F46E5";
const SECONDARY: &str = "#EC4899";
const SECONDARY_LIGHT: &str = "#F472B6";

pub const LIGHT: Palette = Palette {
    text: "#0F172A",
    text_secondary: "#64748B",
    text_tertiary: "#94A3B8",
    background: "#FFFFFF",
    background_secondary: "#F8FAFC",
    background_tertiary: "#F1F5F9",

    tint: PRIMARY,
    tint_light: PRIMARY_LIGHT,
    icon: "#64748B",
    icon_muted: "#CBD5E1",

    tab_icon_default: "#94A3B8",
    tab_icon_selected: PRIMARY,

    card: "#FFFFFF",
    card_hover: "#F8FAFC",
    border: "#E2E8F0",
    border_light: "#F1F5F9",

    overlay: "rgba(15, 23, 42, 0.5)",
    scrim: "rgba(255, 255, 255, 0.8)",

    link: PRIMARY_DARK,
    button_primary: "#0F172A",
    button_primary_text: "#FFFFFF",

    primary: PRIMARY,
    primary_light: PRIMARY_LIGHT,
    primary_dark: PRIMARY_DARK,
    secondary: SECONDARY,
    secondary_light: SECONDARY_LIGHT,

    success: "#10B981",
    warning: "#F59E0B",
    error: "#EF4444",
    info: "#3B82F6",
};

pub const DARK: Palette = Palette {
    text: "#F8FAFC",
    text_secondary: "#94A3B8",
    text_tertiary: "#64748B",
    background: "#0F172A",
    background_secondary: "#1E293B",
    background_tertiary: "#334155",

    tint: PRIMARY_LIGHT,
    tint_light: PRIMARY,
    icon: "#94A3B8",
    icon_muted: "#475569",

    tab_icon_default: "#64748B",
    tab_icon_selected: PRIMARY_LIGHT,

    card: "#1E293B",
    card_hover: "#334155",
    border: "#334155",
    border_light: "#1E293B",

    overlay: "rgba(0, 0, 0, 0.7)",
    scrim: "rgba(15, 23, 42, 0.8)",

    link: PRIMARY_LIGHT,
    button_primary: "#F8FAFC",
    button_primary_text: "#0F172A",

    ..LIGHT
};

pub fn palette(theme: ResolvedTheme) -> &'static Palette {
    match theme {
        ResolvedTheme::Light => &LIGHT,
        ResolvedTheme::Dark => &DARK,
    }
}

pub mod content_colors {
    pub const PODCAST: &str = "#8B5CF6";
    pub const VIDEO: &str = "#EF4444";
    pub const ARTICLE: &str = "#3B82F6";
    pub const POST: &str = "#14B8A6";
}

pub mod provider_colors {
    pub const YOUTUBE: &str = "#FF0000";
    pub const SPOTIFY: &str = "#1DB954";
    pub const SUBSTACK: &str = "#FF6719";
}

/// 4px base scale.
pub mod spacing {
    pub const XS: u32 = 4;
    pub const SM: u32 = 8;
    pub const MD: u32 = 12;
    pub const LG: u32 = 16;
    pub const XL: u32 = 20;
    pub const XXL: u32 = 24;
    pub const XXXL: u32 = 32;
}

pub mod radius {
    pub const XS: u32 = 4;
    pub const SM: u32 = 8;
    pub const MD: u32 = 12;
    pub const LG: u32 = 16;
    pub const XL: u32 = 20;
    pub const FULL: u32 = 9999;
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub font_size: u32,
    pub line_height: u32,
    pub font_weight: u32,
    pub letter_spacing: f32,
}

impl TextStyle {
    const fn new(font_size: u32, line_height: u32, font_weight: u32) -> Self {
        Self { font_size, line_height, font_weight, letter_spacing: 0.0 }
    }

    const fn tracking(mut self, letter_spacing: f32) -> Self {
        self.letter_spacing = letter_spacing;
        self
    }

    /// Inline CSS declarations, ready to be joined with color rules.
    pub fn css(&self) -> String {
        format!(
            "font-size: {}px; line-height: {}px; font-weight: {}; letter-spacing: {}px;",
            self.font_size,
            self.line_height,
            self.font_weight,
            self.letter_spacing
        )
    }
}

pub mod typography {
    use super::TextStyle;

    pub const DISPLAY_LARGE: TextStyle = TextStyle::new(40, 48, 700).tracking(-1.0);
    pub const DISPLAY_MEDIUM: TextStyle = TextStyle::new(32, 40, 700).tracking(-0.5);
    pub const HEADLINE_LARGE: TextStyle = TextStyle::new(28, 36, 600).tracking(-0.3);
    pub const HEADLINE_MEDIUM: TextStyle = TextStyle::new(24, 32, 600).tracking(-0.2);
    pub const HEADLINE_SMALL: TextStyle = TextStyle::new(20, 28, 600);
    pub const TITLE_LARGE: TextStyle = TextStyle::new(18, 24, 600);
    pub const TITLE_MEDIUM: TextStyle = TextStyle::new(16, 22, 600);
    pub const TITLE_SMALL: TextStyle = TextStyle::new(14, 20, 600);
    pub const BODY_LARGE: TextStyle = TextStyle::new(16, 24, 400);
    pub const BODY_MEDIUM: TextStyle = TextStyle::new(14, 20, 400);
    pub const BODY_SMALL: TextStyle = TextStyle::new(12, 16, 400);
    pub const LABEL_LARGE: TextStyle = TextStyle::new(14, 20, 500);
    pub const LABEL_MEDIUM: TextStyle = TextStyle::new(12, 16, 500);
    pub const LABEL_SMALL: TextStyle = TextStyle::new(11, 14, 500).tracking(0.5);
}
