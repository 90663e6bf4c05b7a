use egui::Color32;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// User-chosen theme setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemePreference {
    pub const ALL: [ThemePreference; 3] = [
        ThemePreference::Light,
        ThemePreference::Dark,
        ThemePreference::System,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
            ThemePreference::System => "system",
        }
    }

    /// Human readable label used by the dark mode screen
    pub fn label(&self) -> &'static str {
        match self {
            ThemePreference::Light => "Light Mode",
            ThemePreference::Dark => "Dark Mode",
            ThemePreference::System => "System Default",
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            "system" => Ok(ThemePreference::System),
            other => Err(anyhow::anyhow!("Unknown theme preference: {}", other)),
        }
    }
}

/// Appearance reported by the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    Light,
    Dark,
}

impl FromStr for ColorScheme {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ColorScheme::Light),
            "dark" => Ok(ColorScheme::Dark),
            other => Err(anyhow::anyhow!("Unknown color scheme: {}", other)),
        }
    }
}

/// Resolved set of colors for the active theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color32,
    pub text: Color32,
    pub card: Color32,
    pub border: Color32,
    pub primary: Color32,
    pub secondary: Color32,
    pub input: Color32,
}

pub static LIGHT_PALETTE: Palette = Palette {
    background: Color32::from_rgb(0xff, 0xff, 0xff),
    text: Color32::from_rgb(0x22, 0x22, 0x22),
    card: Color32::from_rgb(0xf5, 0xf5, 0xf5),
    border: Color32::from_rgb(0xdd, 0xdd, 0xdd),
    primary: Color32::from_rgb(0x00, 0x7a, 0xff),
    secondary: Color32::from_rgb(0x66, 0x66, 0x66),
    input: Color32::from_rgb(0xfa, 0xfa, 0xfa),
};

pub static DARK_PALETTE: Palette = Palette {
    background: Color32::from_rgb(0x18, 0x18, 0x1b),
    text: Color32::from_rgb(0xff, 0xff, 0xff),
    card: Color32::from_rgb(0x23, 0x23, 0x2a),
    border: Color32::from_rgb(0x33, 0x33, 0x33),
    primary: Color32::from_rgb(0x4f, 0x8c, 0xff),
    secondary: Color32::from_rgb(0xb3, 0xb3, 0xb3),
    input: Color32::from_rgb(0x23, 0x23, 0x2a),
};

impl Palette {
    /// Picks the constant palette for a preference.
    ///
    /// `platform` is only consulted for [`ThemePreference::System`]; an unknown
    /// platform appearance falls back to light.
    pub fn resolve(preference: ThemePreference, platform: Option<ColorScheme>) -> &'static Palette {
        let scheme = match preference {
            ThemePreference::Light => Some(ColorScheme::Light),
            ThemePreference::Dark => Some(ColorScheme::Dark),
            ThemePreference::System => platform,
        };

        match scheme {
            Some(ColorScheme::Dark) => &DARK_PALETTE,
            _ => &LIGHT_PALETTE,
        }
    }

    pub fn is_dark(&self) -> bool {
        *self == DARK_PALETTE
    }

    /// Named color roles, in display order
    pub fn roles(&self) -> [(&'static str, Color32); 7] {
        [
            ("background", self.background),
            ("text", self.text),
            ("card", self.card),
            ("border", self.border),
            ("primary", self.primary),
            ("secondary", self.secondary),
            ("input", self.input),
        ]
    }
}

/// Formats a color as `#rrggbb`
pub fn hex(color: Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}
