//! Color schemes.

use gpui::{rgb, Hsla};
use serde::{Deserialize, Serialize};

/// Light or dark appearance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

/// Resolved palette used by every view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeColors {
    pub background: Hsla,
    pub surface: Hsla,
    pub surface_elevated: Hsla,
    pub border: Hsla,
    pub text_primary: Hsla,
    pub text_muted: Hsla,
    /// Brand orange used for calls to action and the brand word.
    pub accent: Hsla,
    pub accent_hover: Hsla,
    pub accent_text: Hsla,
}

impl ThemeColors {
    pub fn light() -> Self {
        Self {
            background: rgb(0xFFFFFF).into(),
            surface: rgb(0xF8F8F8).into(),
            surface_elevated: rgb(0xEFEFEF).into(),
            border: rgb(0xD9D9D9).into(),
            text_primary: rgb(0x1E1E1E).into(),
            text_muted: rgb(0x6B6B6B).into(),
            accent: rgb(0xF28C28).into(),
            accent_hover: rgb(0xD9761A).into(),
            accent_text: rgb(0xFFFFFF).into(),
        }
    }

    pub fn dark() -> Self {
        Self {
            background: rgb(0x121212).into(),
            surface: rgb(0x1C1C1E).into(),
            surface_elevated: rgb(0x2A2A2D).into(),
            border: rgb(0x3A3A3D).into(),
            text_primary: rgb(0xF2F2F2).into(),
            text_muted: rgb(0x9A9A9E).into(),
            accent: rgb(0xF5A04A).into(),
            accent_hover: rgb(0xF28C28).into(),
            accent_text: rgb(0x121212).into(),
        }
    }
}

/// The active theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub mode: ThemeMode,
    pub colors: ThemeColors,
}

impl Theme {
    pub fn light() -> Self {
        Self::for_mode(ThemeMode::Light)
    }

    pub fn for_mode(mode: ThemeMode) -> Self {
        let colors = match mode {
            ThemeMode::Light => ThemeColors::light(),
            ThemeMode::Dark => ThemeColors::dark(),
        };
        Self { mode, colors }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_selects_palette() {
        assert_eq!(Theme::for_mode(ThemeMode::Dark).colors, ThemeColors::dark());
        assert_eq!(Theme::default().mode, ThemeMode::Light);
        assert_ne!(ThemeColors::light().background, ThemeColors::dark().background);
    }

    #[test]
    fn mode_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ThemeMode::Dark).unwrap(), "\"dark\"");
        let mode: ThemeMode = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(mode, ThemeMode::Light);
    }
}
