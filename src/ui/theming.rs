// SPDX-License-Identifier: MPL-2.0
//! Light and dark color schemes.
//!
//! Styles derive their colors from the active [`iced::Theme`] through
//! [`ColorScheme::of`], so switching the theme mode restyles every widget
//! without threading the scheme through views.

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Color palette for a theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScheme {
    // Surface colors
    pub page_background: Color,
    pub surface: Color,
    pub surface_muted: Color,
    pub border: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // Solid buttons and the chat bubble of the visitor
    pub accent: Color,
    pub on_accent: Color,

    // Semantic colors
    pub error: Color,
    pub warning: Color,
    pub success: Color,
    pub info: Color,

    /// Translucent header background
    pub header_background: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            page_background: palette::ZINC_50,
            surface: palette::WHITE,
            surface_muted: palette::ZINC_100,
            border: palette::ZINC_200,

            text_primary: palette::ZINC_900,
            text_secondary: palette::ZINC_600,
            text_muted: palette::ZINC_500,

            accent: palette::ZINC_900,
            on_accent: palette::ZINC_50,

            error: palette::ERROR_500,
            warning: palette::WARNING_500,
            success: palette::SUCCESS_500,
            info: palette::INFO_500,

            header_background: Color {
                a: opacity::SURFACE,
                ..palette::WHITE
            },
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            page_background: palette::ZINC_900,
            surface: palette::ZINC_950,
            surface_muted: palette::ZINC_800,
            border: palette::ZINC_800,

            text_primary: palette::ZINC_50,
            text_secondary: palette::ZINC_300,
            text_muted: palette::ZINC_400,

            accent: palette::ZINC_50,
            on_accent: palette::ZINC_900,

            error: palette::ERROR_500,
            warning: palette::WARNING_500,
            success: palette::SUCCESS_500,
            info: palette::INFO_500,

            header_background: Color {
                a: opacity::SURFACE,
                ..palette::ZINC_950
            },
        }
    }

    /// Scheme matching a built-in theme.
    #[must_use]
    pub fn of(theme: &Theme) -> Self {
        if theme.extended_palette().is_dark {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Detect system theme; default to dark on detection error
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }

    /// Explicit mode opposite to the effective one.
    #[must_use]
    pub fn toggled(self) -> Self {
        if self.is_dark() {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        }
    }

    #[must_use]
    pub fn theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_theme_has_light_surface() {
        let scheme = ColorScheme::light();
        assert!(scheme.surface.r > 0.9);
    }

    #[test]
    fn dark_theme_has_dark_surface() {
        let scheme = ColorScheme::dark();
        assert!(scheme.surface.r < 0.1);
    }

    #[test]
    fn accent_contrasts_with_its_text() {
        for scheme in [ColorScheme::light(), ColorScheme::dark()] {
            assert!((scheme.accent.r - scheme.on_accent.r).abs() > 0.5);
        }
    }

    #[test]
    fn scheme_follows_builtin_theme() {
        assert_eq!(ColorScheme::of(&Theme::Dark), ColorScheme::dark());
        assert_eq!(ColorScheme::of(&Theme::Light), ColorScheme::light());
    }

    #[test]
    fn theme_mode_is_dark_returns_correct_values() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
        // System mode depends on actual system theme, so we just verify it doesn't panic
        let _ = ThemeMode::System.is_dark();
    }

    #[test]
    fn toggle_flips_effective_mode() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        let system = ThemeMode::System;
        assert_ne!(system.toggled().is_dark(), system.is_dark());
    }
}
