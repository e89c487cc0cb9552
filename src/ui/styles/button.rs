// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.
//!
//! Buttons that take part in an enter transition receive the pose opacity as
//! `alpha`; every color they paint is faded by it.

use super::faded;
use crate::ui::design_tokens::{border, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Solid button for the main call to action.
pub fn primary(alpha: f32) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let colors = ColorScheme::of(theme);
        let background = match status {
            button::Status::Hovered => Color {
                a: 0.9,
                ..colors.accent
            },
            button::Status::Disabled => colors.surface_muted,
            _ => colors.accent,
        };

        button::Style {
            background: Some(Background::Color(faded(background, alpha))),
            text_color: faded(colors.on_accent, alpha),
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Bordered button on the page surface.
pub fn outline(alpha: f32) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let colors = ColorScheme::of(theme);
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => colors.surface_muted,
            _ => colors.surface,
        };

        button::Style {
            background: Some(Background::Color(faded(background, alpha))),
            text_color: faded(colors.text_primary, alpha),
            border: Border {
                color: faded(colors.border, alpha),
                width: border::WIDTH_SM,
                radius: radius::MD.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Borderless button for navigation links and icon actions.
pub fn ghost(alpha: f32) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let colors = ColorScheme::of(theme);
        let (background, text_color) = match status {
            button::Status::Hovered | button::Status::Pressed => {
                (Some(colors.surface_muted), colors.text_primary)
            }
            _ => (None, colors.text_secondary),
        };

        button::Style {
            background: background.map(|color| Background::Color(faded(color, alpha))),
            text_color: faded(text_color, alpha),
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Tab trigger inside a tab bar.
pub fn tab(selected: bool, alpha: f32) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let colors = ColorScheme::of(theme);
        let (background, text_color) = if selected {
            (Some(colors.surface), colors.text_primary)
        } else if matches!(status, button::Status::Hovered) {
            (None, colors.text_primary)
        } else {
            (None, colors.text_muted)
        };

        button::Style {
            background: background.map(|color| Background::Color(faded(color, alpha))),
            text_color: faded(text_color, alpha),
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: if selected { shadow::SM } else { shadow::NONE },
            snap: true,
        }
    }
}

/// Round floating action button (chat launcher, scroll-to-top).
pub fn floating(alpha: f32) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let colors = ColorScheme::of(theme);
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => Color {
                a: 0.85,
                ..colors.accent
            },
            _ => colors.accent,
        };

        button::Style {
            background: Some(Background::Color(faded(background, alpha))),
            text_color: faded(colors.on_accent, alpha),
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::LG,
            snap: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_inverts_text_and_background() {
        let style = primary(1.0)(&Theme::Light, button::Status::Active);
        assert_eq!(
            style.background,
            Some(Background::Color(ColorScheme::light().accent))
        );
        assert_eq!(style.text_color, ColorScheme::light().on_accent);
    }

    #[test]
    fn alpha_fades_every_color() {
        let style = outline(0.5)(&Theme::Dark, button::Status::Active);
        assert!((style.text_color.a - 0.5).abs() < f32::EPSILON);
        assert!((style.border.color.a - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn ghost_is_transparent_until_hovered() {
        let idle = ghost(1.0)(&Theme::Light, button::Status::Active);
        let hovered = ghost(1.0)(&Theme::Light, button::Status::Hovered);
        assert!(idle.background.is_none());
        assert!(hovered.background.is_some());
    }

    #[test]
    fn selected_tab_is_raised() {
        let on = tab(true, 1.0)(&Theme::Light, button::Status::Active);
        let off = tab(false, 1.0)(&Theme::Light, button::Status::Active);
        assert!(on.background.is_some());
        assert!(off.background.is_none());
        assert_ne!(on.text_color, off.text_color);
    }
}
