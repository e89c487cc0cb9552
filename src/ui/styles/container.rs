// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use super::faded;
use crate::ui::design_tokens::{border, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Theme};

/// Page background behind every section.
pub fn page(theme: &Theme) -> container::Style {
    let colors = ColorScheme::of(theme);
    container::Style {
        background: Some(Background::Color(colors.page_background)),
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Sticky header: translucent surface with a bottom rule.
pub fn header(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let colors = ColorScheme::of(theme);
        container::Style {
            background: Some(Background::Color(faded(colors.header_background, alpha))),
            border: Border {
                color: faded(colors.border, alpha),
                width: border::WIDTH_SM,
                radius: 0.0.into(),
            },
            ..Default::default()
        }
    }
}

/// Section band. Every other section sits on the raised surface.
pub fn band(raised: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let colors = ColorScheme::of(theme);
        let background = if raised {
            colors.surface
        } else {
            colors.page_background
        };
        container::Style {
            background: Some(Background::Color(background)),
            ..Default::default()
        }
    }
}

/// Bordered card for projects, posts, skills and chat.
pub fn card(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let colors = ColorScheme::of(theme);
        container::Style {
            background: Some(Background::Color(faded(colors.surface, alpha))),
            border: Border {
                color: faded(colors.border, alpha),
                width: border::WIDTH_SM,
                radius: radius::LG.into(),
            },
            shadow: shadow::SM,
            ..Default::default()
        }
    }
}

/// Pill badge. `outlined` badges have no fill.
pub fn badge(outlined: bool, alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let colors = ColorScheme::of(theme);
        let background = (!outlined).then(|| Background::Color(faded(colors.surface_muted, alpha)));
        container::Style {
            background,
            text_color: Some(faded(colors.text_primary, alpha)),
            border: Border {
                color: faded(colors.border, alpha),
                width: if outlined { border::WIDTH_SM } else { 0.0 },
                radius: radius::FULL.into(),
            },
            ..Default::default()
        }
    }
}

/// Muted round backdrop (skill icons, timeline markers, portrait placeholder).
pub fn bubble(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let colors = ColorScheme::of(theme);
        container::Style {
            background: Some(Background::Color(faded(colors.surface_muted, alpha))),
            border: Border {
                color: faded(colors.border, alpha),
                width: border::WIDTH_SM,
                radius: radius::FULL.into(),
            },
            ..Default::default()
        }
    }
}

/// Tab bar track.
pub fn tab_bar(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let colors = ColorScheme::of(theme);
        container::Style {
            background: Some(Background::Color(faded(colors.surface_muted, alpha))),
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Vertical rule on the left of the experience timeline.
pub fn timeline_rule(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let colors = ColorScheme::of(theme);
        container::Style {
            background: Some(Background::Color(faded(colors.border, alpha))),
            ..Default::default()
        }
    }
}

/// Chat message bubble. Visitor messages use the accent color.
pub fn chat_bubble(from_visitor: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let colors = ColorScheme::of(theme);
        let (background, text) = if from_visitor {
            (colors.accent, colors.on_accent)
        } else {
            (colors.surface_muted, colors.text_primary)
        };
        container::Style {
            background: Some(Background::Color(background)),
            text_color: Some(text),
            border: Border {
                radius: radius::LG.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Floating panel (chat window, mobile menu).
pub fn floating_panel(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let colors = ColorScheme::of(theme);
        container::Style {
            background: Some(Background::Color(faded(colors.surface, alpha))),
            text_color: Some(faded(colors.text_primary, alpha)),
            border: Border {
                color: faded(colors.border, alpha),
                width: border::WIDTH_SM,
                radius: radius::LG.into(),
            },
            shadow: shadow::LG,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alternate_bands_differ() {
        let raised = band(true)(&Theme::Light);
        let flat = band(false)(&Theme::Light);
        assert_ne!(raised.background, flat.background);
    }

    #[test]
    fn outlined_badge_has_no_fill() {
        assert!(badge(true, 1.0)(&Theme::Dark).background.is_none());
        assert!(badge(false, 1.0)(&Theme::Dark).background.is_some());
    }

    #[test]
    fn visitor_bubble_uses_accent() {
        let style = chat_bubble(true)(&Theme::Light);
        assert_eq!(
            style.background,
            Some(Background::Color(ColorScheme::light().accent))
        );
    }
}
