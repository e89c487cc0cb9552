// SPDX-License-Identifier: MPL-2.0
//! Text input styles for the contact form and chat composer.

use super::faded;
use crate::ui::design_tokens::{border, radius};
use crate::ui::theming::ColorScheme;
use iced::widget::text_input;
use iced::{Background, Border, Theme};

/// Bordered field. `invalid` fields get an error-colored border.
pub fn field(invalid: bool, alpha: f32) -> impl Fn(&Theme, text_input::Status) -> text_input::Style {
    move |theme: &Theme, status: text_input::Status| {
        let colors = ColorScheme::of(theme);
        let (border_color, width) = match status {
            _ if invalid => (colors.error, border::WIDTH_MD),
            text_input::Status::Focused { .. } => (colors.text_muted, border::WIDTH_MD),
            _ => (colors.border, border::WIDTH_SM),
        };

        text_input::Style {
            background: Background::Color(faded(colors.surface, alpha)),
            border: Border {
                color: faded(border_color, alpha),
                width,
                radius: radius::MD.into(),
            },
            icon: faded(colors.text_muted, alpha),
            placeholder: faded(colors.text_muted, alpha),
            value: faded(colors.text_primary, alpha),
            selection: faded(colors.surface_muted, alpha),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_field_shows_error_border() {
        let style = field(true, 1.0)(&Theme::Light, text_input::Status::Active);
        assert_eq!(style.border.color, ColorScheme::light().error);
    }

    #[test]
    fn valid_field_uses_neutral_border() {
        let style = field(false, 1.0)(&Theme::Dark, text_input::Status::Hovered);
        assert_eq!(style.border.color, ColorScheme::dark().border);
    }
}
