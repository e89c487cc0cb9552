// SPDX-License-Identifier: MPL-2.0
//! Text colors that follow the theme and an enter transition's opacity.

use super::faded;
use crate::ui::theming::ColorScheme;
use iced::widget::text;
use iced::{Color, Theme};

pub fn primary(alpha: f32) -> impl Fn(&Theme) -> text::Style {
    move |theme: &Theme| text::Style {
        color: Some(faded(ColorScheme::of(theme).text_primary, alpha)),
    }
}

pub fn secondary(alpha: f32) -> impl Fn(&Theme) -> text::Style {
    move |theme: &Theme| text::Style {
        color: Some(faded(ColorScheme::of(theme).text_secondary, alpha)),
    }
}

pub fn muted(alpha: f32) -> impl Fn(&Theme) -> text::Style {
    move |theme: &Theme| text::Style {
        color: Some(faded(ColorScheme::of(theme).text_muted, alpha)),
    }
}

pub fn error(alpha: f32) -> impl Fn(&Theme) -> text::Style {
    move |theme: &Theme| text::Style {
        color: Some(faded(ColorScheme::of(theme).error, alpha)),
    }
}

/// Fixed color, e.g. white on an accent button.
pub fn colored(color: Color, alpha: f32) -> impl Fn(&Theme) -> text::Style {
    move |_theme: &Theme| text::Style {
        color: Some(faded(color, alpha)),
    }
}
