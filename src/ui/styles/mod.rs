// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for all UI components.

pub mod button;
pub mod container;
pub mod text;
pub mod text_input;

use iced::Color;

/// `color` with its alpha multiplied by `alpha`.
#[must_use]
pub fn faded(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha.clamp(0.0, 1.0),
        ..color
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_relative_eq, F32_EPSILON};

    #[test]
    fn faded_multiplies_alpha() {
        let color = Color::from_rgba(0.2, 0.4, 0.6, 0.5);
        assert_relative_eq!(faded(color, 0.5).a, 0.25, epsilon = F32_EPSILON);
        assert_relative_eq!(faded(color, 2.0).a, 0.5, epsilon = F32_EPSILON);
        assert_eq!(faded(color, 0.0).r, color.r);
    }
}
