// SPDX-License-Identifier: MPL-2.0
//! Floating button that returns the page to the top.

use crate::ui::animation::{posed, Reveal, Transition};
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, Container};
use iced::{Element, Length, Vector};
use std::time::Instant;

/// Scroll offset past which the button shows.
pub const SHOW_AFTER: f32 = 500.0;

#[derive(Debug, Clone, Copy, Default)]
pub struct State {
    visible: bool,
    reveal: Reveal,
}

impl State {
    /// Tracks the scroll offset. Returns `true` when the button appeared.
    pub fn scrolled(&mut self, offset: f32, now: Instant) -> bool {
        let visible = offset > SHOW_AFTER;
        if visible == self.visible {
            return false;
        }
        self.visible = visible;
        if visible {
            self.reveal.restart(now);
        } else {
            self.reveal.reset();
        }
        visible
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn is_animating(&self, reduce_motion: bool, now: Instant) -> bool {
        self.visible
            && self
                .reveal
                .is_running(&Transition::scroll_button(reduce_motion), now)
    }
}

/// The button, or `None` while the page is near the top.
pub fn view<'a, Message: Clone + 'a>(
    state: &State,
    on_press: Message,
    reduce_motion: bool,
    now: Instant,
) -> Option<Element<'a, Message>> {
    if !state.visible {
        return None;
    }
    let pose = state
        .reveal
        .pose(&Transition::scroll_button(reduce_motion), now);

    let widget = button(
        Container::new(icons::themed(
            icons::arrow_up(),
            sizing::ICON_MD,
            |c: &ColorScheme| c.on_accent,
            pose.opacity,
        ))
        .center(Length::Fill),
    )
    .width(Length::Fixed(sizing::FLOATING_BUTTON))
    .height(Length::Fixed(sizing::FLOATING_BUTTON))
    .padding(spacing::XS)
    .style(styles::button::floating(pose.opacity))
    .on_press(on_press);

    Some(
        Container::new(posed(widget, pose, Vector::ZERO))
            .width(Length::Fixed(sizing::FLOATING_BUTTON))
            .into(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn shows_only_past_threshold() {
        let now = Instant::now();
        let mut state = State::default();
        assert!(!state.scrolled(SHOW_AFTER, now));
        assert!(!state.is_visible());

        assert!(state.scrolled(SHOW_AFTER + 1.0, now));
        assert!(state.is_visible());
        assert!(!state.scrolled(900.0, now));

        assert!(!state.scrolled(10.0, now));
        assert!(!state.is_visible());
    }

    #[test]
    fn hidden_button_renders_nothing() {
        let state = State::default();
        assert!(view(&state, (), false, Instant::now()).is_none());
    }

    #[test]
    fn appearance_is_shorter_with_reduced_motion() {
        let now = Instant::now();
        let mut state = State::default();
        state.scrolled(800.0, now);
        let later = now + Duration::from_millis(150);
        assert!(state.is_animating(false, later));
        assert!(!state.is_animating(true, later));
    }
}
