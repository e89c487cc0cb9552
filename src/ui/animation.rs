// SPDX-License-Identifier: MPL-2.0
//! Enter transitions for animated elements.
//!
//! Every animated element samples a [`Transition`] chosen from the current
//! motion preference: reduced motion fades from 80% opacity quickly, rich
//! motion slides, scales and fades from fully transparent.
//!
//! Poses are applied with [`posed`], which translates content inside a fixed
//! reserve so the element's outer size never changes while it animates.

use iced::widget::container;
use iced::{Color, Element, Length, Padding, Vector};
use std::time::{Duration, Instant};

/// Opacity reduced-motion transitions start from.
pub const REDUCED_START_OPACITY: f32 = 0.8;

/// Horizontal inset per unit of missing scale (pixels).
const SCALE_INSET_PX: f32 = 50.0;

/// Cubic ease-out on `t` in `0.0..=1.0`.
#[must_use]
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Visual state of an element at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub opacity: f32,
    pub offset: Vector,
    pub scale: f32,
}

impl Pose {
    /// Final resting pose.
    pub const REST: Pose = Pose {
        opacity: 1.0,
        offset: Vector { x: 0.0, y: 0.0 },
        scale: 1.0,
    };

    #[must_use]
    pub fn faded(opacity: f32) -> Self {
        Self {
            opacity,
            ..Self::REST
        }
    }

    #[must_use]
    pub fn with_offset(mut self, x: f32, y: f32) -> Self {
        self.offset = Vector::new(x, y);
        self
    }

    #[must_use]
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Linear blend between two poses.
    #[must_use]
    pub fn lerp(self, to: Pose, t: f32) -> Pose {
        let mix = |a: f32, b: f32| a + (b - a) * t;
        Pose {
            opacity: mix(self.opacity, to.opacity),
            offset: Vector::new(mix(self.offset.x, to.offset.x), mix(self.offset.y, to.offset.y)),
            scale: mix(self.scale, to.scale),
        }
    }

    /// Applies the pose opacity to a color.
    #[must_use]
    pub fn fade(self, color: Color) -> Color {
        crate::ui::styles::faded(color, self.opacity)
    }
}

/// Parameters of one enter transition toward [`Pose::REST`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub from: Pose,
    pub duration: Duration,
    pub delay: Duration,
}

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

fn stagger(step_ms: u64, index: usize) -> Duration {
    ms(step_ms * index as u64)
}

impl Transition {
    #[must_use]
    pub fn new(from: Pose, duration: Duration, delay: Duration) -> Self {
        Self {
            from,
            duration,
            delay,
        }
    }

    fn reduced(delay: Duration) -> Self {
        Self::new(Pose::faded(REDUCED_START_OPACITY), ms(200), delay)
    }

    /// Whole section entering the page.
    #[must_use]
    pub fn section(reduce_motion: bool, delay: Duration) -> Self {
        if reduce_motion {
            Self::reduced(delay / 2)
        } else {
            Self::new(Pose::faded(0.0).with_offset(0.0, 20.0), ms(500), delay)
        }
    }

    /// Headings and paragraphs.
    #[must_use]
    pub fn text(reduce_motion: bool, delay: Duration) -> Self {
        if reduce_motion {
            Self::reduced(delay / 2)
        } else {
            Self::new(Pose::faded(0.0).with_offset(0.0, 10.0), ms(400), delay)
        }
    }

    /// Project, blog and skill cards.
    #[must_use]
    pub fn card(reduce_motion: bool, delay: Duration) -> Self {
        if reduce_motion {
            Self::reduced(delay / 2)
        } else {
            Self::new(Pose::faded(0.0).with_scale(0.97), ms(400), delay)
        }
    }

    /// Skill tile `index` of a grid.
    #[must_use]
    pub fn skill(reduce_motion: bool, index: usize) -> Self {
        if reduce_motion {
            Self::reduced(stagger(50, index))
        } else {
            Self::new(
                Pose::faded(0.0).with_offset(0.0, 20.0),
                ms(300),
                stagger(100, index),
            )
        }
    }

    /// Experience timeline entry `index`.
    #[must_use]
    pub fn timeline_item(reduce_motion: bool, index: usize) -> Self {
        if reduce_motion {
            Self::reduced(stagger(100, index))
        } else {
            Self::new(
                Pose::faded(0.0).with_offset(-10.0, 0.0),
                ms(400),
                stagger(200, index),
            )
        }
    }

    /// Technology badge `index`; same in both modes.
    #[must_use]
    pub fn badge(index: usize) -> Self {
        Self::new(Pose::faded(0.0), ms(200), stagger(50, index))
    }

    /// Chat window opening.
    #[must_use]
    pub fn chat_window(reduce_motion: bool) -> Self {
        let from = Pose::faded(0.0).with_offset(0.0, 100.0).with_scale(0.9);
        Self::new(
            from,
            ms(if reduce_motion { 100 } else { 300 }),
            Duration::ZERO,
        )
    }

    /// Scroll-to-top button appearing.
    #[must_use]
    pub fn scroll_button(reduce_motion: bool) -> Self {
        Self::new(
            Pose::faded(0.0).with_scale(0.8),
            ms(if reduce_motion { 100 } else { 300 }),
            Duration::ZERO,
        )
    }

    /// Mobile menu entry `index`.
    #[must_use]
    pub fn menu_item(reduce_motion: bool, index: usize) -> Self {
        let step = if reduce_motion { 50 } else { 100 };
        Self::new(
            Pose::faded(0.0).with_offset(-20.0, 0.0),
            ms(200),
            stagger(step, index),
        )
    }

    /// Time from start until the element rests.
    #[must_use]
    pub fn total(&self) -> Duration {
        self.delay + self.duration
    }

    /// Pose `elapsed` after the transition started.
    #[must_use]
    pub fn sample(&self, elapsed: Duration) -> Pose {
        if elapsed <= self.delay {
            return self.from;
        }
        if elapsed >= self.total() {
            return Pose::REST;
        }
        let t = (elapsed - self.delay).as_secs_f32() / self.duration.as_secs_f32();
        self.from.lerp(Pose::REST, ease_out_cubic(t))
    }
}

/// Start time of an element's enter transition.
///
/// A reveal that has not started shows the transition's initial pose.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Reveal {
    started_at: Option<Instant>,
}

impl Reveal {
    #[must_use]
    pub fn started(at: Instant) -> Self {
        Self {
            started_at: Some(at),
        }
    }

    /// Starts the transition unless it already started.
    pub fn start(&mut self, now: Instant) {
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }
    }

    /// Starts the transition over.
    pub fn restart(&mut self, now: Instant) {
        self.started_at = Some(now);
    }

    pub fn reset(&mut self) {
        self.started_at = None;
    }

    #[must_use]
    pub fn has_started(&self) -> bool {
        self.started_at.is_some()
    }

    #[must_use]
    pub fn pose(&self, transition: &Transition, now: Instant) -> Pose {
        match self.started_at {
            Some(start) => transition.sample(now.saturating_duration_since(start)),
            None => transition.from,
        }
    }

    /// Whether the transition started and has not reached its rest pose.
    #[must_use]
    pub fn is_running(&self, transition: &Transition, now: Instant) -> bool {
        self.started_at
            .is_some_and(|start| now.saturating_duration_since(start) < transition.total())
    }
}

/// Lays `content` out with `pose` applied.
///
/// `reserve` is the largest offset the pose can take on each axis; the
/// content is shifted inside that margin so the outer size stays fixed.
pub fn posed<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    pose: Pose,
    reserve: Vector,
) -> Element<'a, Message> {
    let dx = pose.offset.x.clamp(-reserve.x, reserve.x);
    let dy = pose.offset.y.clamp(-reserve.y, reserve.y);
    let inset = (1.0 - pose.scale).max(0.0) * SCALE_INSET_PX;

    container(content)
        .width(Length::Fill)
        .padding(Padding {
            top: reserve.y + dy,
            bottom: reserve.y - dy,
            left: reserve.x + dx + inset,
            right: reserve.x - dx + inset,
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn easing_hits_endpoints() {
        assert_abs_diff_eq!(ease_out_cubic(0.0), 0.0);
        assert_abs_diff_eq!(ease_out_cubic(1.0), 1.0);
        assert_abs_diff_eq!(ease_out_cubic(2.0), 1.0);
        assert!(ease_out_cubic(0.5) > 0.5);
    }

    #[test]
    fn reduced_section_is_fade_only_with_half_delay() {
        let t = Transition::section(true, Duration::from_millis(400));
        assert_eq!(t.from, Pose::faded(REDUCED_START_OPACITY));
        assert_eq!(t.duration, Duration::from_millis(200));
        assert_eq!(t.delay, Duration::from_millis(200));
    }

    #[test]
    fn rich_section_slides_up() {
        let t = Transition::section(false, Duration::from_millis(400));
        assert_eq!(t.from.opacity, 0.0);
        assert_eq!(t.from.offset.y, 20.0);
        assert_eq!(t.duration, Duration::from_millis(500));
        assert_eq!(t.delay, Duration::from_millis(400));
    }

    #[test]
    fn rich_card_scales_in() {
        let t = Transition::card(false, Duration::ZERO);
        assert_abs_diff_eq!(t.from.scale, 0.97);
        let reduced = Transition::card(true, Duration::ZERO);
        assert_eq!(reduced.from.scale, 1.0);
    }

    #[test]
    fn staggered_delays_depend_on_motion() {
        assert_eq!(Transition::skill(true, 2).delay, ms(100));
        assert_eq!(Transition::skill(false, 2).delay, ms(200));
        assert_eq!(Transition::timeline_item(true, 3).delay, ms(300));
        assert_eq!(Transition::timeline_item(false, 3).delay, ms(600));
        assert_eq!(Transition::timeline_item(false, 0).from.offset.x, -10.0);
        assert_eq!(Transition::menu_item(true, 4).delay, ms(200));
        assert_eq!(Transition::menu_item(false, 4).delay, ms(400));
    }

    #[test]
    fn chat_and_scroll_button_durations() {
        assert_eq!(Transition::chat_window(true).duration, ms(100));
        assert_eq!(Transition::chat_window(false).duration, ms(300));
        assert_eq!(Transition::scroll_button(true).duration, ms(100));
        assert_eq!(Transition::scroll_button(false).duration, ms(300));
    }

    #[test]
    fn sample_holds_during_delay_then_rests() {
        let t = Transition::text(false, Duration::from_millis(100));
        assert_eq!(t.sample(Duration::from_millis(50)), t.from);
        let mid = t.sample(Duration::from_millis(300));
        assert!(mid.opacity > 0.0 && mid.opacity < 1.0);
        assert_eq!(t.sample(t.total()), Pose::REST);
    }

    #[test]
    fn reveal_lifecycle() {
        let t = Transition::badge(0);
        let now = Instant::now();
        let mut reveal = Reveal::default();
        assert_eq!(reveal.pose(&t, now), t.from);
        assert!(!reveal.is_running(&t, now));

        reveal.start(now);
        assert!(reveal.is_running(&t, now));
        reveal.start(now + Duration::from_secs(5));
        assert!(!reveal.is_running(&t, now + Duration::from_secs(1)));
        assert_eq!(reveal.pose(&t, now + Duration::from_secs(1)), Pose::REST);

        reveal.restart(now + Duration::from_secs(5));
        assert!(reveal.is_running(&t, now + Duration::from_secs(5)));
    }

    #[test]
    fn fade_scales_alpha() {
        let color = Pose::faded(0.5).fade(Color::from_rgba(1.0, 0.0, 0.0, 0.8));
        assert_abs_diff_eq!(color.a, 0.4);
        assert_eq!(color.r, 1.0);
    }
}
