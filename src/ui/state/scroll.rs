// SPDX-License-Identifier: MPL-2.0
//! Animated in-page scrolling.

use crate::navigation::SectionId;
use crate::ui::animation::ease_out_cubic;
use std::time::{Duration, Instant};

/// An eased scroll between two absolute page offsets.
///
/// A scroll toward a section keeps the section as its anchor, so the caller
/// can follow the section when the layout above it grows mid-flight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollAnimation {
    from: f32,
    to: f32,
    started_at: Instant,
    duration: Duration,
    anchor: Option<SectionId>,
}

impl ScrollAnimation {
    #[must_use]
    pub fn new(from: f32, to: f32, started_at: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            started_at,
            duration,
            anchor: None,
        }
    }

    /// Anchors the scroll to `section`.
    #[must_use]
    pub fn toward(mut self, section: SectionId) -> Self {
        self.anchor = Some(section);
        self
    }

    #[must_use]
    pub fn target(&self) -> f32 {
        self.to
    }

    #[must_use]
    pub fn anchor(&self) -> Option<SectionId> {
        self.anchor
    }

    /// Moves the destination to `to`, continuing from the offset reached at
    /// `now` over the time left.
    pub fn retarget(&mut self, to: f32, now: Instant) {
        if (to - self.to).abs() < f32::EPSILON {
            return;
        }
        let (from, _) = self.sample(now);
        let elapsed = now.saturating_duration_since(self.started_at);
        self.from = from;
        self.to = to;
        self.started_at = now;
        self.duration = self.duration.saturating_sub(elapsed);
    }

    /// Offset at `now`, and whether the animation has finished.
    #[must_use]
    pub fn sample(&self, now: Instant) -> (f32, bool) {
        if self.duration.is_zero() {
            return (self.to, true);
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        let t = (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0);
        let eased = ease_out_cubic(t);
        (self.from + (self.to - self.from) * eased, t >= 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn starts_at_origin_and_ends_at_target() {
        let start = Instant::now();
        let anim = ScrollAnimation::new(100.0, 900.0, start, Duration::from_millis(400));

        let (y, done) = anim.sample(start);
        assert_abs_diff_eq!(y, 100.0);
        assert!(!done);

        let (y, done) = anim.sample(start + Duration::from_millis(400));
        assert_abs_diff_eq!(y, 900.0);
        assert!(done);
    }

    #[test]
    fn eased_progress_runs_ahead_of_linear() {
        let start = Instant::now();
        let anim = ScrollAnimation::new(0.0, 1000.0, start, Duration::from_millis(400));
        let (y, _) = anim.sample(start + Duration::from_millis(200));
        assert!(y > 500.0);
        assert!(y < 1000.0);
    }

    #[test]
    fn zero_duration_jumps() {
        let start = Instant::now();
        let anim = ScrollAnimation::new(0.0, 300.0, start, Duration::ZERO);
        assert_eq!(anim.sample(start), (300.0, true));
    }

    #[test]
    fn retarget_continues_from_the_current_offset() {
        let start = Instant::now();
        let mut anim = ScrollAnimation::new(0.0, 1000.0, start, Duration::from_millis(400))
            .toward(SectionId::Blog);
        let mid = start + Duration::from_millis(200);
        let (reached, _) = anim.sample(mid);

        anim.retarget(1500.0, mid);
        assert_eq!(anim.anchor(), Some(SectionId::Blog));
        assert_abs_diff_eq!(anim.sample(mid).0, reached);

        let (y, done) = anim.sample(start + Duration::from_millis(400));
        assert_abs_diff_eq!(y, 1500.0);
        assert!(done);
    }

    #[test]
    fn retarget_after_the_end_lands_immediately() {
        let start = Instant::now();
        let mut anim = ScrollAnimation::new(0.0, 100.0, start, Duration::from_millis(100));
        let late = start + Duration::from_secs(1);
        anim.retarget(250.0, late);
        assert_eq!(anim.sample(late), (250.0, true));
    }

    #[test]
    fn scrolling_upwards_works() {
        let start = Instant::now();
        let anim = ScrollAnimation::new(800.0, 0.0, start, Duration::from_millis(100));
        let (y, done) = anim.sample(start + Duration::from_secs(1));
        assert_abs_diff_eq!(y, 0.0);
        assert!(done);
        assert_eq!(anim.target(), 0.0);
    }
}
