// SPDX-License-Identifier: MPL-2.0
//! Viewport state management
//!
//! Tracks the page scrollable's visible band and converts between absolute
//! page positions and the relative offsets `snap_to` expects.

use iced::widget::scrollable::{AbsoluteOffset, RelativeOffset};
use iced::Rectangle;

/// A vertical band of the page, in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub top: f32,
    pub height: f32,
}

impl Span {
    #[must_use]
    pub fn new(top: f32, height: f32) -> Self {
        Self {
            top,
            height: height.max(0.0),
        }
    }

    #[must_use]
    pub fn bottom(self) -> f32 {
        self.top + self.height
    }

    #[must_use]
    pub fn contains(self, y: f32) -> bool {
        y >= self.top && y <= self.bottom()
    }
}

/// Fraction of `region` that lies inside `viewport`.
///
/// Sections span the full page width, so only the vertical overlap matters.
/// An empty region counts as fully visible when its edge is in view.
#[must_use]
pub fn intersection_ratio(region: Span, viewport: Span) -> f32 {
    if region.height <= f32::EPSILON {
        return if viewport.contains(region.top) { 1.0 } else { 0.0 };
    }
    let overlap = region.bottom().min(viewport.bottom()) - region.top.max(viewport.top);
    (overlap.max(0.0) / region.height).clamp(0.0, 1.0)
}

/// Manages viewport and scroll state
#[derive(Debug, Clone)]
pub struct ViewportState {
    /// Current scroll offset
    pub offset: AbsoluteOffset,

    /// Previous scroll offset (for delta tracking)
    pub previous_offset: AbsoluteOffset,

    /// Current viewport bounds
    pub bounds: Option<Rectangle>,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            offset: AbsoluteOffset { x: 0.0, y: 0.0 },
            previous_offset: AbsoluteOffset { x: 0.0, y: 0.0 },
            bounds: None,
        }
    }
}

impl ViewportState {
    /// Viewport with a known height before the first scroll report arrives.
    #[must_use]
    pub fn with_height(width: f32, height: f32) -> Self {
        Self {
            bounds: Some(Rectangle::new(
                iced::Point::ORIGIN,
                iced::Size::new(width, height),
            )),
            ..Self::default()
        }
    }

    /// Updates the viewport state with new bounds and offset.
    /// Returns true if the visible band moved or resized.
    pub fn update(&mut self, bounds: Rectangle, offset: AbsoluteOffset) -> bool {
        self.previous_offset = self.offset;
        self.offset = offset;

        let resized = self
            .bounds
            .map(|prev| prev.size() != bounds.size())
            .unwrap_or(true);
        self.bounds = Some(bounds);

        resized || self.previous_offset.y != offset.y
    }

    /// Changes the viewport size, keeping the offset.
    pub fn resize(&mut self, width: f32, height: f32) {
        let origin = self.bounds.map(|b| b.position()).unwrap_or(iced::Point::ORIGIN);
        self.bounds = Some(Rectangle::new(origin, iced::Size::new(width, height)));
    }

    /// Visible band of the page, if the viewport size is known.
    #[must_use]
    pub fn visible_span(&self) -> Option<Span> {
        self.bounds
            .map(|bounds| Span::new(self.offset.y, bounds.height))
    }

    #[must_use]
    pub fn width(&self) -> Option<f32> {
        self.bounds.map(|bounds| bounds.width)
    }

    /// Whether the page is scrolled further than `threshold` pixels.
    #[must_use]
    pub fn is_scrolled_past(&self, threshold: f32) -> bool {
        self.offset.y > threshold
    }

    /// Relative offset that puts `target_y` at the top of the viewport.
    ///
    /// Targets past the end of the content clamp to the bottom.
    #[must_use]
    pub fn relative_offset_for(&self, target_y: f32, content_height: f32) -> RelativeOffset {
        let viewport_height = self.bounds.map(|b| b.height).unwrap_or(0.0);
        let max_offset = (content_height - viewport_height).max(0.0);
        let y = if max_offset > 0.0 {
            (target_y / max_offset).clamp(0.0, 1.0)
        } else {
            0.0
        };
        RelativeOffset { x: 0.0, y }
    }

    /// Largest reachable scroll offset for the given content height.
    #[must_use]
    pub fn max_offset(&self, content_height: f32) -> f32 {
        let viewport_height = self.bounds.map(|b| b.height).unwrap_or(0.0);
        (content_height - viewport_height).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;
    use iced::{Point, Size};

    fn bounds(height: f32) -> Rectangle {
        Rectangle::new(Point::ORIGIN, Size::new(800.0, height))
    }

    #[test]
    fn default_viewport_has_zero_offset() {
        let state = ViewportState::default();
        assert_eq!(state.offset.y, 0.0);
        assert!(state.visible_span().is_none());
    }

    #[test]
    fn update_reports_scroll_and_resize() {
        let mut state = ViewportState::default();
        assert!(state.update(bounds(600.0), AbsoluteOffset { x: 0.0, y: 0.0 }));
        assert!(!state.update(bounds(600.0), AbsoluteOffset { x: 0.0, y: 0.0 }));
        assert!(state.update(bounds(600.0), AbsoluteOffset { x: 0.0, y: 40.0 }));
        assert!(state.update(bounds(500.0), AbsoluteOffset { x: 0.0, y: 40.0 }));
        assert_eq!(state.previous_offset.y, 40.0);
    }

    #[test]
    fn visible_span_follows_offset() {
        let mut state = ViewportState::with_height(800.0, 600.0);
        state.update(bounds(600.0), AbsoluteOffset { x: 0.0, y: 250.0 });
        let span = state.visible_span().expect("bounds known");
        assert_eq!(span.top, 250.0);
        assert_eq!(span.bottom(), 850.0);
    }

    #[test]
    fn intersection_ratio_partial_overlap() {
        let viewport = Span::new(0.0, 600.0);
        assert_abs_diff_eq!(intersection_ratio(Span::new(550.0, 100.0), viewport), 0.5);
        assert_abs_diff_eq!(intersection_ratio(Span::new(100.0, 100.0), viewport), 1.0);
        assert_abs_diff_eq!(intersection_ratio(Span::new(700.0, 100.0), viewport), 0.0);
    }

    #[test]
    fn intersection_ratio_region_taller_than_viewport() {
        let viewport = Span::new(0.0, 600.0);
        assert_abs_diff_eq!(intersection_ratio(Span::new(0.0, 2400.0), viewport), 0.25);
    }

    #[test]
    fn intersection_ratio_empty_region() {
        let viewport = Span::new(100.0, 600.0);
        assert_eq!(intersection_ratio(Span::new(300.0, 0.0), viewport), 1.0);
        assert_eq!(intersection_ratio(Span::new(50.0, 0.0), viewport), 0.0);
    }

    #[test]
    fn relative_offset_clamps_to_content() {
        let state = ViewportState::with_height(800.0, 500.0);
        let content_height = 1500.0;
        assert_abs_diff_eq!(state.relative_offset_for(500.0, content_height).y, 0.5);
        assert_abs_diff_eq!(state.relative_offset_for(5000.0, content_height).y, 1.0);
        assert_abs_diff_eq!(state.relative_offset_for(-20.0, content_height).y, 0.0);
        assert_eq!(state.relative_offset_for(100.0, 300.0).y, 0.0);
        assert_eq!(state.max_offset(content_height), 1000.0);
    }

    #[test]
    fn scrolled_past_threshold() {
        let mut state = ViewportState::with_height(800.0, 600.0);
        assert!(!state.is_scrolled_past(500.0));
        state.update(bounds(600.0), AbsoluteOffset { x: 0.0, y: 501.0 });
        assert!(state.is_scrolled_past(500.0));
    }
}
