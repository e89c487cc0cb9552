// SPDX-License-Identifier: MPL-2.0
//! Visibility threshold domain type for lazy sections.

use crate::app::config::{
    DEFAULT_VISIBILITY_THRESHOLD, MAX_VISIBILITY_THRESHOLD, MIN_VISIBILITY_THRESHOLD,
};

/// Fraction of a region that must be inside the viewport to count as visible.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within `0.0..=1.0`.
///
/// # Example
///
/// ```
/// use iced_folio::ui::state::VisibilityThreshold;
///
/// let threshold = VisibilityThreshold::new(0.25);
/// assert_eq!(threshold.value(), 0.25);
/// assert!(threshold.is_met(0.3));
///
/// // Values outside range are clamped
/// assert_eq!(VisibilityThreshold::new(4.0).value(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityThreshold(f32);

impl VisibilityThreshold {
    /// Creates a new threshold, clamping to the valid range. NaN falls back
    /// to the default.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        Self(value.clamp(MIN_VISIBILITY_THRESHOLD, MAX_VISIBILITY_THRESHOLD))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Whether a visible fraction satisfies the threshold.
    ///
    /// A zero threshold still needs some overlap.
    #[must_use]
    pub fn is_met(self, ratio: f32) -> bool {
        ratio > 0.0 && ratio >= self.0
    }
}

impl Default for VisibilityThreshold {
    fn default() -> Self {
        Self(DEFAULT_VISIBILITY_THRESHOLD)
    }
}
