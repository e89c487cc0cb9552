// SPDX-License-Identifier: MPL-2.0
//! Optional host capabilities and the battery reading they may provide.

/// Result of probing an optional host capability.
///
/// `Unsupported` is a normal terminal state, not an error: the caller keeps
/// its defaults and never asks again.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Capability<T> {
    Available(T),
    Unsupported,
}

impl<T> Capability<T> {
    #[must_use]
    pub fn is_available(&self) -> bool {
        matches!(self, Capability::Available(_))
    }

    /// Converts into an `Option`, dropping the unsupported marker.
    pub fn available(self) -> Option<T> {
        match self {
            Capability::Available(value) => Some(value),
            Capability::Unsupported => None,
        }
    }
}

impl<T> From<Option<T>> for Capability<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Capability::Unsupported, Capability::Available)
    }
}

/// A single battery reading.
///
/// The level is a fraction in `0.0..=1.0`; out-of-range readings are clamped.
///
/// # Example
///
/// ```
/// use iced_folio::motion::BatteryStatus;
///
/// let status = BatteryStatus::new(0.15, false);
/// assert!(status.is_low_power(0.2));
/// assert!(!BatteryStatus::new(0.15, true).is_low_power(0.2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatteryStatus {
    level: f32,
    charging: bool,
}

impl BatteryStatus {
    #[must_use]
    pub fn new(level: f32, charging: bool) -> Self {
        let level = if level.is_nan() { 1.0 } else { level };
        Self {
            level: level.clamp(0.0, 1.0),
            charging,
        }
    }

    #[must_use]
    pub fn level(self) -> f32 {
        self.level
    }

    #[must_use]
    pub fn charging(self) -> bool {
        self.charging
    }

    /// A discharging device under `threshold` counts as low power.
    #[must_use]
    pub fn is_low_power(self, threshold: f32) -> bool {
        self.level < threshold && !self.charging
    }
}
