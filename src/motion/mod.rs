// SPDX-License-Identifier: MPL-2.0
//! Motion preference derived from the desktop accessibility setting and the
//! battery state.
//!
//! A single [`MotionBroadcaster`] is built by the application root and handed
//! to views through their contexts. Animated elements read
//! [`MotionPreference::should_reduce_motion`] to pick a cheap or a rich
//! transition. Observers outside the update loop call
//! [`MotionBroadcaster::subscribe`] to receive every change.
//!
//! # Example
//!
//! ```
//! use iced_folio::motion::{BatteryStatus, Capability, MotionBroadcaster, MotionEvent, MotionHost};
//!
//! struct Laptop;
//!
//! impl MotionHost for Laptop {
//!     fn prefers_reduced_motion(&self) -> bool {
//!         false
//!     }
//!
//!     fn battery(&self) -> Capability<BatteryStatus> {
//!         Capability::Available(BatteryStatus::new(0.9, false))
//!     }
//! }
//!
//! let mut broadcaster = MotionBroadcaster::new();
//! broadcaster.activate(&Laptop);
//! assert!(!broadcaster.preference().should_reduce_motion());
//!
//! broadcaster.handle(MotionEvent::BatteryChanged(BatteryStatus::new(0.15, false)));
//! assert!(broadcaster.preference().should_reduce_motion());
//! ```

pub mod capability;
pub mod host;

pub use capability::{BatteryStatus, Capability};
pub use host::{HostSnapshot, MotionHost, SystemHost};

use crate::app::config::DEFAULT_LOW_POWER_THRESHOLD;
use tokio::sync::watch;

/// Read-only view of the current motion preference.
///
/// `should_reduce_motion` is always the OR of the two source flags; the only
/// way to build a value is through [`MotionPreference::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MotionPreference {
    prefers_reduced_motion: bool,
    is_low_power_mode: bool,
    should_reduce_motion: bool,
}

impl MotionPreference {
    #[must_use]
    pub fn new(prefers_reduced_motion: bool, is_low_power_mode: bool) -> Self {
        Self {
            prefers_reduced_motion,
            is_low_power_mode,
            should_reduce_motion: prefers_reduced_motion || is_low_power_mode,
        }
    }

    /// Desktop accessibility setting asks for minimal motion.
    #[must_use]
    pub fn prefers_reduced_motion(self) -> bool {
        self.prefers_reduced_motion
    }

    /// Battery is low and not charging.
    #[must_use]
    pub fn is_low_power_mode(self) -> bool {
        self.is_low_power_mode
    }

    /// Single flag animated elements branch on.
    #[must_use]
    pub fn should_reduce_motion(self) -> bool {
        self.should_reduce_motion
    }
}

/// Change notification from the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MotionEvent {
    ReducedMotionChanged(bool),
    BatteryChanged(BatteryStatus),
}

/// Change listeners currently registered with the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Listeners {
    pub reduced_motion: bool,
    pub battery: bool,
}

impl Listeners {
    #[must_use]
    pub fn any(self) -> bool {
        self.reduced_motion || self.battery
    }
}

/// Owns the motion preference and publishes every change to subscribers.
#[derive(Debug)]
pub struct MotionBroadcaster {
    state: watch::Sender<MotionPreference>,
    listeners: Listeners,
    low_power_threshold: f32,
}

impl Default for MotionBroadcaster {
    fn default() -> Self {
        Self::new()
    }
}

impl MotionBroadcaster {
    /// Creates an inactive broadcaster with every flag `false`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_threshold(DEFAULT_LOW_POWER_THRESHOLD)
    }

    /// Creates an inactive broadcaster with a custom low-power threshold.
    #[must_use]
    pub fn with_threshold(low_power_threshold: f32) -> Self {
        let (state, _) = watch::channel(MotionPreference::default());
        Self {
            state,
            listeners: Listeners::default(),
            low_power_threshold: low_power_threshold.clamp(0.0, 1.0),
        }
    }

    /// Reads the host's current state and registers change listeners.
    ///
    /// The reduced-motion listener is always registered. The battery listener
    /// is registered only when the host reports a battery; otherwise the
    /// low-power flag stays `false` for the broadcaster's lifetime.
    pub fn activate(&mut self, host: &dyn MotionHost) {
        let prefers_reduced_motion = host.prefers_reduced_motion();
        self.listeners.reduced_motion = true;

        let is_low_power_mode = match host.battery() {
            Capability::Available(status) => {
                self.listeners.battery = true;
                status.is_low_power(self.low_power_threshold)
            }
            Capability::Unsupported => {
                tracing::debug!("battery status unavailable, low-power detection disabled");
                false
            }
        };

        self.publish(MotionPreference::new(
            prefers_reduced_motion,
            is_low_power_mode,
        ));
        tracing::info!(
            reduced_motion = prefers_reduced_motion,
            low_power = is_low_power_mode,
            battery_listener = self.listeners.battery,
            "motion preference activated"
        );
    }

    /// Applies a host notification. Returns `true` when the preference changed.
    ///
    /// Notifications for listeners that are not registered are ignored.
    pub fn handle(&mut self, event: MotionEvent) -> bool {
        let current = self.preference();
        let next = match event {
            MotionEvent::ReducedMotionChanged(prefers) if self.listeners.reduced_motion => {
                MotionPreference::new(prefers, current.is_low_power_mode())
            }
            MotionEvent::BatteryChanged(status) if self.listeners.battery => MotionPreference::new(
                current.prefers_reduced_motion(),
                status.is_low_power(self.low_power_threshold),
            ),
            _ => return false,
        };

        let changed = self.publish(next);
        if changed {
            tracing::debug!(
                reduced_motion = next.prefers_reduced_motion(),
                low_power = next.is_low_power_mode(),
                "motion preference changed"
            );
        }
        changed
    }

    /// Unregisters both change listeners. The last preference stays readable.
    pub fn deactivate(&mut self) {
        if self.listeners.any() {
            tracing::debug!("motion preference listeners released");
        }
        self.listeners = Listeners::default();
    }

    #[must_use]
    pub fn preference(&self) -> MotionPreference {
        *self.state.borrow()
    }

    /// Receiver notified on every preference change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<MotionPreference> {
        self.state.subscribe()
    }

    #[must_use]
    pub fn listeners(&self) -> Listeners {
        self.listeners
    }

    #[must_use]
    pub fn low_power_threshold(&self) -> f32 {
        self.low_power_threshold
    }

    fn publish(&self, next: MotionPreference) -> bool {
        self.state.send_if_modified(|current| {
            if *current == next {
                false
            } else {
                *current = next;
                true
            }
        })
    }
}
