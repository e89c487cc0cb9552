// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Motion**: Low-power detection and host polling
//! - **Sections**: Lazy section visibility threshold and placeholder size
//! - **Chat**: Simulated reply delay
//! - **Scrolling**: Scroll-to-top visibility and animated scroll duration

// ==========================================================================
// Motion Defaults
// ==========================================================================

/// Battery fraction below which a discharging device counts as low power.
pub const DEFAULT_LOW_POWER_THRESHOLD: f32 = 0.20;

/// Minimum low-power threshold.
pub const MIN_LOW_POWER_THRESHOLD: f32 = 0.0;

/// Maximum low-power threshold.
pub const MAX_LOW_POWER_THRESHOLD: f32 = 1.0;

/// Default interval between host motion/battery probes (in seconds).
pub const DEFAULT_MOTION_POLL_SECS: u64 = 2;

/// Minimum probe interval (in seconds).
pub const MIN_MOTION_POLL_SECS: u64 = 1;

/// Maximum probe interval (in seconds).
pub const MAX_MOTION_POLL_SECS: u64 = 60;

// ==========================================================================
// Section Defaults
// ==========================================================================

/// Fraction of a section that must be visible before it is built.
pub const DEFAULT_VISIBILITY_THRESHOLD: f32 = 0.1;

/// Minimum visibility threshold (any overlap).
pub const MIN_VISIBILITY_THRESHOLD: f32 = 0.0;

/// Maximum visibility threshold (fully visible).
pub const MAX_VISIBILITY_THRESHOLD: f32 = 1.0;

/// Height of the empty box drawn for a section that has not been built (pixels).
pub const DEFAULT_PLACEHOLDER_HEIGHT: f32 = 100.0;

/// Minimum placeholder height (pixels).
pub const MIN_PLACEHOLDER_HEIGHT: f32 = 1.0;

/// Maximum placeholder height (pixels).
pub const MAX_PLACEHOLDER_HEIGHT: f32 = 2000.0;

// ==========================================================================
// Chat Defaults
// ==========================================================================

/// Delay before the chat assistant answers (in milliseconds).
pub const DEFAULT_CHAT_REPLY_DELAY_MS: u64 = 900;

/// Minimum reply delay (in milliseconds).
pub const MIN_CHAT_REPLY_DELAY_MS: u64 = 0;

/// Maximum reply delay (in milliseconds).
pub const MAX_CHAT_REPLY_DELAY_MS: u64 = 10_000;

// ==========================================================================
// Scrolling Defaults
// ==========================================================================

/// Scroll offset after which the scroll-to-top button appears (pixels).
pub const SCROLL_TO_TOP_OFFSET: f32 = 500.0;

/// Duration of an animated in-page scroll (in milliseconds).
pub const SMOOTH_SCROLL_MS: u64 = 450;

/// Frame interval used while transitions are running (in milliseconds).
pub const ANIMATION_FRAME_MS: u64 = 16;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Motion validation
    assert!(MIN_LOW_POWER_THRESHOLD >= 0.0);
    assert!(MAX_LOW_POWER_THRESHOLD <= 1.0);
    assert!(DEFAULT_LOW_POWER_THRESHOLD >= MIN_LOW_POWER_THRESHOLD);
    assert!(DEFAULT_LOW_POWER_THRESHOLD <= MAX_LOW_POWER_THRESHOLD);
    assert!(MIN_MOTION_POLL_SECS > 0);
    assert!(MAX_MOTION_POLL_SECS >= MIN_MOTION_POLL_SECS);
    assert!(DEFAULT_MOTION_POLL_SECS >= MIN_MOTION_POLL_SECS);
    assert!(DEFAULT_MOTION_POLL_SECS <= MAX_MOTION_POLL_SECS);

    // Section validation
    assert!(MIN_VISIBILITY_THRESHOLD >= 0.0);
    assert!(MAX_VISIBILITY_THRESHOLD <= 1.0);
    assert!(DEFAULT_VISIBILITY_THRESHOLD >= MIN_VISIBILITY_THRESHOLD);
    assert!(DEFAULT_VISIBILITY_THRESHOLD <= MAX_VISIBILITY_THRESHOLD);
    assert!(MIN_PLACEHOLDER_HEIGHT > 0.0);
    assert!(DEFAULT_PLACEHOLDER_HEIGHT >= MIN_PLACEHOLDER_HEIGHT);
    assert!(DEFAULT_PLACEHOLDER_HEIGHT <= MAX_PLACEHOLDER_HEIGHT);

    // Chat validation
    assert!(MAX_CHAT_REPLY_DELAY_MS >= MIN_CHAT_REPLY_DELAY_MS);
    assert!(DEFAULT_CHAT_REPLY_DELAY_MS <= MAX_CHAT_REPLY_DELAY_MS);

    // Scrolling validation
    assert!(SCROLL_TO_TOP_OFFSET > 0.0);
    assert!(SMOOTH_SCROLL_MS > ANIMATION_FRAME_MS);
};
