// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! This module contains the UI state logic separated from the main App struct,
//! following the principle of separation of concerns.

pub mod scroll;
pub mod viewport;
pub mod visibility_threshold;

// Re-export commonly used types for convenience
pub use scroll::ScrollAnimation;
pub use viewport::{intersection_ratio, Span, ViewportState};
pub use visibility_threshold::VisibilityThreshold;
