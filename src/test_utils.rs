// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons.
//!
//! Layout heights, transition poses and scroll offsets are all `f32`, so tests
//! compare them through the `approx` assertion macros re-exported here.

pub use approx::{assert_abs_diff_eq, assert_relative_eq};

/// Default epsilon for f32 comparisons.
pub const F32_EPSILON: f32 = 1e-6;
