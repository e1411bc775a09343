// SPDX-License-Identifier: MPL-2.0
//! Float comparison helpers shared by unit tests.
//!
//! Parsed range averages and spinner angles are floats, so tests compare them
//! with the `approx` macros instead of `assert_eq!`.

pub use approx::assert_abs_diff_eq;

/// Tolerance for spinner rotation angles.
pub const F32_EPSILON: f32 = 1e-6;

/// Tolerance for parsed height and life-span averages.
pub const F64_EPSILON: f64 = 1e-10;
