// SPDX-License-Identifier: MPL-2.0
//! Test helpers shared by unit tests.
//!
//! Geometry and fade values are floats; compare them with `approx` rather
//! than `assert_eq!`.

pub use approx::assert_abs_diff_eq;
