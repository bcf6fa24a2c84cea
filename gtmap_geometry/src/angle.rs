// Copyright 2025 the gtmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Angle conversion and canonicalization.
//!
//! Map bearings and two-finger rotation angles are kept in degrees.
//! [`normalize_angle`] is the canonical form: every stored bearing lies in `[0, 360)`.

use core::f64::consts::PI;

/// Multiply degrees by this to get radians.
pub const DEG_TO_RAD: f64 = PI / 180.0;

/// Multiply radians by this to get degrees.
pub const RAD_TO_DEG: f64 = 180.0 / PI;

/// Convert degrees to radians.
///
/// An absent value converts as `0`, so callers can forward optional bearings directly.
///
/// ```
/// use gtmap_geometry::degrees_to_radians;
///
/// assert!((degrees_to_radians(180.0) - core::f64::consts::PI).abs() < 1e-12);
/// assert_eq!(degrees_to_radians(None), 0.0);
/// ```
#[inline]
pub fn degrees_to_radians(degrees: impl Into<Option<f64>>) -> f64 {
    degrees.into().unwrap_or(0.0) * DEG_TO_RAD
}

/// Convert radians to degrees.
#[inline]
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * RAD_TO_DEG
}

/// Reduce an angle in degrees into the half-open interval `[0, 360)`.
///
/// `%` keeps the sign of the dividend, so a single remainder leaves negative
/// input negative. The first remainder lands in `(-360, 360)`, the shift makes it
/// positive, and the second remainder folds `[360, 720)` back down.
///
/// Non-finite input yields `NaN`.
#[inline]
pub fn normalize_angle(degrees: f64) -> f64 {
    ((degrees % 360.0) + 360.0) % 360.0
}

/// Shortest signed turn from `from` to `to`, in degrees within `(-180, 180]`.
///
/// Crossing the 0°/360° seam gives a small delta: `signed_angle_delta(350.0, 10.0) == 20.0`.
#[inline]
pub fn signed_angle_delta(from: f64, to: f64) -> f64 {
    let d = normalize_angle(to - from);
    if d > 180.0 { d - 360.0 } else { d }
}
