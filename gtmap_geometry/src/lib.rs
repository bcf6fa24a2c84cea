// Copyright 2025 the gtmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! gtmap Geometry: point normalization and angle helpers.
//!
//! This is the leaf crate of the gtmap interaction layer.
//! Gesture extraction and the interaction handlers express every delta they compute in the terms defined here.
//!
//! - [`point`]: builds [`kurbo::Point`] values from a coordinate pair or any point-like value.
//! - [`angle`]: degree/radian conversion and canonicalization of angles into `[0, 360)`.
//!
//! The point type itself is Kurbo's.
//! Points are plain `Copy` values; two points with equal coordinates are interchangeable.
//!
//! # Example
//!
//! ```rust
//! use gtmap_geometry::{normalize_angle, to_point};
//! use kurbo::Point;
//!
//! // A numeric first argument takes the optional second one as `y`.
//! assert_eq!(to_point(5.0, None), Point::new(5.0, 0.0));
//!
//! // A point-like first argument ignores the second one.
//! assert_eq!(to_point((1.0, 2.0), Some(9.0)), Point::new(1.0, 2.0));
//!
//! // Angles wrap into [0, 360).
//! assert_eq!(normalize_angle(-90.0), 270.0);
//! assert_eq!(normalize_angle(450.0), 90.0);
//! ```
//!
//! ## Float semantics
//!
//! Nothing here validates its input.
//! Non-finite coordinates pass through point construction untouched, and
//! [`normalize_angle`] maps `NaN` and `±∞` to `NaN` rather than guessing a direction.
//!
//! This crate is `no_std`.

#![no_std]

pub mod angle;
pub mod point;

pub use angle::{
    DEG_TO_RAD, RAD_TO_DEG, degrees_to_radians, normalize_angle, radians_to_degrees,
    signed_angle_delta,
};
pub use point::{PointInput, PointLike, point, point_from, to_point};
