// Copyright 2025 the gtmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point construction from heterogeneous inputs.
//!
//! ## Overview
//!
//! Callers hand coordinates around in several shapes: a bare pair of numbers, a lone `x`,
//! a Kurbo point or vector, a tuple.
//! [`to_point`] folds all of them into a [`Point`] without inspecting types at runtime;
//! the accepted shapes are the two variants of [`PointInput`].

use kurbo::{Point, Vec2};

/// Anything that exposes an `x` and a `y` coordinate.
pub trait PointLike {
    /// Horizontal coordinate.
    fn x(&self) -> f64;
    /// Vertical coordinate.
    fn y(&self) -> f64;
}

impl PointLike for Point {
    #[inline]
    fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    fn y(&self) -> f64 {
        self.y
    }
}

impl PointLike for Vec2 {
    #[inline]
    fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    fn y(&self) -> f64 {
        self.y
    }
}

impl PointLike for (f64, f64) {
    #[inline]
    fn x(&self) -> f64 {
        self.0
    }

    #[inline]
    fn y(&self) -> f64 {
        self.1
    }
}

impl PointLike for [f64; 2] {
    #[inline]
    fn x(&self) -> f64 {
        self[0]
    }

    #[inline]
    fn y(&self) -> f64 {
        self[1]
    }
}

/// The first argument of [`to_point`]: either a bare `x` or a whole point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PointInput {
    /// A numeric `x`; `y` comes from the second argument of [`to_point`].
    Scalar(f64),
    /// A complete point; the second argument of [`to_point`] is ignored.
    Like(Point),
}

impl From<f64> for PointInput {
    fn from(x: f64) -> Self {
        Self::Scalar(x)
    }
}

impl From<Point> for PointInput {
    fn from(p: Point) -> Self {
        Self::Like(p)
    }
}

impl From<Vec2> for PointInput {
    fn from(v: Vec2) -> Self {
        Self::Like(point_from(&v))
    }
}

impl From<(f64, f64)> for PointInput {
    fn from(p: (f64, f64)) -> Self {
        Self::Like(point_from(&p))
    }
}

impl From<[f64; 2]> for PointInput {
    fn from(p: [f64; 2]) -> Self {
        Self::Like(point_from(&p))
    }
}

/// Create a point from two coordinates, stored verbatim.
#[inline]
pub const fn point(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

/// Create a point from any [`PointLike`] value.
#[inline]
pub fn point_from<P: PointLike + ?Sized>(p: &P) -> Point {
    Point::new(p.x(), p.y())
}

/// Normalize a coordinate pair or point-like value into a [`Point`].
///
/// - A numeric first argument yields `Point(x, y.unwrap_or(0.0))`.
/// - A point-like first argument yields a copy of it, and `y` is ignored.
///
/// No validation is performed; `NaN` and infinities are carried through.
pub fn to_point(first: impl Into<PointInput>, y: Option<f64>) -> Point {
    match first.into() {
        PointInput::Scalar(x) => Point::new(x, y.unwrap_or(0.0)),
        PointInput::Like(p) => p,
    }
}
