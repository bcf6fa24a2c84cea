// Copyright 2025 the gtmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-finger gesture frames.
//!
//! ## Overview
//!
//! A [`GestureFrame`] is a snapshot of the first two simultaneous contacts of a touch event
//! and their signed separation.
//! Frames are derived fresh on every event by [`extract_touch_pair`] and never cached here;
//! a handler that needs continuity (the distance at gesture start, the previous angle)
//! keeps the previous frame itself and compares with [`GestureFrame::scale_from`] or
//! [`GestureFrame::rotation_from`].
//!
//! ## Pairing
//!
//! The pair is always `touches[0]` and `touches[1]` in event order.
//! Extra contacts are ignored and nothing is re-paired across frames.

use alloc::vec::Vec;

use gtmap_geometry::{normalize_angle, radians_to_degrees, signed_angle_delta};
use kurbo::{Point, Rect, Vec2};

/// One active touch contact in client (viewport) coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TouchContact {
    /// Identifier that stays stable for the lifetime of the contact.
    pub id: i32,
    /// Position in client coordinates.
    pub client: Point,
}

impl TouchContact {
    /// Create a contact.
    pub const fn new(id: i32, client: Point) -> Self {
        Self { id, client }
    }
}

/// An ordered list of simultaneous touch contacts.
///
/// Implemented for slices and vectors of [`TouchContact`] and [`Point`], and with the
/// `web` feature for `web_sys::TouchList` and `web_sys::TouchEvent`.
pub trait TouchSource {
    /// Number of contacts currently down.
    fn contact_count(&self) -> usize;

    /// Client position of the contact at `index`, in event order.
    fn contact_position(&self, index: usize) -> Option<Point>;
}

impl TouchSource for [TouchContact] {
    fn contact_count(&self) -> usize {
        self.len()
    }

    fn contact_position(&self, index: usize) -> Option<Point> {
        self.get(index).map(|c| c.client)
    }
}

impl TouchSource for [Point] {
    fn contact_count(&self) -> usize {
        self.len()
    }

    fn contact_position(&self, index: usize) -> Option<Point> {
        self.get(index).copied()
    }
}

impl TouchSource for Vec<TouchContact> {
    fn contact_count(&self) -> usize {
        self.as_slice().contact_count()
    }

    fn contact_position(&self, index: usize) -> Option<Point> {
        self.as_slice().contact_position(index)
    }
}

impl TouchSource for Vec<Point> {
    fn contact_count(&self) -> usize {
        self.as_slice().contact_count()
    }

    fn contact_position(&self, index: usize) -> Option<Point> {
        self.as_slice().contact_position(index)
    }
}

/// A reference rectangle whose top-left corner anchors viewport-local coordinates.
///
/// Usually the bounding box of the map container in client coordinates.
pub trait ReferenceRect {
    /// Left edge in client coordinates.
    fn left(&self) -> f64;
    /// Top edge in client coordinates.
    fn top(&self) -> f64;
}

impl ReferenceRect for Rect {
    #[inline]
    fn left(&self) -> f64 {
        self.x0
    }

    #[inline]
    fn top(&self) -> f64 {
        self.y0
    }
}

/// Two simultaneous contacts and their signed separation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GestureFrame {
    /// First contact in event order.
    pub primary: Point,
    /// Second contact in event order.
    pub secondary: Point,
    /// `secondary.x - primary.x`.
    pub dx: f64,
    /// `secondary.y - primary.y`.
    pub dy: f64,
}

impl GestureFrame {
    /// Build a frame from two contact positions.
    pub fn new(primary: Point, secondary: Point) -> Self {
        Self {
            primary,
            secondary,
            dx: secondary.x - primary.x,
            dy: secondary.y - primary.y,
        }
    }

    /// Separation vector from the primary to the secondary contact.
    pub fn separation(&self) -> Vec2 {
        Vec2::new(self.dx, self.dy)
    }

    /// Euclidean distance between the two contacts.
    pub fn distance(&self) -> f64 {
        self.separation().hypot()
    }

    /// Direction from the primary to the secondary contact, in degrees within `[0, 360)`.
    ///
    /// Screen coordinates grow downward, so a positive angle turns clockwise on screen.
    pub fn angle(&self) -> f64 {
        normalize_angle(radians_to_degrees(self.separation().atan2()))
    }

    /// Midpoint of the two contacts relative to `rect`'s top-left corner.
    pub fn midpoint(&self, rect: &impl ReferenceRect) -> Point {
        touch_midpoint(self.primary, self.secondary, rect)
    }

    /// Ratio of this frame's distance to `previous`'s.
    ///
    /// Returns `None` when `previous` has both contacts on the same spot.
    pub fn scale_from(&self, previous: &Self) -> Option<f64> {
        let base = previous.distance();
        if base == 0.0 {
            return None;
        }
        Some(self.distance() / base)
    }

    /// Signed turn from `previous`'s angle to this one, in degrees within `(-180, 180]`.
    pub fn rotation_from(&self, previous: &Self) -> f64 {
        signed_angle_delta(previous.angle(), self.angle())
    }
}

/// Derive a gesture frame from the first two contacts of `source`.
///
/// Returns `None` when fewer than two contacts are down; that means "no two-finger
/// gesture right now", not an error.
pub fn extract_touch_pair<S: TouchSource + ?Sized>(source: &S) -> Option<GestureFrame> {
    if source.contact_count() < 2 {
        return None;
    }
    let primary = source.contact_position(0)?;
    let secondary = source.contact_position(1)?;
    Some(GestureFrame::new(primary, secondary))
}

/// Midpoint of two contacts, in coordinates local to `rect`.
///
/// Averages the absolute positions and subtracts the rectangle's top-left corner.
/// `rect` must be expressed in the same coordinate space as the contacts.
pub fn touch_midpoint(primary: Point, secondary: Point, rect: &impl ReferenceRect) -> Point {
    Point::new(
        (primary.x + secondary.x) / 2.0 - rect.left(),
        (primary.y + secondary.y) / 2.0 - rect.top(),
    )
}
