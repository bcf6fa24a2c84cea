// Copyright 2025 the gtmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A minimal map view that applies [`ViewChange`]s.
//!
//! ## Overview
//!
//! The owning map widget keeps the authoritative view; [`ViewState`] is a small reference
//! model of it. World coordinates are pixels at zoom `0`; each zoom level doubles the scale.
//! The bearing turns the map clockwise on screen and is always kept in `[0, 360)`.
//!
//! Requires the `std` feature (zoom levels go through `exp2`/`log2`).

use gtmap_geometry::{degrees_to_radians, normalize_angle};
use kurbo::{Affine, Point, Size, Vec2};

use crate::types::ViewChange;

/// Center, zoom and bearing of a map viewport.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    /// World position shown at the middle of the viewport.
    pub center: Point,
    /// Zoom level; scale is `2^zoom`.
    pub zoom: f64,
    /// Clockwise rotation in degrees, within `[0, 360)`.
    pub bearing: f64,
    /// Viewport size in pixels.
    pub size: Size,
    /// Lowest allowed zoom.
    pub min_zoom: f64,
    /// Highest allowed zoom.
    pub max_zoom: f64,
}

impl ViewState {
    /// Create an unrotated view.
    pub fn new(center: Point, zoom: f64, size: Size) -> Self {
        Self {
            center,
            zoom,
            bearing: 0.0,
            size,
            min_zoom: 0.0,
            max_zoom: 22.0,
        }
    }

    /// Pixels per world unit.
    pub fn scale(&self) -> f64 {
        self.zoom.exp2()
    }

    /// World position under a viewport-local point.
    pub fn screen_to_world(&self, local: Point) -> Point {
        let from_middle = local - self.middle();
        self.center + self.unrotate(from_middle) / self.scale()
    }

    /// Viewport-local point showing a world position.
    pub fn world_to_screen(&self, world: Point) -> Point {
        let offset = (world - self.center) * self.scale();
        let turned = Affine::rotate(degrees_to_radians(self.bearing)) * offset.to_point();
        self.middle() + turned.to_vec2()
    }

    /// Apply one change.
    ///
    /// Non-finite zoom deltas and non-finite or non-positive zoom scales are ignored.
    /// The zoom is kept within `min_zoom..=max_zoom`; inverted bounds resolve to `max_zoom`.
    pub fn apply(&mut self, change: ViewChange) {
        match change {
            ViewChange::Pan(offset) => {
                self.center -= self.unrotate(offset) / self.scale();
            }
            ViewChange::Zoom { scale, anchor } => {
                if scale.is_finite() && scale > 0.0 {
                    self.zoom_about(self.zoom + scale.log2(), anchor);
                }
            }
            ViewChange::ZoomBy { delta, anchor } => {
                if delta.is_finite() {
                    self.zoom_about(self.zoom + delta, anchor);
                }
            }
            ViewChange::Rotate { degrees, anchor } => {
                let pinned = self.screen_to_world(anchor);
                self.bearing = normalize_angle(self.bearing + degrees);
                self.repin(pinned, anchor);
            }
        }
    }

    fn zoom_about(&mut self, zoom: f64, anchor: Point) {
        let pinned = self.screen_to_world(anchor);
        // NaN bounds are skipped; `max_zoom` wins over `min_zoom`.
        self.zoom = zoom.max(self.min_zoom).min(self.max_zoom);
        self.repin(pinned, anchor);
    }

    // Move the center so `world` shows at `local` again.
    fn repin(&mut self, world: Point, local: Point) {
        self.center = world - self.unrotate(local - self.middle()) / self.scale();
    }

    fn middle(&self) -> Point {
        Point::new(self.size.width / 2.0, self.size.height / 2.0)
    }

    fn unrotate(&self, v: Vec2) -> Vec2 {
        (Affine::rotate(-degrees_to_radians(self.bearing)) * v.to_point()).to_vec2()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn near(a: Point, b: Point) -> bool {
        (a - b).hypot() < 1e-9
    }

    fn view() -> ViewState {
        ViewState::new(Point::new(1000.0, 1000.0), 2.0, Size::new(400.0, 300.0))
    }

    #[test]
    fn middle_of_viewport_shows_center() {
        let v = view();
        assert!(near(v.screen_to_world(Point::new(200.0, 150.0)), v.center));
        assert!(near(v.world_to_screen(v.center), Point::new(200.0, 150.0)));
    }

    #[test]
    fn pan_moves_content_with_pointer() {
        let mut v = view();
        let world = v.screen_to_world(Point::new(100.0, 100.0));
        v.apply(ViewChange::Pan(Vec2::new(20.0, -8.0)));
        assert!(near(v.world_to_screen(world), Point::new(120.0, 92.0)));
    }

    #[test]
    fn zoom_keeps_anchor_fixed() {
        let mut v = view();
        let anchor = Point::new(50.0, 260.0);
        let world = v.screen_to_world(anchor);
        v.apply(ViewChange::Zoom { scale: 2.0, anchor });
        assert!((v.zoom - 3.0).abs() < 1e-12);
        assert!(near(v.screen_to_world(anchor), world));

        v.apply(ViewChange::ZoomBy {
            delta: -1.5,
            anchor,
        });
        assert!((v.zoom - 1.5).abs() < 1e-12);
        assert!(near(v.screen_to_world(anchor), world));
    }

    #[test]
    fn zoom_is_clamped() {
        let mut v = view();
        v.max_zoom = 4.0;
        v.apply(ViewChange::ZoomBy {
            delta: 10.0,
            anchor: Point::ORIGIN,
        });
        assert_eq!(v.zoom, 4.0);
        v.apply(ViewChange::Zoom {
            scale: 0.0,
            anchor: Point::ORIGIN,
        });
        assert_eq!(v.zoom, 4.0);
    }

    #[test]
    fn non_finite_zoom_delta_is_ignored() {
        let mut v = view();
        let before = v.clone();
        for delta in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            v.apply(ViewChange::ZoomBy {
                delta,
                anchor: Point::new(10.0, 10.0),
            });
        }
        assert_eq!(v, before);
    }

    #[test]
    fn inverted_or_nan_bounds_do_not_panic() {
        let mut v = view();
        v.min_zoom = 5.0;
        v.max_zoom = 3.0;
        v.apply(ViewChange::ZoomBy {
            delta: 1.0,
            anchor: Point::new(10.0, 10.0),
        });
        assert_eq!(v.zoom, 3.0);
        assert!(v.center.x.is_finite() && v.center.y.is_finite());

        v.min_zoom = f64::NAN;
        v.max_zoom = f64::NAN;
        v.apply(ViewChange::ZoomBy {
            delta: 1.5,
            anchor: Point::ORIGIN,
        });
        assert_eq!(v.zoom, 4.5);
    }

    #[test]
    fn bearing_wraps_and_anchor_stays() {
        let mut v = view();
        v.bearing = 350.0;
        let anchor = Point::new(300.0, 40.0);
        let world = v.screen_to_world(anchor);
        v.apply(ViewChange::Rotate {
            degrees: 20.0,
            anchor,
        });
        assert!((v.bearing - 10.0).abs() < 1e-9);
        assert!(near(v.screen_to_world(anchor), world));

        v.apply(ViewChange::Rotate {
            degrees: -30.0,
            anchor,
        });
        assert!((v.bearing - 340.0).abs() < 1e-9);
    }

    #[test]
    fn pan_follows_rotation() {
        let mut v = view();
        v.bearing = 90.0;
        let world = v.screen_to_world(Point::new(10.0, 10.0));
        v.apply(ViewChange::Pan(Vec2::new(5.0, 0.0)));
        assert!(near(v.world_to_screen(world), Point::new(15.0, 10.0)));
    }
}
