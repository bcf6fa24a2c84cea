// Copyright 2025 the gtmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `web-sys` adapters.
//!
//! ## Feature
//!
//! Enable with `web`.
//!
//! ## Notes
//!
//! DOM touch coordinates are integral CSS pixels; they are widened to `f64` unchanged.
//! Pass the container's `getBoundingClientRect()` as the [`ReferenceRect`] so both sides
//! are in client space.
//!
//! ## Example
//!
//! ```no_run
//! use gtmap_gesture::touch::{extract_touch_pair, touch_midpoint};
//! use web_sys::{Element, TouchEvent};
//!
//! fn on_touch_move(event: &TouchEvent, container: &Element) {
//!     let rect = container.get_bounding_client_rect();
//!     if let Some(frame) = extract_touch_pair(event) {
//!         let anchor = touch_midpoint(frame.primary, frame.secondary, &rect);
//!         let _ = (frame.distance(), frame.angle(), anchor);
//!     }
//! }
//! ```

use alloc::vec::Vec;

use kurbo::Point;
use web_sys::{DomRect, DomRectReadOnly, Touch, TouchEvent, TouchList};

use crate::touch::{ReferenceRect, TouchContact, TouchSource};

fn touch_position(touch: &Touch) -> Point {
    Point::new(f64::from(touch.client_x()), f64::from(touch.client_y()))
}

impl TouchSource for TouchList {
    fn contact_count(&self) -> usize {
        self.length() as usize
    }

    fn contact_position(&self, index: usize) -> Option<Point> {
        let index = u32::try_from(index).ok()?;
        self.item(index).map(|t| touch_position(&t))
    }
}

impl TouchSource for TouchEvent {
    fn contact_count(&self) -> usize {
        self.touches().contact_count()
    }

    fn contact_position(&self, index: usize) -> Option<Point> {
        self.touches().contact_position(index)
    }
}

impl ReferenceRect for DomRect {
    fn left(&self) -> f64 {
        DomRectReadOnly::left(self)
    }

    fn top(&self) -> f64 {
        DomRectReadOnly::top(self)
    }
}

/// Collect the contacts of a DOM touch list in event order.
pub fn contacts_from_list(list: &TouchList) -> Vec<TouchContact> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .map(|t| TouchContact::new(t.identifier(), touch_position(&t)))
        .collect()
}
