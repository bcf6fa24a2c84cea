// Copyright 2025 the gtmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Built-in interaction handlers.
//!
//! ## Overview
//!
//! Each handler turns [`InputEvent`]s into [`ViewChange`]s for one [`Interactions`] kind.
//! Gesture continuity (last pointer position, previous two-finger frame) lives in the
//! handler; the gesture extractor itself is stateless.
//!
//! [`Handler::add_hooks`](crate::lifecycle::Handler::add_hooks) starts every handler from a clean
//! slate and [`Handler::remove_hooks`](crate::lifecycle::Handler::remove_hooks) drops any
//! gesture in flight, so disabling mid-drag never leaves a stale anchor behind.
//!
//! | Handler             | Kind                                   |
//! |---------------------|----------------------------------------|
//! | [`DragPan`]         | [`Interactions::DRAG`]                 |
//! | [`TouchZoom`]       | [`Interactions::TOUCH_ZOOM`]           |
//! | [`TouchRotate`]     | [`Interactions::TOUCH_ROTATE`]         |
//! | [`DoubleClickZoom`] | [`Interactions::DOUBLE_CLICK_ZOOM`]    |
//! | [`ScrollWheelZoom`] | [`Interactions::SCROLL_WHEEL_ZOOM`]    |
//! | [`KeyboardPan`]     | [`Interactions::KEYBOARD`]             |

use core::fmt::Debug;

use gtmap_gesture::{GestureFrame, InputEvent, TouchPhase};
use kurbo::{Point, Rect};

use crate::lifecycle::Handler;
use crate::types::{Interactions, ViewChange};

mod double_click;
mod drag;
mod keyboard;
mod touch_rotate;
mod touch_zoom;
mod wheel;

pub use double_click::DoubleClickZoom;
pub use drag::DragPan;
pub use keyboard::KeyboardPan;
pub use touch_rotate::TouchRotate;
pub use touch_zoom::TouchZoom;
pub use wheel::ScrollWheelZoom;

/// An interaction handler that can be driven with input events.
pub trait Interaction: Handler + Debug {
    /// The single interaction kind this handler implements.
    fn kind(&self) -> Interactions;

    /// React to one event. `viewport` is the map container in client coordinates.
    ///
    /// Only called while the handler is enabled.
    fn handle(&mut self, event: &InputEvent, viewport: Rect) -> Option<ViewChange>;
}

/// Client position to viewport-local position.
fn localize(position: Point, viewport: Rect) -> Point {
    Point::new(position.x - viewport.x0, position.y - viewport.y0)
}

/// The previous two-finger frame, tagged with the contact ids it was taken from.
#[derive(Copy, Clone, Debug, Default)]
struct PairBaseline {
    last: Option<(GestureFrame, (i32, i32))>,
}

impl PairBaseline {
    /// Record the frame carried by `event` and return `(previous, current)` when both
    /// frames come from the same two contacts.
    ///
    /// An end event that leaves the tracked pair down (another finger lifted) continues
    /// the gesture. Other touch events without a usable frame (fewer than two contacts,
    /// contacts closer than `min_distance`, cancel) clear the baseline. Non-touch events
    /// leave it alone.
    fn advance(
        &mut self,
        event: &InputEvent,
        min_distance: f64,
    ) -> Option<(GestureFrame, GestureFrame)> {
        let InputEvent::Touch { phase, .. } = event else {
            return None;
        };
        let current = match (event.gesture_frame(), event.pair_ids()) {
            (Some(frame), Some(ids))
                if frame.distance() >= min_distance && self.continues(*phase, ids) =>
            {
                (frame, ids)
            }
            _ => {
                self.reset();
                return None;
            }
        };
        match self.last.replace(current) {
            Some((previous, ids)) if ids == current.1 => Some((previous, current.0)),
            _ => None,
        }
    }

    fn continues(&self, phase: TouchPhase, ids: (i32, i32)) -> bool {
        match phase {
            TouchPhase::Start | TouchPhase::Move => true,
            TouchPhase::End => self.last.is_some_and(|(_, tracked)| tracked == ids),
            TouchPhase::Cancel => false,
        }
    }

    fn reset(&mut self) {
        self.last = None;
    }

    fn is_active(&self) -> bool {
        self.last.is_some()
    }
}
