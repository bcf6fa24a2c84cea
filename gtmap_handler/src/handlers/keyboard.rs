// Copyright 2025 the gtmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use gtmap_gesture::{InputEvent, Key, Modifiers};
use kurbo::{Point, Rect, Vec2};

use super::Interaction;
use crate::lifecycle::Handler;
use crate::options::InteractionOptions;
use crate::types::{Interactions, ViewChange};

/// Pan with the arrow keys and zoom with `+`/`-` about the viewport center.
///
/// An arrow moves the view in its direction, so the content shifts the opposite way.
/// Shift triples both the pan distance and the zoom step. Key presses with
/// ctrl, alt or meta held are left to the host (browser shortcuts).
#[derive(Clone, Debug)]
pub struct KeyboardPan {
    pan_delta: f64,
    zoom_delta: f64,
}

impl Default for KeyboardPan {
    fn default() -> Self {
        let options = InteractionOptions::default();
        Self::new(options.keyboard_pan_delta, options.zoom_delta)
    }
}

impl KeyboardPan {
    /// Create a keyboard handler.
    pub fn new(pan_delta: f64, zoom_delta: f64) -> Self {
        Self {
            pan_delta,
            zoom_delta,
        }
    }
}

impl Handler for KeyboardPan {}

impl Interaction for KeyboardPan {
    fn kind(&self) -> Interactions {
        Interactions::KEYBOARD
    }

    fn handle(&mut self, event: &InputEvent, viewport: Rect) -> Option<ViewChange> {
        let InputEvent::Key { key, modifiers } = event else {
            return None;
        };
        if modifiers.intersects(Modifiers::CTRL | Modifiers::ALT | Modifiers::META) {
            return None;
        }
        let factor = if modifiers.contains(Modifiers::SHIFT) {
            3.0
        } else {
            1.0
        };
        let pan = self.pan_delta * factor;
        let zoom = self.zoom_delta * factor;
        let center = Point::new(viewport.width() / 2.0, viewport.height() / 2.0);
        match key {
            Key::ArrowLeft => Some(ViewChange::Pan(Vec2::new(pan, 0.0))),
            Key::ArrowRight => Some(ViewChange::Pan(Vec2::new(-pan, 0.0))),
            Key::ArrowUp => Some(ViewChange::Pan(Vec2::new(0.0, pan))),
            Key::ArrowDown => Some(ViewChange::Pan(Vec2::new(0.0, -pan))),
            Key::ZoomIn => Some(ViewChange::ZoomBy {
                delta: zoom,
                anchor: center,
            }),
            Key::ZoomOut => Some(ViewChange::ZoomBy {
                delta: -zoom,
                anchor: center,
            }),
            Key::Other => None,
        }
    }
}
