// Copyright 2025 the gtmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use gtmap_gesture::{InputEvent, Modifiers};
use kurbo::Rect;

use super::{Interaction, localize};
use crate::lifecycle::Handler;
use crate::options::InteractionOptions;
use crate::types::{Interactions, ViewChange};

/// Zoom in by one step on double click or double tap, about the clicked point.
/// Holding shift zooms out instead.
#[derive(Clone, Debug)]
pub struct DoubleClickZoom {
    zoom_delta: f64,
}

impl Default for DoubleClickZoom {
    fn default() -> Self {
        Self::new(InteractionOptions::default().zoom_delta)
    }
}

impl DoubleClickZoom {
    /// Create a handler that zooms by `zoom_delta` levels per double click.
    pub fn new(zoom_delta: f64) -> Self {
        Self { zoom_delta }
    }
}

impl Handler for DoubleClickZoom {}

impl Interaction for DoubleClickZoom {
    fn kind(&self) -> Interactions {
        Interactions::DOUBLE_CLICK_ZOOM
    }

    fn handle(&mut self, event: &InputEvent, viewport: Rect) -> Option<ViewChange> {
        let InputEvent::DoubleClick {
            position,
            modifiers,
        } = event
        else {
            return None;
        };
        let delta = if modifiers.contains(Modifiers::SHIFT) {
            -self.zoom_delta
        } else {
            self.zoom_delta
        };
        Some(ViewChange::ZoomBy {
            delta,
            anchor: localize(*position, viewport),
        })
    }
}
