// Copyright 2025 the gtmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;

use gtmap_gesture::InputEvent;
use kurbo::Rect;

use super::{Interaction, localize};
use crate::lifecycle::Handler;
use crate::options::InteractionOptions;
use crate::types::{HookError, Interactions, ViewChange};

/// Zoom with the scroll wheel about the pointer position.
///
/// Scrolling down (positive `delta_y`) zooms out. `px_per_zoom_level` pixels of scroll
/// make one zoom level.
#[derive(Clone, Debug)]
pub struct ScrollWheelZoom {
    px_per_zoom_level: f64,
}

impl Default for ScrollWheelZoom {
    fn default() -> Self {
        Self::new(InteractionOptions::default().wheel_px_per_zoom_level)
    }
}

impl ScrollWheelZoom {
    /// Create a wheel handler with the given scroll-to-zoom ratio.
    pub fn new(px_per_zoom_level: f64) -> Self {
        Self { px_per_zoom_level }
    }

    fn ratio_is_usable(&self) -> bool {
        self.px_per_zoom_level.is_finite() && self.px_per_zoom_level > 0.0
    }
}

impl Handler for ScrollWheelZoom {
    fn add_hooks(&mut self) -> Result<(), HookError> {
        if !self.ratio_is_usable() {
            return Err(HookError::Failed(format!(
                "wheel pixels per zoom level must be positive, got {}",
                self.px_per_zoom_level
            )));
        }
        Ok(())
    }
}

impl Interaction for ScrollWheelZoom {
    fn kind(&self) -> Interactions {
        Interactions::SCROLL_WHEEL_ZOOM
    }

    fn handle(&mut self, event: &InputEvent, viewport: Rect) -> Option<ViewChange> {
        let InputEvent::Wheel { position, delta_y } = event else {
            return None;
        };
        if *delta_y == 0.0 || !self.ratio_is_usable() {
            return None;
        }
        Some(ViewChange::ZoomBy {
            delta: -delta_y / self.px_per_zoom_level,
            anchor: localize(*position, viewport),
        })
    }
}
