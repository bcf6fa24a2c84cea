// Copyright 2025 the gtmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use gtmap_gesture::InputEvent;
use kurbo::Rect;

use super::{Interaction, PairBaseline};
use crate::lifecycle::Handler;
use crate::options::InteractionOptions;
use crate::types::{HookError, Interactions, ViewChange};

/// Rotate the map by turning two fingers.
///
/// Uses the same contact pair as [`TouchZoom`](super::TouchZoom): the first two touches
/// in event order. Each move emits the signed turn since the previous frame, in
/// `(-180, 180]` degrees, so crossing the 0°/360° direction never produces a spin.
#[derive(Clone, Debug)]
pub struct TouchRotate {
    min_distance: f64,
    baseline: PairBaseline,
}

impl Default for TouchRotate {
    fn default() -> Self {
        Self::new(InteractionOptions::default().min_pinch_distance)
    }
}

impl TouchRotate {
    /// Create a rotate handler that ignores frames narrower than `min_distance` pixels.
    ///
    /// Close fingers make the angle jittery; the threshold keeps it stable.
    pub fn new(min_distance: f64) -> Self {
        Self {
            min_distance,
            baseline: PairBaseline::default(),
        }
    }

    /// True while two fingers are down and tracked.
    pub fn is_rotating(&self) -> bool {
        self.baseline.is_active()
    }
}

impl Handler for TouchRotate {
    fn add_hooks(&mut self) -> Result<(), HookError> {
        self.baseline.reset();
        Ok(())
    }

    fn remove_hooks(&mut self) -> Result<(), HookError> {
        self.baseline.reset();
        Ok(())
    }
}

impl Interaction for TouchRotate {
    fn kind(&self) -> Interactions {
        Interactions::TOUCH_ROTATE
    }

    fn handle(&mut self, event: &InputEvent, viewport: Rect) -> Option<ViewChange> {
        let (previous, current) = self.baseline.advance(event, self.min_distance)?;
        let degrees = current.rotation_from(&previous);
        if degrees == 0.0 {
            return None;
        }
        Some(ViewChange::Rotate {
            degrees,
            anchor: current.midpoint(&viewport),
        })
    }
}
