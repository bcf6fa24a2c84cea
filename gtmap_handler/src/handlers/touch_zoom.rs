// Copyright 2025 the gtmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use gtmap_gesture::InputEvent;
use kurbo::Rect;

use super::{Interaction, PairBaseline};
use crate::lifecycle::Handler;
use crate::options::InteractionOptions;
use crate::types::{HookError, Interactions, ViewChange};

/// Pinch zoom with two fingers.
///
/// Each move emits the distance ratio to the previous frame as [`ViewChange::Zoom`],
/// anchored at the midpoint of the two contacts. Ratios compose: the product over a
/// gesture equals the final distance over the starting distance.
#[derive(Clone, Debug)]
pub struct TouchZoom {
    min_distance: f64,
    baseline: PairBaseline,
}

impl Default for TouchZoom {
    fn default() -> Self {
        Self::new(InteractionOptions::default().min_pinch_distance)
    }
}

impl TouchZoom {
    /// Create a pinch handler that ignores frames narrower than `min_distance` pixels.
    pub fn new(min_distance: f64) -> Self {
        Self {
            min_distance,
            baseline: PairBaseline::default(),
        }
    }

    /// True while two fingers are down and tracked.
    pub fn is_pinching(&self) -> bool {
        self.baseline.is_active()
    }
}

impl Handler for TouchZoom {
    fn add_hooks(&mut self) -> Result<(), HookError> {
        self.baseline.reset();
        Ok(())
    }

    fn remove_hooks(&mut self) -> Result<(), HookError> {
        self.baseline.reset();
        Ok(())
    }
}

impl Interaction for TouchZoom {
    fn kind(&self) -> Interactions {
        Interactions::TOUCH_ZOOM
    }

    fn handle(&mut self, event: &InputEvent, viewport: Rect) -> Option<ViewChange> {
        let (previous, current) = self.baseline.advance(event, self.min_distance)?;
        let scale = current.scale_from(&previous)?;
        if scale == 1.0 {
            return None;
        }
        Some(ViewChange::Zoom {
            scale,
            anchor: current.midpoint(&viewport),
        })
    }
}
