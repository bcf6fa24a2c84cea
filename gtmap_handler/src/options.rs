// Copyright 2025 the gtmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interaction configuration.

use crate::types::Interactions;

/// Options for the built-in handlers.
///
/// Defaults follow the usual web-map conventions: everything but two-finger rotation is on,
/// one zoom level per double click, 60 wheel pixels per zoom level, 80 pixels per arrow key.
#[derive(Clone, Debug, PartialEq)]
pub struct InteractionOptions {
    /// Which handlers start enabled.
    pub interactions: Interactions,
    /// Zoom levels per double click or `+`/`-` key press.
    pub zoom_delta: f64,
    /// Wheel scroll distance in pixels that equals one zoom level.
    pub wheel_px_per_zoom_level: f64,
    /// Pixels panned per arrow key press. Shift triples it.
    pub keyboard_pan_delta: f64,
    /// Two-finger frames with a narrower separation than this are ignored.
    pub min_pinch_distance: f64,
}

impl Default for InteractionOptions {
    fn default() -> Self {
        Self {
            interactions: Interactions::default(),
            zoom_delta: 1.0,
            wheel_px_per_zoom_level: 60.0,
            keyboard_pan_delta: 80.0,
            min_pinch_distance: 1.0,
        }
    }
}
