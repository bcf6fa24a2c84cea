// Copyright 2025 the gtmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for handlers: hook errors, transition outcomes, interaction flags and view changes.
//!
//! ## Overview
//!
//! These types describe the handler protocol and its outputs.
//! They are produced by the [`lifecycle`](crate::lifecycle) wrapper and the
//! [`handlers`](crate::handlers), and consumed by the map widget that owns them.

use alloc::string::String;

use kurbo::{Point, Vec2};

/// Failure reported by a [`Handler`](crate::lifecycle::Handler) hook.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum HookError {
    /// Something the hook needs is not there (a platform capability, a target element).
    #[error("hook target unavailable: {0}")]
    Unavailable(&'static str),
    /// The hook ran and failed.
    #[error("hook failed: {0}")]
    Failed(String),
    /// The hook panicked. Only reported when built with `std`.
    #[error("hook panicked")]
    Panicked,
}

/// Outcome of [`Lifecycle::enable`](crate::lifecycle::Lifecycle::enable) and
/// [`Lifecycle::disable`](crate::lifecycle::Lifecycle::disable).
///
/// The enabled flag follows the caller's request in every case; this only reports what
/// happened to the hook.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    /// The handler was already in the requested state; no hook ran.
    Unchanged,
    /// The state changed and the hook completed.
    Applied,
    /// The state changed but the hook failed.
    HookFailed(HookError),
}

impl Transition {
    /// True unless a hook failed.
    pub fn is_ok(&self) -> bool {
        !matches!(self, Self::HookFailed(_))
    }

    /// True if the enabled flag actually flipped.
    pub fn changed(&self) -> bool {
        !matches!(self, Self::Unchanged)
    }

    /// The hook failure, if any.
    pub fn error(&self) -> Option<&HookError> {
        match self {
            Self::HookFailed(e) => Some(e),
            _ => None,
        }
    }
}

bitflags::bitflags! {
    /// Interaction kinds a map can turn on and off.
    ///
    /// Each concrete handler reports exactly one of these from
    /// [`Interaction::kind`](crate::handlers::Interaction::kind).
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Interactions: u8 {
        /// Pan by dragging with a mouse or one finger.
        const DRAG              = 0b0000_0001;
        /// Zoom by pinching two fingers.
        const TOUCH_ZOOM        = 0b0000_0010;
        /// Rotate by turning two fingers.
        const TOUCH_ROTATE      = 0b0000_0100;
        /// Zoom in on double click or double tap; shift zooms out.
        const DOUBLE_CLICK_ZOOM = 0b0000_1000;
        /// Zoom with the scroll wheel.
        const SCROLL_WHEEL_ZOOM = 0b0001_0000;
        /// Pan with arrow keys, zoom with `+`/`-`.
        const KEYBOARD          = 0b0010_0000;
    }
}

impl Default for Interactions {
    /// Everything except two-finger rotation.
    fn default() -> Self {
        Self::all() - Self::TOUCH_ROTATE
    }
}

/// A change to the map view requested by a handler.
///
/// Anchors are viewport-local pixel positions; offsets are screen pixels.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ViewChange {
    /// Move the map content on screen by this offset.
    Pan(Vec2),
    /// Multiply the map scale by `scale`, keeping `anchor` fixed on screen.
    Zoom {
        /// Scale factor; `2.0` is one zoom level in.
        scale: f64,
        /// Viewport-local fixed point.
        anchor: Point,
    },
    /// Change the zoom level by `delta`, keeping `anchor` fixed on screen.
    ZoomBy {
        /// Zoom levels; positive zooms in.
        delta: f64,
        /// Viewport-local fixed point.
        anchor: Point,
    },
    /// Turn the map clockwise by `degrees` around `anchor`.
    Rotate {
        /// Signed degrees; positive is clockwise on screen.
        degrees: f64,
        /// Viewport-local pivot.
        anchor: Point,
    },
}
