// Copyright 2025 the gtmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! gtmap Handler: enable/disable lifecycle and built-in interaction handlers.
//!
//! ## Overview
//!
//! A map owns a set of interaction handlers: drag to pan, pinch to zoom, two-finger rotate,
//! double-click zoom, scroll-wheel zoom and keyboard navigation. Each one can be switched on
//! and off independently, and switching runs the handler's hooks exactly once per real change.
//!
//! - [`lifecycle`]: the [`Handler`] hook trait and the [`Lifecycle`] wrapper that owns the
//!   enabled flag.
//! - [`handlers`]: the six built-in handlers, driven by
//!   [`InputEvent`](gtmap_gesture::InputEvent)s and emitting [`ViewChange`]s.
//! - [`set`]: [`HandlerSet`], one handler per [`Interactions`] kind, with logging of
//!   every transition.
//! - [`options`]: [`InteractionOptions`] with the default tuning.
//! - `view` (requires `std`): `ViewState`, a reference map view that applies changes.
//!
//! Hook failures never escape as panics or block other handlers; they come back as
//! [`Transition::HookFailed`] and the enabled flag still follows the request.
//!
//! ## Example
//!
//! ```rust
//! use gtmap_gesture::{InputEvent, Key, Modifiers};
//! use gtmap_handler::{HandlerSet, InteractionOptions, Interactions, Transition, ViewChange};
//! use kurbo::{Rect, Vec2};
//!
//! let mut set = HandlerSet::with_defaults(&InteractionOptions::default());
//! assert!(!set.is_enabled(Interactions::TOUCH_ROTATE));
//! assert_eq!(set.enable(Interactions::TOUCH_ROTATE), Some(Transition::Applied));
//! assert_eq!(set.enable(Interactions::TOUCH_ROTATE), Some(Transition::Unchanged));
//!
//! let viewport = Rect::new(0.0, 0.0, 800.0, 600.0);
//! let key = InputEvent::Key { key: Key::ArrowLeft, modifiers: Modifiers::empty() };
//! assert_eq!(set.dispatch(&key, viewport), vec![ViewChange::Pan(Vec2::new(80.0, 0.0))]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`. With `std`, hook panics are caught as well.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod handlers;
pub mod lifecycle;
pub mod options;
pub mod set;
pub mod types;
#[cfg(feature = "std")]
pub mod view;

pub use handlers::{
    DoubleClickZoom, DragPan, Interaction, KeyboardPan, ScrollWheelZoom, TouchRotate, TouchZoom,
};
pub use lifecycle::{Handler, Lifecycle};
pub use options::InteractionOptions;
pub use set::HandlerSet;
pub use types::{HookError, Interactions, Transition, ViewChange};
#[cfg(feature = "std")]
pub use view::ViewState;
