// Copyright 2025 the gtmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! gtmap Gesture: stateless gesture extraction for map interaction.
//!
//! ## Overview
//!
//! This crate turns raw multi-touch input into the geometric quantities the interaction
//! handlers consume: the two contacts of a pinch or rotate, their separation, distance,
//! angle and midpoint.
//! It holds no state between events.
//! Anything that must persist across a gesture, such as the distance when the pinch
//! started, belongs to the handler that needs it.
//!
//! - [`touch`]: [`GestureFrame`](crate::touch::GestureFrame), [`extract_touch_pair`](crate::touch::extract_touch_pair)
//!   and [`touch_midpoint`](crate::touch::touch_midpoint).
//! - [`input`]: the platform-neutral [`InputEvent`](crate::input::InputEvent) model handlers are driven with.
//! - `web` (feature): `TouchSource` for `web_sys::TouchEvent`/`TouchList` and
//!   `ReferenceRect` for `web_sys::DomRect`.
//!
//! ## Example
//!
//! ```rust
//! use gtmap_gesture::touch::{TouchContact, extract_touch_pair};
//! use kurbo::{Point, Rect};
//!
//! let contacts = vec![
//!     TouchContact::new(0, Point::new(110.0, 60.0)),
//!     TouchContact::new(1, Point::new(130.0, 100.0)),
//! ];
//! let frame = extract_touch_pair(&contacts).unwrap();
//! assert_eq!((frame.dx, frame.dy), (20.0, 40.0));
//!
//! // The map container sits at (100, 50) in the page.
//! let viewport = Rect::new(100.0, 50.0, 500.0, 350.0);
//! assert_eq!(frame.midpoint(&viewport), Point::new(20.0, 30.0));
//!
//! // A single finger is not a two-finger gesture.
//! assert!(extract_touch_pair(&contacts[..1]).is_none());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod input;
pub mod touch;
#[cfg(feature = "web")]
pub mod web;

pub use input::{InputEvent, Key, Modifiers, TouchPhase};
pub use touch::{
    GestureFrame, ReferenceRect, TouchContact, TouchSource, extract_touch_pair, touch_midpoint,
};
