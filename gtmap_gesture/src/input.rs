// Copyright 2025 the gtmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Platform-neutral input events.
//!
//! The host (a browser binding, a windowing toolkit, a test) translates its native events
//! into [`InputEvent`] values and hands them to the interaction handlers.
//! All positions are client coordinates; handlers localize them against the viewport
//! rectangle they are given alongside the event.

use alloc::vec::Vec;

use kurbo::Point;

use crate::touch::{GestureFrame, TouchContact, extract_touch_pair};

bitflags::bitflags! {
    /// Keyboard modifiers held while an event fired.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift key.
        const SHIFT = 0b0000_0001;
        /// Control key.
        const CTRL  = 0b0000_0010;
        /// Alt / Option key.
        const ALT   = 0b0000_0100;
        /// Meta / Command / Windows key.
        const META  = 0b0000_1000;
    }
}

/// Phase of a touch event.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TouchPhase {
    /// One or more contacts went down.
    Start,
    /// Contacts moved.
    Move,
    /// One or more contacts lifted.
    End,
    /// The platform aborted the touch sequence.
    Cancel,
}

/// Keys the keyboard handler reacts to.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Key {
    /// Left arrow.
    ArrowLeft,
    /// Right arrow.
    ArrowRight,
    /// Up arrow.
    ArrowUp,
    /// Down arrow.
    ArrowDown,
    /// `+` or `=`.
    ZoomIn,
    /// `-` or `_`.
    ZoomOut,
    /// Anything else.
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_dom_key(key: &str) -> Self {
        match key {
            "ArrowLeft" | "Left" => Self::ArrowLeft,
            "ArrowRight" | "Right" => Self::ArrowRight,
            "ArrowUp" | "Up" => Self::ArrowUp,
            "ArrowDown" | "Down" => Self::ArrowDown,
            "+" | "=" => Self::ZoomIn,
            "-" | "_" => Self::ZoomOut,
            _ => Self::Other,
        }
    }
}

/// A raw input event in client coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// Primary pointer pressed.
    PointerDown {
        /// Pointer position.
        position: Point,
    },
    /// Pointer moved, pressed or not.
    PointerMove {
        /// Pointer position.
        position: Point,
    },
    /// Primary pointer released.
    PointerUp {
        /// Pointer position.
        position: Point,
    },
    /// Double click or double tap.
    DoubleClick {
        /// Pointer position.
        position: Point,
        /// Modifiers held during the click.
        modifiers: Modifiers,
    },
    /// Scroll wheel or trackpad scroll.
    Wheel {
        /// Pointer position.
        position: Point,
        /// Vertical scroll distance in pixels; positive scrolls down.
        delta_y: f64,
    },
    /// Touch contacts changed.
    Touch {
        /// What happened.
        phase: TouchPhase,
        /// Contacts still down after the event, in event order.
        contacts: Vec<TouchContact>,
    },
    /// Key pressed.
    Key {
        /// Which key.
        key: Key,
        /// Modifiers held.
        modifiers: Modifiers,
    },
}

impl InputEvent {
    /// Two-finger frame for touch events with at least two contacts down.
    pub fn gesture_frame(&self) -> Option<GestureFrame> {
        match self {
            Self::Touch { contacts, .. } => extract_touch_pair(contacts),
            _ => None,
        }
    }

    /// Identifiers of the first two contacts, when a two-finger frame exists.
    pub fn pair_ids(&self) -> Option<(i32, i32)> {
        match self {
            Self::Touch { contacts, .. } if contacts.len() >= 2 => {
                Some((contacts[0].id, contacts[1].id))
            }
            _ => None,
        }
    }
}
