// Copyright 2025 the gtmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The map's collection of interaction handlers.
//!
//! ## Overview
//!
//! [`HandlerSet`] owns one [`Lifecycle`] per [`Interactions`] kind, switches them on and off
//! from configuration, and feeds input events to the enabled ones.
//!
//! ## Isolation
//!
//! Every handler transitions independently. A failed hook is logged at `warn`, reported in
//! the returned [`Transition`], and has no effect on any other handler or on the set's
//! bookkeeping.
//!
//! ## Dispatch order
//!
//! Handlers see each event in registration order. Several may respond to one event
//! (a two-finger move can both zoom and rotate); their changes come back in that order.

use alloc::boxed::Box;
use alloc::vec::Vec;

use gtmap_gesture::InputEvent;
use kurbo::Rect;

use crate::handlers::{
    DoubleClickZoom, DragPan, Interaction, KeyboardPan, ScrollWheelZoom, TouchRotate, TouchZoom,
};
use crate::lifecycle::Lifecycle;
use crate::options::InteractionOptions;
use crate::types::{Interactions, Transition, ViewChange};

/// Interaction handlers owned by a map, at most one per kind.
///
/// ## Usage
///
/// - Build with [`HandlerSet::with_defaults`] for the six built-in handlers, or start from
///   [`HandlerSet::new`] and [`insert`](HandlerSet::insert) your own.
/// - Toggle with [`enable`](HandlerSet::enable) / [`disable`](HandlerSet::disable), or
///   reconcile against a whole flag set with [`apply`](HandlerSet::apply).
/// - Call [`dispatch`](HandlerSet::dispatch) for every input event and apply the returned
///   changes to the view.
#[derive(Default)]
pub struct HandlerSet {
    entries: Vec<Lifecycle<Box<dyn Interaction>>>,
}

impl core::fmt::Debug for HandlerSet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HandlerSet")
            .field("registered", &self.registered())
            .field("enabled", &self.enabled())
            .finish_non_exhaustive()
    }
}

impl HandlerSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register the built-in handlers configured from `options`, and enable those listed in
    /// `options.interactions`.
    pub fn with_defaults(options: &InteractionOptions) -> Self {
        let mut set = Self::new();
        set.insert(DragPan::new());
        set.insert(TouchZoom::new(options.min_pinch_distance));
        set.insert(TouchRotate::new(options.min_pinch_distance));
        set.insert(DoubleClickZoom::new(options.zoom_delta));
        set.insert(ScrollWheelZoom::new(options.wheel_px_per_zoom_level));
        set.insert(KeyboardPan::new(
            options.keyboard_pan_delta,
            options.zoom_delta,
        ));
        let _ = set.apply(options.interactions);
        set
    }

    /// Register a handler, disabled.
    ///
    /// A handler of the same kind is replaced; it is disabled first and the outcome of that
    /// transition is returned.
    pub fn insert<H: Interaction + 'static>(&mut self, handler: H) -> Option<Transition> {
        let kind = handler.kind();
        let entry = Lifecycle::new(Box::new(handler) as Box<dyn Interaction>);
        match self.position(kind) {
            Some(i) => {
                let t = self.entries[i].disable();
                report(kind, "disable", &t);
                self.entries[i] = entry;
                Some(t)
            }
            None => {
                self.entries.push(entry);
                None
            }
        }
    }

    /// Disable and drop the handler of `kind`. Returns the disable transition.
    pub fn remove(&mut self, kind: Interactions) -> Option<Transition> {
        let i = self.position(kind)?;
        let mut entry = self.entries.remove(i);
        let t = entry.disable();
        report(kind, "disable", &t);
        Some(t)
    }

    /// Enable the handler of `kind`. `None` if no such handler is registered.
    pub fn enable(&mut self, kind: Interactions) -> Option<Transition> {
        self.set_enabled(kind, true)
    }

    /// Disable the handler of `kind`. `None` if no such handler is registered.
    pub fn disable(&mut self, kind: Interactions) -> Option<Transition> {
        self.set_enabled(kind, false)
    }

    /// Whether the handler of `kind` is registered and enabled.
    pub fn is_enabled(&self, kind: Interactions) -> bool {
        self.position(kind)
            .is_some_and(|i| self.entries[i].is_enabled())
    }

    /// Kinds of all enabled handlers.
    pub fn enabled(&self) -> Interactions {
        self.entries
            .iter()
            .filter(|e| e.is_enabled())
            .fold(Interactions::empty(), |acc, e| acc | e.handler().kind())
    }

    /// Kinds of all registered handlers.
    pub fn registered(&self) -> Interactions {
        self.entries
            .iter()
            .fold(Interactions::empty(), |acc, e| acc | e.handler().kind())
    }

    /// Enable exactly the handlers in `wanted` and disable the rest.
    ///
    /// Returns the transitions that actually happened, in registration order.
    pub fn apply(&mut self, wanted: Interactions) -> Vec<(Interactions, Transition)> {
        let mut out = Vec::new();
        for entry in &mut self.entries {
            let kind = entry.handler().kind();
            let on = wanted.contains(kind);
            let t = entry.set_enabled(on);
            if t.changed() {
                report(kind, if on { "enable" } else { "disable" }, &t);
                out.push((kind, t));
            }
        }
        out
    }

    /// Feed one event to every enabled handler and collect the view changes they request.
    pub fn dispatch(&mut self, event: &InputEvent, viewport: Rect) -> Vec<ViewChange> {
        self.entries
            .iter_mut()
            .filter(|e| e.is_enabled())
            .filter_map(|e| e.handler_mut().handle(event, viewport))
            .collect()
    }

    /// Number of registered handlers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no handler is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, kind: Interactions) -> Option<usize> {
        self.entries.iter().position(|e| e.handler().kind() == kind)
    }

    fn set_enabled(&mut self, kind: Interactions, on: bool) -> Option<Transition> {
        let i = self.position(kind)?;
        let t = self.entries[i].set_enabled(on);
        report(kind, if on { "enable" } else { "disable" }, &t);
        Some(t)
    }
}

fn report(kind: Interactions, action: &str, t: &Transition) {
    match t {
        Transition::Unchanged => {}
        Transition::Applied => log::debug!("{action} {kind:?}"),
        Transition::HookFailed(e) => log::warn!("{action} {kind:?}: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::Handler;
    use crate::types::HookError;
    use alloc::vec;
    use gtmap_gesture::{Key, Modifiers, TouchContact, TouchPhase};
    use kurbo::{Point, Vec2};

    const VIEW: Rect = Rect::new(0.0, 0.0, 400.0, 300.0);

    #[derive(Debug)]
    struct Broken;

    impl Handler for Broken {
        fn add_hooks(&mut self) -> Result<(), HookError> {
            Err(HookError::Unavailable("keyboard focus"))
        }
    }

    impl Interaction for Broken {
        fn kind(&self) -> Interactions {
            Interactions::KEYBOARD
        }

        fn handle(&mut self, _event: &InputEvent, _viewport: Rect) -> Option<ViewChange> {
            Some(ViewChange::Pan(Vec2::new(1.0, 1.0)))
        }
    }

    #[test]
    fn defaults_enable_all_but_rotation() {
        let set = HandlerSet::with_defaults(&InteractionOptions::default());
        assert_eq!(set.len(), 6);
        assert_eq!(set.registered(), Interactions::all());
        assert_eq!(set.enabled(), Interactions::default());
        assert!(!set.is_enabled(Interactions::TOUCH_ROTATE));
    }

    #[test]
    fn enable_and_disable_are_idempotent() {
        let mut set = HandlerSet::with_defaults(&InteractionOptions::default());
        assert_eq!(
            set.enable(Interactions::TOUCH_ROTATE),
            Some(Transition::Applied)
        );
        assert_eq!(
            set.enable(Interactions::TOUCH_ROTATE),
            Some(Transition::Unchanged)
        );
        assert_eq!(set.disable(Interactions::DRAG), Some(Transition::Applied));
        assert_eq!(set.disable(Interactions::DRAG), Some(Transition::Unchanged));
        assert!(!set.is_enabled(Interactions::DRAG));
    }

    #[test]
    fn unknown_kind_is_none() {
        let mut set = HandlerSet::new();
        assert!(set.is_empty());
        assert_eq!(set.enable(Interactions::DRAG), None);
        assert!(!set.is_enabled(Interactions::DRAG));
    }

    #[test]
    fn apply_reports_only_real_transitions() {
        let mut set = HandlerSet::with_defaults(&InteractionOptions::default());
        let changes = set.apply(Interactions::DRAG | Interactions::TOUCH_ROTATE);
        let kinds: Vec<Interactions> = changes.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            kinds,
            vec![
                Interactions::TOUCH_ZOOM,
                Interactions::TOUCH_ROTATE,
                Interactions::DOUBLE_CLICK_ZOOM,
                Interactions::SCROLL_WHEEL_ZOOM,
                Interactions::KEYBOARD,
            ]
        );
        assert!(changes.iter().all(|(_, t)| *t == Transition::Applied));
        assert!(
            set.apply(Interactions::DRAG | Interactions::TOUCH_ROTATE)
                .is_empty()
        );
    }

    #[test]
    fn failing_handler_does_not_affect_others() {
        let mut set = HandlerSet::with_defaults(&InteractionOptions {
            interactions: Interactions::empty(),
            ..Default::default()
        });
        let replaced = set.insert(Broken);
        assert_eq!(replaced, Some(Transition::Unchanged));

        let changes = set.apply(Interactions::DRAG | Interactions::KEYBOARD);
        assert_eq!(changes.len(), 2);
        assert_eq!(changes[0], (Interactions::DRAG, Transition::Applied));
        assert_eq!(
            changes[1],
            (
                Interactions::KEYBOARD,
                Transition::HookFailed(HookError::Unavailable("keyboard focus"))
            )
        );
        // The flag still follows the request.
        assert!(set.is_enabled(Interactions::KEYBOARD));
        assert!(set.is_enabled(Interactions::DRAG));
    }

    #[test]
    fn bad_wheel_ratio_is_reported_but_enabled() {
        let mut set = HandlerSet::with_defaults(&InteractionOptions {
            interactions: Interactions::empty(),
            wheel_px_per_zoom_level: -5.0,
            ..Default::default()
        });
        let t = set.enable(Interactions::SCROLL_WHEEL_ZOOM).unwrap();
        assert!(!t.is_ok());
        assert!(set.is_enabled(Interactions::SCROLL_WHEEL_ZOOM));
        let wheel = InputEvent::Wheel {
            position: Point::new(10.0, 10.0),
            delta_y: -60.0,
        };
        assert!(set.dispatch(&wheel, VIEW).is_empty());
    }

    #[test]
    fn dispatch_skips_disabled_handlers() {
        let mut set = HandlerSet::with_defaults(&InteractionOptions::default());
        let key = InputEvent::Key {
            key: Key::ArrowUp,
            modifiers: Modifiers::empty(),
        };
        assert_eq!(
            set.dispatch(&key, VIEW),
            vec![ViewChange::Pan(Vec2::new(0.0, 80.0))]
        );
        let _ = set.disable(Interactions::KEYBOARD);
        assert!(set.dispatch(&key, VIEW).is_empty());
    }

    #[test]
    fn two_finger_move_can_zoom_and_rotate() {
        let mut set = HandlerSet::with_defaults(&InteractionOptions::default());
        let _ = set.enable(Interactions::TOUCH_ROTATE);
        let frame = |phase, b: Point| InputEvent::Touch {
            phase,
            contacts: vec![
                TouchContact::new(0, Point::new(100.0, 100.0)),
                TouchContact::new(1, b),
            ],
        };
        assert!(
            set.dispatch(&frame(TouchPhase::Start, Point::new(200.0, 100.0)), VIEW)
                .is_empty()
        );
        let out = set.dispatch(&frame(TouchPhase::Move, Point::new(100.0, 300.0)), VIEW);
        assert_eq!(out.len(), 2);
        assert!(matches!(out[0], ViewChange::Zoom { scale, .. } if scale == 2.0));
        assert!(matches!(out[1], ViewChange::Rotate { degrees, .. } if (degrees - 90.0).abs() < 1e-9));
    }

    #[test]
    fn removing_a_handler_disables_it() {
        let mut set = HandlerSet::with_defaults(&InteractionOptions::default());
        assert_eq!(set.remove(Interactions::DRAG), Some(Transition::Applied));
        assert_eq!(set.len(), 5);
        assert_eq!(set.remove(Interactions::DRAG), None);
        assert!(!set.registered().contains(Interactions::DRAG));
    }
}
