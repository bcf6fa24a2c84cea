// Copyright 2025 the gtmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Enabling and disabling handlers, including one whose hook fails.
//!
//! Transitions are logged through `log`; set `RUST_LOG=debug` to see them.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p gtmap_demos --example handler_lifecycle`

use gtmap_gesture::InputEvent;
use gtmap_handler::{
    Handler, HandlerSet, HookError, Interaction, InteractionOptions, Interactions, ViewChange,
};
use kurbo::Rect;

/// A keyboard handler whose focus target never shows up.
#[derive(Debug)]
struct DetachedKeyboard;

impl Handler for DetachedKeyboard {
    fn add_hooks(&mut self) -> Result<(), HookError> {
        Err(HookError::Unavailable("keyboard focus target"))
    }
}

impl Interaction for DetachedKeyboard {
    fn kind(&self) -> Interactions {
        Interactions::KEYBOARD
    }

    fn handle(&mut self, _event: &InputEvent, _viewport: Rect) -> Option<ViewChange> {
        None
    }
}

fn main() {
    env_logger::init();

    let mut set = HandlerSet::with_defaults(&InteractionOptions::default());
    println!("registered: {:?}", set.registered());
    println!("enabled:    {:?}", set.enabled());

    // Idempotent toggles.
    println!("enable rotate:       {:?}", set.enable(Interactions::TOUCH_ROTATE));
    println!("enable rotate again: {:?}", set.enable(Interactions::TOUCH_ROTATE));
    println!("disable drag:        {:?}", set.disable(Interactions::DRAG));

    // Swap in a broken keyboard handler and re-enable it.
    println!("replace keyboard:    {:?}", set.insert(DetachedKeyboard));
    for (kind, t) in set.apply(Interactions::default()) {
        match t.error() {
            Some(e) => println!("{kind:?}: enabled, but {e}"),
            None => println!("{kind:?}: {t:?}"),
        }
    }

    // The failure is reported and nothing else is affected.
    println!("enabled:    {:?}", set.enabled());
    println!("{set:?}");
}
