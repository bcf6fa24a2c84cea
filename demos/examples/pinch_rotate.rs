// Copyright 2025 the gtmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A two-finger gesture driving a map view.
//!
//! Feeds a short touch sequence through the default handler set with rotation enabled,
//! and applies every resulting change to a `ViewState`.
//!
//! Run:
//! - `cargo run -p gtmap_demos --example pinch_rotate`

use gtmap_gesture::{InputEvent, TouchContact, TouchPhase};
use gtmap_handler::{HandlerSet, InteractionOptions, Interactions, ViewState};
use kurbo::{Point, Rect};

fn touch(phase: TouchPhase, a: (f64, f64), b: (f64, f64)) -> InputEvent {
    InputEvent::Touch {
        phase,
        contacts: vec![
            TouchContact::new(0, Point::new(a.0, a.1)),
            TouchContact::new(1, Point::new(b.0, b.1)),
        ],
    }
}

fn main() {
    env_logger::init();

    let viewport = Rect::new(0.0, 0.0, 800.0, 600.0);
    let mut view = ViewState::new(Point::new(512.0, 512.0), 3.0, viewport.size());
    let mut set = HandlerSet::with_defaults(&InteractionOptions {
        interactions: Interactions::default() | Interactions::TOUCH_ROTATE,
        ..Default::default()
    });

    let sequence = [
        touch(TouchPhase::Start, (300.0, 300.0), (500.0, 300.0)),
        // Spread to twice the distance.
        touch(TouchPhase::Move, (200.0, 300.0), (600.0, 300.0)),
        // Turn a quarter clockwise about the same midpoint.
        touch(TouchPhase::Move, (400.0, 100.0), (400.0, 500.0)),
        touch(TouchPhase::End, (400.0, 100.0), (400.0, 500.0)),
    ];

    for event in &sequence {
        for change in set.dispatch(event, viewport) {
            println!("{change:?}");
            view.apply(change);
        }
        println!(
            "  zoom={:.2} bearing={:.1} center=({:.1}, {:.1})",
            view.zoom, view.bearing, view.center.x, view.center.y
        );
    }
}
