// Copyright 2025 the gtmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point construction, angle wrapping and two-finger gesture extraction.
//!
//! This example walks through the stateless helpers the handlers build on.
//!
//! Run:
//! - `cargo run -p gtmap_demos --example gesture_basics`

use gtmap_geometry::{degrees_to_radians, normalize_angle, to_point};
use gtmap_gesture::{TouchContact, extract_touch_pair, touch_midpoint};
use kurbo::{Point, Rect};

fn main() {
    // Points from scalars or from anything point-like.
    println!("to_point(3, 4)          = {:?}", to_point(3.0, Some(4.0)));
    println!("to_point(3)             = {:?}", to_point(3.0, None));
    println!("to_point((1, 2), 9)     = {:?}", to_point((1.0, 2.0), Some(9.0)));

    // Angles.
    for deg in [-90.0, 0.0, 360.0, 725.0] {
        println!("normalize_angle({deg:>6}) = {}", normalize_angle(deg));
    }
    println!("degrees_to_radians(180) = {}", degrees_to_radians(180.0));
    println!("degrees_to_radians(None) = {}", degrees_to_radians(None));

    // The map container sits at (100, 50) in the page.
    let viewport = Rect::new(100.0, 50.0, 500.0, 350.0);
    let contacts = vec![
        TouchContact::new(7, Point::new(120.0, 80.0)),
        TouchContact::new(9, Point::new(220.0, 180.0)),
        TouchContact::new(11, Point::new(400.0, 300.0)),
    ];

    match extract_touch_pair(&contacts) {
        Some(frame) => {
            println!(
                "pair: dx={} dy={} distance={:.2} angle={:.1}",
                frame.dx,
                frame.dy,
                frame.distance(),
                frame.angle()
            );
            println!("local midpoint: {:?}", frame.midpoint(&viewport));
            println!(
                "touch_midpoint agrees: {:?}",
                touch_midpoint(frame.primary, frame.secondary, &viewport)
            );
        }
        None => println!("not a two-finger gesture"),
    }

    // Only the first two contacts count; one finger is no pair at all.
    println!("single finger: {:?}", extract_touch_pair(&contacts[..1]));
}
