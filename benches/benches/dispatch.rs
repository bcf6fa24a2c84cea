// Copyright 2025 the gtmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use gtmap_gesture::{InputEvent, Key, Modifiers, TouchContact, TouchPhase};
use gtmap_handler::{HandlerSet, InteractionOptions, Interactions};
use kurbo::{Point, Rect};

fn gesture_sequence(steps: usize) -> Vec<InputEvent> {
    let mut out = Vec::with_capacity(steps + 2);
    let touch = |phase, t: f64| InputEvent::Touch {
        phase,
        contacts: vec![
            TouchContact::new(0, Point::new(400.0 - 100.0 * t.cos(), 300.0 - 100.0 * t.sin())),
            TouchContact::new(1, Point::new(400.0 + 150.0 * t.cos(), 300.0 + 150.0 * t.sin())),
        ],
    };
    out.push(touch(TouchPhase::Start, 0.0));
    for i in 1..=steps {
        out.push(touch(TouchPhase::Move, i as f64 * 0.01));
    }
    out.push(touch(TouchPhase::End, steps as f64 * 0.01));
    out
}

fn bench_dispatch(c: &mut Criterion) {
    let viewport = Rect::new(0.0, 0.0, 800.0, 600.0);
    let options = InteractionOptions {
        interactions: Interactions::all(),
        ..Default::default()
    };
    let events = gesture_sequence(256);

    let mut group = c.benchmark_group("dispatch");
    group.throughput(Throughput::Elements(events.len() as u64));
    group.bench_function("two_finger_gesture", |b| {
        b.iter_batched(
            || HandlerSet::with_defaults(&options),
            |mut set| {
                for ev in &events {
                    black_box(set.dispatch(ev, viewport));
                }
            },
            BatchSize::SmallInput,
        );
    });

    let key = InputEvent::Key {
        key: Key::ArrowRight,
        modifiers: Modifiers::empty(),
    };
    let mut set = HandlerSet::with_defaults(&options);
    group.bench_function("key_press", |b| {
        b.iter(|| black_box(set.dispatch(black_box(&key), viewport)));
    });

    group.bench_function("apply_toggle", |b| {
        let mut on = false;
        b.iter(|| {
            on = !on;
            let wanted = if on {
                Interactions::all()
            } else {
                Interactions::empty()
            };
            black_box(set.apply(wanted));
        });
    });
    group.finish();
}

criterion_group!(benches, bench_dispatch);
criterion_main!(benches);
