// Copyright 2025 the gtmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use gtmap_geometry::normalize_angle;
use gtmap_gesture::{TouchContact, extract_touch_pair};
use kurbo::{Point, Rect};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_f64(&mut self) -> f64 {
        // xorshift64*
        self.0 ^= self.0 >> 12;
        self.0 ^= self.0 << 25;
        self.0 ^= self.0 >> 27;
        let bits = self.0.wrapping_mul(0x2545_F491_4F6C_DD1D) >> 11;
        bits as f64 / (1_u64 << 53) as f64
    }
}

fn gen_contacts(n: usize, seed: u64) -> Vec<Vec<TouchContact>> {
    let mut rng = Rng::new(seed);
    (0..n)
        .map(|_| {
            (0..2)
                .map(|id| {
                    TouchContact::new(
                        id,
                        Point::new(rng.next_f64() * 1000.0, rng.next_f64() * 1000.0),
                    )
                })
                .collect()
        })
        .collect()
}

fn bench_extract(c: &mut Criterion) {
    let frames = gen_contacts(1024, 0x9E37_79B9);
    let viewport = Rect::new(100.0, 50.0, 900.0, 650.0);
    let mut group = c.benchmark_group("gesture");
    group.throughput(Throughput::Elements(frames.len() as u64));
    group.bench_function("extract_touch_pair", |b| {
        b.iter(|| {
            for contacts in &frames {
                black_box(extract_touch_pair(black_box(contacts)));
            }
        });
    });
    group.bench_function("extract_pair_midpoint_angle", |b| {
        b.iter(|| {
            for contacts in &frames {
                if let Some(f) = extract_touch_pair(contacts) {
                    black_box((f.midpoint(&viewport), f.angle(), f.distance()));
                }
            }
        });
    });
    group.finish();
}

fn bench_normalize(c: &mut Criterion) {
    let mut rng = Rng::new(42);
    let angles: Vec<f64> = (0..4096).map(|_| rng.next_f64() * 4000.0 - 2000.0).collect();
    let mut group = c.benchmark_group("angle");
    group.throughput(Throughput::Elements(angles.len() as u64));
    group.bench_function("normalize_angle", |b| {
        b.iter(|| {
            for &a in &angles {
                black_box(normalize_angle(black_box(a)));
            }
        });
    });
    group.finish();
}

criterion_group!(benches, bench_extract, bench_normalize);
criterion_main!(benches);
