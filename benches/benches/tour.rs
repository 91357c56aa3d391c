// Copyright 2025 the Storymap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use storymap_tour::{GeoPoint, Marker, Tour, ViewStep, Zoom};
use storymap_view::{MapSink, TourDriver, commands_for, overview_bounds};

struct NullMap;

impl MapSink for NullMap {
    fn recenter(&mut self, center: GeoPoint) {
        black_box(center);
    }

    fn set_zoom(&mut self, zoom: Zoom) {
        black_box(zoom);
    }

    fn clear_markers(&mut self) {}

    fn place_marker(&mut self, at: GeoPoint, marker: &Marker) {
        black_box((at, marker));
    }
}

fn tour_of(len: usize) -> Tour {
    Tour::new((0..len).map(|i| {
        let t = i as f64 / len as f64;
        let step = ViewStep::new(
            format!("stop {i}"),
            "",
            GeoPoint::from_lon_lat(121.40 + t * 0.05, 23.45 + t * 0.05).unwrap(),
            Zoom::new(12.0 + t * 4.0).unwrap(),
        );
        if i % 2 == 0 {
            step.with_marker(Marker::new("red", format!("marker {i}")))
        } else {
            step
        }
    }))
    .unwrap()
}

fn bench_navigation(c: &mut Criterion) {
    let mut group = c.benchmark_group("tour/navigate");

    // Each iteration walks to the end (including one clamped call) and back.
    for len in [4usize, 64, 1_024] {
        group.throughput(Throughput::Elements(2 * len as u64));

        group.bench_with_input(BenchmarkId::new("tour", len), &len, |b, &len| {
            let mut tour = tour_of(len);
            b.iter(|| {
                for _ in 0..len {
                    tour.next();
                }
                for _ in 0..len {
                    tour.previous();
                }
                black_box(tour.index());
            });
        });

        group.bench_with_input(BenchmarkId::new("driver", len), &len, |b, &len| {
            let mut driver = TourDriver::new(tour_of(len), NullMap);
            b.iter(|| {
                for _ in 0..len {
                    driver.next();
                }
                for _ in 0..len {
                    driver.previous();
                }
                black_box(driver.tour().index());
            });
        });
    }

    group.finish();
}

fn bench_commands(c: &mut Criterion) {
    let tour = tour_of(1_024);
    c.bench_function("view/commands_for", |b| {
        b.iter(|| {
            for step in tour.steps() {
                black_box(commands_for(step));
            }
        });
    });
    c.bench_function("view/overview_bounds", |b| {
        b.iter(|| black_box(overview_bounds(&tour)));
    });
}

criterion_group!(benches, bench_navigation, bench_commands);
criterion_main!(benches);
