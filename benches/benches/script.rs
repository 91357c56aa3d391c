// Copyright 2025 the Storymap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use storymap_script::{MATAAN_FLOOD, Script};

fn bench_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("script/load");

    group.bench_function("parse", |b| {
        b.iter(|| black_box(Script::from_json_str(black_box(MATAAN_FLOOD)).unwrap()));
    });

    let script = Script::from_json_str(MATAAN_FLOOD).unwrap();
    group.bench_function("into_tour", |b| {
        b.iter(|| black_box(script.clone().into_tour().unwrap()));
    });

    group.finish();
}

criterion_group!(benches, bench_load);
criterion_main!(benches);
