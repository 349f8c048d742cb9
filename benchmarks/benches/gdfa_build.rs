// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::collections::BTreeMap;

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use zids_gdfa::{KeySource, PadSeedMode, build_gdfa};
use zids_odfa::{Odfa, OdfaEdge, OdfaRow, SecurityParams, SparsityParams};
use zids_rand::SystemEntropySource;

fn ring_odfa(num_states: u32, outmax: usize) -> Odfa {
    let rows = (0..num_states)
        .map(|s| OdfaRow {
            edges: (0..outmax as u32)
                .map(|c| OdfaEdge {
                    group_id: c as i32,
                    next_state: (s + c + 1) % num_states,
                    attack_id: 0,
                })
                .collect(),
        })
        .collect();
    Odfa {
        num_states,
        start_state: 0,
        accepting: BTreeMap::new(),
        rows,
    }
}

fn benchmark_build(c: &mut Criterion) {
    let sec = SecurityParams::default();
    let sp = SparsityParams { outmax: 4, cmax: 2 };
    let entropy = SystemEntropySource;

    let mut group = c.benchmark_group("gdfa_build");
    for states in [16u32, 64, 256].iter() {
        let odfa = ring_odfa(*states, sp.outmax);
        group.throughput(Throughput::Elements(u64::from(*states)));
        group.bench_with_input(format!("{} states", states), states, |b, _| {
            b.iter(|| {
                build_gdfa(
                    black_box(&odfa),
                    &sec,
                    &sp,
                    16,
                    PadSeedMode::BoundToGroupKeys(KeySource::Fresh),
                    &entropy,
                )
                .expect("build failed");
            });
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_build);
criterion_main!(benches);
