// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::EntropyError;
use crate::sample::{sample_permutation, uniform_index};
use crate::system::SystemEntropySource;

#[test]
fn test_uniform_index_bounds() {
    let src = SystemEntropySource;
    for n in [1usize, 2, 3, 17, 256, 1000] {
        for _ in 0..50 {
            let i = uniform_index(&src, n).unwrap();
            assert!(i < n);
        }
    }
}

#[test]
fn test_uniform_index_empty_range() {
    let src = SystemEntropySource;
    assert_eq!(uniform_index(&src, 0), Err(EntropyError::EmptyRange));
}

#[test]
fn test_sample_permutation_is_bijection() {
    let src = SystemEntropySource;
    for n in [0usize, 1, 2, 7, 64, 500] {
        let perm = sample_permutation(&src, n).unwrap();
        assert_eq!(perm.len(), n);
        let mut seen = vec![false; n];
        for &v in &perm {
            assert!(!seen[v as usize]);
            seen[v as usize] = true;
        }
    }
}

#[test]
fn test_permutation_uniformity() {
    // Statistical check of position counts: sample 10 000 permutations
    // of n=6 and chi-squared test how often each value lands in each
    // position. Expected count per (value, position) cell is
    // 10 000 / 6; df = (6-1)*(6-1) = 25; the 1e-9 quantile of
    // chi-squared(25) is ~95, so a correct sampler essentially never
    // fails this.
    const N: usize = 6;
    const SAMPLES: usize = 10_000;
    let src = SystemEntropySource;

    let mut counts = [[0u32; N]; N];
    for _ in 0..SAMPLES {
        let perm = sample_permutation(&src, N).unwrap();
        for (pos, &val) in perm.iter().enumerate() {
            counts[pos][val as usize] += 1;
        }
    }

    let expected = SAMPLES as f64 / N as f64;
    let mut chi_squared = 0.0;
    for row in &counts {
        for &c in row {
            let diff = f64::from(c) - expected;
            chi_squared += diff * diff / expected;
        }
    }
    assert!(
        chi_squared < 95.0,
        "chi-squared {chi_squared} suggests a biased permutation sampler"
    );
}
