// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Unbiased index sampling and Fisher-Yates permutation sampling.

use crate::error::EntropyError;
use crate::traits::EntropySource;

/// Draws a uniform index in `[0, n)` from `entropy`.
///
/// Uses rejection sampling over a 64-bit draw: values below the bias
/// threshold `(2^64 - n) mod n` are re-drawn, so the final `r % n` is
/// exactly uniform for every `n`.
///
/// # Errors
///
/// Returns [`EntropyError::EmptyRange`] if `n == 0`, or
/// [`EntropyError::EntropyNotAvailable`] on entropy failure.
pub fn uniform_index<E: EntropySource + ?Sized>(
    entropy: &E,
    n: usize,
) -> Result<usize, EntropyError> {
    if n == 0 {
        return Err(EntropyError::EmptyRange);
    }
    let n_u64 = n as u64;
    let threshold = (u64::MAX - n_u64 + 1) % n_u64;

    let mut buf = [0u8; 8];
    loop {
        entropy.fill_bytes(&mut buf)?;
        let r = u64::from_be_bytes(buf);
        if r >= threshold {
            return Ok((r % n_u64) as usize);
        }
    }
}

/// Samples a uniform permutation of `[0, n)` by Fisher-Yates shuffle.
///
/// Returns `perm` mapping new index -> old index. Fisher-Yates over
/// [`uniform_index`] draws guarantees all `n!` permutations are
/// equiprobable.
///
/// # Errors
///
/// Returns [`EntropyError::EntropyNotAvailable`] on entropy failure.
pub fn sample_permutation<E: EntropySource + ?Sized>(
    entropy: &E,
    n: usize,
) -> Result<Vec<u32>, EntropyError> {
    debug_assert!(n <= u32::MAX as usize);
    let mut perm: Vec<u32> = (0..n as u32).collect();
    for i in (1..n).rev() {
        let j = uniform_index(entropy, i + 1)?;
        perm.swap(i, j);
    }
    Ok(perm)
}
