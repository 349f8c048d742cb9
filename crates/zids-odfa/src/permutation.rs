// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Uniform random permutation of state ids.
//!
//! Published in the GDFA header — it hides nothing about state
//! identity on its own; it decouples garbled row numbering from the
//! ODFA's original numbering should secrets ever leak.

use zids_rand::{EntropySource, sample_permutation};

use crate::error::OdfaError;

/// A bijection new_row → old_state plus its inverse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatePermutation {
    forward: Vec<u32>,
    inverse: Vec<u32>,
}

impl StatePermutation {
    /// Samples a uniform permutation of `[0, n)` by Fisher-Yates over
    /// unbiased draws.
    pub fn sample<E: EntropySource + ?Sized>(n: usize, entropy: &E) -> Result<Self, OdfaError> {
        let forward = sample_permutation(entropy, n)?;
        let inverse = Self::invert(&forward);
        Ok(Self { forward, inverse })
    }

    /// The identity permutation (used by synthetic tests).
    pub fn identity(n: usize) -> Self {
        let forward: Vec<u32> = (0..n as u32).collect();
        let inverse = forward.clone();
        Self { forward, inverse }
    }

    /// Wraps a published forward vector, validating bijectivity.
    ///
    /// # Errors
    ///
    /// [`OdfaError::NotABijection`] if entries repeat or fall outside
    /// `[0, len)`.
    pub fn from_forward(forward: Vec<u32>) -> Result<Self, OdfaError> {
        let n = forward.len();
        let mut seen = vec![false; n];
        for &v in &forward {
            let idx = v as usize;
            if idx >= n || seen[idx] {
                return Err(OdfaError::NotABijection(n));
            }
            seen[idx] = true;
        }
        let inverse = Self::invert(&forward);
        Ok(Self { forward, inverse })
    }

    fn invert(forward: &[u32]) -> Vec<u32> {
        let mut inverse = vec![0u32; forward.len()];
        for (i, &v) in forward.iter().enumerate() {
            inverse[v as usize] = i as u32;
        }
        inverse
    }

    /// Number of states.
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    /// True when the permutation is empty.
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// The forward vector: `forward[new_row] = old_state`.
    pub fn forward(&self) -> &[u32] {
        &self.forward
    }

    /// The inverse vector: `inverse[old_state] = new_row`.
    pub fn inverse(&self) -> &[u32] {
        &self.inverse
    }

    /// Maps a garbled row id back to the original state id.
    pub fn old_state(&self, new_row: u32) -> u32 {
        self.forward[new_row as usize]
    }

    /// Maps an original state id to its garbled row id.
    pub fn new_row(&self, old_state: u32) -> u32 {
        self.inverse[old_state as usize]
    }
}
