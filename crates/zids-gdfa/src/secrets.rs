// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Server-held secrets: per-(row, column) group keys and pad seeds.
//!
//! All key material lives in zeroizing buffers and is wiped on drop.
//! Nothing in this module ever reaches the client except through an
//! OT token.

use serde::Serialize;
use zeroize::Zeroizing;
use zids_crypto::prf_bytes;
use zids_rand::EntropySource;

use crate::error::GdfaError;
use crate::labels::group_key_info;

/// One row's per-column group keys.
pub struct RowGroupKeys {
    keys: Vec<Zeroizing<Vec<u8>>>,
}

impl RowGroupKeys {
    /// Samples `outmax` fresh keys of `kprime_bytes` each.
    pub fn sample<E: EntropySource + ?Sized>(
        outmax: usize,
        kprime_bytes: usize,
        entropy: &E,
    ) -> Result<Self, GdfaError> {
        let mut keys = Vec::with_capacity(outmax);
        for _ in 0..outmax {
            let mut k = Zeroizing::new(vec![0u8; kprime_bytes]);
            entropy.fill_bytes(&mut k)?;
            keys.push(k);
        }
        Ok(Self { keys })
    }

    /// Derives the row's keys deterministically from a master key:
    /// `GK[row][c] = PRF(master, "ZIDS|GK|row=..|col=..", kprime_bytes)`.
    ///
    /// Reproducible builds; the master key must never leave the
    /// server.
    pub fn derive_from_master(
        master: &[u8],
        row_id: u32,
        outmax: usize,
        kprime_bytes: usize,
    ) -> Result<Self, GdfaError> {
        let mut keys = Vec::with_capacity(outmax);
        for c in 0..outmax {
            let info = group_key_info(row_id, c as u16);
            keys.push(Zeroizing::new(prf_bytes(master, &info, kprime_bytes)?));
        }
        Ok(Self { keys })
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// True when the row has no columns.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// The group key of column `col`.
    pub fn key(&self, col: usize) -> &[u8] {
        &self.keys[col]
    }
}

/// Everything the server keeps after an offline build.
pub struct GdfaSecrets {
    group_keys: Vec<RowGroupKeys>,
    pad_seeds: Vec<Vec<Zeroizing<Vec<u8>>>>,
    inv_permutation: Vec<u32>,
}

impl GdfaSecrets {
    pub(crate) fn new(
        group_keys: Vec<RowGroupKeys>,
        pad_seeds: Vec<Vec<Zeroizing<Vec<u8>>>>,
        inv_permutation: Vec<u32>,
    ) -> Self {
        Self {
            group_keys,
            pad_seeds,
            inv_permutation,
        }
    }

    /// Per-row group keys; empty when the build used independent
    /// random pad seeds.
    pub fn group_keys(&self) -> &[RowGroupKeys] {
        &self.group_keys
    }

    /// The pad seed of `(row, col)`.
    pub fn pad_seed(&self, row: u32, col: usize) -> &[u8] {
        &self.pad_seeds[row as usize][col]
    }

    /// The inverse permutation: `inv_permutation[old_state] = new_row`.
    pub fn inverse_permutation(&self) -> &[u32] {
        &self.inv_permutation
    }

    /// Plain-hex export for `--save-secrets full`; test/debug
    /// affordance only.
    pub fn export(&self) -> SecretsExport {
        SecretsExport {
            inv_permutation: self.inv_permutation.clone(),
            group_keys_hex: self
                .group_keys
                .iter()
                .map(|row| (0..row.len()).map(|c| hex::encode(row.key(c))).collect())
                .collect(),
            pad_seeds_hex: self
                .pad_seeds
                .iter()
                .map(|row| row.iter().map(|s| hex::encode(&s[..])).collect())
                .collect(),
        }
    }
}

/// Serializable secrets dump (hex), produced by
/// [`GdfaSecrets::export`].
#[derive(Debug, Serialize)]
pub struct SecretsExport {
    /// `inv_permutation[old_state] = new_row`.
    pub inv_permutation: Vec<u32>,
    /// Group keys as lowercase hex, `[row][col]`.
    pub group_keys_hex: Vec<Vec<String>>,
    /// Pad seeds as lowercase hex, `[row][col]`.
    pub pad_seeds_hex: Vec<Vec<String>>,
}
