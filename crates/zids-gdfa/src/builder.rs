// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Offline GDFA builder.
//!
//! Pipeline: validate the ODFA, plan the cell layout, sample the state
//! permutation, then per garbled row pad the edges to `outmax`, pack
//! each `(permuted next state, attack id)` pair into a zero-padded
//! cell and XOR it with a PRG pad expanded from that cell's seed.

use tracing::debug;
use zeroize::Zeroizing;
use zids_crypto::{expand_bits, prf_bytes, xor_bytes};
use zids_odfa::{CellFormat, Odfa, PackingParams, SecurityParams, SparsityParams, StatePermutation};
use zids_rand::EntropySource;

use crate::error::GdfaError;
use crate::header::GdfaHeader;
use crate::labels::{CELL_PAD_LABEL, seed_info};
use crate::secrets::{GdfaSecrets, RowGroupKeys};

/// Where group keys come from in a key-bound build.
pub enum KeySource<'a> {
    /// Sample every key fresh from entropy.
    Fresh,
    /// Derive every key from a master key (reproducible builds).
    Master(&'a [u8]),
}

/// How per-cell pad seeds are obtained.
pub enum PadSeedMode<'a> {
    /// Derive each seed from a per-column group key via
    /// `PRF(GK, "ZIDS|SEED|row=..|col=..", k_bytes)` and keep the keys
    /// in the server secrets. Required for the online OT flow.
    BoundToGroupKeys(KeySource<'a>),
    /// Independent random seeds; no group keys. The matrix can only be
    /// decrypted with the stored seeds (offline verification, tests).
    FreshRandom,
}

/// The offline build output: public header, row matrix, server
/// secrets.
pub struct GdfaBundle {
    /// The public header.
    pub header: GdfaHeader,
    /// Row-major ciphertext matrix, `num_states * row_bytes` bytes.
    pub rows: Vec<u8>,
    /// Server-only key material.
    pub secrets: GdfaSecrets,
}

impl GdfaBundle {
    /// One garbled row's ciphertext bytes.
    pub fn row(&self, new_row: u32) -> &[u8] {
        let start = new_row as usize * self.header.row_bytes;
        &self.rows[start..start + self.header.row_bytes]
    }
}

/// Garbles `odfa` under the given parameters.
///
/// # Errors
///
/// [`GdfaError::Odfa`] on validation/planning failures,
/// [`GdfaError::Entropy`] if sampling fails.
pub fn build_gdfa<E: EntropySource + ?Sized>(
    odfa: &Odfa,
    sec: &SecurityParams,
    sp: &SparsityParams,
    aid_bits: usize,
    mode: PadSeedMode<'_>,
    entropy: &E,
) -> Result<GdfaBundle, GdfaError> {
    odfa.validate(sp.outmax)?;
    let pack = PackingParams::derive(sec, sp)?;
    let fmt = CellFormat::plan(odfa.num_states, aid_bits, &pack)?;
    let cell_bytes = fmt.total_bytes();
    let row_bytes = sp.outmax * cell_bytes;
    let num_states = odfa.num_states;

    let per = StatePermutation::sample(num_states as usize, entropy)?;
    debug!(num_states, cell_bytes, row_bytes, "planned GDFA layout");

    let mut rows = Vec::with_capacity(num_states as usize * row_bytes);
    let mut group_keys: Vec<RowGroupKeys> = Vec::new();
    let mut pad_seeds: Vec<Vec<Zeroizing<Vec<u8>>>> = Vec::with_capacity(num_states as usize);

    for new_row in 0..num_states {
        let old_state = per.old_state(new_row);
        let edges = odfa.padded_edges(old_state, sp.outmax);

        let row_keys = match &mode {
            PadSeedMode::BoundToGroupKeys(KeySource::Fresh) => Some(RowGroupKeys::sample(
                sp.outmax,
                pack.kprime_bytes,
                entropy,
            )?),
            PadSeedMode::BoundToGroupKeys(KeySource::Master(master)) => Some(
                RowGroupKeys::derive_from_master(master, new_row, sp.outmax, pack.kprime_bytes)?,
            ),
            PadSeedMode::FreshRandom => None,
        };

        let mut row_seeds = Vec::with_capacity(sp.outmax);
        for (c, edge) in edges.iter().enumerate() {
            let seed = match &row_keys {
                Some(keys) => Zeroizing::new(prf_bytes(
                    keys.key(c),
                    &seed_info(new_row, c as u16),
                    pack.k_bytes,
                )?),
                None => {
                    let mut s = Zeroizing::new(vec![0u8; pack.k_bytes]);
                    entropy.fill_bytes(&mut s)?;
                    s
                }
            };

            let ns = per.new_row(edge.next_state);
            let pt = fmt.pack_cell(ns, edge.attack_id)?;
            let pad = expand_bits(&seed, pack.gdfa_cell_pad_bits, CELL_PAD_LABEL)?;
            rows.extend_from_slice(&xor_bytes(&pt, &pad)?);
            row_seeds.push(seed);
        }
        pad_seeds.push(row_seeds);
        if let Some(keys) = row_keys {
            group_keys.push(keys);
        }
    }

    let header = GdfaHeader {
        alphabet_size: sec.alphabet_size,
        outmax: sp.outmax,
        cmax: sp.cmax,
        num_states,
        start_row: per.new_row(odfa.start_state),
        permutation: per.forward().to_vec(),
        cell_bytes,
        row_bytes,
        aid_bits,
        rows_sha256: None,
    };
    debug!(start_row = header.start_row, "garbled all rows");

    Ok(GdfaBundle {
        header,
        rows,
        secrets: GdfaSecrets::new(group_keys, pad_seeds, per.inverse().to_vec()),
    })
}
