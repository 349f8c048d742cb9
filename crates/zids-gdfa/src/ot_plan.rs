// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Per-row OT plan: the 256-entry table the server's 1-of-256 sender
//! distributes an oblivious view of.

use tracing::trace;
use zids_odfa::{PackingParams, RowAlphabet};
use zids_ot::{DdhGroup, OT256_OPTIONS, Ot256Chooser, Ot256Table};
use zids_rand::EntropySource;

use crate::error::GdfaError;
use crate::labels::ot256_row_label;
use crate::secrets::RowGroupKeys;

/// Builds row `row_id`'s OT table from its group keys.
///
/// Entry x is the concatenation of `GK[row_id][c]` for every column c
/// the symbol x belongs to (ascending), padded to exactly
/// `cmax * kprime_bytes` with fresh random blocks. Random padding
/// keeps the entry from leaking how many columns the symbol matched.
///
/// # Errors
///
/// [`GdfaError::InvalidParameter`] if the alphabet or key table does
/// not match the packing parameters.
pub fn build_row_ot_table<E: EntropySource + ?Sized>(
    row_id: u32,
    pack: &PackingParams,
    row_alpha: &RowAlphabet,
    keys: &RowGroupKeys,
    entropy: &E,
) -> Result<Ot256Table, GdfaError> {
    if row_alpha.alphabet_size() != OT256_OPTIONS {
        return Err(GdfaError::InvalidParameter(
            "1-of-256 plans require a 256-symbol alphabet",
        ));
    }
    if row_alpha.outmax() != pack.outmax || row_alpha.cmax() != pack.cmax {
        return Err(GdfaError::InvalidParameter(
            "row alphabet bounds disagree with packing parameters",
        ));
    }
    if keys.len() != pack.outmax {
        return Err(GdfaError::InvalidParameter(
            "group key count must equal outmax",
        ));
    }
    if (0..keys.len()).any(|c| keys.key(c).len() != pack.kprime_bytes) {
        return Err(GdfaError::InvalidParameter(
            "group key length must equal kprime_bytes",
        ));
    }

    let mut entries = Vec::with_capacity(OT256_OPTIONS);
    for x in 0..OT256_OPTIONS {
        let cols = row_alpha.cols_for(x);
        let mut entry = Vec::with_capacity(pack.ot256_entry_len);
        for &c in cols {
            entry.extend_from_slice(keys.key(usize::from(c)));
        }
        // Pad with fresh randomness, never zeros: the entry must not
        // reveal the membership count.
        let mut filler = vec![0u8; pack.ot256_entry_len - entry.len()];
        entropy.fill_bytes(&mut filler)?;
        entry.extend_from_slice(&filler);
        entries.push(entry);
    }
    trace!(row_id, "built 1-of-256 plan");
    Ok(Ot256Table::new(entries)?)
}

/// Builds the table and wires up an in-process 1-of-256 service for it
/// under the row label `"OT256|row=" || I2OSP(row_id, 4)`.
///
/// Each service owns its own fresh sid; per the concurrency contract,
/// services are created per session and not shared across concurrent
/// senders.
pub fn build_row_ot_service<'g, E: EntropySource + ?Sized>(
    row_id: u32,
    group: &'g DdhGroup,
    pack: &PackingParams,
    row_alpha: &RowAlphabet,
    keys: &RowGroupKeys,
    entropy: &E,
) -> Result<Ot256Chooser<'g>, GdfaError> {
    let table = build_row_ot_table(row_id, pack, row_alpha, keys, entropy)?;
    let label = ot256_row_label(row_id);
    Ok(Ot256Chooser::new(group, &table, &label, None, entropy)?)
}
