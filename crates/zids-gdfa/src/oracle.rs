// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! The OT-backed pad oracle.
//!
//! Per input byte the oracle obtains a token — up to `cmax` candidate
//! group keys — and trial-decrypts cells until the zero-pad validator
//! accepts. The search order is deterministic and part of the
//! contract: increasing column, then increasing key index within the
//! token. Clients and tests rely on this ordering when debugging.

use zids_crypto::{expand_bits, prf_bytes, xor_bytes};
use zids_odfa::{CellFormat, PackingParams};

use crate::error::GdfaError;
use crate::evaluator::PadOracle;
use crate::header::GdfaHeader;
use crate::labels::{CELL_PAD_LABEL, seed_info};
use crate::store::RowStore;
use crate::token::TokenSource;

/// [`PadOracle`] implementation driven by a 1-of-256 token source.
pub struct OtPadOracle<'a, T: TokenSource> {
    header: &'a GdfaHeader,
    pack: PackingParams,
    store: &'a RowStore,
    tokens: T,
    fmt: CellFormat,
}

impl<'a, T: TokenSource> OtPadOracle<'a, T> {
    /// Binds the oracle to a published GDFA, its packing parameters
    /// and a token source.
    ///
    /// # Errors
    ///
    /// [`GdfaError::InvalidParameter`] if the packing parameters
    /// disagree with the header.
    pub fn new(
        header: &'a GdfaHeader,
        pack: PackingParams,
        store: &'a RowStore,
        tokens: T,
    ) -> Result<Self, GdfaError> {
        if pack.outmax != header.outmax || pack.cmax != header.cmax {
            return Err(GdfaError::InvalidParameter(
                "packing parameters disagree with the header",
            ));
        }
        let fmt = header.cell_format()?;
        Ok(Self {
            header,
            pack,
            store,
            tokens,
            fmt,
        })
    }

    /// Tries one (column, key) candidate; `Some(pad)` when the
    /// decryption is well-formed.
    fn try_candidate(&self, row_id: u32, col: usize, gk: &[u8], ct: &[u8]) -> Option<Vec<u8>> {
        let seed = prf_bytes(gk, &seed_info(row_id, col as u16), self.pack.k_bytes).ok()?;
        let pad = expand_bits(&seed, self.fmt.total_bits(), CELL_PAD_LABEL).ok()?;
        let pt = xor_bytes(ct, &pad).ok()?;
        self.fmt
            .validate_cell(&pt, self.header.num_states)
            .map(|_| pad)
    }
}

impl<'a, T: TokenSource> PadOracle for OtPadOracle<'a, T> {
    fn derive_for_row(&mut self, row_id: u32, x: u8) -> Result<(usize, Vec<u8>), GdfaError> {
        let token = self.tokens.get_token(row_id, x)?;
        let expected = self.pack.ot256_entry_len;
        if token.len() != expected {
            return Err(GdfaError::LengthMismatch {
                expected,
                actual: token.len(),
            });
        }

        let keys: Vec<&[u8]> = token.chunks(self.pack.kprime_bytes).collect();
        let row_bytes = self.store.row(row_id)?;

        for col in 0..self.header.outmax {
            let start = col * self.header.cell_bytes;
            let ct = &row_bytes[start..start + self.header.cell_bytes];
            for gk in &keys {
                if let Some(pad) = self.try_candidate(row_id, col, gk, ct) {
                    return Ok((col, pad));
                }
            }
        }
        Err(GdfaError::InvalidToken { row_id, symbol: x })
    }
}
