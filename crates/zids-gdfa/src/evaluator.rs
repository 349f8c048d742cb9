// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! The streaming automaton interpreter.
//!
//! One runner owns one evaluation stream: its current row, the attack
//! ids seen so far and a step counter. Streams are independent; they
//! share only the read-only [`RowStore`] and header. Dropping the
//! runner cancels the stream; scratch is O(outmax * cell_bytes).

use tracing::debug;
use zids_crypto::xor_bytes;
use zids_odfa::CellFormat;

use crate::error::GdfaError;
use crate::header::GdfaHeader;
use crate::store::RowStore;

/// Capability that produces, per (row, symbol), the matching column
/// and its cell pad.
///
/// The OT-backed implementation is [`crate::OtPadOracle`]; tests use
/// deterministic stand-ins.
pub trait PadOracle {
    /// Returns `(column, pad)` for the cell the symbol selects in this
    /// row. The pad must be exactly `cell_bytes` long.
    fn derive_for_row(&mut self, row_id: u32, x: u8) -> Result<(usize, Vec<u8>), GdfaError>;
}

/// Outcome of one evaluation stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalResult {
    /// Transitions applied before stopping.
    pub steps: usize,
    /// First non-zero attack id seen; 0 when none.
    pub first_attack_id: u32,
    /// Last non-zero attack id seen; 0 when none.
    pub last_attack_id: u32,
    /// The garbled row the stream stopped in.
    pub final_row: u32,
}

/// Walks an input stream over the garbled matrix.
pub struct GdfaRunner<'a, O: PadOracle> {
    header: &'a GdfaHeader,
    store: &'a RowStore,
    oracle: O,
    fmt: CellFormat,
}

impl<'a, O: PadOracle> GdfaRunner<'a, O> {
    /// Binds a runner to a published GDFA and a pad oracle.
    pub fn new(
        header: &'a GdfaHeader,
        store: &'a RowStore,
        oracle: O,
    ) -> Result<Self, GdfaError> {
        header.validate()?;
        let fmt = header.cell_format()?;
        Ok(Self {
            header,
            store,
            oracle,
            fmt,
        })
    }

    /// Evaluates `input` from the start row.
    ///
    /// With `stop_on_first_attack` the stream stops at the first
    /// transition that emits a non-zero attack id; the result then
    /// covers the completed prefix.
    ///
    /// # Errors
    ///
    /// Any oracle failure aborts the stream; [`GdfaError::InvalidToken`]
    /// if a decrypted cell fails the zero-pad/range validator.
    pub fn evaluate(
        &mut self,
        input: &[u8],
        stop_on_first_attack: bool,
    ) -> Result<EvalResult, GdfaError> {
        let mut row = self.header.start_row;
        let mut steps = 0usize;
        let mut first_attack_id = 0u32;
        let mut last_attack_id = 0u32;

        for &x in input {
            let (col, pad) = self.oracle.derive_for_row(row, x)?;
            if col >= self.header.outmax {
                return Err(GdfaError::OutOfRange {
                    what: "column",
                    value: col,
                    bound: self.header.outmax,
                });
            }
            if pad.len() != self.header.cell_bytes {
                return Err(GdfaError::LengthMismatch {
                    expected: self.header.cell_bytes,
                    actual: pad.len(),
                });
            }

            let row_bytes = self.store.row(row)?;
            let start = col * self.header.cell_bytes;
            let ct = &row_bytes[start..start + self.header.cell_bytes];
            let pt = xor_bytes(ct, &pad)?;
            let (ns, aid) = self
                .fmt
                .validate_cell(&pt, self.header.num_states)
                .ok_or(GdfaError::InvalidToken { row_id: row, symbol: x })?;

            steps += 1;
            row = ns;
            if aid > 0 {
                if first_attack_id == 0 {
                    first_attack_id = aid;
                }
                last_attack_id = aid;
                if stop_on_first_attack {
                    break;
                }
            }
        }

        debug!(steps, final_row = row, first_attack_id, "stream finished");
        Ok(EvalResult {
            steps,
            first_attack_id,
            last_attack_id,
            final_row: row,
        })
    }
}
