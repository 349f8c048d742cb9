// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! The public GDFA header.

use serde::{Deserialize, Serialize};
use zids_odfa::{CellFormat, StatePermutation};

use crate::error::GdfaError;

/// Everything a client needs to parse the row matrix and drive
/// evaluation; fully public.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GdfaHeader {
    /// Alphabet size |Σ|.
    pub alphabet_size: usize,
    /// Columns (cells) per row.
    pub outmax: usize,
    /// Group keys per token.
    pub cmax: usize,
    /// Number of states / garbled rows.
    pub num_states: u32,
    /// The garbled row of the start state.
    pub start_row: u32,
    /// Published permutation: `permutation[new_row] = old_state`.
    pub permutation: Vec<u32>,
    /// Bytes per cell.
    pub cell_bytes: usize,
    /// Bytes per row: `outmax * cell_bytes`.
    pub row_bytes: usize,
    /// Width of the attack-id cell field.
    pub aid_bits: usize,
    /// Lowercase-hex SHA-256 of the rows payload, when published.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rows_sha256: Option<String>,
}

impl GdfaHeader {
    /// Structural validation: the header must fully determine row
    /// parsing.
    ///
    /// # Errors
    ///
    /// [`GdfaError::InvalidParameter`] naming the violated constraint.
    pub fn validate(&self) -> Result<(), GdfaError> {
        if self.num_states == 0 {
            return Err(GdfaError::InvalidParameter("num_states must be positive"));
        }
        if self.outmax == 0 {
            return Err(GdfaError::InvalidParameter("outmax must be at least 1"));
        }
        if self.cmax == 0 || self.cmax > self.alphabet_size {
            return Err(GdfaError::InvalidParameter(
                "cmax must satisfy 1 <= cmax <= alphabet_size",
            ));
        }
        if self.cell_bytes == 0 {
            return Err(GdfaError::InvalidParameter("cell_bytes must be positive"));
        }
        if self.row_bytes != self.outmax * self.cell_bytes {
            return Err(GdfaError::InvalidParameter(
                "row_bytes must equal outmax * cell_bytes",
            ));
        }
        if self.start_row >= self.num_states {
            return Err(GdfaError::InvalidParameter("start_row out of range"));
        }
        if self.permutation.len() != self.num_states as usize {
            return Err(GdfaError::InvalidParameter(
                "permutation length must equal num_states",
            ));
        }
        // Bijectivity.
        StatePermutation::from_forward(self.permutation.clone())?;
        // The cell must actually hold ns + aid.
        CellFormat::from_header(self.num_states, self.aid_bits, self.cell_bytes)?;
        Ok(())
    }

    /// The cell layout this header publishes.
    pub fn cell_format(&self) -> Result<CellFormat, GdfaError> {
        Ok(CellFormat::from_header(
            self.num_states,
            self.aid_bits,
            self.cell_bytes,
        )?)
    }

    /// The published permutation with its inverse.
    pub fn state_permutation(&self) -> Result<StatePermutation, GdfaError> {
        Ok(StatePermutation::from_forward(self.permutation.clone())?)
    }

    /// Total rows payload size in bytes.
    pub fn rows_len(&self) -> usize {
        self.num_states as usize * self.row_bytes
    }
}
