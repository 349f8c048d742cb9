// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Read-only ciphertext row storage.
//!
//! Immutable after construction; concurrent evaluation streams share
//! it without locking.

use crate::error::GdfaError;
use crate::header::GdfaHeader;

/// The flat, row-major ciphertext matrix.
#[derive(Debug, Clone)]
pub struct RowStore {
    num_states: u32,
    row_bytes: usize,
    rows: Vec<u8>,
}

impl RowStore {
    /// Wraps a flat rows payload, checking its length against the
    /// header.
    ///
    /// # Errors
    ///
    /// [`GdfaError::LengthMismatch`] unless `rows` is exactly
    /// `num_states * row_bytes` bytes.
    pub fn new(header: &GdfaHeader, rows: Vec<u8>) -> Result<Self, GdfaError> {
        if rows.len() != header.rows_len() {
            return Err(GdfaError::LengthMismatch {
                expected: header.rows_len(),
                actual: rows.len(),
            });
        }
        Ok(Self {
            num_states: header.num_states,
            row_bytes: header.row_bytes,
            rows,
        })
    }

    /// Builds the store from per-row buffers.
    pub fn from_rows(header: &GdfaHeader, rows: &[Vec<u8>]) -> Result<Self, GdfaError> {
        if rows.len() != header.num_states as usize {
            return Err(GdfaError::LengthMismatch {
                expected: header.num_states as usize,
                actual: rows.len(),
            });
        }
        let mut flat = Vec::with_capacity(header.rows_len());
        for row in rows {
            if row.len() != header.row_bytes {
                return Err(GdfaError::LengthMismatch {
                    expected: header.row_bytes,
                    actual: row.len(),
                });
            }
            flat.extend_from_slice(row);
        }
        Ok(Self {
            num_states: header.num_states,
            row_bytes: header.row_bytes,
            rows: flat,
        })
    }

    /// Number of rows.
    pub fn num_states(&self) -> u32 {
        self.num_states
    }

    /// Bytes per row.
    pub fn row_bytes(&self) -> usize {
        self.row_bytes
    }

    /// The ciphertext bytes of one row.
    ///
    /// # Errors
    ///
    /// [`GdfaError::OutOfRange`] for a row id past the matrix.
    pub fn row(&self, row_id: u32) -> Result<&[u8], GdfaError> {
        if row_id >= self.num_states {
            return Err(GdfaError::OutOfRange {
                what: "row_id",
                value: row_id as usize,
                bound: self.num_states as usize,
            });
        }
        let start = row_id as usize * self.row_bytes;
        Ok(&self.rows[start..start + self.row_bytes])
    }

    /// The whole payload, row-major.
    pub fn as_bytes(&self) -> &[u8] {
        &self.rows
    }
}
