// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Per-row symbol → column membership.

use smallvec::SmallVec;

use crate::error::OdfaError;

/// Column list for one symbol; stays inline for typical cmax.
pub type ColumnSet = SmallVec<[u16; 4]>;

/// Which columns each symbol belongs to in one row.
///
/// The client obliviously obtains the group keys for exactly the
/// columns of its current input symbol, so each per-symbol list is a
/// strictly increasing sequence of column indices in `[0, outmax)`
/// with at most `cmax` entries.
#[derive(Debug, Clone)]
pub struct RowAlphabet {
    outmax: usize,
    cmax: usize,
    sym_to_cols: Vec<ColumnSet>,
}

impl RowAlphabet {
    /// Validates and wraps a symbol → columns table.
    ///
    /// # Errors
    ///
    /// [`OdfaError::InvalidParameter`] if the table length differs from
    /// `alphabet_size`, a list exceeds `cmax`, or a list is not
    /// strictly increasing within `[0, outmax)`.
    pub fn new(
        outmax: usize,
        cmax: usize,
        alphabet_size: usize,
        sym_to_cols: Vec<ColumnSet>,
    ) -> Result<Self, OdfaError> {
        if sym_to_cols.len() != alphabet_size {
            return Err(OdfaError::InvalidParameter(
                "sym_to_cols length must equal alphabet_size",
            ));
        }
        for cols in &sym_to_cols {
            if cols.len() > cmax {
                return Err(OdfaError::InvalidParameter(
                    "symbol belongs to more than cmax columns",
                ));
            }
            let mut prev: Option<u16> = None;
            for &c in cols {
                if usize::from(c) >= outmax {
                    return Err(OdfaError::InvalidParameter(
                        "column index out of range [0, outmax)",
                    ));
                }
                if let Some(p) = prev {
                    if c <= p {
                        return Err(OdfaError::InvalidParameter(
                            "column list must be strictly increasing",
                        ));
                    }
                }
                prev = Some(c);
            }
        }
        Ok(Self {
            outmax,
            cmax,
            sym_to_cols,
        })
    }

    /// The default singleton partition: symbol x belongs to column
    /// `x % outmax`.
    pub fn modulo(outmax: usize, cmax: usize, alphabet_size: usize) -> Self {
        let sym_to_cols = (0..alphabet_size)
            .map(|x| {
                let mut cols = ColumnSet::new();
                cols.push((x % outmax) as u16);
                cols
            })
            .collect();
        Self {
            outmax,
            cmax,
            sym_to_cols,
        }
    }

    /// Maximum out-degree this table was built for.
    pub fn outmax(&self) -> usize {
        self.outmax
    }

    /// Maximum column membership per symbol.
    pub fn cmax(&self) -> usize {
        self.cmax
    }

    /// Alphabet size.
    pub fn alphabet_size(&self) -> usize {
        self.sym_to_cols.len()
    }

    /// The columns symbol `x` belongs to, ascending.
    pub fn cols_for(&self, x: usize) -> &[u16] {
        &self.sym_to_cols[x]
    }
}
