// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for zids-odfa.

use thiserror::Error;
use zids_rand::EntropyError;

/// Errors from the ODFA model, parameters and packing.
#[derive(Debug, Error)]
pub enum OdfaError {
    /// A security/sparsity/packing constraint was violated.
    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),

    /// The automaton failed structural validation.
    #[error("malformed ODFA: {0}")]
    MalformedOdfa(String),

    /// The cell layout cannot hold the required fields.
    #[error("cell format too small: need {needed} bits, have {available}")]
    CellTooSmall {
        /// Bits required by ns + aid.
        needed: usize,
        /// Bits the cell provides.
        available: usize,
    },

    /// A value does not fit its cell field.
    #[error("{field} does not fit its {bits}-bit cell field")]
    FieldOverflow {
        /// Name of the offending field.
        field: &'static str,
        /// Width of the field in bits.
        bits: usize,
    },

    /// A cell plaintext buffer had the wrong length.
    #[error("cell length mismatch: expected {expected} bytes, got {actual}")]
    CellLength {
        /// Expected byte length.
        expected: usize,
        /// Supplied byte length.
        actual: usize,
    },

    /// A supplied permutation vector is not a bijection.
    #[error("permutation is not a bijection over [0, {0})")]
    NotABijection(usize),

    /// Entropy failure while sampling.
    #[error(transparent)]
    Entropy(#[from] EntropyError),
}
