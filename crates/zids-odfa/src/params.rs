// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Security, sparsity and derived packing parameters.
//!
//! All three sets are immutable after setup: the garbler and the
//! evaluator must agree on them bit-for-bit, so every derived size is
//! computed in exactly one place ([`PackingParams::derive`]).

use serde::{Deserialize, Serialize};

use crate::error::OdfaError;

/// Cryptographic security knobs.
///
/// - `k_bits`: pad-seed length for GDFA cells
/// - `kprime_bits`: group-key length
/// - `kappa`: statistical parameter reserved for the OT extension
/// - `alphabet_size`: |Σ|; 256 for the byte alphabet the 1-of-256 OT
///   serves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityParams {
    /// Pad-seed length in bits; multiple of 8.
    pub k_bits: usize,
    /// Group-key length in bits; multiple of 8.
    pub kprime_bits: usize,
    /// Statistical security parameter.
    pub kappa: usize,
    /// Alphabet size |Σ|.
    pub alphabet_size: usize,
}

impl Default for SecurityParams {
    fn default() -> Self {
        Self {
            k_bits: 128,
            kprime_bits: 128,
            kappa: 128,
            alphabet_size: 256,
        }
    }
}

impl SecurityParams {
    /// Validates positivity and byte alignment.
    pub fn validate(&self) -> Result<(), OdfaError> {
        if self.k_bits == 0 || self.kprime_bits == 0 || self.kappa == 0 {
            return Err(OdfaError::InvalidParameter(
                "security parameters must be positive",
            ));
        }
        if self.alphabet_size == 0 {
            return Err(OdfaError::InvalidParameter("alphabet_size must be positive"));
        }
        if self.k_bits % 8 != 0 || self.kprime_bits % 8 != 0 {
            return Err(OdfaError::InvalidParameter(
                "k_bits and kprime_bits must be multiples of 8",
            ));
        }
        Ok(())
    }

    /// Pad-seed length in bytes.
    pub fn k_bytes(&self) -> usize {
        self.k_bits / 8
    }

    /// Group-key length in bytes.
    pub fn kprime_bytes(&self) -> usize {
        self.kprime_bits / 8
    }
}

/// Sparsity bounds of the ODFA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SparsityParams {
    /// Maximum out-degree per row.
    pub outmax: usize,
    /// Maximum column membership per symbol.
    pub cmax: usize,
}

/// Sizes derived from security + sparsity parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackingParams {
    /// Pad-seed length in bytes.
    pub k_bytes: usize,
    /// Group-key length in bytes.
    pub kprime_bytes: usize,
    /// Maximum out-degree per row.
    pub outmax: usize,
    /// Maximum column membership per symbol.
    pub cmax: usize,
    /// Fixed OT-256 table entry length: `cmax * kprime_bytes`.
    pub ot256_entry_len: usize,
    /// Cell plaintext width in bits: `outmax * kprime_bits`.
    pub gdfa_cell_pad_bits: usize,
}

impl PackingParams {
    /// Derives the packing sizes, validating both parameter sets.
    ///
    /// # Errors
    ///
    /// [`OdfaError::InvalidParameter`] naming the violated constraint.
    pub fn derive(sec: &SecurityParams, sp: &SparsityParams) -> Result<Self, OdfaError> {
        sec.validate()?;
        if sp.outmax == 0 {
            return Err(OdfaError::InvalidParameter("outmax must be at least 1"));
        }
        if sp.cmax == 0 || sp.cmax > sec.alphabet_size {
            return Err(OdfaError::InvalidParameter(
                "cmax must satisfy 1 <= cmax <= alphabet_size",
            ));
        }
        Ok(Self {
            k_bytes: sec.k_bytes(),
            kprime_bytes: sec.kprime_bytes(),
            outmax: sp.outmax,
            cmax: sp.cmax,
            ot256_entry_len: sp.cmax * sec.kprime_bytes(),
            gdfa_cell_pad_bits: sp.outmax * sec.kprime_bits,
        })
    }
}
