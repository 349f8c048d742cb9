// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for zids-crypto.

use thiserror::Error;

/// Errors from the PRF/PRG and encoding helpers.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum CryptoError {
    /// The PRF key was empty.
    #[error("PRF key must be non-empty")]
    EmptyKey,

    /// An integer did not fit into the requested fixed-width encoding.
    #[error("integer {value} does not fit into {len} bytes")]
    IntegerTooLarge {
        /// The value that was being encoded.
        value: u64,
        /// The requested encoding width in bytes.
        len: usize,
    },

    /// Two buffers that must have equal length did not.
    #[error("length mismatch: {left} != {right}")]
    LengthMismatch {
        /// Length of the left operand.
        left: usize,
        /// Length of the right operand.
        right: usize,
    },
}
