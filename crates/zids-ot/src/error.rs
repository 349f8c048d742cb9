// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for zids-ot.

use thiserror::Error;
use zids_crypto::CryptoError;
use zids_rand::EntropyError;

/// Errors from the oblivious-transfer stack.
#[derive(Debug, Error)]
pub enum OtError {
    /// The group parameters failed validation.
    #[error("invalid DDH group: {0}")]
    InvalidGroup(&'static str),

    /// The receiver's public key is not in the prime-order subgroup.
    #[error("receiver public key not in the prime-order subgroup")]
    BadPublicKey,

    /// Two lengths that must agree did not.
    #[error("length mismatch: expected {expected}, got {actual}")]
    LengthMismatch {
        /// The required length.
        expected: usize,
        /// The length that was supplied.
        actual: usize,
    },

    /// A choice index was outside the payload range.
    #[error("index {index} out of range for {size} options")]
    OutOfRange {
        /// The offending index.
        index: usize,
        /// The number of options.
        size: usize,
    },

    /// The receiver tried to recover before seeing the sender key.
    #[error("receiver must be blinded with the sender key before recovering")]
    ReceiverNotBlinded,

    /// A 1-of-m payload was empty.
    #[error("payload must be non-empty")]
    EmptyPayload,

    /// A scalar payload element was outside Z_q^*.
    #[error("scalar payload element outside [1, q-1]")]
    ScalarOutOfRange,

    /// A bytes-mode chooser was used on a scalar service or vice versa.
    #[error("payload mode mismatch between service and chooser call")]
    ModeMismatch,

    /// A group element did not fit the fixed wire encoding.
    #[error("group element exceeds the fixed {0}-byte encoding")]
    ElementEncoding(usize),

    /// Entropy failure.
    #[error(transparent)]
    Entropy(#[from] EntropyError),

    /// PRF/PRG failure.
    #[error(transparent)]
    Crypto(#[from] CryptoError),
}
