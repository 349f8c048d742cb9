// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for zids-gdfa.
//!
//! The core never silently recovers: every failure surfaces to the
//! immediate caller, and retries are the caller's policy concern.

use thiserror::Error;
use zids_crypto::CryptoError;
use zids_odfa::OdfaError;
use zids_ot::OtError;
use zids_rand::EntropyError;

/// Errors from garbling, evaluation and container handling.
#[derive(Debug, Error)]
pub enum GdfaError {
    /// A parameter or header constraint was violated.
    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),

    /// The container bytes are structurally unusable.
    #[error("malformed container: {0}")]
    MalformedContainer(String),

    /// The container header JSON failed to parse.
    #[error("malformed header JSON: {0}")]
    MalformedHeader(#[from] serde_json::Error),

    /// The rows payload digest did not match.
    #[error("rows payload SHA-256 mismatch")]
    IntegrityFailure,

    /// A token or buffer had the wrong length.
    #[error("length mismatch: expected {expected}, got {actual}")]
    LengthMismatch {
        /// The required length.
        expected: usize,
        /// The supplied length.
        actual: usize,
    },

    /// No (column, key) candidate decrypted to a well-formed cell.
    #[error("no valid (col, pad) for row {row_id}, symbol {symbol:#04x} (invalid token?)")]
    InvalidToken {
        /// Row the token was requested for.
        row_id: u32,
        /// Input symbol.
        symbol: u8,
    },

    /// A row id or symbol was out of bounds.
    #[error("{what} {value} out of range [0, {bound})")]
    OutOfRange {
        /// What was indexed.
        what: &'static str,
        /// The offending value.
        value: usize,
        /// The exclusive bound.
        bound: usize,
    },

    /// Automaton-side failure.
    #[error(transparent)]
    Odfa(#[from] OdfaError),

    /// OT-stack failure.
    #[error(transparent)]
    Ot(#[from] OtError),

    /// PRF/PRG failure.
    #[error(transparent)]
    Crypto(#[from] CryptoError),

    /// Entropy failure.
    #[error(transparent)]
    Entropy(#[from] EntropyError),

    /// File I/O failure while reading or writing a container.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Token transport failure (network, malformed response). The
    /// core does not retry; retrying is the caller's policy.
    #[error("transport: {0}")]
    Transport(String),
}
