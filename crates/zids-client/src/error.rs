// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for zids-client.

use thiserror::Error;
use zids_odfa::OdfaError;
use zids_ot::OtError;
use zids_rand::EntropyError;

/// Errors from client-side I/O and setup.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network-level failure reaching the server.
    #[error("transport: {0}")]
    Transport(String),

    /// The server answered with an error envelope.
    #[error("server error {code}: {message}")]
    Protocol {
        /// The canonical error code.
        code: String,
        /// Human-readable server message.
        message: String,
    },

    /// The response body was not what the protocol promises.
    #[error("bad response: {0}")]
    BadResponse(String),

    /// Local file I/O failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Parameter validation failure.
    #[error(transparent)]
    Params(#[from] OdfaError),

    /// Group validation failure during setup.
    #[error(transparent)]
    Ot(#[from] OtError),

    /// Entropy failure.
    #[error(transparent)]
    Entropy(#[from] EntropyError),
}
