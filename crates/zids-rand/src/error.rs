// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for zids-rand.

use thiserror::Error;

/// Errors from entropy sources and samplers.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum EntropyError {
    /// The system entropy source is unavailable or failed.
    #[error("entropy source not available")]
    EntropyNotAvailable,

    /// A sampler was asked for an index in an empty range.
    #[error("cannot sample an index from an empty range")]
    EmptyRange,
}
