// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! OS-backed entropy source.

use crate::error::EntropyError;
use crate::traits::EntropySource;

/// Entropy source backed by the operating system CSPRNG.
///
/// Delegates to `getrandom`: `getrandom()` on Linux/Android,
/// `getentropy()` on macOS/iOS, `BCryptGenRandom` on Windows.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemEntropySource;

impl EntropySource for SystemEntropySource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        getrandom::fill(dest).map_err(|_| EntropyError::EntropyNotAvailable)
    }
}

/// Fills `dest` from the system CSPRNG.
pub fn fill_with_random_bytes(dest: &mut [u8]) -> Result<(), EntropyError> {
    SystemEntropySource.fill_bytes(dest)
}
