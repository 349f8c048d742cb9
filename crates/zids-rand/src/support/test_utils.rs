// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test doubles for entropy-consuming code.

use core::cell::Cell;

use crate::error::EntropyError;
use crate::system::SystemEntropySource;
use crate::traits::EntropySource;

/// Configurable behaviour for [`MockEntropySource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockEntropyBehaviour {
    /// Normal operation (delegates to the real entropy source).
    None,
    /// Deterministic counting byte stream (0, 1, 2, ... wrapping).
    Counting,
    /// Always fail fill_bytes.
    FailAlways,
    /// Fail fill_bytes on the Nth call (1-indexed: 1 = first call fails).
    FailAtNthFillBytes(usize),
}

/// Mock entropy source for testing.
///
/// Wraps [`SystemEntropySource`] but allows deterministic output and
/// simulated failures via [`MockEntropyBehaviour`].
pub struct MockEntropySource {
    inner: SystemEntropySource,
    behaviour: MockEntropyBehaviour,
    fill_bytes_count: Cell<usize>,
    next_byte: Cell<u8>,
}

impl MockEntropySource {
    /// Creates a new mock entropy source with the specified behaviour.
    pub fn new(behaviour: MockEntropyBehaviour) -> Self {
        Self {
            inner: SystemEntropySource,
            behaviour,
            fill_bytes_count: Cell::new(0),
            next_byte: Cell::new(0),
        }
    }

    /// Returns the current fill_bytes call count.
    pub fn call_count(&self) -> usize {
        self.fill_bytes_count.get()
    }
}

impl EntropySource for MockEntropySource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        let current = self.fill_bytes_count.get();
        self.fill_bytes_count.set(current + 1);

        match self.behaviour {
            MockEntropyBehaviour::None => self.inner.fill_bytes(dest),
            MockEntropyBehaviour::Counting => {
                for b in dest.iter_mut() {
                    let n = self.next_byte.get();
                    *b = n;
                    self.next_byte.set(n.wrapping_add(1));
                }
                Ok(())
            }
            MockEntropyBehaviour::FailAlways => Err(EntropyError::EntropyNotAvailable),
            MockEntropyBehaviour::FailAtNthFillBytes(n) => {
                if current + 1 == n {
                    Err(EntropyError::EntropyNotAvailable)
                } else {
                    self.inner.fill_bytes(dest)
                }
            }
        }
    }
}
