// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! 1-of-256 wrapper over the 1-of-m construction.
//!
//! Every GDFA row publishes exactly one such table: 256 fixed-length
//! entries, one per input symbol, each holding the row's group keys
//! for the columns that symbol belongs to (padded with fresh
//! randomness to the fixed entry length).

use zids_rand::EntropySource;

use crate::error::OtError;
use crate::group::DdhGroup;
use crate::one_of_m::{OneOfMChooser, OneOfMSender, SID_LEN};

/// Number of options in the symbol-indexed OT: one per byte value.
pub const OT256_OPTIONS: usize = 256;

/// A validated 256-entry fixed-length payload table.
#[derive(Debug, Clone)]
pub struct Ot256Table {
    entries: Vec<Vec<u8>>,
    entry_len: usize,
}

impl Ot256Table {
    /// Validates and wraps a payload table.
    ///
    /// # Errors
    ///
    /// [`OtError::LengthMismatch`] unless there are exactly 256 entries
    /// all sharing one non-zero length.
    pub fn new(entries: Vec<Vec<u8>>) -> Result<Self, OtError> {
        if entries.len() != OT256_OPTIONS {
            return Err(OtError::LengthMismatch {
                expected: OT256_OPTIONS,
                actual: entries.len(),
            });
        }
        let entry_len = entries[0].len();
        if entry_len == 0 {
            return Err(OtError::LengthMismatch {
                expected: 1,
                actual: 0,
            });
        }
        for e in &entries {
            if e.len() != entry_len {
                return Err(OtError::LengthMismatch {
                    expected: entry_len,
                    actual: e.len(),
                });
            }
        }
        Ok(Self { entries, entry_len })
    }

    /// The fixed entry length.
    pub fn entry_len(&self) -> usize {
        self.entry_len
    }

    /// The table entries.
    pub fn entries(&self) -> &[Vec<u8>] {
        &self.entries
    }
}

/// An in-process 1-of-256 service: the sender state plus a chooser
/// bound to the same label.
///
/// Deployments that split the parties keep [`OneOfMSender`] on the
/// server and drive the choice through a token transport instead; this
/// wrapper is the local composition used by tests, demos and the
/// in-process token source.
pub struct Ot256Chooser<'g> {
    sender: OneOfMSender<'g>,
    label: Vec<u8>,
}

impl<'g> Ot256Chooser<'g> {
    /// Builds the sender service from `table` and binds a chooser to
    /// it under `label`.
    pub fn new<E: EntropySource + ?Sized>(
        group: &'g DdhGroup,
        table: &Ot256Table,
        label: &[u8],
        sid: Option<[u8; SID_LEN]>,
        entropy: &E,
    ) -> Result<Self, OtError> {
        let sender = OneOfMSender::from_bytes(group, table.entries(), label, sid, entropy)?;
        Ok(Self {
            sender,
            label: label.to_vec(),
        })
    }

    /// The underlying sender service.
    pub fn sender(&self) -> &OneOfMSender<'g> {
        &self.sender
    }

    /// Fixed entry length of the table.
    pub fn entry_len(&self) -> usize {
        self.sender.entry_len()
    }

    /// Obliviously recovers the table entry for `index`.
    ///
    /// # Errors
    ///
    /// [`OtError::OutOfRange`] for `index >= 256`.
    pub fn choose<E: EntropySource + ?Sized>(
        &self,
        index: usize,
        entropy: &E,
    ) -> Result<Vec<u8>, OtError> {
        if index >= OT256_OPTIONS {
            return Err(OtError::OutOfRange {
                index,
                size: OT256_OPTIONS,
            });
        }
        OneOfMChooser::new(&self.sender, &self.label).choose_bytes(index, entropy)
    }

    /// Recovers several entries, preserving the input order.
    pub fn choose_many<E: EntropySource + ?Sized>(
        &self,
        indices: &[usize],
        entropy: &E,
    ) -> Result<Vec<Vec<u8>>, OtError> {
        indices
            .iter()
            .map(|&i| self.choose(i, entropy))
            .collect()
    }
}
