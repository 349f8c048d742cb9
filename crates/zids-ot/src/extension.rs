// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Batched OT facade.
//!
//! Not a true IKNP extension: the shipping backend executes one base
//! OT per choice. The contract (`batch_recv_bytes`,
//! `batch_recv_scalars`) is the stable seam; substituting a real
//! extension engine is an implementation swap behind it.

use num_bigint::BigUint;
use num_traits::One;
use zids_rand::EntropySource;

use crate::base::{Ot2Receiver, Ot2Sender};
use crate::error::OtError;
use crate::group::DdhGroup;

/// Configuration for the batched OT facade.
#[derive(Debug, Clone, Copy)]
pub struct OtExtConfig {
    /// Statistical security parameter reserved for the base-OT count
    /// of a real extension engine.
    pub kappa: usize,
}

impl Default for OtExtConfig {
    fn default() -> Self {
        Self { kappa: 128 }
    }
}

/// Available backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtExtBackend {
    /// One base OT per transfer; O(n) public-key operations.
    Direct,
}

/// Batched 1-of-2 OT receiver interface.
pub struct OtExtension<'g> {
    group: &'g DdhGroup,
    #[allow(dead_code)]
    config: OtExtConfig,
    backend: OtExtBackend,
}

impl<'g> OtExtension<'g> {
    /// Creates the facade over `group` with the given backend.
    pub fn new(group: &'g DdhGroup, config: OtExtConfig, backend: OtExtBackend) -> Self {
        Self {
            group,
            config,
            backend,
        }
    }

    /// Receives `choices.len()` byte messages: entry j is `m0[j]` when
    /// `choices[j]` is false, else `m1[j]`.
    ///
    /// # Errors
    ///
    /// [`OtError::LengthMismatch`] if the three batch vectors disagree
    /// in length or a message pair does.
    pub fn batch_recv_bytes<E: EntropySource + ?Sized>(
        &self,
        choices: &[bool],
        m0: &[Vec<u8>],
        m1: &[Vec<u8>],
        entropy: &E,
    ) -> Result<Vec<Vec<u8>>, OtError> {
        if m0.len() != choices.len() || m1.len() != choices.len() {
            return Err(OtError::LengthMismatch {
                expected: choices.len(),
                actual: m0.len().min(m1.len()),
            });
        }
        match self.backend {
            OtExtBackend::Direct => choices
                .iter()
                .zip(m0.iter().zip(m1))
                .map(|(&bit, (a, b))| self.single(bit, a, b, entropy))
                .collect(),
        }
    }

    /// Scalar batch variant: all messages in Z_q^*, results re-checked
    /// against the same range.
    pub fn batch_recv_scalars<E: EntropySource + ?Sized>(
        &self,
        choices: &[bool],
        m0: &[BigUint],
        m1: &[BigUint],
        entropy: &E,
    ) -> Result<Vec<BigUint>, OtError> {
        if m0.len() != choices.len() || m1.len() != choices.len() {
            return Err(OtError::LengthMismatch {
                expected: choices.len(),
                actual: m0.len().min(m1.len()),
            });
        }
        let encode = |x: &BigUint| -> Result<Vec<u8>, OtError> {
            if x < &BigUint::one() || x >= self.group.order() {
                return Err(OtError::ScalarOutOfRange);
            }
            self.group.encode_element(x)
        };
        let mut out = Vec::with_capacity(choices.len());
        for (&bit, (a, b)) in choices.iter().zip(m0.iter().zip(m1)) {
            let raw = self.single(bit, &encode(a)?, &encode(b)?, entropy)?;
            let x = BigUint::from_bytes_be(&raw);
            if x < BigUint::one() || &x >= self.group.order() {
                return Err(OtError::ScalarOutOfRange);
            }
            out.push(x);
        }
        Ok(out)
    }

    fn single<E: EntropySource + ?Sized>(
        &self,
        choice: bool,
        m0: &[u8],
        m1: &[u8],
        entropy: &E,
    ) -> Result<Vec<u8>, OtError> {
        let sender = Ot2Sender::new(self.group, entropy)?;
        let mut receiver = Ot2Receiver::new(self.group, choice, entropy)?;
        let blinded = receiver.blind(sender.public_key());
        let (c0, c1) = sender.respond(&blinded, m0, m1)?;
        receiver.recover(&c0, &c1)
    }
}
