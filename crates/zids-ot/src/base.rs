// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Naor-Pinkas 1-of-2 oblivious transfer.
//!
//! Protocol flow:
//!
//! 1. Sender samples `a`, publishes `A = g^a`.
//! 2. Receiver with choice bit σ samples `b`; sends `B = g^b` (σ = 0)
//!    or `B = A * g^b` (σ = 1).
//! 3. Sender validates B, computes `K_0 = B^a` and
//!    `K_1 = (B * A^-1)^a`, masks each message with
//!    `PRF(K_σ, "PRF|OT2|mσ")`.
//! 4. Receiver computes `K = A^b = g^ab` and unmasks its choice.
//!
//! The receiver's key equals `K_σ` for its own σ and is independent of
//! the other message's key under DDH.

use num_bigint::BigUint;
use zeroize::Zeroizing;
use zids_crypto::{prf_labeled, xor_bytes};
use zids_rand::EntropySource;

use crate::error::OtError;
use crate::group::DdhGroup;

const LABEL_M0: &[u8] = b"OT2|m0";
const LABEL_M1: &[u8] = b"OT2|m1";

/// The sending side of one 1-of-2 OT session.
pub struct Ot2Sender<'g> {
    group: &'g DdhGroup,
    /// Secret exponent a, big-endian, wiped on drop.
    a_bytes: Zeroizing<Vec<u8>>,
    big_a: BigUint,
}

impl<'g> Ot2Sender<'g> {
    /// Samples a fresh sender keypair.
    pub fn new<E: EntropySource + ?Sized>(
        group: &'g DdhGroup,
        entropy: &E,
    ) -> Result<Self, OtError> {
        let a = group.random_exponent(entropy)?;
        let big_a = group.pow(group.generator(), &a);
        Ok(Self {
            group,
            a_bytes: Zeroizing::new(a.to_bytes_be()),
            big_a,
        })
    }

    /// The sender public key `A = g^a`.
    pub fn public_key(&self) -> &BigUint {
        &self.big_a
    }

    /// Masks `(m0, m1)` against the receiver's blinded key `B`.
    ///
    /// # Errors
    ///
    /// [`OtError::BadPublicKey`] if B is outside the prime-order
    /// subgroup; [`OtError::LengthMismatch`] if the messages differ in
    /// length.
    pub fn respond(
        &self,
        b_pub: &BigUint,
        m0: &[u8],
        m1: &[u8],
    ) -> Result<(Vec<u8>, Vec<u8>), OtError> {
        self.group.ensure_member(b_pub)?;
        if m0.len() != m1.len() {
            return Err(OtError::LengthMismatch {
                expected: m0.len(),
                actual: m1.len(),
            });
        }

        let a = BigUint::from_bytes_be(&self.a_bytes);
        let k0 = self.group.pow(b_pub, &a);
        let a_inv = self.group.inverse(&self.big_a);
        let k1 = self.group.pow(&self.group.mul(b_pub, &a_inv), &a);

        let k0_bytes = Zeroizing::new(self.group.encode_element(&k0)?);
        let k1_bytes = Zeroizing::new(self.group.encode_element(&k1)?);

        let mut pad0 = Zeroizing::new(vec![0u8; m0.len()]);
        let mut pad1 = Zeroizing::new(vec![0u8; m1.len()]);
        prf_labeled(&k0_bytes, LABEL_M0, &mut pad0)?;
        prf_labeled(&k1_bytes, LABEL_M1, &mut pad1)?;

        Ok((xor_bytes(m0, &pad0)?, xor_bytes(m1, &pad1)?))
    }
}

/// The receiving side of one 1-of-2 OT session.
pub struct Ot2Receiver<'g> {
    group: &'g DdhGroup,
    choice: bool,
    /// Secret exponent b, big-endian, wiped on drop.
    b_bytes: Zeroizing<Vec<u8>>,
    sender_key: Option<BigUint>,
}

impl<'g> Ot2Receiver<'g> {
    /// Samples a fresh receiver exponent for choice bit `choice`.
    pub fn new<E: EntropySource + ?Sized>(
        group: &'g DdhGroup,
        choice: bool,
        entropy: &E,
    ) -> Result<Self, OtError> {
        let b = group.random_exponent(entropy)?;
        Ok(Self {
            group,
            choice,
            b_bytes: Zeroizing::new(b.to_bytes_be()),
            sender_key: None,
        })
    }

    /// Consumes the sender key A and returns the blinded key B to send
    /// back: `g^b` for choice 0, `A * g^b` for choice 1.
    pub fn blind(&mut self, big_a: &BigUint) -> BigUint {
        self.sender_key = Some(big_a.clone());
        let b = BigUint::from_bytes_be(&self.b_bytes);
        let g_pow_b = self.group.pow(self.group.generator(), &b);
        if self.choice {
            self.group.mul(big_a, &g_pow_b)
        } else {
            g_pow_b
        }
    }

    /// Unmasks the chosen message from the sender's ciphertext pair.
    ///
    /// # Errors
    ///
    /// [`OtError::ReceiverNotBlinded`] if called before [`blind`]
    /// (messages must never be processed before the sender key is
    /// known); [`OtError::LengthMismatch`] on unequal ciphertexts.
    ///
    /// [`blind`]: Ot2Receiver::blind
    pub fn recover(&self, c0: &[u8], c1: &[u8]) -> Result<Vec<u8>, OtError> {
        let big_a = self.sender_key.as_ref().ok_or(OtError::ReceiverNotBlinded)?;
        if c0.len() != c1.len() {
            return Err(OtError::LengthMismatch {
                expected: c0.len(),
                actual: c1.len(),
            });
        }

        let b = BigUint::from_bytes_be(&self.b_bytes);
        let k = self.group.pow(big_a, &b);
        let k_bytes = Zeroizing::new(self.group.encode_element(&k)?);

        let (chosen, label) = if self.choice {
            (c1, LABEL_M1)
        } else {
            (c0, LABEL_M0)
        };
        let mut pad = Zeroizing::new(vec![0u8; chosen.len()]);
        prf_labeled(&k_bytes, label, &mut pad)?;
        Ok(xor_bytes(chosen, &pad)?)
    }
}
