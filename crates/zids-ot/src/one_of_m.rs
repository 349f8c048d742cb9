// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! 1-of-m oblivious transfer by bit decomposition.
//!
//! For ℓ = ceil(log2 m) bit positions the sender samples a seed pair
//! `(s0_j, s1_j)`. The pad for option t is
//!
//! ```text
//! pad_t = XOR_{j=0..ℓ-1} PRF(s_{bit_j(t)}_j,
//!                            label || "|j=" || I2OSP(j,2) || "|sid=" || sid,
//!                            L)
//! ```
//!
//! with LSB-first bit extraction and a 16-byte per-service salt `sid`.
//! Ciphertext `ct_t = pt_t ^ pad_t`. The receiver learns exactly one
//! seed per position via ℓ base OTs, so it can reconstruct exactly one
//! pad; the ℓ-1 opposite seeds stay hidden and with them every other
//! option.
//!
//! m = 1 degenerates cleanly: ℓ = 0, the pad is all-zero and the
//! ciphertext equals the plaintext.

use num_bigint::BigUint;
use num_traits::One;
use zeroize::Zeroizing;
use zids_crypto::{i2osp, prf, prf_bytes, xor_bytes, xor_into};
use zids_rand::EntropySource;

use crate::base::{Ot2Receiver, Ot2Sender};
use crate::error::OtError;
use crate::group::DdhGroup;

/// Length of the per-bit-position seeds.
pub const SEED_LEN: usize = 32;
/// Length of the per-service domain-separation salt.
pub const SID_LEN: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PayloadKind {
    Bytes,
    Scalar,
}

/// The sending side of a 1-of-m OT service.
///
/// Holds the per-bit seed pairs (secret, zeroized on drop) and the
/// precomputed ciphertext table (public).
pub struct OneOfMSender<'g> {
    group: &'g DdhGroup,
    label: Vec<u8>,
    sid: [u8; SID_LEN],
    kind: PayloadKind,
    entry_len: usize,
    options: usize,
    bit_len: usize,
    seeds0: Vec<Zeroizing<[u8; SEED_LEN]>>,
    seeds1: Vec<Zeroizing<[u8; SEED_LEN]>>,
    pub(crate) ciphertexts: Vec<Vec<u8>>,
}

impl<'g> OneOfMSender<'g> {
    /// Builds a bytes-mode service: all entries must share one
    /// non-zero length.
    pub fn from_bytes<E: EntropySource + ?Sized>(
        group: &'g DdhGroup,
        payload: &[Vec<u8>],
        label: &[u8],
        sid: Option<[u8; SID_LEN]>,
        entropy: &E,
    ) -> Result<Self, OtError> {
        if payload.is_empty() {
            return Err(OtError::EmptyPayload);
        }
        let entry_len = payload[0].len();
        if entry_len == 0 {
            return Err(OtError::LengthMismatch {
                expected: 1,
                actual: 0,
            });
        }
        for item in payload {
            if item.len() != entry_len {
                return Err(OtError::LengthMismatch {
                    expected: entry_len,
                    actual: item.len(),
                });
            }
        }
        Self::build(
            group,
            payload.to_vec(),
            PayloadKind::Bytes,
            label,
            sid,
            entropy,
        )
    }

    /// Builds a scalar-mode service: every element must lie in Z_q^*,
    /// encoded to the group's fixed `q_bytes` width.
    pub fn from_scalars<E: EntropySource + ?Sized>(
        group: &'g DdhGroup,
        payload: &[BigUint],
        label: &[u8],
        sid: Option<[u8; SID_LEN]>,
        entropy: &E,
    ) -> Result<Self, OtError> {
        if payload.is_empty() {
            return Err(OtError::EmptyPayload);
        }
        let mut plain = Vec::with_capacity(payload.len());
        for x in payload {
            if x < &BigUint::one() || x >= group.order() {
                return Err(OtError::ScalarOutOfRange);
            }
            plain.push(group.encode_element(x)?);
        }
        Self::build(group, plain, PayloadKind::Scalar, label, sid, entropy)
    }

    fn build<E: EntropySource + ?Sized>(
        group: &'g DdhGroup,
        plain: Vec<Vec<u8>>,
        kind: PayloadKind,
        label: &[u8],
        sid: Option<[u8; SID_LEN]>,
        entropy: &E,
    ) -> Result<Self, OtError> {
        let sid = match sid {
            Some(s) => s,
            None => {
                let mut s = [0u8; SID_LEN];
                entropy.fill_bytes(&mut s)?;
                s
            }
        };

        let options = plain.len();
        let entry_len = plain[0].len();
        let bit_len = usize::BITS as usize - (options - 1).leading_zeros() as usize;

        let mut seeds0 = Vec::with_capacity(bit_len);
        let mut seeds1 = Vec::with_capacity(bit_len);
        for _ in 0..bit_len {
            let mut s0 = Zeroizing::new([0u8; SEED_LEN]);
            let mut s1 = Zeroizing::new([0u8; SEED_LEN]);
            entropy.fill_bytes(&mut s0[..])?;
            entropy.fill_bytes(&mut s1[..])?;
            seeds0.push(s0);
            seeds1.push(s1);
        }

        let mut svc = Self {
            group,
            label: label.to_vec(),
            sid,
            kind,
            entry_len,
            options,
            bit_len,
            seeds0,
            seeds1,
            ciphertexts: Vec::with_capacity(options),
        };
        for (t, pt) in plain.iter().enumerate() {
            let pad = svc.pad_for(t)?;
            svc.ciphertexts.push(xor_bytes(pt, &pad)?);
        }
        Ok(svc)
    }

    /// Number of payload options m.
    pub fn options(&self) -> usize {
        self.options
    }

    /// Fixed ciphertext entry length L.
    pub fn entry_len(&self) -> usize {
        self.entry_len
    }

    /// ℓ = ceil(log2 m): number of base OTs one choice costs.
    pub fn bit_len(&self) -> usize {
        self.bit_len
    }

    /// The per-service salt.
    pub fn sid(&self) -> &[u8; SID_LEN] {
        &self.sid
    }

    pub(crate) fn kind(&self) -> PayloadKind {
        self.kind
    }

    pub(crate) fn group(&self) -> &'g DdhGroup {
        self.group
    }

    pub(crate) fn seed_pair(&self, j: usize) -> (&[u8; SEED_LEN], &[u8; SEED_LEN]) {
        (&*self.seeds0[j], &*self.seeds1[j])
    }

    fn info_for_bit(label: &[u8], j: usize, sid: &[u8; SID_LEN]) -> Result<Vec<u8>, OtError> {
        let mut info = Vec::with_capacity(label.len() + 3 + 2 + 5 + SID_LEN);
        info.extend_from_slice(label);
        info.extend_from_slice(b"|j=");
        info.extend_from_slice(&i2osp(j as u64, 2)?);
        info.extend_from_slice(b"|sid=");
        info.extend_from_slice(sid);
        Ok(info)
    }

    /// Aggregates the pad for option `t` from the sender-held seeds.
    fn pad_for(&self, t: usize) -> Result<Zeroizing<Vec<u8>>, OtError> {
        let mut pad = Zeroizing::new(vec![0u8; self.entry_len]);
        for j in 0..self.bit_len {
            let bit = (t >> j) & 1;
            let seed: &[u8] = if bit == 1 {
                self.seeds1[j].as_ref()
            } else {
                self.seeds0[j].as_ref()
            };
            let info = Self::info_for_bit(&self.label, j, &self.sid)?;
            let block = prf_bytes(seed, &info, self.entry_len)?;
            xor_into(&mut pad, &block)?;
        }
        Ok(pad)
    }
}

/// The receiving side of a 1-of-m OT service.
///
/// Carries its own copy of the label so that a mislabeled receiver
/// reconstructs a garbage pad rather than silently agreeing with the
/// sender.
pub struct OneOfMChooser<'a, 'g> {
    service: &'a OneOfMSender<'g>,
    label: Vec<u8>,
}

impl<'a, 'g> OneOfMChooser<'a, 'g> {
    /// Binds a chooser to a sender service under `label`.
    pub fn new(service: &'a OneOfMSender<'g>, label: &[u8]) -> Self {
        Self {
            service,
            label: label.to_vec(),
        }
    }

    /// Recovers the chosen bytes-mode entry.
    ///
    /// # Errors
    ///
    /// [`OtError::ModeMismatch`] on a scalar-mode service;
    /// [`OtError::OutOfRange`] for `index >= m`.
    pub fn choose_bytes<E: EntropySource + ?Sized>(
        &self,
        index: usize,
        entropy: &E,
    ) -> Result<Vec<u8>, OtError> {
        if self.service.kind() != PayloadKind::Bytes {
            return Err(OtError::ModeMismatch);
        }
        self.choose_raw(index, entropy)
    }

    /// Recovers the chosen scalar-mode entry, re-checking the Z_q^*
    /// range contract.
    pub fn choose_scalar<E: EntropySource + ?Sized>(
        &self,
        index: usize,
        entropy: &E,
    ) -> Result<BigUint, OtError> {
        if self.service.kind() != PayloadKind::Scalar {
            return Err(OtError::ModeMismatch);
        }
        let pt = self.choose_raw(index, entropy)?;
        let x = BigUint::from_bytes_be(&pt);
        if x < BigUint::one() || &x >= self.service.group().order() {
            return Err(OtError::ScalarOutOfRange);
        }
        Ok(x)
    }

    fn choose_raw<E: EntropySource + ?Sized>(
        &self,
        index: usize,
        entropy: &E,
    ) -> Result<Vec<u8>, OtError> {
        let svc = self.service;
        if index >= svc.options() {
            return Err(OtError::OutOfRange {
                index,
                size: svc.options(),
            });
        }

        // One base OT per bit position: the receiver's choice bit is
        // bit_j(index), LSB-first.
        let mut learned: Vec<Zeroizing<Vec<u8>>> = Vec::with_capacity(svc.bit_len());
        for j in 0..svc.bit_len() {
            let bit = (index >> j) & 1 == 1;
            let ot_sender = Ot2Sender::new(svc.group(), entropy)?;
            let mut ot_receiver = Ot2Receiver::new(svc.group(), bit, entropy)?;
            let blinded = ot_receiver.blind(ot_sender.public_key());
            let (s0, s1) = svc.seed_pair(j);
            let (c0, c1) = ot_sender.respond(&blinded, s0.as_ref(), s1.as_ref())?;
            let seed = Zeroizing::new(ot_receiver.recover(&c0, &c1)?);
            if seed.len() != SEED_LEN {
                return Err(OtError::LengthMismatch {
                    expected: SEED_LEN,
                    actual: seed.len(),
                });
            }
            learned.push(seed);
        }

        let mut pad = Zeroizing::new(vec![0u8; svc.entry_len()]);
        for (j, seed) in learned.iter().enumerate() {
            let info = OneOfMSender::info_for_bit(&self.label, j, svc.sid())?;
            let mut block = vec![0u8; svc.entry_len()];
            prf(seed, &info, &mut block)?;
            xor_into(&mut pad, &block)?;
        }

        Ok(xor_bytes(&svc.ciphertexts[index], &pad)?)
    }
}
