// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Seed expansion (PRG) with label, counter and length binding.
//!
//! Block `i` is `HMAC(seed, "PRG|" || label || "|ctr=" || I2OSP(i, 4)
//! || "|len=" || I2OSP(out_len, 4))`; the output is the concatenation
//! of blocks truncated to `out_len`. Binding the total length into
//! every block prevents extension attacks when the same seed is
//! expanded to different sizes.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::CryptoError;
use crate::prf::HASH_LEN;

type HmacSha256 = Hmac<Sha256>;

/// Expands `seed` into exactly `out_len` bytes under `label`.
///
/// # Errors
///
/// Returns [`CryptoError::EmptyKey`] if `seed` is empty.
pub fn expand_bytes(seed: &[u8], out_len: usize, label: &[u8]) -> Result<Vec<u8>, CryptoError> {
    if seed.is_empty() {
        return Err(CryptoError::EmptyKey);
    }

    let mut out = vec![0u8; out_len];
    let mut written = 0usize;
    let mut counter: u32 = 1;

    while written < out_len {
        let mut mac =
            HmacSha256::new_from_slice(seed).expect("HMAC-SHA256 accepts any key length");
        mac.update(b"PRG|");
        mac.update(label);
        mac.update(b"|ctr=");
        mac.update(&counter.to_be_bytes());
        mac.update(b"|len=");
        mac.update(&(out_len as u32).to_be_bytes());
        let digest = mac.finalize().into_bytes();

        let take = HASH_LEN.min(out_len - written);
        out[written..written + take].copy_from_slice(&digest[..take]);
        written += take;
        counter += 1;
    }
    Ok(out)
}

/// Expands `seed` into exactly `out_bits` bits under `label`.
///
/// Returns `ceil(out_bits / 8)` bytes; the superfluous low-order bits
/// of the last byte are zeroed so the buffer carries exactly
/// `out_bits` meaningful MSB-first bits.
///
/// # Errors
///
/// Returns [`CryptoError::EmptyKey`] if `seed` is empty.
pub fn expand_bits(seed: &[u8], out_bits: usize, label: &[u8]) -> Result<Vec<u8>, CryptoError> {
    let out_len = out_bits.div_ceil(8);
    if out_len == 0 {
        // Still reject empty seeds on the zero-length path.
        if seed.is_empty() {
            return Err(CryptoError::EmptyKey);
        }
        return Ok(Vec::new());
    }

    let mut buf = expand_bytes(seed, out_len, label)?;
    let r = out_bits & 7;
    if r != 0 {
        let mask = 0xFFu8 << (8 - r);
        let last = buf.len() - 1;
        buf[last] &= mask;
    }
    Ok(buf)
}
