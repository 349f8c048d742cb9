// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Counter-mode HMAC-SHA256 PRF.
//!
//! The expansion is HKDF-Expand shaped: `T_i = HMAC(key, T_{i-1} ||
//! info || I2OSP(i, 4))` with `T_0 = ""`, output `T_1 || T_2 || ...`
//! truncated to the requested length. The key is used directly as the
//! PRK; callers always hold fixed-length secret key material.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::CryptoError;

type HmacSha256 = Hmac<Sha256>;

/// SHA-256 output size in bytes.
pub const HASH_LEN: usize = 32;

/// Fills `okm` with PRF output for `(key, info)`.
///
/// Deterministic: identical inputs always produce identical output,
/// across instances and processes.
///
/// # Errors
///
/// Returns [`CryptoError::EmptyKey`] if `key` is empty.
pub fn prf(key: &[u8], info: &[u8], okm: &mut [u8]) -> Result<(), CryptoError> {
    if key.is_empty() {
        return Err(CryptoError::EmptyKey);
    }

    let mut t = [0u8; HASH_LEN];
    let mut t_len = 0usize;
    let mut counter: u32 = 1;
    let mut written = 0usize;

    while written < okm.len() {
        // HMAC accepts keys of any length; new_from_slice cannot fail.
        let mut mac =
            HmacSha256::new_from_slice(key).expect("HMAC-SHA256 accepts any key length");
        mac.update(&t[..t_len]);
        mac.update(info);
        mac.update(&counter.to_be_bytes());
        let digest = mac.finalize().into_bytes();

        let take = HASH_LEN.min(okm.len() - written);
        okm[written..written + take].copy_from_slice(&digest[..take]);
        written += take;

        t.copy_from_slice(&digest);
        t_len = HASH_LEN;
        counter += 1;
    }
    Ok(())
}

/// Allocating variant of [`prf`].
pub fn prf_bytes(key: &[u8], info: &[u8], out_len: usize) -> Result<Vec<u8>, CryptoError> {
    let mut okm = vec![0u8; out_len];
    prf(key, info, &mut okm)?;
    Ok(okm)
}

/// PRF with a bare label: equivalent to `prf(key, "PRF|" || label, okm)`.
///
/// Used by the base OT for its message pads.
pub fn prf_labeled(key: &[u8], label: &[u8], okm: &mut [u8]) -> Result<(), CryptoError> {
    let mut info = Vec::with_capacity(4 + label.len());
    info.extend_from_slice(b"PRF|");
    info.extend_from_slice(label);
    prf(key, &info, okm)
}
