// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Prime-order subgroup of Z_p^* for the DDH-based base OT.

use num_bigint::BigUint;
use num_traits::{One, Zero};
use zids_rand::EntropySource;

use crate::error::OtError;

/// RFC 3526 MODP group 14: a 2048-bit safe prime.
const RFC3526_MODP_2048_P: &str = concat!(
    "FFFFFFFFFFFFFFFFC90FDAA22168C234C4C6628B80DC1CD129024E088A67CC74",
    "020BBEA63B139B22514A08798E3404DDEF9519B3CD3A431B302B0A6DF25F1437",
    "4FE1356D6D51C245E485B576625E7EC6F44C42E9A637ED6B0BFF5CB6F406B7ED",
    "EE386BFB5A899FA5AE9F24117C4B1FE649286651ECE45B3DC2007CB8A163BF05",
    "98DA48361C55D39A69163FA8FD24CF5F83655D23DCA3AD961C62F356208552BB",
    "9ED529077096966D670C354E4ABC9804F1746C08CA18217C32905E462E36CE3B",
    "E39E772C180E86039B2783A2EC07A28FB5C55DF06F4C52C9DE2BCBF695581718",
    "3995497CEA956AE515D2261898FA051015728E5A8AACAA68FFFFFFFFFFFFFFFF",
);

/// A group (p, q, g): g generates the prime-order-q subgroup of Z_p^*.
///
/// Invariants enforced at construction: `q | p - 1`, `2 < g < p - 1`,
/// `g^q = 1 (mod p)` and `g^2 != 1 (mod p)`.
#[derive(Debug, Clone)]
pub struct DdhGroup {
    p: BigUint,
    q: BigUint,
    g: BigUint,
    q_bytes: usize,
}

impl DdhGroup {
    /// Builds a group from explicit parameters, validating the subgroup
    /// structure.
    ///
    /// # Errors
    ///
    /// Returns [`OtError::InvalidGroup`] naming the violated check.
    pub fn new(p: BigUint, q: BigUint, g: BigUint) -> Result<Self, OtError> {
        let one = BigUint::one();
        let two = BigUint::from(2u8);
        if p <= two || q <= one {
            return Err(OtError::InvalidGroup("p and q must exceed 2 and 1"));
        }
        if !((&p - &one) % &q).is_zero() {
            return Err(OtError::InvalidGroup("q must divide p - 1"));
        }
        if g <= two || g >= &p - &one {
            return Err(OtError::InvalidGroup("generator out of range (2, p-1)"));
        }
        if g.modpow(&q, &p) != one {
            return Err(OtError::InvalidGroup("generator not in the order-q subgroup"));
        }
        if g.modpow(&two, &p) == one {
            return Err(OtError::InvalidGroup("generator has small order"));
        }
        let q_bytes = (q.bits() as usize).div_ceil(8);
        Ok(Self { p, q, g, q_bytes })
    }

    /// The RFC 3526 group-14 safe prime with `q = (p - 1) / 2` and
    /// `g = 4`.
    ///
    /// The RFC names 2 as generator; 2 has order q here (p = 7 mod 8)
    /// but sits on the boundary the `2 < g` check excludes, so its
    /// square is used. 4 is a quadratic residue and therefore also of
    /// order q.
    pub fn rfc3526_modp_2048() -> Self {
        let p = BigUint::parse_bytes(RFC3526_MODP_2048_P.as_bytes(), 16)
            .expect("RFC 3526 modulus is valid hex");
        let q = (&p - BigUint::one()) >> 1;
        Self::new(p, q, BigUint::from(4u8)).expect("RFC 3526 group parameters are valid")
    }

    /// The modulus p.
    pub fn modulus(&self) -> &BigUint {
        &self.p
    }

    /// The subgroup order q.
    pub fn order(&self) -> &BigUint {
        &self.q
    }

    /// The generator g.
    pub fn generator(&self) -> &BigUint {
        &self.g
    }

    /// Fixed byte length for encoding exponents and shared keys:
    /// `ceil(q.bits() / 8)`.
    pub fn q_bytes(&self) -> usize {
        self.q_bytes
    }

    /// `base^exp mod p`.
    pub fn pow(&self, base: &BigUint, exp: &BigUint) -> BigUint {
        base.modpow(exp, &self.p)
    }

    /// `a * b mod p`.
    pub fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b) % &self.p
    }

    /// Multiplicative inverse mod the prime p (Fermat).
    pub fn inverse(&self, a: &BigUint) -> BigUint {
        let exp = &self.p - BigUint::from(2u8);
        a.modpow(&exp, &self.p)
    }

    /// Checks that `y` lies in the prime-order subgroup: `1 < y < p`
    /// and `y^q = 1 (mod p)`.
    ///
    /// # Errors
    ///
    /// Returns [`OtError::BadPublicKey`] otherwise.
    pub fn ensure_member(&self, y: &BigUint) -> Result<(), OtError> {
        if y <= &BigUint::one() || y >= &self.p {
            return Err(OtError::BadPublicKey);
        }
        if y.modpow(&self.q, &self.p) != BigUint::one() {
            return Err(OtError::BadPublicKey);
        }
        Ok(())
    }

    /// Samples a secret exponent uniformly from `[1, q)`.
    ///
    /// Rejection sampling over `q_bytes` draws; no modulo bias.
    pub fn random_exponent<E: EntropySource + ?Sized>(
        &self,
        entropy: &E,
    ) -> Result<BigUint, OtError> {
        let mut buf = vec![0u8; self.q_bytes];
        loop {
            entropy.fill_bytes(&mut buf)?;
            let x = BigUint::from_bytes_be(&buf);
            if x >= BigUint::one() && x < self.q {
                return Ok(x);
            }
        }
    }

    /// Encodes a group element as exactly `q_bytes` big-endian bytes.
    ///
    /// # Errors
    ///
    /// Returns [`OtError::ElementEncoding`] if the element does not fit
    /// (cannot happen for safe-prime groups of byte-aligned size).
    pub fn encode_element(&self, y: &BigUint) -> Result<Vec<u8>, OtError> {
        let raw = y.to_bytes_be();
        if raw.len() > self.q_bytes {
            return Err(OtError::ElementEncoding(self.q_bytes));
        }
        let mut out = vec![0u8; self.q_bytes];
        out[self.q_bytes - raw.len()..].copy_from_slice(&raw);
        Ok(out)
    }
}
