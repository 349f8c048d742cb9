// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test fixtures for OT-consuming code.

use num_bigint::BigUint;

use crate::group::DdhGroup;

/// A 512-bit safe prime, p = 2q + 1.
///
/// Far too small for production; exists so unit tests do not pay
/// 2048-bit exponentiations on every base OT.
const TEST_P_512: &str = concat!(
    "917a5571652afe03b62b5bb712eb02531636c60ea3f9bf6ea1fdcea5f56efb2f",
    "be1c6138021b35dab1d2b09bd752f47d7e88e5f9597d137144499b6f0bac7feb",
);

const TEST_Q_512: &str = concat!(
    "48bd2ab8b2957f01db15addb897581298b1b630751fcdfb750fee752fab77d97",
    "df0e309c010d9aed58e9584deba97a3ebf4472fcacbe89b8a224cdb785d63ff5",
);

/// A small safe-prime group for fast tests, with g = 4.
pub fn test_group_512() -> DdhGroup {
    let p = BigUint::parse_bytes(TEST_P_512.as_bytes(), 16).expect("fixture modulus is valid hex");
    let q = BigUint::parse_bytes(TEST_Q_512.as_bytes(), 16).expect("fixture order is valid hex");
    DdhGroup::new(p, q, BigUint::from(4u8)).expect("fixture group parameters are valid")
}
