// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use num_bigint::BigUint;
use num_traits::One;
use zids_rand::SystemEntropySource;

use crate::error::OtError;
use crate::group::DdhGroup;
use crate::support::test_utils::test_group_512;

#[test]
fn test_group_construction_validates_structure() {
    // q does not divide p - 1.
    let err = DdhGroup::new(
        BigUint::from(23u8),
        BigUint::from(7u8),
        BigUint::from(4u8),
    );
    assert!(matches!(err, Err(OtError::InvalidGroup(_))));

    // Generator outside (2, p-1).
    let err = DdhGroup::new(
        BigUint::from(23u8),
        BigUint::from(11u8),
        BigUint::from(2u8),
    );
    assert!(matches!(err, Err(OtError::InvalidGroup(_))));

    // p = 23, q = 11, g = 4: 4 = 2^2 generates the order-11 subgroup.
    let group = DdhGroup::new(
        BigUint::from(23u8),
        BigUint::from(11u8),
        BigUint::from(4u8),
    )
    .unwrap();
    assert_eq!(group.q_bytes(), 1);
}

#[test]
fn test_fixture_group_is_well_formed() {
    let group = test_group_512();
    assert_eq!(group.q_bytes(), 64);
    assert_eq!(
        group.pow(group.generator(), group.order()),
        BigUint::one()
    );
}

#[test]
fn test_rfc3526_group_is_well_formed() {
    let group = DdhGroup::rfc3526_modp_2048();
    assert_eq!(group.q_bytes(), 256);
    assert_eq!(group.modulus().bits(), 2048);
}

#[test]
fn test_ensure_member_rejects_boundaries_and_non_members() {
    let group = test_group_512();
    assert!(matches!(
        group.ensure_member(&BigUint::one()),
        Err(OtError::BadPublicKey)
    ));
    assert!(matches!(
        group.ensure_member(group.modulus()),
        Err(OtError::BadPublicKey)
    ));
    // 2 is a quadratic non-residue for this p (p = 3 mod 8), so it is
    // not in the order-q subgroup.
    assert!(matches!(
        group.ensure_member(&BigUint::from(2u8)),
        Err(OtError::BadPublicKey)
    ));
    assert!(group.ensure_member(group.generator()).is_ok());
}

#[test]
fn test_random_exponent_in_range() {
    let group = test_group_512();
    let entropy = SystemEntropySource;
    for _ in 0..20 {
        let x = group.random_exponent(&entropy).unwrap();
        assert!(x >= BigUint::one() && &x < group.order());
    }
}

#[test]
fn test_encode_element_fixed_width() {
    let group = test_group_512();
    let enc = group.encode_element(&BigUint::from(5u8)).unwrap();
    assert_eq!(enc.len(), group.q_bytes());
    assert_eq!(enc[group.q_bytes() - 1], 5);
    assert!(enc[..group.q_bytes() - 1].iter().all(|&b| b == 0));
}
