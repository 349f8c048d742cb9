// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use num_bigint::BigUint;
use zids_rand::SystemEntropySource;

use crate::base::{Ot2Receiver, Ot2Sender};
use crate::error::OtError;
use crate::support::test_utils::test_group_512;

#[test]
fn test_base_ot_recovers_chosen_message_both_bits() {
    let group = test_group_512();
    let entropy = SystemEntropySource;
    for choice in [false, true] {
        let sender = Ot2Sender::new(&group, &entropy).unwrap();
        let mut receiver = Ot2Receiver::new(&group, choice, &entropy).unwrap();
        let blinded = receiver.blind(sender.public_key());

        let m0 = [0x11u8; 32];
        let m1 = [0xEEu8; 32];
        let (c0, c1) = sender.respond(&blinded, &m0, &m1).unwrap();
        let out = receiver.recover(&c0, &c1).unwrap();

        let expected: &[u8] = if choice { &m1 } else { &m0 };
        assert_eq!(out, expected);
    }
}

#[test]
fn test_base_ot_never_recovers_other_message() {
    let group = test_group_512();
    let entropy = SystemEntropySource;
    for choice in [false, true] {
        let sender = Ot2Sender::new(&group, &entropy).unwrap();
        let mut receiver = Ot2Receiver::new(&group, choice, &entropy).unwrap();
        let blinded = receiver.blind(sender.public_key());

        let m0 = [0x11u8; 32];
        let m1 = [0xEEu8; 32];
        let (c0, c1) = sender.respond(&blinded, &m0, &m1).unwrap();
        let out = receiver.recover(&c0, &c1).unwrap();

        let other: &[u8] = if choice { &m0 } else { &m1 };
        assert_ne!(out, other);
    }
}

#[test]
fn test_sender_rejects_bad_public_key() {
    let group = test_group_512();
    let entropy = SystemEntropySource;
    let sender = Ot2Sender::new(&group, &entropy).unwrap();
    let m = [0u8; 16];

    // 2 is outside the order-q subgroup for this p.
    assert!(matches!(
        sender.respond(&BigUint::from(2u8), &m, &m),
        Err(OtError::BadPublicKey)
    ));
    assert!(matches!(
        sender.respond(&BigUint::from(1u8), &m, &m),
        Err(OtError::BadPublicKey)
    ));
    assert!(matches!(
        sender.respond(group.modulus(), &m, &m),
        Err(OtError::BadPublicKey)
    ));
}

#[test]
fn test_sender_rejects_unequal_messages() {
    let group = test_group_512();
    let entropy = SystemEntropySource;
    let sender = Ot2Sender::new(&group, &entropy).unwrap();
    let mut receiver = Ot2Receiver::new(&group, false, &entropy).unwrap();
    let blinded = receiver.blind(sender.public_key());

    assert!(matches!(
        sender.respond(&blinded, &[0u8; 16], &[0u8; 17]),
        Err(OtError::LengthMismatch { .. })
    ));
}

#[test]
fn test_receiver_must_be_blinded_before_recover() {
    let group = test_group_512();
    let entropy = SystemEntropySource;
    let receiver = Ot2Receiver::new(&group, false, &entropy).unwrap();
    assert!(matches!(
        receiver.recover(&[0u8; 16], &[0u8; 16]),
        Err(OtError::ReceiverNotBlinded)
    ));
}
