// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use num_bigint::BigUint;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use zids_rand::SystemEntropySource;

use crate::error::OtError;
use crate::one_of_m::{OneOfMChooser, OneOfMSender};
use crate::support::test_utils::test_group_512;

fn random_payload(rng: &mut StdRng, m: usize, len: usize) -> Vec<Vec<u8>> {
    (0..m)
        .map(|_| {
            let mut e = vec![0u8; len];
            rng.fill_bytes(&mut e);
            e
        })
        .collect()
}

#[test]
fn test_bytes_mode_correctness_random_choices() {
    let group = test_group_512();
    let entropy = SystemEntropySource;
    let mut rng = StdRng::seed_from_u64(1337);

    for m in [2usize, 3, 17] {
        let payload = random_payload(&mut rng, m, 48);
        let svc =
            OneOfMSender::from_bytes(&group, &payload, b"TEST|BYTES", None, &entropy).unwrap();
        let chooser = OneOfMChooser::new(&svc, b"TEST|BYTES");

        for _ in 0..200 {
            let idx = rng.random_range(0..m);
            let out = chooser.choose_bytes(idx, &entropy).unwrap();
            assert_eq!(out, payload[idx], "wrong plaintext for m={m} idx={idx}");
        }
    }
}

#[test]
fn test_single_option_degenerates_to_plaintext() {
    let group = test_group_512();
    let entropy = SystemEntropySource;
    let payload = vec![vec![0xA5u8; 24]];
    let svc = OneOfMSender::from_bytes(&group, &payload, b"TEST|ONE", None, &entropy).unwrap();
    assert_eq!(svc.bit_len(), 0);
    // No base OTs, zero pad: ciphertext equals plaintext.
    assert_eq!(svc.ciphertexts[0], payload[0]);
    let chooser = OneOfMChooser::new(&svc, b"TEST|ONE");
    assert_eq!(chooser.choose_bytes(0, &entropy).unwrap(), payload[0]);
}

#[test]
fn test_tampered_ciphertext_changes_recovery() {
    let group = test_group_512();
    let entropy = SystemEntropySource;
    let mut rng = StdRng::seed_from_u64(7);
    let payload = random_payload(&mut rng, 8, 32);
    let mut svc =
        OneOfMSender::from_bytes(&group, &payload, b"TEST|TAMPER", None, &entropy).unwrap();

    let idx = 5;
    svc.ciphertexts[idx][0] ^= 0x01;
    let chooser = OneOfMChooser::new(&svc, b"TEST|TAMPER");
    let out = chooser.choose_bytes(idx, &entropy).unwrap();
    assert_ne!(out, payload[idx]);
    // Exactly the flipped bit differs: XOR pads are positionwise.
    assert_eq!(out[0] ^ 0x01, payload[idx][0]);
    assert_eq!(out[1..], payload[idx][1..]);
}

#[test]
fn test_label_mismatch_breaks_recovery() {
    let group = test_group_512();
    let entropy = SystemEntropySource;
    let mut rng = StdRng::seed_from_u64(9);
    let payload = random_payload(&mut rng, 4, 32);
    let svc = OneOfMSender::from_bytes(&group, &payload, b"TEST|LABEL", None, &entropy).unwrap();

    let chooser = OneOfMChooser::new(&svc, b"TEST|LABEL|MISMATCH");
    let out = chooser.choose_bytes(2, &entropy).unwrap();
    assert_ne!(out, payload[2]);
}

#[test]
fn test_bytes_mode_rejects_ragged_payload() {
    let group = test_group_512();
    let entropy = SystemEntropySource;
    let payload = vec![vec![0u8; 16], vec![0u8; 17]];
    assert!(matches!(
        OneOfMSender::from_bytes(&group, &payload, b"T", None, &entropy),
        Err(OtError::LengthMismatch { .. })
    ));
    assert!(matches!(
        OneOfMSender::from_bytes(&group, &[], b"T", None, &entropy),
        Err(OtError::EmptyPayload)
    ));
}

#[test]
fn test_scalar_mode_correctness_and_range() {
    let group = test_group_512();
    let entropy = SystemEntropySource;
    let mut rng = StdRng::seed_from_u64(42);

    let m = 13;
    let payload: Vec<BigUint> = (0..m)
        .map(|_| group.random_exponent(&entropy).unwrap())
        .collect();
    let svc = OneOfMSender::from_scalars(&group, &payload, b"TEST|INT", None, &entropy).unwrap();
    let chooser = OneOfMChooser::new(&svc, b"TEST|INT");

    for _ in 0..200 {
        let idx = rng.random_range(0..m);
        let out = chooser.choose_scalar(idx, &entropy).unwrap();
        assert_eq!(out, payload[idx]);
    }

    // 0 is not in Z_q^*.
    let mut bad = payload.clone();
    bad[0] = BigUint::ZERO;
    assert!(matches!(
        OneOfMSender::from_scalars(&group, &bad, b"TEST|INT", None, &entropy),
        Err(OtError::ScalarOutOfRange)
    ));
}

#[test]
fn test_mode_mismatch_is_rejected() {
    let group = test_group_512();
    let entropy = SystemEntropySource;
    let payload = random_payload(&mut StdRng::seed_from_u64(3), 4, 16);
    let svc = OneOfMSender::from_bytes(&group, &payload, b"T", None, &entropy).unwrap();
    let chooser = OneOfMChooser::new(&svc, b"T");
    assert!(matches!(
        chooser.choose_scalar(0, &entropy),
        Err(OtError::ModeMismatch)
    ));
}

#[test]
fn test_out_of_range_choice() {
    let group = test_group_512();
    let entropy = SystemEntropySource;
    let payload = random_payload(&mut StdRng::seed_from_u64(4), 4, 16);
    let svc = OneOfMSender::from_bytes(&group, &payload, b"T", None, &entropy).unwrap();
    let chooser = OneOfMChooser::new(&svc, b"T");
    assert!(matches!(
        chooser.choose_bytes(4, &entropy),
        Err(OtError::OutOfRange { index: 4, size: 4 })
    ));
}
