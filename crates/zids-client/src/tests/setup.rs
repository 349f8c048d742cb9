// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use zids_odfa::SecurityParams;
use zids_ot::test_utils::test_group_512;
use zids_rand::SystemEntropySource;

use crate::setup::{BaseOtRole, client_param_setup};

#[test]
fn test_setup_publishes_group_and_sizes() {
    let group = test_group_512();
    let sec = SecurityParams::default();
    let (params, state) =
        client_param_setup(&group, &sec, BaseOtRole::Receiver, &SystemEntropySource).unwrap();

    assert_eq!(params.q_bytes, 64);
    assert_eq!(params.k_bits, 128);
    assert_eq!(params.alphabet_size, 256);
    assert_eq!(params.g_hex, "4");
    assert_eq!(state.base_ot_role, BaseOtRole::Receiver);
    assert!(state.ext.is_none());
    assert_eq!(state.sid.len(), 16);
}

#[test]
fn test_published_group_reconstructs() {
    let group = test_group_512();
    let sec = SecurityParams::default();
    let (params, _) =
        client_param_setup(&group, &sec, BaseOtRole::Receiver, &SystemEntropySource).unwrap();

    let rebuilt = params.group().unwrap();
    assert_eq!(rebuilt.modulus(), group.modulus());
    assert_eq!(rebuilt.order(), group.order());
    assert_eq!(rebuilt.q_bytes(), group.q_bytes());
}

#[test]
fn test_setup_rejects_bad_security_params() {
    let group = test_group_512();
    let sec = SecurityParams {
        k_bits: 13,
        ..SecurityParams::default()
    };
    assert!(
        client_param_setup(&group, &sec, BaseOtRole::Receiver, &SystemEntropySource).is_err()
    );
}

#[test]
fn test_params_json_roundtrip() {
    let group = test_group_512();
    let sec = SecurityParams::default();
    let (params, _) =
        client_param_setup(&group, &sec, BaseOtRole::Receiver, &SystemEntropySource).unwrap();
    let json = serde_json::to_string(&params).unwrap();
    let back: crate::setup::PublicParams = serde_json::from_str(&json).unwrap();
    assert_eq!(params, back);
}
