// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::OdfaError;
use crate::params::{PackingParams, SecurityParams, SparsityParams};

#[test]
fn test_default_security_params() {
    let sec = SecurityParams::default();
    assert!(sec.validate().is_ok());
    assert_eq!(sec.k_bytes(), 16);
    assert_eq!(sec.kprime_bytes(), 16);
    assert_eq!(sec.alphabet_size, 256);
}

#[test]
fn test_security_params_byte_alignment() {
    let sec = SecurityParams {
        k_bits: 100,
        ..SecurityParams::default()
    };
    assert!(matches!(
        sec.validate(),
        Err(OdfaError::InvalidParameter(_))
    ));
}

#[test]
fn test_packing_derivation() {
    let sec = SecurityParams::default();
    let sp = SparsityParams { outmax: 3, cmax: 2 };
    let pack = PackingParams::derive(&sec, &sp).unwrap();
    assert_eq!(pack.ot256_entry_len, 2 * 16);
    assert_eq!(pack.gdfa_cell_pad_bits, 3 * 128);
    assert_eq!(pack.k_bytes, 16);
}

#[test]
fn test_packing_rejects_bad_sparsity() {
    let sec = SecurityParams::default();
    assert!(PackingParams::derive(&sec, &SparsityParams { outmax: 0, cmax: 1 }).is_err());
    assert!(PackingParams::derive(&sec, &SparsityParams { outmax: 1, cmax: 0 }).is_err());
    assert!(
        PackingParams::derive(
            &sec,
            &SparsityParams {
                outmax: 1,
                cmax: 257,
            }
        )
        .is_err()
    );
}
