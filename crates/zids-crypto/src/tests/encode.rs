// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use proptest::prelude::*;

use crate::encode::{i2osp, os2ip_u64, xor_bytes, xor_into};
use crate::error::CryptoError;

#[test]
fn test_i2osp_fixed_width() {
    assert_eq!(i2osp(1, 4).unwrap(), vec![0, 0, 0, 1]);
    assert_eq!(i2osp(0x0102, 2).unwrap(), vec![1, 2]);
    assert_eq!(i2osp(0, 0).unwrap(), Vec::<u8>::new());
    assert_eq!(i2osp(7, 12).unwrap()[..4], [0, 0, 0, 0]);
}

#[test]
fn test_i2osp_overflow() {
    assert_eq!(
        i2osp(256, 1),
        Err(CryptoError::IntegerTooLarge { value: 256, len: 1 })
    );
}

#[test]
fn test_xor_bytes_length_check() {
    assert!(xor_bytes(&[1, 2], &[3]).is_err());
    assert_eq!(xor_bytes(&[1, 2], &[3, 2]).unwrap(), vec![2, 0]);
}

#[test]
fn test_xor_into_accumulates() {
    let mut dst = [0b1010u8, 0xFF];
    xor_into(&mut dst, &[0b0110, 0xFF]).unwrap();
    assert_eq!(dst, [0b1100, 0x00]);
}

proptest! {
    #[test]
    fn prop_i2osp_os2ip_roundtrip(v in any::<u32>(), pad in 4usize..10) {
        let enc = i2osp(u64::from(v), pad).unwrap();
        prop_assert_eq!(enc.len(), pad);
        prop_assert_eq!(os2ip_u64(&enc).unwrap(), u64::from(v));
    }

    #[test]
    fn prop_xor_involution(
        a in proptest::collection::vec(any::<u8>(), 0..64),
        b in proptest::collection::vec(any::<u8>(), 0..64),
    ) {
        prop_assume!(a.len() == b.len());
        let x = xor_bytes(&a, &b).unwrap();
        prop_assert_eq!(xor_bytes(&x, &b).unwrap(), a);
    }
}
