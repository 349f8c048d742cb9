// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use zids_rand::SystemEntropySource;

use crate::error::OdfaError;
use crate::permutation::StatePermutation;

#[test]
fn test_sampled_permutation_inverse_composes_to_identity() {
    let entropy = SystemEntropySource;
    for n in [1usize, 2, 5, 64] {
        let per = StatePermutation::sample(n, &entropy).unwrap();
        assert_eq!(per.len(), n);
        for new_row in 0..n as u32 {
            assert_eq!(per.new_row(per.old_state(new_row)), new_row);
        }
        for old_state in 0..n as u32 {
            assert_eq!(per.old_state(per.new_row(old_state)), old_state);
        }
    }
}

#[test]
fn test_identity_permutation() {
    let per = StatePermutation::identity(4);
    assert_eq!(per.forward(), &[0, 1, 2, 3]);
    assert_eq!(per.inverse(), &[0, 1, 2, 3]);
}

#[test]
fn test_from_forward_validates_bijection() {
    assert!(StatePermutation::from_forward(vec![2, 0, 1]).is_ok());
    assert!(matches!(
        StatePermutation::from_forward(vec![0, 0, 1]),
        Err(OdfaError::NotABijection(3))
    ));
    assert!(matches!(
        StatePermutation::from_forward(vec![0, 3]),
        Err(OdfaError::NotABijection(2))
    ));
}

#[test]
fn test_from_forward_roundtrips_through_published_vector() {
    let per = StatePermutation::from_forward(vec![3, 1, 0, 2]).unwrap();
    let back = StatePermutation::from_forward(per.forward().to_vec()).unwrap();
    assert_eq!(per, back);
    assert_eq!(back.inverse(), &[2, 1, 3, 0]);
}
