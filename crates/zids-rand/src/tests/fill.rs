// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::EntropyError;
use crate::support::test_utils::{MockEntropyBehaviour, MockEntropySource};
use crate::system::fill_with_random_bytes;
use crate::traits::EntropySource;

#[test]
fn test_fill_with_random_bytes_ok() {
    let mut buf = [0u8; 32];
    assert!(fill_with_random_bytes(&mut buf).is_ok());
}

#[test]
fn test_fill_with_random_bytes_empty_slice_ok() {
    let mut buf = [];
    assert!(fill_with_random_bytes(&mut buf).is_ok());
}

#[test]
fn test_mock_counting_is_deterministic() {
    let src = MockEntropySource::new(MockEntropyBehaviour::Counting);
    let mut a = [0u8; 4];
    src.fill_bytes(&mut a).unwrap();
    assert_eq!(a, [0, 1, 2, 3]);
    src.fill_bytes(&mut a).unwrap();
    assert_eq!(a, [4, 5, 6, 7]);
    assert_eq!(src.call_count(), 2);
}

#[test]
fn test_mock_failure_modes() {
    let src = MockEntropySource::new(MockEntropyBehaviour::FailAlways);
    let mut buf = [0u8; 8];
    assert_eq!(
        src.fill_bytes(&mut buf),
        Err(EntropyError::EntropyNotAvailable)
    );

    let src = MockEntropySource::new(MockEntropyBehaviour::FailAtNthFillBytes(2));
    assert!(src.fill_bytes(&mut buf).is_ok());
    assert!(src.fill_bytes(&mut buf).is_err());
    assert!(src.fill_bytes(&mut buf).is_ok());
}
