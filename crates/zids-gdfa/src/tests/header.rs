// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::GdfaError;
use crate::header::GdfaHeader;

fn valid_header() -> GdfaHeader {
    GdfaHeader {
        alphabet_size: 256,
        outmax: 3,
        cmax: 2,
        num_states: 4,
        start_row: 1,
        permutation: vec![2, 0, 3, 1],
        cell_bytes: 48,
        row_bytes: 144,
        aid_bits: 16,
        rows_sha256: None,
    }
}

#[test]
fn test_valid_header_passes() {
    let header = valid_header();
    header.validate().unwrap();
    assert_eq!(header.rows_len(), 4 * 144);
    let fmt = header.cell_format().unwrap();
    assert_eq!(fmt.total_bytes(), 48);
    let per = header.state_permutation().unwrap();
    assert_eq!(per.new_row(2), 0);
}

#[test]
fn test_header_rejects_inconsistent_row_bytes() {
    let mut header = valid_header();
    header.row_bytes = 100;
    assert!(matches!(
        header.validate(),
        Err(GdfaError::InvalidParameter(_))
    ));
}

#[test]
fn test_header_rejects_non_bijective_permutation() {
    let mut header = valid_header();
    header.permutation = vec![0, 0, 3, 1];
    assert!(header.validate().is_err());

    let mut header = valid_header();
    header.permutation = vec![0, 1, 2];
    assert!(header.validate().is_err());
}

#[test]
fn test_header_rejects_bad_start_row() {
    let mut header = valid_header();
    header.start_row = 4;
    assert!(header.validate().is_err());
}

#[test]
fn test_header_json_roundtrip() {
    let mut header = valid_header();
    let json = serde_json::to_string(&header).unwrap();
    // rows_sha256 is omitted when absent.
    assert!(!json.contains("rows_sha256"));
    let back: GdfaHeader = serde_json::from_str(&json).unwrap();
    assert_eq!(header, back);

    header.rows_sha256 = Some("ab".repeat(32));
    let json = serde_json::to_string(&header).unwrap();
    assert!(json.contains("rows_sha256"));
    let back: GdfaHeader = serde_json::from_str(&json).unwrap();
    assert_eq!(header, back);
}
