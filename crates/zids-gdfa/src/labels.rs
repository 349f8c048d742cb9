// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Domain-separation labels shared by the builder, the per-row OT
//! plans and the online oracle.
//!
//! The builder and the evaluator never exchange these — both sides
//! must derive them independently and identically, so they live in
//! exactly one module.

use zids_crypto::i2osp;

/// PRG label for cell pad expansion.
pub const CELL_PAD_LABEL: &[u8] = b"PRG|GDFA|cell";

/// PRF context binding a pad seed to its (row, column) position:
/// `"ZIDS|SEED|row=" || I2OSP(row, 4) || "|col=" || I2OSP(col, 2)`.
pub fn seed_info(row_id: u32, col: u16) -> Vec<u8> {
    let mut info = Vec::with_capacity(14 + 4 + 5 + 2);
    info.extend_from_slice(b"ZIDS|SEED|row=");
    info.extend_from_slice(&i2osp(u64::from(row_id), 4).expect("u32 fits 4 bytes"));
    info.extend_from_slice(b"|col=");
    info.extend_from_slice(&i2osp(u64::from(col), 2).expect("u16 fits 2 bytes"));
    info
}

/// OT service label for one row's 1-of-256 table:
/// `"OT256|row=" || I2OSP(row, 4)`.
pub fn ot256_row_label(row_id: u32) -> Vec<u8> {
    let mut label = Vec::with_capacity(10 + 4);
    label.extend_from_slice(b"OT256|row=");
    label.extend_from_slice(&i2osp(u64::from(row_id), 4).expect("u32 fits 4 bytes"));
    label
}

/// PRF context for deriving a group key from a master key:
/// `"ZIDS|GK|row=" || I2OSP(row, 4) || "|col=" || I2OSP(col, 2)`.
pub(crate) fn group_key_info(row_id: u32, col: u16) -> Vec<u8> {
    let mut info = Vec::with_capacity(12 + 4 + 5 + 2);
    info.extend_from_slice(b"ZIDS|GK|row=");
    info.extend_from_slice(&i2osp(u64::from(row_id), 4).expect("u32 fits 4 bytes"));
    info.extend_from_slice(b"|col=");
    info.extend_from_slice(&i2osp(u64::from(col), 2).expect("u16 fits 2 bytes"));
    info
}
