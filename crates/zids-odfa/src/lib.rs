// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # zids_odfa
//!
//! The plaintext side of the ZIDS garbled DFA: a sparsified automaton
//! with bounded out-degree, the parameter sets that govern garbling,
//! the fixed-layout cell packing, and the uniform state permutation.
//!
//! ## Core Types
//!
//! - [`Odfa`] / [`OdfaEdge`]: sparse automaton, at most `outmax` edges
//!   per row, dummy edges `(-1, 0, 0)` as padding
//! - [`SecurityParams`] / [`SparsityParams`] / [`PackingParams`]:
//!   immutable knobs plus the derived sizes
//! - [`RowAlphabet`]: per-row symbol → column membership (≤ `cmax`
//!   columns per symbol)
//! - [`CellFormat`]: the `ns_bits || aid_bits || pad_bits` MSB-first
//!   cell layout and its zero-pad validator
//! - [`StatePermutation`]: uniform bijection new_row → old_state with
//!   its inverse

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod error;
mod matrix;
mod packing;
mod params;
mod permutation;
mod row_alphabet;

pub use error::OdfaError;
pub use matrix::{DUMMY_GROUP_ID, Odfa, OdfaEdge, OdfaRow};
pub use packing::CellFormat;
pub use params::{PackingParams, SecurityParams, SparsityParams};
pub use permutation::StatePermutation;
pub use row_alphabet::{ColumnSet, RowAlphabet};
