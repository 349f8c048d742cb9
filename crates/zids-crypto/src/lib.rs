// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # zids_crypto
//!
//! Symmetric primitives shared by every layer of the ZIDS garbled-DFA
//! stack: a counter-mode HMAC-SHA256 PRF, a length-bound PRG built on
//! top of it, and the fixed-width big-endian encodings that keep all
//! domain-separation labels unambiguous.
//!
//! ## Core Functions
//!
//! - [`prf`] / [`prf_labeled`]: deterministic keyed expansion with
//!   caller-supplied context bytes
//! - [`expand_bytes`] / [`expand_bits`]: seed expansion for cell pads,
//!   with bit-precise truncation
//! - [`i2osp`] / [`os2ip`] / [`xor_bytes`] / [`xor_into`]: encoding and
//!   masking helpers
//!
//! ## Domain Separation
//!
//! Every PRF/PRG use in ZIDS carries an explicit label naming the
//! subsystem and the positional parameters, with fixed-width integer
//! encodings. Collapsing labels is a correctness bug, not a style
//! issue: the same seed expanded under two labels must produce
//! unrelated streams.

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod encode;
mod error;
mod prf;
mod prg;

pub use encode::{i2osp, os2ip_u64, xor_bytes, xor_into};
pub use error::CryptoError;
pub use prf::{HASH_LEN, prf, prf_bytes, prf_labeled};
pub use prg::{expand_bits, expand_bytes};
