// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # zids_ot
//!
//! The oblivious-transfer stack of the ZIDS garbled-DFA protocol.
//!
//! Three layers, each built on the one below:
//!
//! 1. [`Ot2Sender`] / [`Ot2Receiver`]: Naor-Pinkas 1-of-2 OT over a
//!    DDH prime-order subgroup of Z_p^* ([`DdhGroup`]).
//! 2. [`OneOfMSender`] / [`OneOfMChooser`]: 1-of-m OT by bit
//!    decomposition — ℓ = ceil(log2 m) seed pairs, PRF-masked pads,
//!    one base OT per bit position.
//! 3. [`Ot256Chooser`]: the 1-of-256 specialization used on every GDFA
//!    row, with fixed-length table enforcement.
//!
//! [`OtExtension`] is the batching facade: the shipping backend runs
//! direct base OTs; a true IKNP engine is a drop-in swap behind the
//! same contract.
//!
//! Secret exponents and per-bit seeds live in zeroizing buffers and
//! are wiped on drop.

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod base;
mod error;
mod extension;
mod group;
mod one_of_m;
mod ot256;
mod support;

pub use base::{Ot2Receiver, Ot2Sender};
pub use error::OtError;
pub use extension::{OtExtBackend, OtExtConfig, OtExtension};
pub use group::DdhGroup;
pub use one_of_m::{OneOfMChooser, OneOfMSender, SEED_LEN, SID_LEN};
pub use ot256::{OT256_OPTIONS, Ot256Chooser, Ot256Table};

#[cfg(any(test, feature = "test-utils"))]
pub use support::test_utils;
