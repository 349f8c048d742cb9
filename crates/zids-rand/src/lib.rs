// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # zids_rand
//!
//! Cryptographically secure randomness for the ZIDS garbled-DFA stack.
//!
//! ## Core Types
//!
//! - [`SystemEntropySource`]: OS-level CSPRNG (via `getrandom`)
//!
//! ## Traits
//!
//! - [`EntropySource`]: interface for CSPRNGs; every key, seed, salt
//!   and permutation in the stack is sampled through it, which keeps
//!   tests deterministic via the mock in [`test_utils`]
//!
//! ## Unbiased sampling
//!
//! [`uniform_index`] draws a 64-bit word and rejects values below the
//! bias threshold, so `r % n` is exactly uniform. The naive
//! `two_random_bytes % n` draw is biased whenever `n` does not divide
//! 2^16; [`sample_permutation`] therefore never touches it.

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod error;
mod sample;
mod support;
mod system;
mod traits;

pub use error::EntropyError;
pub use sample::{sample_permutation, uniform_index};
pub use system::{SystemEntropySource, fill_with_random_bytes};
pub use traits::EntropySource;

#[cfg(any(test, feature = "test-utils"))]
pub use support::test_utils;
