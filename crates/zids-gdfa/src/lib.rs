// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # zids_gdfa
//!
//! The garbled DFA itself: offline garbling, the per-row OT plans the
//! server answers token requests from, and the client's streaming
//! evaluator.
//!
//! ## Offline (server)
//!
//! [`build_gdfa`] turns a sparse [`zids_odfa::Odfa`] into a permuted,
//! encrypted row matrix ([`GdfaBundle`]): per row and column a pad
//! seed expands into an XOR pad over the packed
//! `(next_state, attack_id)` cell. With
//! [`PadSeedMode::BoundToGroupKeys`] the seeds are PRF-derived from
//! per-column group keys, which is what makes the online OT flow work:
//! whoever holds a column's group key can re-derive exactly that
//! column's pad.
//!
//! ## Online (client)
//!
//! Per input byte the client fetches a token — the 1-of-256 OT output
//! for its current row and symbol, carrying up to `cmax` group keys —
//! and [`OtPadOracle`] trial-decrypts columns in deterministic order
//! (increasing column, then increasing key index) until the zero-pad
//! validator accepts. [`GdfaRunner`] applies the transition and
//! collects attack ids.
//!
//! ## Containers
//!
//! [`container`] holds both published forms: the `header.json` +
//! `rows.bin` pair and the single-file `ZIDSv1` container with a
//! trailing SHA-256 over the rows payload.

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod builder;
pub mod container;
mod error;
mod evaluator;
mod header;
mod labels;
mod oracle;
mod ot_plan;
mod secrets;
mod store;
mod token;

pub use builder::{GdfaBundle, KeySource, PadSeedMode, build_gdfa};
pub use error::GdfaError;
pub use evaluator::{EvalResult, GdfaRunner, PadOracle};
pub use header::GdfaHeader;
pub use labels::{CELL_PAD_LABEL, ot256_row_label, seed_info};
pub use oracle::OtPadOracle;
pub use ot_plan::{build_row_ot_service, build_row_ot_table};
pub use secrets::{GdfaSecrets, RowGroupKeys, SecretsExport};
pub use store::RowStore;
pub use token::{
    CachingTokenSource, DEFAULT_TOKEN_CACHE_CAPACITY, LocalTokenSource, TokenCacheStats,
    TokenSource,
};
