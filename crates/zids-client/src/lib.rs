// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # zids_client
//!
//! Everything the evaluating party needs around the core: reading and
//! normalizing payload bytes, fetching OT tokens over HTTP, and the
//! Step-0 parameter exchange.
//!
//! The token transport implements [`zids_gdfa::TokenSource`], so an
//! [`HttpTokenSource`] slots directly under the token cache and the
//! pad oracle.

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod error;
mod http;
mod messages;
mod payload;
mod setup;

pub use error::ClientError;
pub use http::{HttpTokenSource, fetch_health, fetch_info};
pub use messages::{
    ErrorCode, ErrorEnvelope, HealthResponse, InfoResponse, PROTOCOL_VERSION, TokenRequest,
    TokenResponse,
};
pub use payload::{AsciiCase, PayloadOptions, SlidingWindows, read_file, read_stream, sliding_windows};
pub use setup::{BaseOtRole, ClientOfflineState, PublicParams, client_param_setup};
