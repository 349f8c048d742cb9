// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Wire messages of the token protocol.
//!
//! Every message carries `ver`; servers and clients compare it against
//! [`PROTOCOL_VERSION`] and answer `version_mismatch` on disagreement.

use serde::{Deserialize, Serialize};
use zids_gdfa::GdfaHeader;

/// The protocol version stamped into every message.
pub const PROTOCOL_VERSION: &str = "1.0";

/// `POST /token` request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRequest {
    /// Garbled row the token is requested for.
    pub row_id: u64,
    /// Input symbol, 0..=255.
    pub x: u8,
    /// Optional session id echoed to the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sid: Option<String>,
}

/// `POST /token` success body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Base64 of the token bytes; decodes to `cmax * kprime_bytes`.
    pub token_b64: String,
    /// Protocol version.
    pub ver: String,
}

/// Canonical error codes of the error envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// Malformed request.
    BadRequest,
    /// Missing credentials.
    Unauthorized,
    /// Credentials refused.
    Forbidden,
    /// Unknown resource.
    NotFound,
    /// Too many requests.
    RateLimited,
    /// Protocol version disagreement.
    VersionMismatch,
    /// row_id out of range.
    InvalidRow,
    /// Symbol out of range.
    InvalidSymbol,
    /// Token or message length violation.
    LengthMismatch,
    /// Internal server failure.
    ServerError,
}

impl ErrorCode {
    /// The canonical snake_case string of this code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BadRequest => "bad_request",
            Self::Unauthorized => "unauthorized",
            Self::Forbidden => "forbidden",
            Self::NotFound => "not_found",
            Self::RateLimited => "rate_limited",
            Self::VersionMismatch => "version_mismatch",
            Self::InvalidRow => "invalid_row",
            Self::InvalidSymbol => "invalid_symbol",
            Self::LengthMismatch => "length_mismatch",
            Self::ServerError => "server_error",
        }
    }
}

/// The error envelope every non-2xx response carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    /// Canonical error code.
    pub error: ErrorCode,
    /// Human-readable message.
    pub message: String,
    /// Optional structured details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    /// Protocol version.
    pub ver: String,
}

/// `GET /gdfa/info` body: the public header plus the version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoResponse {
    /// The published GDFA header fields.
    #[serde(flatten)]
    pub header: GdfaHeader,
    /// Protocol version.
    pub ver: String,
}

/// `GET /health` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `"ok"` when serving.
    pub status: String,
    /// Protocol version.
    pub ver: String,
    /// Optional server identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server: Option<String>,
}
