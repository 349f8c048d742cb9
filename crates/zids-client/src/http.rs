// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HTTP token transport.
//!
//! Implements [`TokenSource`] over `POST /token`. No retries here: a
//! transport failure surfaces immediately and retrying is the
//! caller's policy.

use std::time::Duration;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use tracing::{debug, warn};
use zids_gdfa::{GdfaError, TokenSource};

use crate::error::ClientError;
use crate::messages::{ErrorEnvelope, HealthResponse, InfoResponse, TokenRequest, TokenResponse};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Token source fetching 1-of-256 tokens over HTTP(S).
pub struct HttpTokenSource {
    base_url: String,
    agent: ureq::Agent,
    sid: Option<String>,
}

impl HttpTokenSource {
    /// Creates a source against `base_url` (trailing slash tolerated)
    /// with the default 10 s timeout.
    pub fn new(base_url: &str) -> Self {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Creates a source with an explicit request timeout.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            agent: ureq::AgentBuilder::new().timeout(timeout).build(),
            sid: None,
        }
    }

    /// Attaches a session id echoed in every token request.
    pub fn with_sid(mut self, sid: String) -> Self {
        self.sid = Some(sid);
        self
    }

    fn token_url(&self) -> String {
        format!("{}/token", self.base_url)
    }
}

/// Maps a ureq failure to the core taxonomy, decoding the error
/// envelope when the server sent one.
fn transport_error(err: ureq::Error) -> GdfaError {
    match err {
        ureq::Error::Status(status, response) => {
            match response.into_json::<ErrorEnvelope>() {
                Ok(envelope) => {
                    warn!(status, code = envelope.error.as_str(), "token request refused");
                    GdfaError::Transport(format!(
                        "HTTP {status} {}: {}",
                        envelope.error.as_str(),
                        envelope.message
                    ))
                }
                Err(_) => GdfaError::Transport(format!("HTTP {status}")),
            }
        }
        other => GdfaError::Transport(other.to_string()),
    }
}

impl TokenSource for HttpTokenSource {
    fn get_token(&mut self, row_id: u32, x: u8) -> Result<Vec<u8>, GdfaError> {
        let request = TokenRequest {
            row_id: u64::from(row_id),
            x,
            sid: self.sid.clone(),
        };
        let response = self
            .agent
            .post(&self.token_url())
            .send_json(&request)
            .map_err(transport_error)?;

        let body: TokenResponse = response
            .into_json()
            .map_err(|e| GdfaError::Transport(format!("invalid JSON response: {e}")))?;
        let token = BASE64
            .decode(body.token_b64.as_bytes())
            .map_err(|e| GdfaError::Transport(format!("invalid base64 token: {e}")))?;
        debug!(row_id, x, len = token.len(), "fetched token");
        Ok(token)
    }
}

/// Maps a ureq failure for the info/health endpoints, surfacing the
/// error envelope as a protocol error when present.
fn client_error(err: ureq::Error) -> ClientError {
    match err {
        ureq::Error::Status(status, response) => match response.into_json::<ErrorEnvelope>() {
            Ok(envelope) => ClientError::Protocol {
                code: envelope.error.as_str().to_string(),
                message: envelope.message,
            },
            Err(_) => ClientError::Transport(format!("HTTP {status}")),
        },
        other => ClientError::Transport(other.to_string()),
    }
}

/// Fetches the public header from `GET /gdfa/info`.
pub fn fetch_info(base_url: &str) -> Result<InfoResponse, ClientError> {
    let url = format!("{}/gdfa/info", base_url.trim_end_matches('/'));
    let response = ureq::get(&url)
        .timeout(DEFAULT_TIMEOUT)
        .call()
        .map_err(client_error)?;
    response
        .into_json()
        .map_err(|e| ClientError::BadResponse(e.to_string()))
}

/// Fetches `GET /health`.
pub fn fetch_health(base_url: &str) -> Result<HealthResponse, ClientError> {
    let url = format!("{}/health", base_url.trim_end_matches('/'));
    let response = ureq::get(&url)
        .timeout(DEFAULT_TIMEOUT)
        .call()
        .map_err(client_error)?;
    response
        .into_json()
        .map_err(|e| ClientError::BadResponse(e.to_string()))
}
