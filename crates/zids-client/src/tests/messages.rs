// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::messages::{
    ErrorCode, ErrorEnvelope, HealthResponse, PROTOCOL_VERSION, TokenRequest, TokenResponse,
};

#[test]
fn test_token_request_omits_absent_sid() {
    let req = TokenRequest {
        row_id: 3,
        x: 255,
        sid: None,
    };
    let json = serde_json::to_string(&req).unwrap();
    assert_eq!(json, r#"{"row_id":3,"x":255}"#);

    let req = TokenRequest {
        row_id: 0,
        x: 0,
        sid: Some("abc".into()),
    };
    let json = serde_json::to_string(&req).unwrap();
    assert!(json.contains(r#""sid":"abc""#));
}

#[test]
fn test_token_response_roundtrip() {
    let json = r#"{"token_b64":"AAECAw==","ver":"1.0"}"#;
    let resp: TokenResponse = serde_json::from_str(json).unwrap();
    assert_eq!(resp.ver, PROTOCOL_VERSION);
    assert_eq!(serde_json::to_string(&resp).unwrap(), json);
}

#[test]
fn test_error_codes_are_snake_case() {
    for (code, text) in [
        (ErrorCode::BadRequest, "bad_request"),
        (ErrorCode::Unauthorized, "unauthorized"),
        (ErrorCode::Forbidden, "forbidden"),
        (ErrorCode::NotFound, "not_found"),
        (ErrorCode::RateLimited, "rate_limited"),
        (ErrorCode::VersionMismatch, "version_mismatch"),
        (ErrorCode::InvalidRow, "invalid_row"),
        (ErrorCode::InvalidSymbol, "invalid_symbol"),
        (ErrorCode::LengthMismatch, "length_mismatch"),
        (ErrorCode::ServerError, "server_error"),
    ] {
        assert_eq!(serde_json::to_string(&code).unwrap(), format!("\"{text}\""));
        assert_eq!(code.as_str(), text);
    }
}

#[test]
fn test_error_envelope_roundtrip() {
    let json = r#"{"error":"invalid_row","message":"row 99 out of range","ver":"1.0"}"#;
    let envelope: ErrorEnvelope = serde_json::from_str(json).unwrap();
    assert_eq!(envelope.error, ErrorCode::InvalidRow);
    assert!(envelope.details.is_none());
    assert_eq!(serde_json::to_string(&envelope).unwrap(), json);
}

#[test]
fn test_health_response_optional_server() {
    let resp: HealthResponse = serde_json::from_str(r#"{"status":"ok","ver":"1.0"}"#).unwrap();
    assert_eq!(resp.status, "ok");
    assert!(resp.server.is_none());
}
