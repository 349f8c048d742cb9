// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

use zids_gdfa::{GdfaError, TokenSource};

use crate::error::ClientError;
use crate::http::{HttpTokenSource, fetch_health, fetch_info};

/// Serves exactly one HTTP request with a canned response on an
/// ephemeral port; returns the base URL.
fn one_shot_server(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        // Drain the full request (headers + content-length body) so
        // the client never sees a reset mid-write.
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        let header_end = loop {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break request.len();
            }
            request.extend_from_slice(&buf[..n]);
            if let Some(pos) = request.windows(4).position(|w| w == b"\r\n\r\n") {
                break pos + 4;
            }
        };
        let headers = String::from_utf8_lossy(&request[..header_end]).to_ascii_lowercase();
        let content_length = headers
            .lines()
            .find_map(|l| l.strip_prefix("content-length:"))
            .and_then(|v| v.trim().parse::<usize>().ok())
            .unwrap_or(0);
        while request.len() < header_end + content_length {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }
        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).unwrap();
    });
    format!("http://{addr}")
}

#[test]
fn test_get_token_decodes_base64() {
    // "AAECAwQFBgc=" = bytes 0..8.
    let base = one_shot_server("200 OK", r#"{"token_b64":"AAECAwQFBgc=","ver":"1.0"}"#);
    let mut source = HttpTokenSource::new(&base);
    let token = source.get_token(2, 0x41).unwrap();
    assert_eq!(token, vec![0, 1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn test_error_envelope_surfaces_as_transport() {
    let base = one_shot_server(
        "400 Bad Request",
        r#"{"error":"invalid_row","message":"row 99 out of range","ver":"1.0"}"#,
    );
    let mut source = HttpTokenSource::new(&base);
    let err = source.get_token(99, 0).unwrap_err();
    match err {
        GdfaError::Transport(msg) => {
            assert!(msg.contains("invalid_row"), "unexpected message: {msg}");
            assert!(msg.contains("400"));
        }
        other => panic!("expected Transport, got {other:?}"),
    }
}

#[test]
fn test_invalid_base64_is_rejected() {
    let base = one_shot_server("200 OK", r#"{"token_b64":"!!not-base64!!","ver":"1.0"}"#);
    let mut source = HttpTokenSource::new(&base);
    assert!(matches!(
        source.get_token(0, 0),
        Err(GdfaError::Transport(_))
    ));
}

#[test]
fn test_fetch_health() {
    let base = one_shot_server("200 OK", r#"{"status":"ok","ver":"1.0","server":"ids-01"}"#);
    let health = fetch_health(&base).unwrap();
    assert_eq!(health.status, "ok");
    assert_eq!(health.server.as_deref(), Some("ids-01"));
}

#[test]
fn test_fetch_info_protocol_error() {
    let base = one_shot_server(
        "404 Not Found",
        r#"{"error":"not_found","message":"no GDFA loaded","ver":"1.0"}"#,
    );
    match fetch_info(&base).unwrap_err() {
        ClientError::Protocol { code, message } => {
            assert_eq!(code, "not_found");
            assert_eq!(message, "no GDFA loaded");
        }
        other => panic!("expected Protocol, got {other:?}"),
    }
}

#[test]
fn test_connection_refused_is_transport() {
    // Bind and drop to obtain a port that refuses connections.
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let mut source = HttpTokenSource::new(&format!("http://127.0.0.1:{port}"));
    assert!(matches!(
        source.get_token(0, 0),
        Err(GdfaError::Transport(_))
    ));
}
