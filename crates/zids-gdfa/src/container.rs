// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Published GDFA formats.
//!
//! Two-file form: `header.json` (optionally gzip-framed) next to
//! `rows.bin`. Single-file form:
//!
//! ```text
//! 0..8     magic "ZIDSv1\0\0"
//! 8..12    header_len (u32 BE)
//! 12..     header JSON
//! ...      rows payload (num_states * row_bytes)
//! last 32  SHA-256(rows payload)
//! ```
//!
//! Reads reject wrong magic, truncation and (when verification is on)
//! digest mismatches; with verification off, corrupted rows are
//! returned as-is.

use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;
use tracing::debug;

use crate::error::GdfaError;
use crate::header::GdfaHeader;

/// Magic prefix of the single-file container.
pub const CONTAINER_MAGIC: [u8; 8] = *b"ZIDSv1\0\0";

/// Gzip frame sniffing bytes.
const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

const DIGEST_LEN: usize = 32;

fn rows_digest(rows: &[u8]) -> [u8; DIGEST_LEN] {
    let mut hasher = Sha256::new();
    hasher.update(rows);
    hasher.finalize().into()
}

/// Writes the single-file container.
///
/// The embedded header carries the rows digest in `rows_sha256` as
/// well, so either form can be verified standalone.
pub fn write_container(path: &Path, header: &GdfaHeader, rows: &[u8]) -> Result<(), GdfaError> {
    header.validate()?;
    if rows.len() != header.rows_len() {
        return Err(GdfaError::LengthMismatch {
            expected: header.rows_len(),
            actual: rows.len(),
        });
    }

    let digest = rows_digest(rows);
    let mut stamped = header.clone();
    stamped.rows_sha256 = Some(hex::encode(digest));
    let header_json = serde_json::to_vec(&stamped)?;
    let header_len = u32::try_from(header_json.len())
        .map_err(|_| GdfaError::InvalidParameter("header JSON exceeds u32 length"))?;

    let mut out = fs::File::create(path)?;
    out.write_all(&CONTAINER_MAGIC)?;
    out.write_all(&header_len.to_be_bytes())?;
    out.write_all(&header_json)?;
    out.write_all(rows)?;
    out.write_all(&digest)?;
    debug!(path = %path.display(), rows = rows.len(), "wrote container");
    Ok(())
}

/// Reads the single-file container.
///
/// # Errors
///
/// [`GdfaError::MalformedContainer`] for wrong magic or truncation;
/// [`GdfaError::IntegrityFailure`] when `verify` is set and the
/// trailing digest disagrees with the rows payload.
pub fn read_container(path: &Path, verify: bool) -> Result<(GdfaHeader, Vec<u8>), GdfaError> {
    let bytes = fs::read(path)?;
    if bytes.len() < CONTAINER_MAGIC.len() + 4 + DIGEST_LEN {
        return Err(GdfaError::MalformedContainer("file too short".into()));
    }
    if bytes[..CONTAINER_MAGIC.len()] != CONTAINER_MAGIC {
        return Err(GdfaError::MalformedContainer("bad magic".into()));
    }

    let mut len_bytes = [0u8; 4];
    len_bytes.copy_from_slice(&bytes[8..12]);
    let header_len = u32::from_be_bytes(len_bytes) as usize;

    let header_end = 12usize
        .checked_add(header_len)
        .ok_or_else(|| GdfaError::MalformedContainer("header length overflow".into()))?;
    if bytes.len() < header_end + DIGEST_LEN {
        return Err(GdfaError::MalformedContainer(
            "truncated header or payload".into(),
        ));
    }

    let header: GdfaHeader = serde_json::from_slice(&bytes[12..header_end])?;
    header.validate()?;

    let rows_end = bytes.len() - DIGEST_LEN;
    let rows = &bytes[header_end..rows_end];
    if rows.len() != header.rows_len() {
        return Err(GdfaError::MalformedContainer(format!(
            "rows payload is {} bytes, header promises {}",
            rows.len(),
            header.rows_len()
        )));
    }

    if verify {
        let digest = rows_digest(rows);
        let trailer = &bytes[rows_end..];
        if !bool::from(digest.ct_eq(trailer)) {
            return Err(GdfaError::IntegrityFailure);
        }
    }
    Ok((header, rows.to_vec()))
}

/// Writes the two-file form into `outdir`; returns the
/// `(header.json, rows.bin)` paths.
pub fn write_two_file(
    outdir: &Path,
    header: &GdfaHeader,
    rows: &[u8],
    gzip_header: bool,
) -> Result<(PathBuf, PathBuf), GdfaError> {
    header.validate()?;
    if rows.len() != header.rows_len() {
        return Err(GdfaError::LengthMismatch {
            expected: header.rows_len(),
            actual: rows.len(),
        });
    }

    let mut stamped = header.clone();
    stamped.rows_sha256 = Some(hex::encode(rows_digest(rows)));
    let header_json = serde_json::to_vec(&stamped)?;

    fs::create_dir_all(outdir)?;
    let header_path = outdir.join("header.json");
    let rows_path = outdir.join("rows.bin");

    if gzip_header {
        let mut encoder = GzEncoder::new(fs::File::create(&header_path)?, Compression::default());
        encoder.write_all(&header_json)?;
        encoder.finish()?;
    } else {
        fs::write(&header_path, &header_json)?;
    }
    fs::write(&rows_path, rows)?;
    debug!(dir = %outdir.display(), gzip_header, "wrote two-file GDFA");
    Ok((header_path, rows_path))
}

/// Reads the two-file form; gzip framing of the header is sniffed via
/// its magic.
pub fn read_two_file(
    header_path: &Path,
    rows_path: &Path,
    verify: bool,
) -> Result<(GdfaHeader, Vec<u8>), GdfaError> {
    let raw = fs::read(header_path)?;
    let header_json = if raw.len() >= 2 && raw[..2] == GZIP_MAGIC {
        let mut decoder = GzDecoder::new(&raw[..]);
        let mut out = Vec::new();
        decoder.read_to_end(&mut out)?;
        out
    } else {
        raw
    };
    let header: GdfaHeader = serde_json::from_slice(&header_json)?;
    header.validate()?;

    let rows = fs::read(rows_path)?;
    if rows.len() != header.rows_len() {
        return Err(GdfaError::MalformedContainer(format!(
            "rows.bin is {} bytes, header promises {}",
            rows.len(),
            header.rows_len()
        )));
    }

    if verify {
        if let Some(expected_hex) = &header.rows_sha256 {
            let digest = rows_digest(&rows);
            let expected = hex::decode(expected_hex)
                .map_err(|_| GdfaError::MalformedContainer("rows_sha256 is not hex".into()))?;
            if expected.len() != DIGEST_LEN || !bool::from(digest.ct_eq(&expected[..])) {
                return Err(GdfaError::IntegrityFailure);
            }
        }
    }
    Ok((header, rows))
}
