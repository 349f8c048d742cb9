// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Payload reading and normalization.
//!
//! Every knob is off by default, preserving the raw 256-ary alphabet
//! the garbled automaton was built for. Normalization is a build-time
//! agreement between the automaton author and the evaluating client;
//! applying it unilaterally changes what the automaton sees.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::ClientError;

/// ASCII case normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AsciiCase {
    /// Leave bytes untouched.
    #[default]
    None,
    /// Map `A-Z` to `a-z`; other bytes untouched.
    Lower,
    /// Map `a-z` to `A-Z`; other bytes untouched.
    Upper,
}

/// Payload normalization options.
#[derive(Debug, Clone, Copy, Default)]
pub struct PayloadOptions {
    /// Truncate to at most this many bytes.
    pub max_len: Option<usize>,
    /// ASCII-only case folding.
    pub ascii_case: AsciiCase,
    /// Drop 0x00 bytes.
    pub strip_nulls: bool,
    /// Keep only HT/LF/CR and 0x20..=0x7E.
    pub filter_ascii_printable: bool,
}

impl PayloadOptions {
    /// Applies the options to an owned buffer.
    pub fn apply(&self, mut data: Vec<u8>) -> Vec<u8> {
        if let Some(max) = self.max_len {
            data.truncate(max);
        }
        match self.ascii_case {
            AsciiCase::None => {}
            AsciiCase::Lower => {
                for b in &mut data {
                    b.make_ascii_lowercase();
                }
            }
            AsciiCase::Upper => {
                for b in &mut data {
                    b.make_ascii_uppercase();
                }
            }
        }
        if self.strip_nulls {
            data.retain(|&b| b != 0);
        }
        if self.filter_ascii_printable {
            data.retain(|&b| matches!(b, 0x09 | 0x0A | 0x0D | 0x20..=0x7E));
        }
        data
    }
}

/// Reads a file in binary mode, stopping early at `max_len`.
pub fn read_file(path: &Path, options: &PayloadOptions) -> Result<Vec<u8>, ClientError> {
    let file = File::open(path)?;
    read_stream(file, options)
}

/// Reads a stream fully (or up to `max_len`) and applies the options.
pub fn read_stream<R: Read>(stream: R, options: &PayloadOptions) -> Result<Vec<u8>, ClientError> {
    let mut out = Vec::new();
    match options.max_len {
        Some(max) => {
            let mut limited = stream.take(max as u64);
            limited.read_to_end(&mut out)?;
        }
        None => {
            let mut stream = stream;
            stream.read_to_end(&mut out)?;
        }
    }
    Ok(options.apply(out))
}

/// Overlapping windows over an in-memory payload.
///
/// Yields `window`-sized slices advancing by `step`; the final partial
/// window is yielded unless `drop_last` is set.
pub struct SlidingWindows<'a> {
    data: &'a [u8],
    window: usize,
    step: usize,
    drop_last: bool,
    pos: usize,
    done: bool,
}

impl<'a> Iterator for SlidingWindows<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<&'a [u8]> {
        if self.done || self.pos >= self.data.len() {
            return None;
        }
        let end = self.pos + self.window;
        let item = if end <= self.data.len() {
            &self.data[self.pos..end]
        } else if self.drop_last {
            self.done = true;
            return None;
        } else {
            &self.data[self.pos..]
        };
        self.pos += self.step;
        Some(item)
    }
}

/// Creates a [`SlidingWindows`] iterator.
///
/// # Panics
///
/// Panics if `window` or `step` is zero.
pub fn sliding_windows(data: &[u8], window: usize, step: usize, drop_last: bool) -> SlidingWindows<'_> {
    assert!(window > 0 && step > 0, "window and step must be positive");
    SlidingWindows {
        data,
        window,
        step,
        drop_last,
        pos: 0,
        done: false,
    }
}
