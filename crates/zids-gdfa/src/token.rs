// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Token sources: the capability the online evaluator pulls its OT
//! tokens through, plus the LRU-caching front.
//!
//! Token requests for a single stream are emitted in input order; the
//! cache may serve repeats out of band but never reorders a stream.
//! Cached tokens are only valid within one OT service lifetime (same
//! group keys, same per-service sid), so the cache lives and dies with
//! the client session.

use std::collections::HashMap;
use std::num::NonZeroUsize;

use lru::LruCache;
use tracing::trace;
use zids_ot::Ot256Chooser;
use zids_rand::EntropySource;

use crate::error::GdfaError;

/// Default capacity of the token LRU cache.
pub const DEFAULT_TOKEN_CACHE_CAPACITY: usize = 8192;

/// Capability producing the 1-of-256 token for `(row_id, x)`.
///
/// Implementations: [`LocalTokenSource`] (in-process OT services) and
/// the HTTP client in `zids-client`. Retrieval is the only call in the
/// online path that may block.
pub trait TokenSource {
    /// Returns the token bytes; the expected length is
    /// `cmax * kprime_bytes`.
    fn get_token(&mut self, row_id: u32, x: u8) -> Result<Vec<u8>, GdfaError>;
}

/// Token source bound to in-process per-row OT services (tests,
/// single-process demos).
pub struct LocalTokenSource<'g, E: EntropySource> {
    choosers: Vec<Ot256Chooser<'g>>,
    entropy: E,
}

impl<'g, E: EntropySource> LocalTokenSource<'g, E> {
    /// Wraps one chooser per garbled row.
    pub fn new(choosers: Vec<Ot256Chooser<'g>>, entropy: E) -> Self {
        Self { choosers, entropy }
    }
}

impl<'g, E: EntropySource> TokenSource for LocalTokenSource<'g, E> {
    fn get_token(&mut self, row_id: u32, x: u8) -> Result<Vec<u8>, GdfaError> {
        let chooser = self
            .choosers
            .get(row_id as usize)
            .ok_or(GdfaError::OutOfRange {
                what: "row_id",
                value: row_id as usize,
                bound: self.choosers.len(),
            })?;
        Ok(chooser.choose(usize::from(x), &self.entropy)?)
    }
}

/// Hit/request counters of a [`CachingTokenSource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenCacheStats {
    /// Fetches that went through to the inner source.
    pub requests: u64,
    /// Fetches served from the cache.
    pub cache_hits: u64,
    /// Configured capacity (0 = disabled).
    pub capacity: usize,
    /// Enforced token length.
    pub expected_token_len: usize,
}

/// Length-validating LRU cache in front of a [`TokenSource`].
pub struct CachingTokenSource<S: TokenSource> {
    inner: S,
    expected_len: usize,
    capacity: usize,
    cache: Option<LruCache<(u32, u8), Vec<u8>>>,
    requests: u64,
    cache_hits: u64,
}

impl<S: TokenSource> CachingTokenSource<S> {
    /// Wraps `inner` with the default cache capacity.
    pub fn new(inner: S, expected_len: usize) -> Self {
        Self::with_capacity(inner, expected_len, DEFAULT_TOKEN_CACHE_CAPACITY)
    }

    /// Wraps `inner` with an explicit capacity; 0 disables caching
    /// (length validation and stats remain).
    pub fn with_capacity(inner: S, expected_len: usize, capacity: usize) -> Self {
        Self {
            inner,
            expected_len,
            capacity,
            cache: NonZeroUsize::new(capacity).map(LruCache::new),
            requests: 0,
            cache_hits: 0,
        }
    }

    /// Current counters.
    pub fn stats(&self) -> TokenCacheStats {
        TokenCacheStats {
            requests: self.requests,
            cache_hits: self.cache_hits,
            capacity: self.capacity,
            expected_token_len: self.expected_len,
        }
    }

    /// Fetches a batch of tokens in input order, de-duplicating
    /// repeated `(row_id, x)` pairs within the batch even when the
    /// cache is disabled.
    pub fn get_tokens_batch(
        &mut self,
        queries: &[(u32, u8)],
    ) -> Result<Vec<Vec<u8>>, GdfaError> {
        let mut memo: HashMap<(u32, u8), Vec<u8>> = HashMap::new();
        let mut out = Vec::with_capacity(queries.len());
        for &(row_id, x) in queries {
            if let Some(token) = memo.get(&(row_id, x)) {
                out.push(token.clone());
                continue;
            }
            let token = self.get_token(row_id, x)?;
            memo.insert((row_id, x), token.clone());
            out.push(token);
        }
        Ok(out)
    }
}

impl<S: TokenSource> TokenSource for CachingTokenSource<S> {
    fn get_token(&mut self, row_id: u32, x: u8) -> Result<Vec<u8>, GdfaError> {
        if let Some(cache) = &mut self.cache {
            if let Some(token) = cache.get(&(row_id, x)) {
                self.cache_hits += 1;
                trace!(row_id, x, "token cache hit");
                return Ok(token.clone());
            }
        }

        let token = self.inner.get_token(row_id, x)?;
        if token.len() != self.expected_len {
            return Err(GdfaError::LengthMismatch {
                expected: self.expected_len,
                actual: token.len(),
            });
        }
        self.requests += 1;
        if let Some(cache) = &mut self.cache {
            cache.put((row_id, x), token.clone());
        }
        Ok(token)
    }
}
