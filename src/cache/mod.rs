// ABOUTME: Cache abstraction for normalized food records keyed by query text
// ABOUTME: Pluggable backend trait with an in-memory TTL implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Lookup Contributors

/// In-memory cache implementation
pub mod memory;

use std::fmt;

use async_trait::async_trait;
use calorie_core::errors::AppResult;
use calorie_core::models::FoodRecord;
use tokio::time::Instant;

pub use memory::InMemoryFoodCache;

/// Cache provider trait for food record backends
///
/// Implementations must tolerate concurrent `get`/`put` calls from many
/// lookups; last writer wins for a given key.
///
/// # Examples
///
/// ```rust,no_run
/// use calorie_lookup::cache::{FoodRecordCache, InMemoryFoodCache, NormalizedQuery};
/// use std::time::Duration;
/// # async fn example() -> calorie_core::errors::AppResult<()> {
/// let cache = InMemoryFoodCache::new(Duration::from_secs(3600));
/// if let Some(key) = NormalizedQuery::new("  Chicken Breast ") {
///     match cache.get(&key).await? {
///         Some(record) => println!("cached: {}", record.description),
///         None => println!("miss for {key}"),
///     }
/// }
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait FoodRecordCache: Send + Sync {
    /// Return the record for `key` if present and younger than the TTL
    ///
    /// An expired entry is removed as a side effect.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    async fn get(&self, key: &NormalizedQuery) -> AppResult<Option<FoodRecord>>;

    /// Store `record` under `key`, replacing any previous entry
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    async fn put(&self, key: &NormalizedQuery, record: FoodRecord) -> AppResult<()>;

    /// Number of entries currently held, including stale ones not yet read
    async fn len(&self) -> usize;

    /// Whether the cache holds no entries
    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Drop every entry
    async fn clear(&self);
}

/// Query text normalized for cache lookups (trimmed, lower-cased)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedQuery(String);

impl NormalizedQuery {
    /// Normalize raw query text; returns `None` when nothing but whitespace remains
    #[must_use]
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(trimmed.to_lowercase()))
    }

    /// Normalized text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Cached food record with its capture time
#[derive(Debug, Clone)]
pub struct CachedRecord {
    /// Normalized query the record was fetched for
    pub key: NormalizedQuery,
    /// Stored record
    pub payload: FoodRecord,
    /// When the record was stored
    pub captured_at: Instant,
}

impl CachedRecord {
    /// Capture `payload` now
    #[must_use]
    pub fn new(key: NormalizedQuery, payload: FoodRecord) -> Self {
        Self {
            key,
            payload,
            captured_at: Instant::now(),
        }
    }

    /// Expired once `now - captured_at >= ttl`
    #[must_use]
    pub fn is_expired(&self, ttl: std::time::Duration) -> bool {
        self.captured_at.elapsed() >= ttl
    }
}
