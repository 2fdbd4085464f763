// ABOUTME: In-memory food record cache with fixed TTL and lazy expiry
// ABOUTME: Entries are dropped only when read after expiring; no background sweep
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Lookup Contributors

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use calorie_core::errors::AppResult;
use calorie_core::models::FoodRecord;
use tokio::sync::RwLock;
use tracing::debug;

use super::{CachedRecord, FoodRecordCache, NormalizedQuery};

/// In-memory cache of food records
///
/// Unbounded: every distinct normalized query holds at most one entry, and a
/// stale entry stays resident until its key is read again. Cloning shares the
/// underlying store.
#[derive(Clone)]
pub struct InMemoryFoodCache {
    store: Arc<RwLock<HashMap<NormalizedQuery, CachedRecord>>>,
    ttl: Duration,
}

impl InMemoryFoodCache {
    /// Create an empty cache whose entries live for `ttl`
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            store: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }
}

#[async_trait]
impl FoodRecordCache for InMemoryFoodCache {
    async fn get(&self, key: &NormalizedQuery) -> AppResult<Option<FoodRecord>> {
        {
            let store = self.store.read().await;
            match store.get(key) {
                None => return Ok(None),
                Some(entry) if !entry.is_expired(self.ttl) => {
                    debug!(query = %key, "Cache hit");
                    return Ok(Some(entry.payload.clone()));
                }
                Some(_) => {}
            }
        }

        // Re-check under the write lock: a concurrent put may have refreshed it
        let mut store = self.store.write().await;
        if let Some(entry) = store.get(key) {
            if !entry.is_expired(self.ttl) {
                return Ok(Some(entry.payload.clone()));
            }
            store.remove(key);
            debug!(query = %key, "Cache entry expired and removed");
        }
        Ok(None)
    }

    async fn put(&self, key: &NormalizedQuery, record: FoodRecord) -> AppResult<()> {
        let entry = CachedRecord::new(key.clone(), record);
        self.store.write().await.insert(key.clone(), entry);
        debug!(query = %key, "Cached food record");
        Ok(())
    }

    async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    async fn clear(&self) {
        self.store.write().await.clear();
    }
}
