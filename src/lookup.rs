// ABOUTME: Cache-first food lookup client with bounded upstream retries
// ABOUTME: Selects the best candidate, normalizes it, and caches the result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Lookup Contributors

//! # Food Lookup Client
//!
//! `lookup` consults the cache first and returns a hit without touching the
//! upstream. On a miss it searches the upstream (retrying connect/timeout
//! failures per the [`RetryPolicy`]), picks the best candidate, caches the
//! normalized record and returns it.
//!
//! Concurrent lookups for the same uncached query are not coalesced; each may
//! call the upstream and each writes the cache (last writer wins).

use std::sync::Arc;

use calorie_core::constants::usda::SERVICE_NAME;
use calorie_core::models::FoodRecord;
use tracing::{error, info, instrument, warn};

use crate::cache::{FoodRecordCache, NormalizedQuery};
use crate::errors::LookupError;
use crate::external::{FoodSearchSource, UpstreamError};
use crate::retry::{with_retry, RetryPolicy};
use crate::selection::select_best_match;

/// Looks up normalized calorie records for dish queries
#[derive(Clone)]
pub struct FoodLookupClient {
    source: Arc<dyn FoodSearchSource>,
    cache: Arc<dyn FoodRecordCache>,
    retry: RetryPolicy,
}

impl FoodLookupClient {
    /// Create a client over an upstream source and a cache store
    #[must_use]
    pub fn new(
        source: Arc<dyn FoodSearchSource>,
        cache: Arc<dyn FoodRecordCache>,
        retry: RetryPolicy,
    ) -> Self {
        Self {
            source,
            cache,
            retry,
        }
    }

    /// Look up the calorie record for `query`
    ///
    /// # Errors
    ///
    /// - `LookupError::InvalidInput` if `query` is blank
    /// - `LookupError::NotFound` if the upstream returned no candidates, or none
    ///   carried usable calorie data
    /// - `LookupError::ServiceUnavailable` if the upstream stayed unreachable
    ///   after retries or answered with an error status
    /// - `LookupError::Unexpected` if the upstream response could not be decoded
    #[instrument(skip_all, fields(query = %query))]
    pub async fn lookup(&self, query: &str) -> Result<FoodRecord, LookupError> {
        let key = NormalizedQuery::new(query)
            .ok_or_else(|| LookupError::InvalidInput("query must not be empty".to_owned()))?;

        if let Some(record) = self.cached(&key).await {
            info!(query, "Cache hit");
            return Ok(record);
        }

        let source = self.source.as_ref();
        let candidates = with_retry(&self.retry, SERVICE_NAME, move || source.search(query))
            .await
            .map_err(|e| Self::surface_failure(query, e))?;

        if candidates.is_empty() {
            warn!(query, "No foods found");
            return Err(LookupError::NotFound {
                query: query.to_owned(),
            });
        }

        let Some(best) = select_best_match(candidates) else {
            warn!(query, "No candidate carried usable calorie data");
            return Err(LookupError::NotFound {
                query: query.to_owned(),
            });
        };

        let record = best.into_record(query);
        if let Err(e) = self.cache.put(&key, record.clone()).await {
            warn!(query, error = %e, "Failed to cache food record");
        }

        info!(
            query,
            description = %record.description,
            calories_per_100g = record.calories_per_100g.get(),
            data_type = %record.data_type,
            "Food lookup succeeded"
        );
        Ok(record)
    }

    /// Number of entries held by the cache, including stale ones
    pub async fn cache_size(&self) -> usize {
        self.cache.len().await
    }

    /// Cache read; a backend failure counts as a miss
    async fn cached(&self, key: &NormalizedQuery) -> Option<FoodRecord> {
        match self.cache.get(key).await {
            Ok(hit) => hit,
            Err(e) => {
                warn!(query = %key, error = %e, "Cache read failed, treating as miss");
                None
            }
        }
    }

    fn surface_failure(query: &str, failure: UpstreamError) -> LookupError {
        match &failure {
            UpstreamError::Malformed(reason) => {
                error!(query, reason = %reason, "Unexpected USDA response");
            }
            other => {
                error!(query, error = %other, "USDA API unavailable");
            }
        }
        LookupError::from(failure)
    }
}
