// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides logging setup, candidate fixtures, and scripted upstream and cache doubles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Lookup Contributors
#![allow(
    dead_code,
    missing_docs,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `calorie_lookup`

use std::collections::VecDeque;
use std::num::NonZeroU32;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex, Once};
use std::time::Duration;

use async_trait::async_trait;
use calorie_lookup::cache::{FoodRecordCache, InMemoryFoodCache, NormalizedQuery};
use calorie_lookup::errors::{AppError, AppResult};
use calorie_lookup::external::{CandidateFood, FoodSearchSource, UpstreamError};
use calorie_lookup::retry::RetryPolicy;
use calorie_lookup::{DataType, FoodLookupClient, FoodRecord};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level; default to WARN for quiet tests
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Candidate with an energy entry
pub fn candidate(description: &str, data_type: DataType, score: f64, kcal: f64) -> CandidateFood {
    CandidateFood::new(description, data_type, score).with_nutrient(1008, kcal)
}

/// Typical chicken breast search results, best match is the Foundation entry
pub fn chicken_candidates() -> Vec<CandidateFood> {
    vec![
        candidate("CHICKEN BREAST, BRANDED", DataType::Branded, 900.0, 110.0),
        candidate(
            "Chicken, broilers or fryers, breast, meat only, raw",
            DataType::SrLegacy,
            500.0,
            120.0,
        ),
        candidate("Chicken, breast, boneless, skinless, raw", DataType::Foundation, 300.0, 165.0),
    ]
}

/// Food record as the lookup would produce it
pub fn food_record(description: &str, kcal: u32, serving_size: Option<f64>) -> FoodRecord {
    FoodRecord::new(
        Some(description.to_owned()),
        description,
        NonZeroU32::new(kcal).unwrap(),
        serving_size,
        Some("g".to_owned()),
        DataType::Foundation,
    )
}

/// Upstream double that replays scripted outcomes and counts calls
///
/// Once the script runs out, the last outcome repeats.
pub struct ScriptedSource {
    script: Mutex<VecDeque<Result<Vec<CandidateFood>, UpstreamError>>>,
    last: Mutex<Option<Result<Vec<CandidateFood>, UpstreamError>>>,
    calls: AtomicU32,
    queries: Mutex<Vec<String>>,
}

impl ScriptedSource {
    pub fn new(script: Vec<Result<Vec<CandidateFood>, UpstreamError>>) -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(script.into()),
            last: Mutex::new(None),
            calls: AtomicU32::new(0),
            queries: Mutex::new(Vec::new()),
        })
    }

    /// Source that always answers with `candidates`
    pub fn returning(candidates: Vec<CandidateFood>) -> Arc<Self> {
        Self::new(vec![Ok(candidates)])
    }

    /// Source that always fails with `error`
    pub fn failing(error: UpstreamError) -> Arc<Self> {
        Self::new(vec![Err(error)])
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl FoodSearchSource for ScriptedSource {
    async fn search(&self, query: &str) -> Result<Vec<CandidateFood>, UpstreamError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.queries.lock().unwrap().push(query.to_owned());

        let next = self.script.lock().unwrap().pop_front();
        let mut last = self.last.lock().unwrap();
        if let Some(outcome) = next {
            *last = Some(outcome);
        }
        last.clone()
            .unwrap_or_else(|| Err(UpstreamError::Request("empty script".to_owned())))
    }
}

/// Cache double whose reads and writes always fail
pub struct BrokenCache;

#[async_trait]
impl FoodRecordCache for BrokenCache {
    async fn get(&self, _key: &NormalizedQuery) -> AppResult<Option<FoodRecord>> {
        Err(AppError::internal("cache backend offline"))
    }

    async fn put(&self, _key: &NormalizedQuery, _record: FoodRecord) -> AppResult<()> {
        Err(AppError::internal("cache backend offline"))
    }

    async fn len(&self) -> usize {
        0
    }

    async fn clear(&self) {}
}

/// Lookup client over `source` with a fresh one-hour in-memory cache
pub fn lookup_client(
    source: Arc<ScriptedSource>,
    retry: RetryPolicy,
) -> (FoodLookupClient, Arc<InMemoryFoodCache>) {
    let cache = Arc::new(InMemoryFoodCache::new(Duration::from_secs(3600)));
    let client = FoodLookupClient::new(source, cache.clone(), retry);
    (client, cache)
}
