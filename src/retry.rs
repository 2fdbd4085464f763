// ABOUTME: Bounded retry with a fixed backoff for transient upstream failures
// ABOUTME: Only errors that report themselves as transient are retried
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Lookup Contributors

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use calorie_core::constants::usda::{DEFAULT_MAX_ATTEMPTS, DEFAULT_RETRY_BACKOFF_MS};
use tracing::warn;

/// Errors that can tell whether a retry might succeed
pub trait Transient {
    /// True for connect/timeout-class failures
    fn is_transient(&self) -> bool;
}

/// Configuration for retry behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first one
    pub max_attempts: u32,
    /// Fixed wait between attempts
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            backoff: Duration::from_millis(DEFAULT_RETRY_BACKOFF_MS),
        }
    }
}

impl RetryPolicy {
    /// Create a policy; zero attempts is treated as one
    #[must_use]
    pub const fn new(max_attempts: u32, backoff: Duration) -> Self {
        Self {
            max_attempts,
            backoff,
        }
    }

    /// Policy that never retries
    #[must_use]
    pub const fn no_retry() -> Self {
        Self::new(1, Duration::ZERO)
    }
}

/// Run `operation`, retrying transient failures according to `policy`
///
/// The wait between attempts is a `tokio` sleep, so other tasks keep running.
/// When every attempt fails transiently the last error is returned unchanged.
///
/// # Errors
///
/// Returns the first non-transient error, or the last transient error once
/// attempts are exhausted.
pub async fn with_retry<T, E, F, Fut>(
    policy: &RetryPolicy,
    label: &str,
    mut operation: F,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Transient + Display,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 1;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(error) if error.is_transient() && attempt < max_attempts => {
                let backoff_ms = u64::try_from(policy.backoff.as_millis()).unwrap_or(u64::MAX);
                warn!(
                    service = label,
                    attempt,
                    max_attempts,
                    backoff_ms,
                    error = %error,
                    "{label} attempt {attempt} failed, retrying after {backoff_ms}ms"
                );
                tokio::time::sleep(policy.backoff).await;
                attempt += 1;
            }
            Err(error) => return Err(error),
        }
    }
}
