// ABOUTME: Lookup outcome taxonomy layered on the core AppError type
// ABOUTME: Distinguishes not-found, service-unavailable, and unexpected failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Lookup Contributors

//! # Lookup Errors
//!
//! `LookupError` is the typed failure returned by the food lookup engine. A
//! negative lookup (`NotFound`) is a normal outcome and is never retried;
//! `ServiceUnavailable` means the upstream could not be reached or answered
//! with an error status and is safe to retry later; `Unexpected` covers
//! anything else, such as a response body that could not be decoded.

use calorie_core::constants::usda::SERVICE_NAME;
use thiserror::Error;

pub use calorie_core::errors::{AppError, AppResult, ErrorCode, ErrorResponse};

/// Caller-facing message for an unreachable or failing food database
pub const UNAVAILABLE_MESSAGE: &str = "Unable to connect to food database";
/// Caller-facing message for any other lookup failure
pub const UNEXPECTED_MESSAGE: &str = "Internal error while fetching food data";

/// Failure outcome of a food lookup or calorie estimate
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// Caller-supplied input was rejected before any lookup happened
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Zero candidates, or no candidate carried usable positive calorie data
    #[error("No usable food match for '{query}'")]
    NotFound {
        /// Query as supplied by the caller
        query: String,
    },

    /// Upstream unreachable after retries, or upstream returned an error status
    #[error("Food database unavailable: {reason}")]
    ServiceUnavailable {
        /// Underlying failure description, for logs only
        reason: String,
    },

    /// Any other failure, e.g. a malformed upstream response
    #[error("Unexpected lookup failure: {reason}")]
    Unexpected {
        /// Underlying failure description, for logs only
        reason: String,
    },
}

impl LookupError {
    /// Whether this outcome is a normal negative result rather than a failure
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Whether a caller may retry later with a chance of success
    #[must_use]
    pub const fn is_service_unavailable(&self) -> bool {
        matches!(self, Self::ServiceUnavailable { .. })
    }
}

impl From<LookupError> for AppError {
    fn from(error: LookupError) -> Self {
        match error {
            LookupError::InvalidInput(message) => Self::invalid_input(message),
            LookupError::NotFound { query } => Self::not_found(format!("Dish '{query}'"))
                .with_details(serde_json::json!({ "query": query }))
                .with_resource_id(query),
            // Upstream detail stays in the logs
            LookupError::ServiceUnavailable { .. } => {
                Self::service_unavailable(SERVICE_NAME, UNAVAILABLE_MESSAGE)
            }
            LookupError::Unexpected { .. } => Self::internal(UNEXPECTED_MESSAGE),
        }
    }
}
