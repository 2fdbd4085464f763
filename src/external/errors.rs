// ABOUTME: Failure classification for upstream food database calls
// ABOUTME: Separates retryable connect/timeout failures from status and decode errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Lookup Contributors

use thiserror::Error;

use crate::errors::LookupError;
use crate::retry::Transient;

/// Failure of a single upstream search attempt
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpstreamError {
    /// Connection could not be established, or the request timed out
    #[error("transient failure: {0}")]
    Transient(String),

    /// Upstream answered with a non-success HTTP status
    #[error("HTTP {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, possibly empty
        body: String,
    },

    /// Any other transport failure (redirect loops, TLS, invalid request)
    #[error("request failed: {0}")]
    Request(String),

    /// Response body could not be decoded into the expected shape
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl UpstreamError {
    /// Classify a `reqwest` failure
    ///
    /// The request URL is stripped first: it carries the API key as a query
    /// parameter and must not reach logs or callers.
    #[must_use]
    pub fn from_reqwest(error: reqwest::Error) -> Self {
        let error = error.without_url();
        if error.is_timeout() || error.is_connect() {
            Self::Transient(error.to_string())
        } else if error.is_decode() {
            Self::Malformed(error.to_string())
        } else {
            Self::Request(error.to_string())
        }
    }
}

impl Transient for UpstreamError {
    fn is_transient(&self) -> bool {
        matches!(self, Self::Transient(_))
    }
}

impl From<UpstreamError> for LookupError {
    fn from(error: UpstreamError) -> Self {
        match error {
            UpstreamError::Transient(_) | UpstreamError::Status { .. } | UpstreamError::Request(_) => {
                Self::ServiceUnavailable {
                    reason: error.to_string(),
                }
            }
            UpstreamError::Malformed(_) => Self::Unexpected {
                reason: error.to_string(),
            },
        }
    }
}
