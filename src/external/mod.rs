// ABOUTME: External food database clients and the search transport seam
// ABOUTME: Defines FoodSearchSource and re-exports the USDA implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Lookup Contributors

//! External API Clients
//!
//! The lookup engine consumes exactly one external HTTP API. It reaches it
//! through [`FoodSearchSource`] so that tests can substitute a stub.

/// Upstream failure classification
pub mod errors;
/// USDA `FoodData` Central search client
pub mod usda_client;

use async_trait::async_trait;

pub use errors::UpstreamError;
pub use usda_client::{CandidateFood, CandidateNutrient, UsdaFoodSource};

/// A searchable food-composition database
#[async_trait]
pub trait FoodSearchSource: Send + Sync {
    /// Run one search attempt for `query` and return the candidate foods
    ///
    /// # Errors
    ///
    /// Returns an [`UpstreamError`] describing why the attempt failed; only
    /// `UpstreamError::Transient` is retried by the lookup client.
    async fn search(&self, query: &str) -> Result<Vec<CandidateFood>, UpstreamError>;
}
