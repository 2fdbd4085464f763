// ABOUTME: USDA FoodData Central search client for calorie lookups
// ABOUTME: Builds the search request, classifies failures, and decodes candidate foods
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Lookup Contributors

//! USDA `FoodData` Central API Client
//!
//! Issues `GET {base_url}/foods/search` with the free-text query, the API key,
//! a page size and the three accepted data type categories, and decodes the
//! candidate foods from the response. Every candidate field is optional on the
//! wire; defaults are applied by the accessors on [`CandidateFood`].
//!
//! # API Reference
//! USDA `FoodData` Central API: <https://fdc.nal.usda.gov/api-guide.html>
//!
//! # Example
//! ```rust,no_run
//! use calorie_lookup::config::LookupConfig;
//! use calorie_lookup::external::{FoodSearchSource, UsdaFoodSource};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = LookupConfig::new("your_api_key");
//! let source = UsdaFoodSource::new(&config)?;
//! let candidates = source.search("apple").await?;
//! println!("{} candidates", candidates.len());
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use calorie_core::constants::usda::{REQUESTED_DATA_TYPES, SEARCH_PATH};
use calorie_core::errors::{AppError, AppResult};
use calorie_core::models::DataType;
use reqwest::{Client, ClientBuilder};
use serde::Deserialize;
use tracing::{debug, error};

use super::errors::UpstreamError;
use super::FoodSearchSource;
use crate::config::LookupConfig;

/// Nutrient entry of a search candidate
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateNutrient {
    /// Nutrient id (1008 is Energy in kcal)
    #[serde(default)]
    pub nutrient_id: Option<u32>,
    /// Amount per 100 g
    #[serde(default)]
    pub value: Option<f64>,
}

/// Raw food item from the search response, before best-match selection
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateFood {
    /// Food description
    #[serde(default)]
    pub description: Option<String>,
    /// Data type category
    #[serde(default)]
    pub data_type: Option<DataType>,
    /// Search relevance score
    #[serde(default)]
    pub score: Option<f64>,
    /// Serving size reported by the upstream record
    #[serde(default)]
    pub serving_size: Option<f64>,
    /// Unit of `serving_size`
    #[serde(default)]
    pub serving_size_unit: Option<String>,
    /// Nutrients in upstream order
    #[serde(default)]
    pub food_nutrients: Option<Vec<CandidateNutrient>>,
}

impl CandidateFood {
    /// Create a candidate with no nutrients and no serving information
    #[must_use]
    pub fn new(description: impl Into<String>, data_type: DataType, score: f64) -> Self {
        Self {
            description: Some(description.into()),
            data_type: Some(data_type),
            score: Some(score),
            serving_size: None,
            serving_size_unit: None,
            food_nutrients: None,
        }
    }

    /// Append a nutrient entry
    #[must_use]
    pub fn with_nutrient(mut self, nutrient_id: u32, value: f64) -> Self {
        self.food_nutrients
            .get_or_insert_with(Vec::new)
            .push(CandidateNutrient {
                nutrient_id: Some(nutrient_id),
                value: Some(value),
            });
        self
    }

    /// Set the reported serving size and unit
    #[must_use]
    pub fn with_serving(mut self, size: f64, unit: impl Into<String>) -> Self {
        self.serving_size = Some(size);
        self.serving_size_unit = Some(unit.into());
        self
    }

    /// Data type, treating an absent value as Branded
    #[must_use]
    pub fn data_type(&self) -> DataType {
        self.data_type.unwrap_or_else(DataType::assumed_when_missing)
    }

    /// Relevance score, treating an absent value as zero
    #[must_use]
    pub fn relevance(&self) -> f64 {
        self.score.unwrap_or(0.0)
    }

    /// Nutrient entries, empty when absent
    #[must_use]
    pub fn nutrients(&self) -> &[CandidateNutrient] {
        self.food_nutrients.as_deref().unwrap_or_default()
    }
}

/// USDA API search response
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    foods: Option<Vec<CandidateFood>>,
    // Pagination fields (totalHits, currentPage, totalPages) are not used
}

/// USDA `FoodData` Central search client
pub struct UsdaFoodSource {
    http_client: Client,
    search_url: String,
    api_key: String,
    page_size: u32,
}

impl UsdaFoodSource {
    /// Create a client with the configured timeouts
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built
    pub fn new(config: &LookupConfig) -> AppResult<Self> {
        let http_client = ClientBuilder::new()
            .timeout(config.request_timeout())
            .connect_timeout(config.connect_timeout())
            .build()
            .map_err(|e| {
                AppError::internal(format!("Failed to build USDA HTTP client: {e}")).with_source(e)
            })?;

        Ok(Self {
            http_client,
            search_url: format!("{}{SEARCH_PATH}", config.base_url.trim_end_matches('/')),
            api_key: config.api_key.clone(),
            page_size: config.page_size,
        })
    }

    /// Search endpoint URL
    #[must_use]
    pub fn search_url(&self) -> &str {
        &self.search_url
    }
}

#[async_trait]
impl FoodSearchSource for UsdaFoodSource {
    async fn search(&self, query: &str) -> Result<Vec<CandidateFood>, UpstreamError> {
        let page_size = self.page_size.to_string();
        let mut params: Vec<(&str, &str)> = vec![
            ("query", query),
            ("api_key", self.api_key.as_str()),
            ("pageSize", page_size.as_str()),
        ];
        params.extend(REQUESTED_DATA_TYPES.iter().map(|data_type| ("dataType", *data_type)));

        debug!(query, url = %self.search_url, "Searching USDA API");

        let response = self
            .http_client
            .get(&self.search_url)
            .query(&params)
            .send()
            .await
            .map_err(UpstreamError::from_reqwest)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), query, "USDA API HTTP error");
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(UpstreamError::from_reqwest)?;
        let search_response: SearchResponse = serde_json::from_slice(&bytes)
            .map_err(|e| UpstreamError::Malformed(format!("JSON parse error: {e}")))?;

        let mut foods = search_response.foods.unwrap_or_default();
        foods.truncate(self.page_size as usize);
        Ok(foods)
    }
}
