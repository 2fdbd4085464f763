// ABOUTME: Caller-facing calorie estimate facade over the food lookup client
// ABOUTME: Validates dish name and serving count, then looks up and converts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Lookup Contributors

use std::sync::Arc;

use calorie_core::constants::limits::MAX_DISH_NAME_CHARS;
use calorie_core::errors::AppResult;
use calorie_core::models::{CalorieEstimate, FoodRecord};
use tracing::info;

use crate::cache::InMemoryFoodCache;
use crate::config::LookupConfig;
use crate::errors::LookupError;
use crate::external::UsdaFoodSource;
use crate::lookup::FoodLookupClient;
use crate::servings::ServingCalories;

/// Estimates calories for a dish and a number of servings
#[derive(Clone)]
pub struct CalorieService {
    lookup: FoodLookupClient,
}

impl CalorieService {
    /// Wrap an existing lookup client
    #[must_use]
    pub const fn new(lookup: FoodLookupClient) -> Self {
        Self { lookup }
    }

    /// Wire the USDA source and an in-memory cache from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built
    pub fn from_config(config: &LookupConfig) -> AppResult<Self> {
        let source = UsdaFoodSource::new(config)?;
        let cache = InMemoryFoodCache::new(config.cache_ttl());
        Ok(Self::new(FoodLookupClient::new(
            Arc::new(source),
            Arc::new(cache),
            config.retry_policy(),
        )))
    }

    /// Underlying lookup client
    #[must_use]
    pub const fn lookup_client(&self) -> &FoodLookupClient {
        &self.lookup
    }

    /// Look up `dish_name` and convert to per-serving and total calories
    ///
    /// # Errors
    ///
    /// Returns `LookupError::InvalidInput` for a blank or over-long dish name or
    /// a zero serving count, otherwise whatever the lookup reports.
    pub async fn estimate(
        &self,
        dish_name: &str,
        servings: u32,
    ) -> Result<CalorieEstimate, LookupError> {
        validate_request(dish_name, servings)?;

        let record = self.lookup.lookup(dish_name).await?;
        let estimate = build_estimate(dish_name, servings, &record);

        info!(
            dish_name,
            servings,
            calories_per_serving = estimate.calories_per_serving,
            total_calories = estimate.total_calories,
            "Calorie estimate computed"
        );
        Ok(estimate)
    }
}

fn validate_request(dish_name: &str, servings: u32) -> Result<(), LookupError> {
    let length = dish_name.trim().chars().count();
    if length == 0 {
        return Err(LookupError::InvalidInput(
            "dish_name must not be empty".to_owned(),
        ));
    }
    if length > MAX_DISH_NAME_CHARS {
        return Err(LookupError::InvalidInput(format!(
            "dish_name must be at most {MAX_DISH_NAME_CHARS} characters"
        )));
    }
    if servings == 0 {
        return Err(LookupError::InvalidInput(
            "servings must be a positive integer".to_owned(),
        ));
    }
    Ok(())
}

fn build_estimate(dish_name: &str, servings: u32, record: &FoodRecord) -> CalorieEstimate {
    let calories = ServingCalories::for_record(record, servings);
    CalorieEstimate {
        dish_name: dish_name.to_owned(),
        servings,
        calories_per_serving: calories.calories_per_serving,
        total_calories: calories.total_calories,
        source: record.source.clone(),
        matched_description: record.description.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calorie_core::models::DataType;
    use std::num::NonZeroU32;

    #[test]
    fn test_validation() {
        assert!(validate_request("apple", 1).is_ok());
        assert!(validate_request("   ", 1).is_err());
        assert!(validate_request("apple", 0).is_err());
        assert!(validate_request(&"a".repeat(100), 1).is_ok());
        assert!(validate_request(&"a".repeat(101), 1).is_err());
    }

    #[test]
    fn test_build_estimate_uses_record_serving_size() {
        let record = FoodRecord::new(
            Some("Apples, raw, with skin".to_owned()),
            "apple",
            NonZeroU32::new(52).unwrap(),
            Some(150.0),
            Some("g".to_owned()),
            DataType::SrLegacy,
        );
        let estimate = build_estimate("Apple", 3, &record);
        assert_eq!(estimate.dish_name, "Apple");
        assert_eq!(estimate.calories_per_serving, 78);
        assert_eq!(estimate.total_calories, 234);
        assert_eq!(estimate.matched_description, "Apples, raw, with skin");
        assert_eq!(estimate.source, "USDA FoodData Central");
    }
}
