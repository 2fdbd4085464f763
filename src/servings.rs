// ABOUTME: Serving-size conversion from calories per 100g to per-serving and total figures
// ABOUTME: Pure arithmetic; callers reject non-positive serving counts beforehand
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Lookup Contributors

use calorie_core::constants::usda::DEFAULT_SERVING_SIZE_GRAMS;
use calorie_core::models::FoodRecord;
use serde::{Deserialize, Serialize};

/// Calories for one serving and for the requested number of servings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServingCalories {
    /// Calories in one serving
    pub calories_per_serving: u32,
    /// `calories_per_serving * servings`
    pub total_calories: u64,
}

impl ServingCalories {
    /// Convert a food record for `servings` servings
    #[must_use]
    pub fn for_record(record: &FoodRecord, servings: u32) -> Self {
        calculate_serving_calories(
            record.calories_per_100g.get(),
            record.serving_size_grams,
            servings,
        )
    }
}

/// Calculate calories for a serving size and serving count
///
/// A 100 g serving passes `calories_per_100g` through unchanged; any other
/// size is scaled and rounded half away from zero.
#[must_use]
pub fn calculate_serving_calories(
    calories_per_100g: u32,
    serving_size_grams: f64,
    servings: u32,
) -> ServingCalories {
    let calories_per_serving = if is_reference_serving(serving_size_grams) {
        calories_per_100g
    } else {
        (f64::from(calories_per_100g) * serving_size_grams / 100.0).round() as u32
    };

    ServingCalories {
        calories_per_serving,
        total_calories: u64::from(calories_per_serving) * u64::from(servings),
    }
}

fn is_reference_serving(serving_size_grams: f64) -> bool {
    (serving_size_grams - DEFAULT_SERVING_SIZE_GRAMS).abs() < f64::EPSILON
}
