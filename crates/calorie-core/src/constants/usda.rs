// ABOUTME: USDA FoodData Central constants for search requests and nutrient parsing
// ABOUTME: Base URL, request defaults, data type labels, and the energy nutrient id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Lookup Contributors

/// Default base URL for USDA `FoodData` Central
pub const DEFAULT_BASE_URL: &str = "https://api.nal.usda.gov/fdc/v1";

/// Search endpoint path, relative to the base URL
pub const SEARCH_PATH: &str = "/foods/search";

/// Human-readable source label attached to every food record
pub const SOURCE_LABEL: &str = "USDA FoodData Central";

/// Service label used in error messages and logs
pub const SERVICE_NAME: &str = "USDA API";

/// Nutrient id for "Energy" in kcal
pub const ENERGY_NUTRIENT_ID: u32 = 1008;

/// Candidates requested per search
pub const DEFAULT_PAGE_SIZE: u32 = 3;

/// Total attempts per upstream search (first try plus one retry)
pub const DEFAULT_MAX_ATTEMPTS: u32 = 2;

/// Fixed wait between attempts
pub const DEFAULT_RETRY_BACKOFF_MS: u64 = 500;

/// Whole-request timeout
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Connection establishment timeout
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Serving size assumed when the upstream record has none
pub const DEFAULT_SERVING_SIZE_GRAMS: f64 = 100.0;

/// Serving unit assumed when the upstream record has none
pub const DEFAULT_SERVING_UNIT: &str = "g";

/// Data type label for Foundation foods
pub const DATA_TYPE_FOUNDATION: &str = "Foundation";

/// Data type label for SR Legacy foods
pub const DATA_TYPE_SR_LEGACY: &str = "SR Legacy";

/// Data type label for Branded foods
pub const DATA_TYPE_BRANDED: &str = "Branded";

/// Data types requested from the search endpoint, in preference order
pub const REQUESTED_DATA_TYPES: [&str; 3] =
    [DATA_TYPE_FOUNDATION, DATA_TYPE_SR_LEGACY, DATA_TYPE_BRANDED];
