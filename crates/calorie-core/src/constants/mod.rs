// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for USDA access, caching, and environment configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Lookup Contributors

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Cache-related constants (TTL bounds and defaults)
pub mod cache;
/// USDA `FoodData` Central constants (endpoints, nutrient ids, data types)
pub mod usda;

/// Environment variable names read by the configuration layer
pub mod env_config {
    /// USDA API key (required)
    pub const USDA_API_KEY: &str = "USDA_API_KEY";
    /// USDA base URL override
    pub const USDA_BASE_URL: &str = "USDA_BASE_URL";
    /// Cache TTL in seconds
    pub const CACHE_TTL: &str = "CACHE_TTL";
    /// Upstream request timeout in seconds
    pub const USDA_TIMEOUT_SECS: &str = "USDA_TIMEOUT_SECS";
    /// Upstream connect timeout in seconds
    pub const USDA_CONNECT_TIMEOUT_SECS: &str = "USDA_CONNECT_TIMEOUT_SECS";
    /// Number of candidates requested per search
    pub const USDA_PAGE_SIZE: &str = "USDA_PAGE_SIZE";
    /// Total upstream attempts per lookup
    pub const USDA_MAX_ATTEMPTS: &str = "USDA_MAX_ATTEMPTS";
    /// Fixed backoff between attempts in milliseconds
    pub const USDA_RETRY_BACKOFF_MS: &str = "USDA_RETRY_BACKOFF_MS";
    /// Deployment profile; selects the `.env.{profile}` file
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Profile assumed when `ENVIRONMENT` is unset
    pub const DEFAULT_ENVIRONMENT: &str = "development";
}

/// Service names used in structured logging
pub mod service_names {
    /// Default service name for log records
    pub const CALORIE_LOOKUP: &str = "calorie-lookup";
}

/// Request validation limits
pub mod limits {
    /// Maximum dish name length accepted by the estimate facade
    pub const MAX_DISH_NAME_CHARS: usize = 100;
    /// Upper bound on the USDA search page size
    pub const MAX_PAGE_SIZE: u32 = 200;
    /// Upper bound on upstream attempts per lookup
    pub const MAX_ATTEMPTS: u32 = 5;
    /// Upper bound on request and connect timeouts (seconds)
    pub const MAX_TIMEOUT_SECS: u64 = 60;
}
