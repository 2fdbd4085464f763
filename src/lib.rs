// ABOUTME: Main library entry point for the calorie lookup engine
// ABOUTME: Cache-first USDA FoodData Central lookup with best-match selection and serving math
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Lookup Contributors

// Crate-level attributes:
// - deny(unsafe_code): Zero-tolerance unsafe policy
#![deny(unsafe_code)]

//! # Calorie Lookup
//!
//! Resolves a free-text dish name to a normalized calorie record using the
//! USDA `FoodData` Central search API, and converts that record into
//! per-serving and total calorie figures.
//!
//! ## Architecture
//!
//! - **Cache**: TTL store keyed by normalized query text, expired lazily on read
//! - **External**: upstream search source trait and its USDA HTTP implementation
//! - **Retry**: bounded fixed-backoff retry for connect/timeout failures
//! - **Selection**: ranks candidates and picks the first with usable energy data
//! - **Servings**: per-serving and total calorie conversion
//! - **Lookup**: cache-first orchestration of the above
//! - **Service**: validated caller-facing facade
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use calorie_lookup::config::LookupConfig;
//! use calorie_lookup::errors::AppResult;
//! use calorie_lookup::service::CalorieService;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = LookupConfig::from_env()?;
//!     let service = CalorieService::from_config(&config)?;
//!
//!     match service.estimate("chicken breast", 2).await {
//!         Ok(estimate) => println!("{} kcal total", estimate.total_calories),
//!         Err(e) => eprintln!("lookup failed: {e}"),
//!     }
//!     Ok(())
//! }
//! ```

/// TTL cache store for normalized food records
pub mod cache;

/// Environment configuration
pub mod config;

/// Lookup error taxonomy and conversions
pub mod errors;

/// Upstream food search sources
pub mod external;

/// Structured logging setup
pub mod logging;

/// Cache-first food lookup client
pub mod lookup;

/// Bounded retry for transient upstream failures
pub mod retry;

/// Best-match candidate selection
pub mod selection;

/// Calorie estimate facade
pub mod service;

/// Serving conversion
pub mod servings;

pub use calorie_core::models::{CalorieEstimate, DataType, FoodRecord};
pub use errors::LookupError;
pub use lookup::FoodLookupClient;
pub use service::CalorieService;
