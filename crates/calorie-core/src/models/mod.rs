// ABOUTME: Core data models for normalized food lookups
// ABOUTME: Re-exports food records, data types, and calorie estimates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Lookup Contributors

/// Normalized food records and USDA data type categories
pub mod food;

pub use food::{CalorieEstimate, DataType, FoodRecord};
