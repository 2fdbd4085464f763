// ABOUTME: Core types and constants for the calorie lookup engine
// ABOUTME: Foundation crate with error handling, food record models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Lookup Contributors

#![deny(unsafe_code)]

//! # Calorie Core
//!
//! Foundation crate providing shared types and constants for the calorie lookup
//! engine. This crate is designed to change infrequently, enabling incremental
//! compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `ErrorResponse`
//! - **constants**: USDA defaults, nutrient identifiers, cache and environment constants
//! - **models**: Normalized food records and calorie estimates

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`FoodRecord`, `DataType`, `CalorieEstimate`)
pub mod models;
