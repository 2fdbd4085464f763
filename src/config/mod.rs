// ABOUTME: Configuration management module for the calorie lookup engine
// ABOUTME: Exposes environment-loaded lookup settings and their validation errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Lookup Contributors
//! Configuration module
//!
//! Configuration is owned by the caller and passed explicitly to the
//! components that need it; nothing here is a process-wide singleton.
//!
//! - **Environment**: USDA access, cache TTL and retry settings from environment variables

/// Lookup configuration loaded from environment variables
pub mod environment;

pub use environment::{load_env_files, ConfigError, LookupConfig};
