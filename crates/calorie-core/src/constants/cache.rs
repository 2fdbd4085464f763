// ABOUTME: Cache-related constants for TTL defaults and bounds
// ABOUTME: Used by the in-memory food record cache and its configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Lookup Contributors

/// Default food record cache TTL (1 hour)
pub const DEFAULT_CACHE_TTL_SECS: u64 = 3_600;

/// Minimum accepted cache TTL
pub const MIN_CACHE_TTL_SECS: u64 = 1;

/// Maximum accepted cache TTL (7 days)
pub const MAX_CACHE_TTL_SECS: u64 = 604_800;
