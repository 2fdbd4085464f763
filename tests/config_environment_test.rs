// ABOUTME: Tests for loading lookup configuration from environment variables
// ABOUTME: Runs serially because the tests mutate process-wide environment state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Lookup Contributors
#![allow(clippy::unwrap_used, clippy::expect_used, missing_docs)]

use std::env;
use std::fs;
use std::time::Duration;

use calorie_lookup::config::{load_env_files, ConfigError, LookupConfig};
use calorie_lookup::errors::{AppError, ErrorCode};
use calorie_lookup::retry::RetryPolicy;
use serial_test::serial;
use tempfile::TempDir;

const VARS: [&str; 9] = [
    "ENVIRONMENT",
    "USDA_API_KEY",
    "USDA_BASE_URL",
    "CACHE_TTL",
    "USDA_TIMEOUT_SECS",
    "USDA_CONNECT_TIMEOUT_SECS",
    "USDA_PAGE_SIZE",
    "USDA_MAX_ATTEMPTS",
    "USDA_RETRY_BACKOFF_MS",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_with_only_api_key() {
    clear_env();
    env::set_var("USDA_API_KEY", "abc123");

    let config = LookupConfig::from_env().unwrap();

    assert_eq!(config.api_key, "abc123");
    assert_eq!(config.base_url, "https://api.nal.usda.gov/fdc/v1");
    assert_eq!(config.cache_ttl(), Duration::from_secs(3600));
    assert_eq!(config.request_timeout(), Duration::from_secs(10));
    assert_eq!(config.connect_timeout(), Duration::from_secs(5));
    assert_eq!(config.page_size, 3);
    assert_eq!(config.retry_policy(), RetryPolicy::default());
    clear_env();
}

#[test]
#[serial]
fn test_missing_api_key_is_rejected() {
    clear_env();
    let err = LookupConfig::from_env().unwrap_err();
    assert!(matches!(err, ConfigError::MissingField("USDA_API_KEY")));

    env::set_var("USDA_API_KEY", "   ");
    assert!(matches!(
        LookupConfig::from_env(),
        Err(ConfigError::MissingField(_))
    ));

    let app_error = AppError::from(err);
    assert_eq!(app_error.code, ErrorCode::ConfigMissing);
    clear_env();
}

#[test]
#[serial]
fn test_overrides_are_applied() {
    clear_env();
    env::set_var("USDA_API_KEY", "abc123");
    env::set_var("USDA_BASE_URL", "http://localhost:9000/fdc/v1/");
    env::set_var("CACHE_TTL", "120");
    env::set_var("USDA_TIMEOUT_SECS", "20");
    env::set_var("USDA_CONNECT_TIMEOUT_SECS", "2");
    env::set_var("USDA_PAGE_SIZE", "10");
    env::set_var("USDA_MAX_ATTEMPTS", "3");
    env::set_var("USDA_RETRY_BACKOFF_MS", "250");

    let config = LookupConfig::from_env().unwrap();

    assert_eq!(config.base_url, "http://localhost:9000/fdc/v1");
    assert_eq!(config.cache_ttl_secs, 120);
    assert_eq!(config.timeout_secs, 20);
    assert_eq!(config.connect_timeout_secs, 2);
    assert_eq!(config.page_size, 10);
    assert_eq!(
        config.retry_policy(),
        RetryPolicy::new(3, Duration::from_millis(250))
    );
    clear_env();
}

#[test]
#[serial]
fn test_unparseable_value_is_rejected() {
    clear_env();
    env::set_var("USDA_API_KEY", "abc123");
    env::set_var("CACHE_TTL", "one hour");

    let err = LookupConfig::from_env().unwrap_err();

    assert!(matches!(err, ConfigError::Parse(_)));
    assert_eq!(AppError::from(err).code, ErrorCode::ConfigInvalid);
    clear_env();
}

#[test]
#[serial]
fn test_out_of_range_ttl_is_rejected() {
    clear_env();
    env::set_var("USDA_API_KEY", "abc123");
    env::set_var("CACHE_TTL", "0");
    assert!(matches!(
        LookupConfig::from_env(),
        Err(ConfigError::ValueOutOfRange(_))
    ));

    env::set_var("CACHE_TTL", "604801");
    assert!(matches!(
        LookupConfig::from_env(),
        Err(ConfigError::ValueOutOfRange(_))
    ));
    clear_env();
}

#[test]
#[serial]
fn test_env_files_fill_unset_variables() {
    clear_env();
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(".env"),
        "USDA_API_KEY=from-dotenv\nCACHE_TTL=100\nUSDA_PAGE_SIZE=9\n",
    )
    .unwrap();
    fs::write(dir.path().join(".env.staging"), "CACHE_TTL=200\n").unwrap();
    env::set_var("ENVIRONMENT", "staging");
    env::set_var("USDA_PAGE_SIZE", "7");

    load_env_files(dir.path());
    let config = LookupConfig::from_env().unwrap();

    assert_eq!(config.api_key, "from-dotenv");
    // Profile file wins over .env, process environment wins over both
    assert_eq!(config.cache_ttl_secs, 200);
    assert_eq!(config.page_size, 7);
    clear_env();
}

#[test]
#[serial]
fn test_missing_env_files_are_not_an_error() {
    clear_env();
    let dir = TempDir::new().unwrap();

    load_env_files(dir.path());

    assert!(env::var("USDA_API_KEY").is_err());
    assert!(matches!(
        LookupConfig::from_env(),
        Err(ConfigError::MissingField("USDA_API_KEY"))
    ));
}
