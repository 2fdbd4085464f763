// ABOUTME: Environment configuration for USDA access, cache TTL, timeouts, and retries
// ABOUTME: Parses environment variables with defaults and validates value ranges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Lookup Contributors

//! Environment-based configuration for the lookup engine

use std::env::{self, VarError};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use calorie_core::constants::cache::{
    DEFAULT_CACHE_TTL_SECS, MAX_CACHE_TTL_SECS, MIN_CACHE_TTL_SECS,
};
use calorie_core::constants::env_config;
use calorie_core::constants::limits::{MAX_ATTEMPTS, MAX_PAGE_SIZE, MAX_TIMEOUT_SECS};
use calorie_core::constants::usda::{
    DEFAULT_BASE_URL, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_MAX_ATTEMPTS, DEFAULT_PAGE_SIZE,
    DEFAULT_RETRY_BACKOFF_MS, DEFAULT_TIMEOUT_SECS,
};
use calorie_core::errors::{AppError, ErrorCode};
use thiserror::Error;
use tracing::{debug, info, warn};
use url::Url;

use crate::retry::RetryPolicy;

/// Configuration loading and validation errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required variable is unset or blank
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// A variable could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// A value parsed but is outside its allowed range
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        let code = match error {
            ConfigError::MissingField(_) => ErrorCode::ConfigMissing,
            ConfigError::Parse(_) | ConfigError::ValueOutOfRange(_) => ErrorCode::ConfigInvalid,
        };
        Self::new(code, error.to_string())
    }
}

/// Settings consumed by the lookup engine
#[derive(Clone)]
pub struct LookupConfig {
    /// USDA API key (free from <https://fdc.nal.usda.gov/api-key-signup.html>)
    pub api_key: String,
    /// Base URL for the USDA API
    pub base_url: String,
    /// Cache TTL in seconds
    pub cache_ttl_secs: u64,
    /// Whole-request timeout in seconds
    pub timeout_secs: u64,
    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,
    /// Candidates requested per search
    pub page_size: u32,
    /// Total upstream attempts per lookup
    pub max_attempts: u32,
    /// Fixed wait between attempts, in milliseconds
    pub retry_backoff_ms: u64,
}

impl fmt::Debug for LookupConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LookupConfig")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("cache_ttl_secs", &self.cache_ttl_secs)
            .field("timeout_secs", &self.timeout_secs)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .field("page_size", &self.page_size)
            .field("max_attempts", &self.max_attempts)
            .field("retry_backoff_ms", &self.retry_backoff_ms)
            .finish()
    }
}

impl LookupConfig {
    /// Default settings with the given API key
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            cache_ttl_secs: DEFAULT_CACHE_TTL_SECS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            page_size: DEFAULT_PAGE_SIZE,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            retry_backoff_ms: DEFAULT_RETRY_BACKOFF_MS,
        }
    }

    /// Load configuration from environment variables
    ///
    /// Dotenv files in the working directory are loaded first, see
    /// [`load_env_files`].
    ///
    /// # Errors
    ///
    /// Returns an error if `USDA_API_KEY` is missing, a variable cannot be
    /// parsed, or a value is out of range
    pub fn from_env() -> Result<Self, ConfigError> {
        load_env_files(Path::new("."));

        let api_key = env::var(env_config::USDA_API_KEY)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingField(env_config::USDA_API_KEY))?;

        let base_url = env::var(env_config::USDA_BASE_URL)
            .ok()
            .filter(|url| !url.trim().is_empty())
            .map_or_else(
                || DEFAULT_BASE_URL.to_owned(),
                |url| url.trim().trim_end_matches('/').to_owned(),
            );

        let config = Self {
            api_key,
            base_url,
            cache_ttl_secs: parse_env(env_config::CACHE_TTL, DEFAULT_CACHE_TTL_SECS)?,
            timeout_secs: parse_env(env_config::USDA_TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS)?,
            connect_timeout_secs: parse_env(
                env_config::USDA_CONNECT_TIMEOUT_SECS,
                DEFAULT_CONNECT_TIMEOUT_SECS,
            )?,
            page_size: parse_env(env_config::USDA_PAGE_SIZE, DEFAULT_PAGE_SIZE)?,
            max_attempts: parse_env(env_config::USDA_MAX_ATTEMPTS, DEFAULT_MAX_ATTEMPTS)?,
            retry_backoff_ms: parse_env(
                env_config::USDA_RETRY_BACKOFF_MS,
                DEFAULT_RETRY_BACKOFF_MS,
            )?,
        };
        config.validate()?;

        info!(
            base_url = %config.base_url,
            cache_ttl_secs = config.cache_ttl_secs,
            page_size = config.page_size,
            max_attempts = config.max_attempts,
            "Loaded lookup configuration"
        );
        Ok(config)
    }

    /// Validate value ranges
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid value
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_key.trim().is_empty() {
            return Err(ConfigError::MissingField(env_config::USDA_API_KEY));
        }

        let url = Url::parse(&self.base_url)
            .map_err(|e| ConfigError::Parse(format!("{}: {e}", env_config::USDA_BASE_URL)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::ValueOutOfRange(
                "USDA base URL must use http or https",
            ));
        }

        if !(MIN_CACHE_TTL_SECS..=MAX_CACHE_TTL_SECS).contains(&self.cache_ttl_secs) {
            return Err(ConfigError::ValueOutOfRange(
                "Cache TTL must be between 1 second and 7 days",
            ));
        }
        if self.timeout_secs == 0 || self.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::ValueOutOfRange(
                "USDA API timeout must be between 1 and 60 seconds",
            ));
        }
        if self.connect_timeout_secs == 0 || self.connect_timeout_secs > self.timeout_secs {
            return Err(ConfigError::ValueOutOfRange(
                "USDA connect timeout must be at least 1 second and not exceed the request timeout",
            ));
        }
        if self.page_size == 0 || self.page_size > MAX_PAGE_SIZE {
            return Err(ConfigError::ValueOutOfRange(
                "Page size must be between 1 and 200",
            ));
        }
        if self.max_attempts == 0 || self.max_attempts > MAX_ATTEMPTS {
            return Err(ConfigError::ValueOutOfRange(
                "USDA attempts must be between 1 and 5",
            ));
        }
        Ok(())
    }

    /// Cache TTL
    #[must_use]
    pub const fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    /// Whole-request timeout
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Connection timeout
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// Retry policy for upstream searches
    #[must_use]
    pub const fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(
            self.max_attempts,
            Duration::from_millis(self.retry_backoff_ms),
        )
    }
}

/// Load `.env.{ENVIRONMENT}` and then `.env` from `dir`
///
/// Variables that are already set are never overridden, so the process
/// environment wins over the profile file, which wins over `.env`.
pub fn load_env_files(dir: &Path) {
    let profile = env::var(env_config::ENVIRONMENT)
        .ok()
        .filter(|p| !p.trim().is_empty())
        .unwrap_or_else(|| env_config::DEFAULT_ENVIRONMENT.to_owned());

    let profile_path = dir.join(format!(".env.{}", profile.trim()));
    match dotenvy::from_path(&profile_path) {
        Ok(()) => debug!(path = %profile_path.display(), "Loaded profile env file"),
        Err(e) if e.not_found() => {}
        Err(e) => warn!(path = %profile_path.display(), "Failed to load profile env file: {e}"),
    }

    if let Err(e) = dotenvy::from_path(dir.join(".env")) {
        warn!("No .env file found or failed to load: {e}");
    }
}

/// Parse an optional environment variable, falling back to `default` when unset
fn parse_env<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Parse(format!("{name}={raw} is not a valid value"))),
        Err(VarError::NotPresent) => Ok(default),
        Err(VarError::NotUnicode(_)) => Err(ConfigError::Parse(format!(
            "{name} is not valid unicode"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = LookupConfig::new("test-key");
        assert!(config.validate().is_ok());
        assert_eq!(config.cache_ttl(), Duration::from_secs(3600));
        assert_eq!(config.retry_policy(), RetryPolicy::default());
        assert_eq!(config.page_size, 3);
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let rendered = format!("{:?}", LookupConfig::new("super-secret"));
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("REDACTED"));
    }

    #[test]
    fn test_validation_rejects_out_of_range_values() {
        let base = LookupConfig::new("k");
        let cases = [
            LookupConfig {
                cache_ttl_secs: 0,
                ..base.clone()
            },
            LookupConfig {
                timeout_secs: 61,
                ..base.clone()
            },
            LookupConfig {
                connect_timeout_secs: 20,
                ..base.clone()
            },
            LookupConfig {
                page_size: 0,
                ..base.clone()
            },
            LookupConfig {
                max_attempts: 9,
                ..base.clone()
            },
            LookupConfig {
                base_url: "ftp://example.org".to_owned(),
                ..base.clone()
            },
        ];
        for config in cases {
            assert!(
                matches!(config.validate(), Err(ConfigError::ValueOutOfRange(_))),
                "{config:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_validation_rejects_blank_key_and_bad_url() {
        assert!(matches!(
            LookupConfig::new("  ").validate(),
            Err(ConfigError::MissingField(_))
        ));
        let bad_url = LookupConfig {
            base_url: "not a url".to_owned(),
            ..LookupConfig::new("k")
        };
        assert!(matches!(bad_url.validate(), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_config_error_maps_to_app_error() {
        let missing = AppError::from(ConfigError::MissingField("USDA_API_KEY"));
        assert_eq!(missing.code, ErrorCode::ConfigMissing);
        let invalid = AppError::from(ConfigError::ValueOutOfRange("x"));
        assert_eq!(invalid.code, ErrorCode::ConfigInvalid);
    }
}
