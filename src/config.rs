//! # Module: Console Configuration
//!
//! ## Responsibility
//! Resolve the console configuration from CLI arguments, then environment
//! variables, then defaults, and validate it before anything else starts.
//! Misconfiguration surfaces at startup, not at the first request.
//!
//! ## Guarantees
//! - A successfully resolved config is always validated
//! - Resolution is deterministic: same args + env always yield the same config
//! - The API base never carries a trailing slash (paths supply their own)
//!
//! ## NOT Responsible For
//! - Building the HTTP client (that belongs to `api::transport`)
//! - Key bindings or UI timing other than the toast lifetime

use std::time::Duration;

use thiserror::Error;

/// Default API root probed when neither `--api-url` nor `GROWTH_API_URL` is set.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Default per-request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Default toast lifetime in seconds.
pub const DEFAULT_TOAST_TTL_SECS: u64 = 5;

/// Configuration errors raised during resolution or validation.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The API base URL is empty or lacks an http/https scheme.
    #[error("invalid API base URL {url:?}: {reason}")]
    InvalidBaseUrl {
        /// The offending value.
        url: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// A duration-valued setting could not be parsed or was zero.
    #[error("invalid value {value:?} for {name}: {reason}")]
    InvalidDuration {
        /// Environment variable or flag name.
        name: &'static str,
        /// The offending value.
        value: String,
        /// Why it was rejected.
        reason: &'static str,
    },
}

/// Resolved console configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// API root every relative request path is appended to.
    pub api_base: String,
    /// Per-request timeout applied by the HTTP client.
    pub request_timeout: Duration,
    /// How long a toast stays visible before self-removing.
    pub toast_ttl: Duration,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            toast_ttl: Duration::from_secs(DEFAULT_TOAST_TTL_SECS),
        }
    }
}

impl ConsoleConfig {
    /// Resolves configuration from CLI arguments and the process environment.
    ///
    /// Recognised arguments: `--api-url <url>`. Unknown arguments are
    /// ignored. Environment variables: `GROWTH_API_URL`,
    /// `GROWTH_REQUEST_TIMEOUT_SECS`.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] if any resolved value fails validation.
    pub fn resolve(args: &[String]) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("GROWTH_API_URL") {
            config.api_base = url;
        }
        if let Ok(raw) = std::env::var("GROWTH_REQUEST_TIMEOUT_SECS") {
            config.request_timeout = parse_secs("GROWTH_REQUEST_TIMEOUT_SECS", &raw)?;
        }

        let mut i = 0;
        while i < args.len() {
            if args[i] == "--api-url" {
                i += 1;
                if i < args.len() {
                    config.api_base = args[i].clone();
                }
            }
            i += 1;
        }

        config.normalize();
        config.validate()?;
        Ok(config)
    }

    /// Strips the trailing slash so `base + "/path"` never doubles up.
    fn normalize(&mut self) {
        while self.api_base.ends_with('/') {
            self.api_base.pop();
        }
    }

    /// Checks semantic constraints on the resolved values.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] naming the offending setting.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_base.is_empty() {
            return Err(ConfigError::InvalidBaseUrl {
                url: self.api_base.clone(),
                reason: "must not be empty",
            });
        }
        if !self.api_base.starts_with("http://") && !self.api_base.starts_with("https://") {
            return Err(ConfigError::InvalidBaseUrl {
                url: self.api_base.clone(),
                reason: "must start with http:// or https://",
            });
        }
        if self.request_timeout.is_zero() {
            return Err(ConfigError::InvalidDuration {
                name: "request timeout",
                value: "0".to_string(),
                reason: "must be greater than zero",
            });
        }
        Ok(())
    }
}

/// Parses a positive whole number of seconds.
fn parse_secs(name: &'static str, raw: &str) -> Result<Duration, ConfigError> {
    let secs: u64 = raw.trim().parse().map_err(|_| ConfigError::InvalidDuration {
        name,
        value: raw.to_string(),
        reason: "must be a whole number of seconds",
    })?;
    if secs == 0 {
        return Err(ConfigError::InvalidDuration {
            name,
            value: raw.to_string(),
            reason: "must be greater than zero",
        });
    }
    Ok(Duration::from_secs(secs))
}
