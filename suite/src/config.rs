//! Environment-driven configuration for a suite run.

use std::ops::RangeInclusive;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

/// Public QA deployment of the classified-ads service.
pub const DEFAULT_BASE_URL: &str = "https://qa-internship.avito.com";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} has an invalid value: {value:?}")]
    Invalid { var: &'static str, value: String },

    #[error("seller id range {min}..={max} is empty")]
    EmptySellerRange { min: i64, max: i64 },
}

#[derive(Debug, Clone)]
pub struct SuiteConfig {
    pub base_url: String,
    pub timeout: Duration,
    /// Upper bound on seller-id lookups before the allocator gives up.
    pub seller_attempts: u32,
    pub seller_ids: RangeInclusive<i64>,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            seller_attempts: 100,
            seller_ids: 111_111..=999_999,
        }
    }
}

impl SuiteConfig {
    /// Read `ADS_BASE_URL`, `ADS_TIMEOUT_SECS`, `ADS_SELLER_ATTEMPTS`,
    /// `ADS_SELLER_ID_MIN` and `ADS_SELLER_ID_MAX`, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let base_url = lookup("ADS_BASE_URL").unwrap_or(defaults.base_url);
        let timeout_secs = parse_var(&lookup, "ADS_TIMEOUT_SECS", defaults.timeout.as_secs())?;
        let seller_attempts = parse_var(&lookup, "ADS_SELLER_ATTEMPTS", defaults.seller_attempts)?;
        let min = parse_var(&lookup, "ADS_SELLER_ID_MIN", *defaults.seller_ids.start())?;
        let max = parse_var(&lookup, "ADS_SELLER_ID_MAX", *defaults.seller_ids.end())?;

        if min > max {
            return Err(ConfigError::EmptySellerRange { min, max });
        }
        if timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                var: "ADS_TIMEOUT_SECS",
                value: "0".to_string(),
            });
        }
        if seller_attempts == 0 {
            return Err(ConfigError::Invalid {
                var: "ADS_SELLER_ATTEMPTS",
                value: "0".to_string(),
            });
        }

        Ok(Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
            seller_attempts,
            seller_ids: min..=max,
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(var) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value }),
    }
}
