//! Harness failures.
//!
//! Expected API errors (400/404) are not errors here: scenarios assert on
//! them. A `SuiteError` means the run itself went wrong, either because the
//! service broke its contract or because the harness could not do its job.

use ads_core::ApiError;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum SuiteError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("{method} {url} failed: {message}")]
    Transport {
        method: &'static str,
        url: String,
        message: String,
    },

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("response body is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("expected status {expected:?}, got {actual}: {body}")]
    UnexpectedStatus {
        expected: Vec<u16>,
        actual: u16,
        body: String,
    },

    #[error("assertion failed: {0}")]
    Assertion(String),

    #[error("no free seller id found in {attempts} attempts")]
    SellerIdsExhausted { attempts: u32 },

    #[error("created item {name:?} with price {price} not found in seller listing")]
    ItemNotFound { name: String, price: i64 },

    #[error("unknown scenario {0}")]
    UnknownScenario(String),
}
