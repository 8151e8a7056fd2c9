//! Black-box conformance suite for the classified-ads HTTP API.
//!
//! # Overview
//! Drives the service through `ads_core::AdsClient` over a ureq transport
//! and checks status codes and payload shapes for item creation, lookup,
//! seller listings, statistics and deletion.
//!
//! # Design
//! - `Harness` bundles client, transport and config for one target.
//! - Scenarios are plain `fn(&Harness) -> Result<(), SuiteError>` listed in
//!   `scenarios::SCENARIOS`; the `ads-suite` binary and the `cargo test`
//!   targets run the same functions.
//! - Fixtures (seller allocation, item creation) live beside the scenarios
//!   and fail with typed errors instead of panicking.

pub mod config;
pub mod error;
pub mod fixtures;
pub mod harness;
pub mod runner;
pub mod scenarios;
pub mod sellers;
pub mod transport;

pub use config::{ConfigError, SuiteConfig};
pub use error::SuiteError;
pub use harness::{expect_status, Harness};
pub use scenarios::{Scenario, SCENARIOS};

/// Return `SuiteError::Assertion` with a formatted message unless `cond`
/// holds.
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($arg:tt)+) => {
        if !$cond {
            return Err($crate::SuiteError::Assertion(format!($($arg)+)));
        }
    };
}
