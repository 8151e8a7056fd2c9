//! Seller ID allocation.
//!
//! Sellers have no registration endpoint; a seller exists once it has an
//! item. A fresh identity is therefore a random ID whose listing is empty.
//! Two concurrent runs can still pick the same ID between the lookup and the
//! first create.

use ads_core::HttpResponse;
use rand::Rng;
use tracing::{debug, info};

use crate::config::ConfigError;
use crate::error::SuiteError;
use crate::harness::Harness;

/// Pick a seller ID with no items, using the thread-local RNG.
pub fn allocate_seller_id(harness: &Harness) -> Result<i64, SuiteError> {
    allocate_seller_id_with(harness, &mut rand::rng())
}

/// Try random IDs from the configured range, one `GET` per attempt, until
/// one has no listing or `seller_attempts` lookups have been spent.
pub fn allocate_seller_id_with<R: Rng>(harness: &Harness, rng: &mut R) -> Result<i64, SuiteError> {
    let range = harness.config().seller_ids.clone();
    if range.is_empty() {
        return Err(ConfigError::EmptySellerRange {
            min: *range.start(),
            max: *range.end(),
        }
        .into());
    }

    let attempts = harness.config().seller_attempts;
    for attempt in 1..=attempts {
        let seller_id = rng.random_range(range.clone());
        let response = harness.send(harness.client().build_seller_items(seller_id))?;
        if is_free(&response) {
            info!(seller_id, attempt, "allocated seller id");
            return Ok(seller_id);
        }
        debug!(seller_id, attempt, status = response.status, "seller id taken");
    }

    Err(SuiteError::SellerIdsExhausted { attempts })
}

/// 404, or 200 with an empty array, means nobody owns the ID.
fn is_free(response: &HttpResponse) -> bool {
    match response.status {
        404 => true,
        200 => response
            .json()
            .ok()
            .and_then(|body| body.as_array().map(Vec::is_empty))
            .unwrap_or(false),
        _ => false,
    }
}
