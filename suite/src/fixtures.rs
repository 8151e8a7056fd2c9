//! Items that scenarios need to exist before they run.

use ads_core::{CreateItem, Statistics};
use tracing::info;

use crate::error::SuiteError;
use crate::harness::{expect_status, Harness};

pub const FIXTURE_STATISTICS: Statistics = Statistics {
    likes: 1,
    view_count: 1,
    contacts: 1,
};

/// Create an item for `seller_id` and return the ID the service assigned.
///
/// The create response does not carry a structured ID, so the item is found
/// again by listing the seller's items and matching on `(name, price)`. Two
/// items with the same name and price under one seller are indistinguishable;
/// the first match wins.
pub fn create_item_and_get_id(
    harness: &Harness,
    seller_id: i64,
    name: &str,
    price: i64,
) -> Result<String, SuiteError> {
    let client = harness.client();
    let input = CreateItem {
        seller_id,
        name: name.to_string(),
        price,
        statistics: FIXTURE_STATISTICS,
    };
    let response = harness.send(client.build_create_item(&input)?)?;
    expect_status(&response, &[200])?;

    let response = harness.send(client.build_seller_items(seller_id))?;
    let items = client.parse_seller_items(response)?;
    let id = items
        .into_iter()
        .find(|item| item.name == name && item.price == price)
        .map(|item| item.id)
        .ok_or_else(|| SuiteError::ItemNotFound {
            name: name.to_string(),
            price,
        })?;

    info!(seller_id, %id, "fixture item created");
    Ok(id)
}
