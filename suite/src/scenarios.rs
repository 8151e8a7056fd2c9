//! The conformance scenarios, TK-01 through TK-22.
//!
//! Each scenario is a plain function over a `Harness` that returns `Ok(())`
//! when the service honoured the contract. Scenarios share no state except
//! what lives on the service itself.

use ads_core::{error_message, CreateItem};
use rand::Rng;
use serde_json::{json, Value};

use crate::ensure;
use crate::error::SuiteError;
use crate::fixtures::{create_item_and_get_id, FIXTURE_STATISTICS};
use crate::harness::{expect_status, Harness};
use crate::sellers::allocate_seller_id;

/// Well-formed UUIDs that no item is expected to have, one per endpoint so a
/// stray item under one of them breaks a single scenario only.
pub const UNKNOWN_ITEM_ID: &str = "cbe09960-45a5-49d9-a6ae-dc0734cb7792";
pub const UNKNOWN_STATISTIC_ID: &str = "cbe09960-45a5-49d9-a6ae-dc0734cb7793";
pub const UNKNOWN_DELETE_ID: &str = "cbe09960-45a5-49d9-a6ae-dc0734cb7794";
pub const MALFORMED_ITEM_ID: &str = "abcde";
pub const MALFORMED_SELLER_ID: &str = "abc";
/// The service says "required" in Russian.
pub const REQUIRED_MARKER: &str = "обязательно";

pub type ScenarioFn = fn(&Harness) -> Result<(), SuiteError>;

#[derive(Debug)]
pub struct Scenario {
    pub id: &'static str,
    pub title: &'static str,
    pub run: ScenarioFn,
}

pub const SCENARIOS: &[Scenario] = &[
    Scenario { id: "TK-01", title: "create item succeeds", run: create_item_success },
    Scenario { id: "TK-02", title: "create without sellerId is rejected", run: create_without_seller },
    Scenario { id: "TK-03", title: "create with string sellerId is rejected", run: create_invalid_seller_type },
    Scenario { id: "TK-04", title: "create with negative price is rejected", run: create_negative_price },
    Scenario { id: "TK-05", title: "create with empty body is rejected", run: create_empty_body },
    Scenario { id: "TK-06", title: "create with unknown fields is rejected", run: create_with_extra_fields },
    Scenario { id: "TK-07", title: "create with integer name is rejected", run: create_invalid_name_int },
    Scenario { id: "TK-08", title: "create with boolean name is rejected", run: create_invalid_name_boolean },
    Scenario { id: "TK-09", title: "create with string price is rejected", run: create_invalid_price_type },
    Scenario { id: "TK-10", title: "get existing item", run: get_existing_item },
    Scenario { id: "TK-11", title: "get unknown item is 404", run: get_nonexistent_item },
    Scenario { id: "TK-12", title: "get malformed item id is 400", run: get_invalid_id },
    Scenario { id: "TK-13", title: "list items of a seller", run: get_items_by_seller },
    Scenario { id: "TK-14", title: "list items of an unused seller", run: get_items_by_seller_empty },
    Scenario { id: "TK-15", title: "list items of a malformed seller is 400", run: get_items_invalid_seller },
    Scenario { id: "TK-16", title: "get statistics of existing item", run: get_stats_existing },
    Scenario { id: "TK-17", title: "get statistics of unknown item is 404", run: get_stats_nonexistent },
    Scenario { id: "TK-18", title: "get statistics of malformed id is 400", run: get_stats_invalid_id },
    Scenario { id: "TK-19", title: "delete existing item", run: delete_existing_item },
    Scenario { id: "TK-20", title: "deleted item is gone", run: get_deleted_item },
    Scenario { id: "TK-21", title: "delete unknown item is 404", run: delete_nonexistent_item },
    Scenario { id: "TK-22", title: "delete malformed id is 400", run: delete_invalid_id },
];

/// Look a scenario up by id, case-insensitively (`tk-10` finds `TK-10`).
pub fn find(id: &str) -> Option<&'static Scenario> {
    SCENARIOS.iter().find(|s| s.id.eq_ignore_ascii_case(id))
}

/// A valid create payload as untyped JSON, for scenarios that break it.
fn payload(seller_id: i64) -> Value {
    json!({
        "sellerId": seller_id,
        "name": "Test item",
        "price": 100,
        "statistics": {
            "likes": FIXTURE_STATISTICS.likes,
            "viewCount": FIXTURE_STATISTICS.view_count,
            "contacts": FIXTURE_STATISTICS.contacts,
        },
    })
}

fn expect_rejected(harness: &Harness, body: &Value) -> Result<(), SuiteError> {
    let response = harness.send(harness.client().build_create_item_raw(body))?;
    expect_status(&response, &[400])
}

// ---------------------------------------------------------------------------
// Creation
// ---------------------------------------------------------------------------

pub fn create_item_success(harness: &Harness) -> Result<(), SuiteError> {
    let seller_id = allocate_seller_id(harness)?;
    let input = CreateItem {
        seller_id,
        name: "Новогодний мандарин".to_string(),
        price: 99,
        statistics: FIXTURE_STATISTICS,
    };

    let response = harness.send(harness.client().build_create_item(&input)?)?;
    expect_status(&response, &[200])?;
    let body = response.json()?;
    ensure!(body.get("status").is_some(), "response has no `status` field: {body}");
    Ok(())
}

pub fn create_without_seller(harness: &Harness) -> Result<(), SuiteError> {
    let mut body = payload(0);
    if let Some(fields) = body.as_object_mut() {
        fields.remove("sellerId");
    }

    let response = harness.send(harness.client().build_create_item_raw(&body))?;
    expect_status(&response, &[400])?;
    let message = error_message(&response.body).unwrap_or_default().to_lowercase();
    ensure!(
        message.contains(REQUIRED_MARKER),
        "error message {message:?} does not say the field is required"
    );
    Ok(())
}

pub fn create_invalid_seller_type(harness: &Harness) -> Result<(), SuiteError> {
    let mut body = payload(0);
    body["sellerId"] = json!("abc");
    expect_rejected(harness, &body)
}

pub fn create_negative_price(harness: &Harness) -> Result<(), SuiteError> {
    let mut body = payload(allocate_seller_id(harness)?);
    body["price"] = json!(-100);
    expect_rejected(harness, &body)
}

pub fn create_empty_body(harness: &Harness) -> Result<(), SuiteError> {
    expect_rejected(harness, &json!({}))
}

pub fn create_with_extra_fields(harness: &Harness) -> Result<(), SuiteError> {
    let mut body = payload(allocate_seller_id(harness)?);
    body["color"] = json!("red");
    body["extra_field"] = json!(123);
    expect_rejected(harness, &body)
}

pub fn create_invalid_name_int(harness: &Harness) -> Result<(), SuiteError> {
    let mut body = payload(allocate_seller_id(harness)?);
    body["name"] = json!(123);
    expect_rejected(harness, &body)
}

pub fn create_invalid_name_boolean(harness: &Harness) -> Result<(), SuiteError> {
    let mut body = payload(allocate_seller_id(harness)?);
    body["name"] = json!(true);
    expect_rejected(harness, &body)
}

pub fn create_invalid_price_type(harness: &Harness) -> Result<(), SuiteError> {
    let mut body = payload(allocate_seller_id(harness)?);
    body["price"] = json!("100");
    expect_rejected(harness, &body)
}

// ---------------------------------------------------------------------------
// Get by id
// ---------------------------------------------------------------------------

pub fn get_existing_item(harness: &Harness) -> Result<(), SuiteError> {
    let seller_id = allocate_seller_id(harness)?;
    let item_id = create_item_and_get_id(harness, seller_id, "Тестовый товар для получения", 150)?;

    let response = harness.send(harness.client().build_get_item(&item_id))?;
    expect_status(&response, &[200])?;
    let items = harness.client().parse_get_item(response)?;
    let item = items
        .first()
        .ok_or_else(|| SuiteError::Assertion("item response is an empty array".to_string()))?;
    ensure!(item.id == item_id, "expected id {item_id}, got {}", item.id);
    ensure!(
        item.seller_id == seller_id,
        "expected sellerId {seller_id}, got {}",
        item.seller_id
    );
    Ok(())
}

pub fn get_nonexistent_item(harness: &Harness) -> Result<(), SuiteError> {
    let response = harness.send(harness.client().build_get_item(UNKNOWN_ITEM_ID))?;
    expect_status(&response, &[404])
}

pub fn get_invalid_id(harness: &Harness) -> Result<(), SuiteError> {
    let response = harness.send(harness.client().build_get_item(MALFORMED_ITEM_ID))?;
    expect_status(&response, &[400])
}

// ---------------------------------------------------------------------------
// Seller listing
// ---------------------------------------------------------------------------

pub fn get_items_by_seller(harness: &Harness) -> Result<(), SuiteError> {
    let seller_id = allocate_seller_id(harness)?;
    create_item_and_get_id(harness, seller_id, "Товар продавца", 200)?;

    let response = harness.send(harness.client().build_seller_items(seller_id))?;
    expect_status(&response, &[200])?;
    let items = harness.client().parse_seller_items(response)?;
    ensure!(!items.is_empty(), "seller {seller_id} has no items after create");
    for item in &items {
        ensure!(
            item.seller_id == seller_id,
            "item {} belongs to seller {}, not {seller_id}",
            item.id,
            item.seller_id
        );
    }
    Ok(())
}

/// An unused seller may be reported either as 404 or as an empty listing.
pub fn get_items_by_seller_empty(harness: &Harness) -> Result<(), SuiteError> {
    let seller_id: i64 = rand::rng().random_range(900_000..=999_999);
    let response = harness.send(harness.client().build_seller_items(seller_id))?;
    if response.status == 404 {
        return Ok(());
    }
    expect_status(&response, &[200])?;
    let body = response.json()?;
    ensure!(body == json!([]), "expected an empty listing for seller {seller_id}, got {body}");
    Ok(())
}

pub fn get_items_invalid_seller(harness: &Harness) -> Result<(), SuiteError> {
    let response = harness.send(harness.client().build_seller_items(MALFORMED_SELLER_ID))?;
    expect_status(&response, &[400])
}

// ---------------------------------------------------------------------------
// Statistics
// ---------------------------------------------------------------------------

pub fn get_stats_existing(harness: &Harness) -> Result<(), SuiteError> {
    let seller_id = allocate_seller_id(harness)?;
    let item_id = create_item_and_get_id(harness, seller_id, "Товар со статистикой", 300)?;

    let response = harness.send(harness.client().build_get_statistic(&item_id))?;
    expect_status(&response, &[200])?;
    let body = response.json()?;
    let first = body
        .as_array()
        .and_then(|stats| stats.first())
        .ok_or_else(|| SuiteError::Assertion(format!("expected a non-empty array, got {body}")))?;
    for field in ["likes", "viewCount", "contacts"] {
        ensure!(first.get(field).is_some(), "statistics entry has no `{field}`: {first}");
    }
    Ok(())
}

pub fn get_stats_nonexistent(harness: &Harness) -> Result<(), SuiteError> {
    let response = harness.send(harness.client().build_get_statistic(UNKNOWN_STATISTIC_ID))?;
    expect_status(&response, &[404])
}

pub fn get_stats_invalid_id(harness: &Harness) -> Result<(), SuiteError> {
    let response = harness.send(harness.client().build_get_statistic(MALFORMED_ITEM_ID))?;
    expect_status(&response, &[400])
}

// ---------------------------------------------------------------------------
// Deletion
// ---------------------------------------------------------------------------

pub fn delete_existing_item(harness: &Harness) -> Result<(), SuiteError> {
    let seller_id = allocate_seller_id(harness)?;
    let item_id = create_item_and_get_id(harness, seller_id, "Товар для удаления", 400)?;

    let response = harness.send(harness.client().build_delete_item(&item_id))?;
    expect_status(&response, &[200, 204])
}

pub fn get_deleted_item(harness: &Harness) -> Result<(), SuiteError> {
    let seller_id = allocate_seller_id(harness)?;
    let item_id = create_item_and_get_id(harness, seller_id, "Товар для проверки удаления", 500)?;

    let response = harness.send(harness.client().build_delete_item(&item_id))?;
    expect_status(&response, &[200, 204])?;

    let response = harness.send(harness.client().build_get_item(&item_id))?;
    expect_status(&response, &[404])
}

pub fn delete_nonexistent_item(harness: &Harness) -> Result<(), SuiteError> {
    let response = harness.send(harness.client().build_delete_item(UNKNOWN_DELETE_ID))?;
    expect_status(&response, &[404])
}

pub fn delete_invalid_id(harness: &Harness) -> Result<(), SuiteError> {
    let response = harness.send(harness.client().build_delete_item(MALFORMED_ITEM_ID))?;
    expect_status(&response, &[400])
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn registry_has_twenty_two_unique_ids_in_order() {
        assert_eq!(SCENARIOS.len(), 22);
        let ids: HashSet<_> = SCENARIOS.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), SCENARIOS.len());
        for (n, scenario) in SCENARIOS.iter().enumerate() {
            assert_eq!(scenario.id, format!("TK-{:02}", n + 1));
        }
    }

    #[test]
    fn unknown_ids_differ_per_endpoint() {
        let ids: HashSet<_> = [UNKNOWN_ITEM_ID, UNKNOWN_STATISTIC_ID, UNKNOWN_DELETE_ID].into();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn find_is_case_insensitive() {
        assert_eq!(find("tk-10").map(|s| s.id), Some("TK-10"));
        assert!(find("TK-99").is_none());
    }

    #[test]
    fn payload_matches_the_create_schema() {
        let body = payload(234567);
        let input: CreateItem = serde_json::from_value(body).unwrap();
        assert_eq!(input.seller_id, 234567);
        assert_eq!(input.statistics, FIXTURE_STATISTICS);
    }
}
