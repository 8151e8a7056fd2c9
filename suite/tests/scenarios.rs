//! Every scenario against a fresh in-process mock service.

mod common;

use ads_suite::{runner, scenarios};

fn run(id: &str) {
    let harness = common::mock_harness();
    let scenario = scenarios::find(id).unwrap();
    if let Err(e) = (scenario.run)(&harness) {
        panic!("{} ({}) failed: {e}", scenario.id, scenario.title);
    }
}

// --- creation ---

#[test]
fn tk01_create_item_success() {
    run("TK-01");
}

#[test]
fn tk02_create_without_seller() {
    run("TK-02");
}

#[test]
fn tk03_create_invalid_seller_type() {
    run("TK-03");
}

#[test]
fn tk04_create_negative_price() {
    run("TK-04");
}

#[test]
fn tk05_create_empty_body() {
    run("TK-05");
}

#[test]
fn tk06_create_with_extra_fields() {
    run("TK-06");
}

#[test]
fn tk07_create_invalid_name_int() {
    run("TK-07");
}

#[test]
fn tk08_create_invalid_name_boolean() {
    run("TK-08");
}

#[test]
fn tk09_create_invalid_price_type() {
    run("TK-09");
}

// --- get by id ---

#[test]
fn tk10_get_existing_item() {
    run("TK-10");
}

#[test]
fn tk11_get_nonexistent_item() {
    run("TK-11");
}

#[test]
fn tk12_get_invalid_id() {
    run("TK-12");
}

// --- seller listing ---

#[test]
fn tk13_get_items_by_seller() {
    run("TK-13");
}

#[test]
fn tk14_get_items_by_seller_empty() {
    run("TK-14");
}

#[test]
fn tk15_get_items_invalid_seller() {
    run("TK-15");
}

// --- statistics ---

#[test]
fn tk16_get_stats_existing() {
    run("TK-16");
}

#[test]
fn tk17_get_stats_nonexistent() {
    run("TK-17");
}

#[test]
fn tk18_get_stats_invalid_id() {
    run("TK-18");
}

// --- deletion ---

#[test]
fn tk19_delete_existing_item() {
    run("TK-19");
}

#[test]
fn tk20_get_deleted_item() {
    run("TK-20");
}

#[test]
fn tk21_delete_nonexistent_item() {
    run("TK-21");
}

#[test]
fn tk22_delete_invalid_id() {
    run("TK-22");
}

// --- whole run ---

#[test]
fn full_run_against_one_service_passes() {
    let harness = common::mock_harness();
    let selected = runner::select(&[]).unwrap();
    let outcomes = runner::run_all(&harness, &selected);

    assert_eq!(outcomes.len(), 22);
    let failed: Vec<_> = outcomes
        .iter()
        .filter(|o| !o.passed())
        .map(|o| o.scenario.id)
        .collect();
    assert!(failed.is_empty(), "failed scenarios: {failed:?}");
}
