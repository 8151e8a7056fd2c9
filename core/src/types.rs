//! DTOs for the classified-ads API.
//!
//! # Design
//! These mirror the wire schema of the service but are defined independently
//! from the mock server; the suite's integration tests catch drift between
//! the two. Field names on the wire are camelCase.

use serde::{Deserialize, Serialize};

/// Engagement counters attached to an item.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub likes: i64,
    pub view_count: i64,
    pub contacts: i64,
}

impl Statistics {
    pub fn new(likes: i64, view_count: i64, contacts: i64) -> Self {
        Self {
            likes,
            view_count,
            contacts,
        }
    }
}

/// A listing as returned by the item, seller and create endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub seller_id: i64,
    pub name: String,
    pub price: i64,
    pub statistics: Statistics,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Request payload for `POST /api/1/item`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateItem {
    pub seller_id: i64,
    pub name: String,
    pub price: i64,
    pub statistics: Statistics,
}

/// Success body of `POST /api/1/item`. The service reports the outcome as a
/// free-form string, e.g. `"Сохранили объявление - <id>"`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateItemResponse {
    pub status: String,
}

/// Error envelope used by the service for 400 and 404 responses. Only
/// `result.message` is read; the sibling `status` echo is ignored, whatever
/// its JSON type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub result: ErrorResult,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResult {
    #[serde(default)]
    pub message: String,
}
