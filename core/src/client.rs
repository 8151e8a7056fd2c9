//! Stateless HTTP request builder and response parser for the ads API.
//!
//! # Design
//! `AdsClient` holds only a `base_url` and carries no mutable state between
//! calls. Each endpoint is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! Path parameters are taken as strings (or anything `Display`) rather than
//! typed ids, because the suite deliberately sends malformed ones.

use std::fmt::Display;

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreateItem, CreateItemResponse, ErrorBody, Item, Statistics};

/// Synchronous, stateless client for the classified-ads API.
#[derive(Debug, Clone)]
pub struct AdsClient {
    base_url: String,
}

impl AdsClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST /api/1/item` with a well-typed payload.
    pub fn build_create_item(&self, input: &CreateItem) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(self.json_post("/api/1/item", body))
    }

    /// `POST /api/1/item` with an arbitrary JSON body, for payloads that do
    /// not fit `CreateItem` (missing fields, wrong types, extra keys).
    pub fn build_create_item_raw(&self, body: &serde_json::Value) -> HttpRequest {
        self.json_post("/api/1/item", body.to_string())
    }

    /// `GET /api/1/item/{id}`.
    pub fn build_get_item(&self, id: &str) -> HttpRequest {
        self.get(&format!("/api/1/item/{id}"))
    }

    /// `GET /api/1/{seller_id}/item`.
    pub fn build_seller_items(&self, seller_id: impl Display) -> HttpRequest {
        self.get(&format!("/api/1/{seller_id}/item"))
    }

    /// `GET /api/1/statistic/{id}`.
    pub fn build_get_statistic(&self, id: &str) -> HttpRequest {
        self.get(&format!("/api/1/statistic/{id}"))
    }

    /// `DELETE /api/2/item/{id}`. Deletion lives under the v2 prefix.
    pub fn build_delete_item(&self, id: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            url: format!("{}/api/2/item/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_create_item(&self, response: HttpResponse) -> Result<CreateItemResponse, ApiError> {
        check_status(&response, &[200])?;
        parse_body(&response)
    }

    /// The service wraps a single item in an array.
    pub fn parse_get_item(&self, response: HttpResponse) -> Result<Vec<Item>, ApiError> {
        check_status(&response, &[200])?;
        parse_body(&response)
    }

    pub fn parse_seller_items(&self, response: HttpResponse) -> Result<Vec<Item>, ApiError> {
        check_status(&response, &[200])?;
        parse_body(&response)
    }

    pub fn parse_get_statistic(&self, response: HttpResponse) -> Result<Vec<Statistics>, ApiError> {
        check_status(&response, &[200])?;
        parse_body(&response)
    }

    pub fn parse_delete_item(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, &[200, 204])?;
        Ok(())
    }

    fn get(&self, path: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}{path}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    fn json_post(&self, path: &str, body: String) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Post,
            url: format!("{}{path}", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        }
    }
}

/// Extract `result.message` from a service error body, if it has one.
pub fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .map(|b| b.result.message)
}

/// Map statuses outside `expected` to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: &[u16]) -> Result<(), ApiError> {
    if expected.contains(&response.status) {
        return Ok(());
    }
    match response.status {
        404 => Err(ApiError::NotFound),
        400 => Err(ApiError::BadRequest {
            message: error_message(&response.body).unwrap_or_else(|| response.body.clone()),
        }),
        status => Err(ApiError::HttpError {
            status,
            body: response.body.clone(),
        }),
    }
}

fn parse_body<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}
