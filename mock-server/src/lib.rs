//! In-memory stand-in for the classified-ads service.
//!
//! Serves the same five endpoints as the live API with the validation and
//! status-code contract the conformance suite expects, so the suite can run
//! without network access.

pub mod validate;

use std::{collections::HashMap, sync::Arc};

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::{net::TcpListener, sync::RwLock};
use tracing::{debug, info};
use uuid::Uuid;

use crate::validate::validate_create;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub likes: i64,
    pub view_count: i64,
    pub contacts: i64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: Uuid,
    pub seller_id: i64,
    pub name: String,
    pub price: i64,
    pub statistics: Statistics,
}

pub type Db = Arc<RwLock<HashMap<Uuid, Item>>>;

/// Error response in the service's envelope:
/// `{"result":{"message":...,"messages":{}},"status":"400"}`.
#[derive(Debug)]
pub struct Rejection {
    status: StatusCode,
    message: String,
}

impl Rejection {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }
}

impl IntoResponse for Rejection {
    fn into_response(self) -> Response {
        debug!(status = %self.status, message = %self.message, "request rejected");
        let body = json!({
            "result": { "message": self.message, "messages": {} },
            "status": self.status.as_str(),
        });
        (self.status, Json(body)).into_response()
    }
}

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    Router::new()
        .route("/api/1/item", post(create_item))
        .route("/api/1/item/{id}", get(get_item))
        .route("/api/1/{seller_id}/item", get(seller_items))
        .route("/api/1/statistic/{id}", get(get_statistic))
        .route("/api/2/item/{id}", delete(delete_item))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn parse_item_id(raw: &str) -> Result<Uuid, Rejection> {
    Uuid::parse_str(raw).map_err(|_| Rejection::bad_request(format!("передан некорректный идентификатор объявления: {raw}")))
}

async fn create_item(State(db): State<Db>, body: Bytes) -> Result<Json<serde_json::Value>, Rejection> {
    let input = validate_create(&body).map_err(Rejection::bad_request)?;
    let item = Item {
        id: Uuid::new_v4(),
        seller_id: input.seller_id,
        name: input.name,
        price: input.price,
        statistics: input.statistics,
    };
    info!(id = %item.id, seller_id = item.seller_id, "item created");
    let status = format!("Сохранили объявление - {}", item.id);
    db.write().await.insert(item.id, item);
    Ok(Json(json!({ "status": status })))
}

async fn get_item(State(db): State<Db>, Path(id): Path<String>) -> Result<Json<Vec<Item>>, Rejection> {
    let id = parse_item_id(&id)?;
    let items = db.read().await;
    items
        .get(&id)
        .map(|item| Json(vec![item.clone()]))
        .ok_or_else(|| Rejection::not_found(format!("item {id} not found")))
}

async fn seller_items(
    State(db): State<Db>,
    Path(seller_id): Path<String>,
) -> Result<Json<Vec<Item>>, Rejection> {
    let seller_id: i64 = seller_id
        .parse()
        .map_err(|_| Rejection::bad_request(format!("передан некорректный идентификатор продавца: {seller_id}")))?;
    let items = db.read().await;
    Ok(Json(
        items
            .values()
            .filter(|item| item.seller_id == seller_id)
            .cloned()
            .collect(),
    ))
}

async fn get_statistic(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Statistics>>, Rejection> {
    let id = parse_item_id(&id)?;
    let items = db.read().await;
    items
        .get(&id)
        .map(|item| Json(vec![item.statistics]))
        .ok_or_else(|| Rejection::not_found(format!("statistic {id} not found")))
}

async fn delete_item(State(db): State<Db>, Path(id): Path<String>) -> Result<StatusCode, Rejection> {
    let id = parse_item_id(&id)?;
    let removed = db.write().await.remove(&id);
    match removed {
        Some(_) => {
            info!(%id, "item deleted");
            Ok(StatusCode::OK)
        }
        None => Err(Rejection::not_found(format!("item {id} not found"))),
    }
}
