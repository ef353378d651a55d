//! # Cart & Online-Read Handlers
//!
//! Cart payloads are stored and relayed as raw documents — the frontend owns
//! their shape. The online-read list is read-only reference data.

use crate::db::{cart, online_read};
use crate::error::AppResult;
use crate::handlers::insert_ack;
use crate::state::AppState;
use axum::{extract::State, Json};
use mongodb::bson::Document;
use serde_json::Value;

/// Add an item to the cart
///
/// ## Route
/// POST /cartData
pub async fn create_cart_item(
    State(state): State<AppState>,
    Json(item): Json<Document>,
) -> AppResult<Json<Value>> {
    let result = cart::insert_cart_item(&state.db, item).await?;
    Ok(Json(insert_ack(&result)))
}

/// List every cart item (no per-user scoping)
///
/// ## Route
/// GET /cartData
pub async fn list_cart_items(State(state): State<AppState>) -> AppResult<Json<Vec<Document>>> {
    let items = cart::list_cart_items(&state.db).await?;
    Ok(Json(items))
}

/// List the online-read reference entries
///
/// ## Route
/// GET /onlineReadBooks
pub async fn list_online_read_books(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Document>>> {
    let entries = online_read::list_online_read_books(&state.db).await?;
    Ok(Json(entries))
}
