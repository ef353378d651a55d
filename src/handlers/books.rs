//! # Book Handlers
//!
//! Catalog CRUD plus the borrow/return quantity adjustments. `POST /books`
//! and `GET /books` sit behind the auth guard; the rest are public.

use crate::db::books;
use crate::db::models::{Book, BookUpdate};
use crate::error::AppResult;
use crate::handlers::{insert_ack, update_ack};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use mongodb::bson::Document;
use serde_json::Value;

/// Create a book (protected)
///
/// ## Route
/// POST /books
pub async fn create_book(
    State(state): State<AppState>,
    Json(book): Json<Book>,
) -> AppResult<Json<Value>> {
    let result = books::insert_book(&state.db, &book).await?;
    Ok(Json(insert_ack(&result)))
}

/// List the whole catalog, unpaginated (protected)
///
/// ## Route
/// GET /books
pub async fn list_books(State(state): State<AppState>) -> AppResult<Json<Vec<Document>>> {
    let all = books::list_books(&state.db).await?;
    Ok(Json(all))
}

/// List books whose `category_name` exactly matches the path parameter
///
/// ## Route
/// GET /books/:cateName
pub async fn list_books_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> AppResult<Json<Vec<Document>>> {
    let matching = books::list_books_by_category(&state.db, &category).await?;
    Ok(Json(matching))
}

/// Fetch a single book, `null` when the id matches nothing
///
/// ## Route
/// GET /book/:id — also mounted at GET /update/:id (fetch-for-edit)
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Option<Document>>> {
    let book = books::find_book_by_id(&state.db, &id).await?;
    Ok(Json(book))
}

/// Replace the five descriptive fields, inserting when absent
///
/// ## Route
/// PUT /update/:id
pub async fn upsert_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(update): Json<BookUpdate>,
) -> AppResult<Json<Value>> {
    let result = books::upsert_book(&state.db, &id, &update).await?;
    Ok(Json(update_ack(&result)))
}

/// Decrement quantity on borrow
///
/// ## Route
/// PATCH /reduceQua/:id
pub async fn reduce_quantity(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Value>> {
    let result = books::adjust_quantity(&state.db, &id, -1).await?;
    Ok(Json(update_ack(&result)))
}

/// Increment quantity on return
///
/// ## Route
/// PATCH /return/:id
pub async fn return_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Value>> {
    let result = books::adjust_quantity(&state.db, &id, 1).await?;
    Ok(Json(update_ack(&result)))
}
