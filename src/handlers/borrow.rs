//! # Borrow Handlers
//!
//! Borrow records tie a book id to a borrower email. Only the "list my
//! borrowed books" route checks the session identity against the path email;
//! borrow creation and the `isBorrowed` lookup take whatever email the
//! caller supplies. That asymmetry is the documented behavior, not an
//! oversight to patch here.

use crate::db::borrow;
use crate::db::models::BorrowRecord;
use crate::error::{AppError, AppResult};
use crate::handlers::{delete_ack, insert_ack};
use crate::session::SessionUser;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use mongodb::bson::Document;
use serde_json::Value;

/// Record a borrow
///
/// ## Route
/// POST /borrow
///
/// No uniqueness check — duplicate borrows of the same book by the same
/// email are possible.
pub async fn create_borrow(
    State(state): State<AppState>,
    Json(record): Json<BorrowRecord>,
) -> AppResult<Json<Value>> {
    let result = borrow::insert_borrow(&state.db, &record).await?;
    Ok(Json(insert_ack(&result)))
}

/// List borrow records for an email (protected + identity match)
///
/// ## Route
/// GET /borrowed/:email
///
/// The auth guard has already verified the token; here the verified email
/// must also equal the path parameter. On mismatch the store is not queried
/// at all.
///
/// ## Response (mismatch)
/// ```json
/// { "message": "Forbidden Access" }
/// ```
pub async fn list_borrowed(
    State(state): State<AppState>,
    user: SessionUser,
    Path(email): Path<String>,
) -> AppResult<Json<Vec<Document>>> {
    if user.email() != Some(email.as_str()) {
        return Err(AppError::Forbidden("Forbidden Access".to_string()));
    }

    let records = borrow::list_by_email(&state.db, &email).await?;
    Ok(Json(records))
}

/// Check whether an email currently has a book borrowed
///
/// ## Route
/// GET /isBorrowed/:email/:id
///
/// Returns the matching record, or `null` when there is none.
pub async fn borrow_status(
    State(state): State<AppState>,
    Path((email, book_id)): Path<(String, String)>,
) -> AppResult<Json<Option<Document>>> {
    let record = borrow::find_by_book_and_email(&state.db, &book_id, &email).await?;
    Ok(Json(record))
}

/// Delete a borrow record on return-completion
///
/// ## Route
/// DELETE /borrowedBook/:id
///
/// Idempotent: an absent id yields `deletedCount: 0`, not an error.
pub async fn delete_borrow(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Value>> {
    let result = borrow::delete_by_id(&state.db, &id).await?;
    Ok(Json(delete_ack(&result)))
}
