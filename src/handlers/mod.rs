//! # HTTP Request Handlers
//!
//! This module contains all the HTTP route handlers.
//!
//! ## Submodules
//! - `health`: Liveness endpoint
//! - `auth`: Session endpoints (issue token, logout)
//! - `books`: Book catalog and quantity adjustments
//! - `borrow`: Borrow/return records
//! - `cart`: Cart items and the online-read list
//!
//! ## Handler Pattern
//! Every resource handler is a 1:1 mapping: extract the request data, make
//! exactly one store call, relay the store's result as the response body.
//! Single-document lookups that find nothing return `null` with HTTP 200 —
//! callers check for emptiness themselves.

pub mod auth;
pub mod books;
pub mod borrow;
pub mod cart;
pub mod health;

use mongodb::bson::Bson;
use mongodb::results::{DeleteResult, InsertOneResult, UpdateResult};
use serde_json::{json, Value};

fn bson_id(id: &Bson) -> Value {
    match id {
        Bson::ObjectId(oid) => json!(oid.to_hex()),
        other => json!(other),
    }
}

/// Acknowledgment body for inserts, in the document-store driver's shape:
/// `{"acknowledged": true, "insertedId": "..."}`
pub(crate) fn insert_ack(result: &InsertOneResult) -> Value {
    json!({
        "acknowledged": true,
        "insertedId": bson_id(&result.inserted_id),
    })
}

/// Acknowledgment body for updates/upserts
pub(crate) fn update_ack(result: &UpdateResult) -> Value {
    json!({
        "acknowledged": true,
        "matchedCount": result.matched_count,
        "modifiedCount": result.modified_count,
        "upsertedId": result.upserted_id.as_ref().map(|id| bson_id(id)),
        "upsertedCount": i64::from(result.upserted_id.is_some()),
    })
}

/// Acknowledgment body for deletes; `deletedCount` is 0 when nothing
/// matched, which is still a success
pub(crate) fn delete_ack(result: &DeleteResult) -> Value {
    json!({
        "acknowledged": true,
        "deletedCount": result.deleted_count,
    })
}
