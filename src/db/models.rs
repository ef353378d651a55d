//! # Store Models
//!
//! Typed shapes for the payloads that have known fields. Reads come back as
//! raw `Document`s instead of these types: stored documents may legally lack
//! fields (an upserted book has no `quantity` until someone sets one), and
//! borrow/cart records carry arbitrary extra fields the frontend supplies.
//!
//! Field names match what the frontend sends, including the odd
//! `author_Name` casing, via `#[serde(rename)]`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A full book record as created through `POST /books`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    pub category_name: String,
    pub book_name: String,
    pub rating: f64,
    #[serde(rename = "author_Name")]
    pub author_name: String,
    pub photo: String,
    /// Copies available; decremented on borrow, incremented on return.
    /// No floor or ceiling is enforced anywhere.
    pub quantity: i64,
}

/// The five replaceable fields for `PUT /update/:id`
///
/// `quantity` is deliberately absent: the update endpoint replaces the
/// descriptive fields only, and an upserted document starts without a
/// quantity at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookUpdate {
    pub category_name: String,
    pub book_name: String,
    pub rating: f64,
    #[serde(rename = "author_Name")]
    pub author_name: String,
    pub photo: String,
}

/// A borrow record: the two fields the backend filters on, plus whatever
/// else the borrower form submitted (name, return date, ...)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BorrowRecord {
    /// Hex id of the borrowed book, stored as the string the client sent
    pub book_id: String,
    /// Borrower email; compared against the session identity only on the
    /// "list my borrowed books" path
    pub email: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
