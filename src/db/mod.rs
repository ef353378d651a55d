//! # Document Store Module
//!
//! This module organizes all store access into submodules, one per
//! collection:
//! - `models`: Data structures for the typed parts of the payloads
//! - `books`: The `books` collection (catalog + quantity adjustments)
//! - `borrow`: The `borrow` collection (borrow/return records)
//! - `online_read`: The read-only `onlineRead` reference list
//! - `cart`: The `cart` collection (raw cart payloads)
//!
//! Each function performs exactly one driver call and returns the driver's
//! result unwrapped; handlers relay those results to the client. No function
//! here catches store failures — they propagate as `AppError` and end up as
//! a generic 500.

pub mod books;
pub mod borrow;
pub mod cart;
pub mod models;
pub mod online_read;

/// Name of the application database
pub const DB_NAME: &str = "storySafari";
