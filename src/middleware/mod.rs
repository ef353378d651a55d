//! # Middleware Module
//!
//! Middleware intercepts HTTP requests before handlers run.
//!
//! ## Our Middleware
//! - `auth`: verifies the session cookie and attaches the identity to the
//!   request; unauthenticated requests are rejected with 401 before any
//!   handler or store call happens

pub mod auth;
