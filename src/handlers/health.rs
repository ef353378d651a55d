//! # Liveness Handler
//!
//! Plain-text liveness probe at `GET /`. The frontend and uptime monitors
//! use it to check the server is up; it never touches the store.

/// Liveness endpoint
///
/// ## Route
/// GET /
///
/// Always returns 200 with a fixed string (unless the process is down).
pub async fn liveness() -> &'static str {
    "StorySafari server is running!"
}
