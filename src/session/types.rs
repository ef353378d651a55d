//! # Session Types
//!
//! Claims carried inside the session token, and the extractor handlers use
//! to receive the verified identity.

use crate::error::{AppError, AppResult};
use axum::{extract::FromRequestParts, http::request::Parts};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Claims embedded in a session token
///
/// The identity payload is whatever object the client posted to `/jwt`
/// (typically `{"email": ...}`), so only `email` and `exp` are known fields;
/// everything else is kept verbatim in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Identity email, when the payload carried one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Expiration time as a Unix timestamp (seconds)
    pub exp: i64,

    /// Any further claims from the original identity payload
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Verified identity of the current request
///
/// The auth guard inserts this into the request extensions after the token
/// checks out; handlers receive it as a plain parameter via the
/// `FromRequestParts` impl below. A handler asking for `SessionUser` on a
/// route that isn't behind the guard is a wiring bug, reported as a 500.
#[derive(Debug, Clone)]
pub struct SessionUser {
    pub claims: SessionClaims,
}

impl SessionUser {
    /// The verified email claim, if the identity payload had one
    pub fn email(&self) -> Option<&str> {
        self.claims.email.as_deref()
    }
}

impl<S> FromRequestParts<S> for SessionUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> AppResult<Self> {
        parts
            .extensions
            .get::<SessionUser>()
            .cloned()
            .ok_or_else(|| AppError::Internal("Auth context missing from request".to_string()))
    }
}
