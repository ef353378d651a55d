use crate::error::AppResult;
use crate::session::cookie;
use crate::state::AppState;
use axum::{extract::State, Json};
use axum_extra::extract::cookie::CookieJar;
use serde_json::{json, Map, Value};

// Session endpoints

/// Issue a session token for an identity payload
///
/// ## Route
/// POST /jwt
///
/// The body is an arbitrary JSON object (typically `{"email": ...}`); it is
/// signed verbatim with a 365-day expiry and set as the HTTP-only `token`
/// cookie. Nothing is persisted — the token is self-contained.
///
/// ## Response
/// ```json
/// { "success": true }
/// ```
pub async fn issue_token(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(identity): Json<Map<String, Value>>,
) -> AppResult<(CookieJar, Json<Value>)> {
    let token = state.signer.issue(&identity)?;
    let jar = jar.add(cookie::session_cookie(token, state.production));

    Ok((jar, Json(json!({ "success": true }))))
}

/// Clear the session cookie
///
/// ## Route
/// GET /logout
///
/// Re-sets the cookie with matching attributes and `Max-Age=0`. The token
/// itself is not invalidated server-side; a copy remains valid until its
/// embedded expiry.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, Json<Value>) {
    let jar = jar.add(cookie::expired_session_cookie(state.production));

    (jar, Json(json!({ "success": true })))
}
