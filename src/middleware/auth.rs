use crate::error::AppError;
use crate::session::cookie::SESSION_COOKIE;
use crate::session::SessionUser;
use crate::state::AppState;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;

pub async fn require_auth(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let cookie = jar
        .get(SESSION_COOKIE)
        .ok_or_else(|| AppError::Unauthorized("Unauthorized Access".to_string()))?;

    let claims = state
        .signer
        .verify(cookie.value())
        .map_err(|_| AppError::Unauthorized("Unauthorized Access".to_string()))?;

    request.extensions_mut().insert(SessionUser { claims });

    Ok(next.run(request).await)
}
