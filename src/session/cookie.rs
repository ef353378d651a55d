//! # Session Cookie Construction
//!
//! The session token rides in an HTTP-only cookie named `token`. Attributes
//! depend on the environment:
//! - production: `Secure; SameSite=None` — the frontend lives on another
//!   origin, so the browser only sends the cookie cross-site over HTTPS
//! - development: non-secure `SameSite=Strict` for plain-HTTP localhost
//!
//! The session cookie carries no `Max-Age`; only the clearing cookie does
//! (`Max-Age=0` with otherwise matching attributes, which is what makes the
//! browser drop it).

use axum_extra::extract::cookie::{Cookie, SameSite};
use time::Duration;

/// Name of the session cookie
pub const SESSION_COOKIE: &str = "token";

fn same_site(production: bool) -> SameSite {
    if production {
        SameSite::None
    } else {
        SameSite::Strict
    }
}

/// Build the cookie carrying a freshly issued session token
pub fn session_cookie(token: String, production: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .secure(production)
        .same_site(same_site(production))
        .build()
}

/// Build the cookie that clears the session on logout
///
/// Attributes must match the ones the session cookie was set with, or the
/// browser treats it as a different cookie and keeps the old one.
pub fn expired_session_cookie(production: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, ""))
        .path("/")
        .http_only(true)
        .secure(production)
        .same_site(same_site(production))
        .max_age(Duration::ZERO)
        .build()
}
