//! End-to-end router tests for the session flow.
//!
//! Everything here exercises paths that halt before any store I/O (the auth
//! guard, the identity-match check, cookie handling, id parsing), so the
//! state is built over a lazily-connecting client and no MongoDB instance is
//! needed.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use mongodb::Client;
use serde_json::{json, Map, Value};
use std::sync::Arc;
use storysafari_server::{app, db, session::SessionSigner, state::AppState};
use tower::ServiceExt;

const SECRET: &str = "test-secret";

/// Build the app over a client that never actually connects
async fn test_app() -> Router {
    let client = Client::with_uri_str("mongodb://127.0.0.1:27017")
        .await
        .expect("local URI parses");
    let state = AppState {
        db: client.database(db::DB_NAME),
        signer: Arc::new(SessionSigner::new(SECRET)),
        production: false,
    };
    app(state)
}

/// Helper: read the response body as bytes and deserialize from JSON
async fn body_json(resp: axum::response::Response) -> Value {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn identity(email: &str) -> Map<String, Value> {
    let mut map = Map::new();
    map.insert("email".to_string(), json!(email));
    map
}

#[tokio::test]
async fn liveness_needs_no_auth() {
    let app = test_app().await;
    let req = Request::builder().uri("/").body(Body::empty()).unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"StorySafari server is running!");
}

#[tokio::test]
async fn protected_route_without_cookie_is_401() {
    let app = test_app().await;
    let req = Request::builder()
        .uri("/books")
        .body(Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body = body_json(resp).await;
    assert_eq!(body["message"], json!("Unauthorized Access"));
}

#[tokio::test]
async fn garbage_token_is_401() {
    let app = test_app().await;
    let req = Request::builder()
        .uri("/books")
        .header(header::COOKIE, "token=not-a-real-token")
        .body(Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn token_signed_with_other_secret_is_401() {
    let app = test_app().await;
    let forged = SessionSigner::new("a-different-secret")
        .issue(&identity("a@x.com"))
        .unwrap();

    let req = Request::builder()
        .uri("/books")
        .header(header::COOKIE, format!("token={forged}"))
        .body(Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn expired_token_is_401() {
    let app = test_app().await;

    // Correct secret, exp well in the past
    let mut claims = identity("a@x.com");
    claims.insert(
        "exp".to_string(),
        json!((chrono::Utc::now() - chrono::Duration::hours(1)).timestamp()),
    );
    let expired = jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &claims,
        &jsonwebtoken::EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .unwrap();

    let req = Request::builder()
        .uri("/books")
        .header(header::COOKIE, format!("token={expired}"))
        .body(Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn post_jwt_sets_http_only_session_cookie() {
    let app = test_app().await;
    let req = Request::builder()
        .method("POST")
        .uri("/jwt")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"email":"a@x.com"}"#))
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let set_cookie = resp
        .headers()
        .get(header::SET_COOKIE)
        .expect("session cookie set")
        .to_str()
        .unwrap()
        .to_string();
    assert!(set_cookie.starts_with("token="));
    assert!(set_cookie.contains("HttpOnly"));
    // Development attributes: Strict and not Secure
    assert!(set_cookie.contains("SameSite=Strict"));
    assert!(!set_cookie.contains("Secure"));

    let body = body_json(resp).await;
    assert_eq!(body["success"], json!(true));
}

#[tokio::test]
async fn logout_clears_the_cookie() {
    let app = test_app().await;
    let req = Request::builder()
        .uri("/logout")
        .body(Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let set_cookie = resp
        .headers()
        .get(header::SET_COOKIE)
        .expect("clearing cookie set")
        .to_str()
        .unwrap()
        .to_string();
    assert!(set_cookie.starts_with("token="));
    assert!(set_cookie.contains("Max-Age=0"));

    let body = body_json(resp).await;
    assert_eq!(body["success"], json!(true));
}

#[tokio::test]
async fn borrowed_listing_for_another_email_is_403() {
    // Full flow: issue a cookie for a@x.com, then try to read b@y.com's
    // records. The identity-match guard rejects before any store query.
    let issue = Request::builder()
        .method("POST")
        .uri("/jwt")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"email":"a@x.com"}"#))
        .unwrap();
    let resp = test_app().await.oneshot(issue).await.unwrap();
    let set_cookie = resp
        .headers()
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    let cookie_pair = set_cookie.split(';').next().unwrap().to_string();

    let req = Request::builder()
        .uri("/borrowed/b@y.com")
        .header(header::COOKIE, cookie_pair)
        .body(Body::empty())
        .unwrap();

    let resp = test_app().await.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let body = body_json(resp).await;
    assert_eq!(body["message"], json!("Forbidden Access"));
}

#[tokio::test]
async fn malformed_book_id_is_a_server_error() {
    // ObjectId parsing happens before any store I/O, so this fails fast
    // with the generic 500 the error policy prescribes
    let app = test_app().await;
    let req = Request::builder()
        .uri("/book/not-a-valid-id")
        .body(Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn token_without_email_claim_still_fails_identity_match() {
    // A valid session whose payload had no email can never match a path
    // email, so the borrowed listing is always 403 for it
    let token = SessionSigner::new(SECRET).issue(&Map::new()).unwrap();
    let req = Request::builder()
        .uri("/borrowed/a@x.com")
        .header(header::COOKIE, format!("token={token}"))
        .body(Body::empty())
        .unwrap();

    let resp = test_app().await.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}
