//! # StorySafari Server
//!
//! REST backend for the StorySafari library app: book catalog, borrow/return
//! tracking, a shopping cart, an online-read list, and cookie-based JWT
//! sessions. Every resource endpoint is a thin pass-through to a single
//! document-store operation; the session guard is the only logic of note.
//!
//! ## API Surface
//!
//! | Method | Path                    | Handler                            |
//! |--------|-------------------------|------------------------------------|
//! | GET    | `/`                     | liveness string                    |
//! | POST   | `/jwt`                  | issue session cookie               |
//! | GET    | `/logout`               | clear session cookie               |
//! | POST   | `/books` †              | create book                        |
//! | GET    | `/books` †              | list all books                     |
//! | GET    | `/books/:cateName`      | list books by category             |
//! | GET    | `/book/:id`             | single book or null                |
//! | GET    | `/update/:id`           | single book (fetch-for-edit)       |
//! | PUT    | `/update/:id`           | upsert the five descriptive fields |
//! | POST   | `/borrow`               | create borrow record               |
//! | GET    | `/borrowed/:email` †‡   | list borrow records for email      |
//! | GET    | `/isBorrowed/:email/:id`| single borrow record or null       |
//! | PATCH  | `/reduceQua/:id`        | quantity −1                        |
//! | PATCH  | `/return/:id`           | quantity +1                        |
//! | DELETE | `/borrowedBook/:id`     | delete borrow record               |
//! | GET    | `/onlineReadBooks`      | list online-read entries           |
//! | POST   | `/cartData`             | create cart item                   |
//! | GET    | `/cartData`             | list all cart items                |
//!
//! † behind the cookie auth guard · ‡ plus identity match on `:email`

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod session;
pub mod state;

use axum::http::{header::CONTENT_TYPE, HeaderValue, Method};
use axum::middleware::from_fn_with_state;
use axum::routing::{delete, get, patch, post};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers::{auth, books, borrow, cart, health};
use crate::state::AppState;

/// Frontend origins allowed to send credentialed requests
const ALLOWED_ORIGINS: [&str; 2] = ["http://localhost:5173", "https://story-safari.web.app"];

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(
            ALLOWED_ORIGINS.map(HeaderValue::from_static),
        ))
        // Cookies ride along, so the allow-list must stay explicit —
        // wildcard origins are rejected by browsers for credentialed CORS
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([CONTENT_TYPE])
}

/// Assemble the full application router
///
/// Protected routes are wrapped with the auth guard via `route_layer`, so
/// unauthenticated requests get a 401 rather than a 405/404 fallthrough.
/// Everything else is public.
pub fn app(state: AppState) -> Router {
    let protected = Router::new()
        .route("/books", post(books::create_book).get(books::list_books))
        .route("/borrowed/{email}", get(borrow::list_borrowed))
        .route_layer(from_fn_with_state(
            state.clone(),
            middleware::auth::require_auth,
        ));

    Router::new()
        .route("/", get(health::liveness))
        // Session management
        .route("/jwt", post(auth::issue_token))
        .route("/logout", get(auth::logout))
        // Book catalog
        .route("/books/{cate_name}", get(books::list_books_by_category))
        .route("/book/{id}", get(books::get_book))
        .route("/update/{id}", get(books::get_book).put(books::upsert_book))
        .route("/reduceQua/{id}", patch(books::reduce_quantity))
        .route("/return/{id}", patch(books::return_book))
        // Borrow records
        .route("/borrow", post(borrow::create_borrow))
        .route("/isBorrowed/{email}/{id}", get(borrow::borrow_status))
        .route("/borrowedBook/{id}", delete(borrow::delete_borrow))
        // Online read + cart
        .route("/onlineReadBooks", get(cart::list_online_read_books))
        .route(
            "/cartData",
            post(cart::create_cart_item).get(cart::list_cart_items),
        )
        .merge(protected)
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
