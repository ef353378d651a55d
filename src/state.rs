//! # Application State
//!
//! This module defines the shared state that's accessible to all request
//! handlers. In Axum, state is how you share resources (the store handle,
//! the token signer) across the application.
//!
//! ## The State Pattern
//! Instead of opening a store connection per request, we:
//! 1. Create the client once at startup
//! 2. Store its database handle in AppState
//! 3. Axum clones the state for each request (cheap: the handle is a thin
//!    wrapper over the driver's internal connection pool, and the signer is
//!    behind an Arc)
//!
//! There is no other shared mutable state between requests — everything
//! lives in the store.

use crate::config::Config;
use crate::db;
use crate::session::SessionSigner;
use anyhow::Result;
use mongodb::{bson::doc, Client, Database};
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Handle to the `storySafari` database
    ///
    /// The driver pools connections internally; handlers just issue
    /// operations against this handle.
    pub db: Database,

    /// Session token signer/verifier, built from the configured secret
    pub signer: Arc<SessionSigner>,

    /// Whether production cookie attributes apply
    pub production: bool,
}

impl AppState {
    /// Initialize application state
    ///
    /// Connects the store client and pings the deployment so a bad URI or
    /// unreachable cluster fails at startup instead of on the first request.
    ///
    /// # Errors
    /// Returns an error if the connection string is invalid or the ping
    /// fails.
    pub async fn new(config: &Config) -> Result<Self> {
        let client = Client::with_uri_str(&config.database_uri).await?;
        let database = client.database(db::DB_NAME);

        database.run_command(doc! { "ping": 1 }).await?;
        tracing::info!("Pinged the deployment — connected to the document store");

        Ok(AppState {
            db: database,
            signer: Arc::new(SessionSigner::new(&config.jwt_secret)),
            production: config.environment.is_production(),
        })
    }
}
