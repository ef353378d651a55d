//! # Configuration Management
//!
//! This module handles loading configuration from environment variables.
//! It uses the "12-factor app" methodology where configuration comes from the
//! environment.
//!
//! ## Environment Variables
//! - `HOST`: Server bind address (default: 127.0.0.1)
//! - `PORT`: Server port (default: 5000)
//! - `MONGODB_URI`: Full connection string for the document store. When set
//!   it takes precedence over the pieces below.
//! - `DB_USER` / `DB_PASS`: Store credentials used to build the SRV URI
//! - `DB_HOST`: SRV cluster host (default points at the Atlas cluster)
//! - `ACCESS_TOKEN_SECRET`: Shared secret for signing session tokens (required)
//! - `NODE_ENV`: `production` enables production cookie attributes

use anyhow::{Context, Result};
use std::env;

/// Deployment environment, derived from `NODE_ENV`.
///
/// Only the session cookie attributes differ between the two: production
/// cookies are `Secure; SameSite=None` (the frontend is served from another
/// origin over HTTPS), development cookies are non-secure `SameSite=Strict`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn is_production(self) -> bool {
        self == Environment::Production
    }
}

/// Application configuration
///
/// All fields are public for easy access from other modules and so tests can
/// build a `Config` literal without touching the process environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host/IP address to bind to
    pub host: String,

    /// Server port number
    pub port: u16,

    /// Document store connection string
    ///
    /// Either `MONGODB_URI` verbatim, or assembled from `DB_USER`/`DB_PASS`/
    /// `DB_HOST` into an SRV URI for the Atlas cluster.
    pub database_uri: String,

    /// Shared secret for signing and verifying session tokens
    pub jwt_secret: String,

    /// Deployment environment (drives cookie attributes)
    pub environment: Environment,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Loads a `.env` file first if one exists (dotenvy doesn't error if the
    /// file is missing), then reads each value, falling back to defaults
    /// where a default is sensible. The signing secret and store credentials
    /// have no defaults: a missing value is a startup error.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let database_uri = match env::var("MONGODB_URI") {
            Ok(uri) => uri,
            Err(_) => {
                let user = env::var("DB_USER").context("DB_USER must be set")?;
                let pass = env::var("DB_PASS").context("DB_PASS must be set")?;
                let host = env::var("DB_HOST")
                    .unwrap_or_else(|_| "cluster0.0o9qayn.mongodb.net".to_string());
                format!(
                    "mongodb+srv://{user}:{pass}@{host}/?retryWrites=true&w=majority&appName=Cluster0"
                )
            }
        };

        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),

            port: env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()
                .context("PORT must be a valid port number")?,

            database_uri,

            jwt_secret: env::var("ACCESS_TOKEN_SECRET")
                .context("ACCESS_TOKEN_SECRET must be set")?,

            environment: match env::var("NODE_ENV").as_deref() {
                Ok("production") => Environment::Production,
                _ => Environment::Development,
            },
        })
    }

    /// Get the socket address to bind the server to
    ///
    /// Combines host and port into a format suitable for
    /// `tokio::net::TcpListener::bind()`. Example: "127.0.0.1:5000"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
