//! # Session Module
//!
//! This module contains the session credential logic: issuing and verifying
//! signed tokens and building the cookie that carries them.
//!
//! ## Submodules
//! - `types`: Claims structure and the `SessionUser` handler extractor
//! - `token`: Signing and verification (`SessionSigner`)
//! - `cookie`: Cookie construction for set and clear, per environment
//!
//! ## Session Flow
//! 1. Client posts an identity payload → `POST /jwt`
//! 2. Server signs the payload with a 365-day expiry and sets it as an
//!    HTTP-only `token` cookie
//! 3. On protected routes the auth guard verifies the cookie and attaches
//!    the decoded claims to the request
//! 4. `GET /logout` clears the cookie; the token itself stays valid until
//!    expiry (validity is purely cryptographic, there is no revocation list)

pub mod cookie;
pub mod token;
pub mod types;

pub use token::SessionSigner;
pub use types::{SessionClaims, SessionUser};
