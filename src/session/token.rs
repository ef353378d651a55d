//! # Token Signing and Verification
//!
//! HS256 tokens over the caller-supplied identity payload. Validity is
//! self-contained: signature plus the embedded `exp` claim, nothing stored
//! server-side.

use crate::session::types::SessionClaims;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde_json::{json, Map, Value};

/// How long an issued session stays valid
pub const SESSION_TTL_DAYS: i64 = 365;

/// Signs and verifies session tokens with the shared secret
///
/// Built once at startup from `ACCESS_TOKEN_SECRET` and shared through
/// `AppState`; both keys are derived from the same secret (HS256 is
/// symmetric).
pub struct SessionSigner {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl SessionSigner {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Sign an identity payload into a session token
    ///
    /// The payload is carried verbatim as the claim set, with `exp` set to
    /// 365 days from now. Any `exp` the caller supplied is overwritten.
    pub fn issue(&self, identity: &Map<String, Value>) -> Result<String, jsonwebtoken::errors::Error> {
        let mut claims = identity.clone();
        let exp = (Utc::now() + Duration::days(SESSION_TTL_DAYS)).timestamp();
        claims.insert("exp".to_string(), json!(exp));

        encode(&Header::default(), &claims, &self.encoding)
    }

    /// Verify a token's signature and expiry, returning the decoded claims
    ///
    /// Default validation: HS256, `exp` required and checked (with the
    /// library's standard leeway). Bad signature, wrong algorithm, and
    /// expired tokens all come back as errors.
    pub fn verify(&self, token: &str) -> Result<SessionClaims, jsonwebtoken::errors::Error> {
        let data = decode::<SessionClaims>(token, &self.decoding, &Validation::default())?;
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(email: &str) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("email".to_string(), json!(email));
        map
    }

    #[test]
    fn issue_then_verify_round_trips_identity() {
        let signer = SessionSigner::new("test-secret");
        let token = signer.issue(&identity("a@x.com")).unwrap();

        let claims = signer.verify(&token).unwrap();
        assert_eq!(claims.email.as_deref(), Some("a@x.com"));
    }

    #[test]
    fn issue_preserves_extra_claims() {
        let signer = SessionSigner::new("test-secret");
        let mut payload = identity("a@x.com");
        payload.insert("role".to_string(), json!("librarian"));

        let token = signer.issue(&payload).unwrap();
        let claims = signer.verify(&token).unwrap();
        assert_eq!(claims.extra.get("role"), Some(&json!("librarian")));
    }

    #[test]
    fn expiry_is_a_year_out() {
        let signer = SessionSigner::new("test-secret");
        let token = signer.issue(&identity("a@x.com")).unwrap();

        let claims = signer.verify(&token).unwrap();
        let expected = (Utc::now() + Duration::days(SESSION_TTL_DAYS)).timestamp();
        // Allow a few seconds of test runtime drift
        assert!((claims.exp - expected).abs() < 5);
    }

    #[test]
    fn verify_rejects_wrong_secret() {
        let signer = SessionSigner::new("test-secret");
        let other = SessionSigner::new("another-secret");
        let token = other.issue(&identity("a@x.com")).unwrap();

        assert!(signer.verify(&token).is_err());
    }

    #[test]
    fn verify_rejects_expired_token() {
        let signer = SessionSigner::new("test-secret");

        // Hand-roll a token whose exp is an hour in the past (beyond the
        // default validation leeway)
        let mut claims = identity("a@x.com");
        claims.insert(
            "exp".to_string(),
            json!((Utc::now() - Duration::hours(1)).timestamp()),
        );
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        assert!(signer.verify(&token).is_err());
    }

    #[test]
    fn verify_rejects_garbage() {
        let signer = SessionSigner::new("test-secret");
        assert!(signer.verify("not-a-token").is_err());
    }

    #[test]
    fn issue_works_without_email_claim() {
        let signer = SessionSigner::new("test-secret");
        let token = signer.issue(&Map::new()).unwrap();

        let claims = signer.verify(&token).unwrap();
        assert!(claims.email.is_none());
    }
}
