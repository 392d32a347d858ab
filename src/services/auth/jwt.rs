//! Identity token codec: issue and verify HS256 access tokens.
//!
//! Verification is stateless (no session store), so any process replica can
//! authenticate a request from the shared signing secret alone.

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::{error::Error as StdError, fmt};
use uuid::Uuid;

use crate::error::AppError;

/// Errors returned by access-token verification.
///
/// The authentication gate collapses both into a generic 401; the split
/// exists for logging and for callers that care about the distinction.
#[derive(Debug)]
pub enum TokenError {
    /// Signature/claim validation failed (malformed, tampered, wrong
    /// issuer/audience, non-UUID subject).
    Invalid(jsonwebtoken::errors::Error),
    /// Signature was fine but the validity window has lapsed.
    Expired,
    /// Claims decoded but `sub` is not a UUID.
    InvalidSubUuid,
}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid(e) => write!(f, "token verification failed: {}", e),
            Self::Expired => write!(f, "token expired"),
            Self::InvalidSubUuid => write!(f, "invalid 'sub' (expected UUID)"),
        }
    }
}

impl StdError for TokenError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Invalid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(e: jsonwebtoken::errors::Error) -> Self {
        match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => Self::Expired,
            _ => Self::Invalid(e),
        }
    }
}

/// Access token claims.
#[derive(Debug, Serialize, Deserialize)]
pub struct AccessTokenClaims {
    pub iss: String,
    pub aud: String,
    pub sub: String,
    pub email: String,
    pub iat: i64,
    pub exp: i64,
}

/// Verified, application-facing identity asserted by a token.
///
/// `sub` is a UUID by project convention, so it is promoted to `Uuid` here;
/// `iss`/`aud`/`exp` consistency is guaranteed by `verify`.
#[derive(Debug, Clone)]
pub struct VerifiedAccessToken {
    pub user_id: Uuid,
    pub email: String,
}

/// HS256 access-token issuer + verifier.
///
/// - Key material is intentionally not printable via Debug.
#[derive(Clone)]
pub struct AuthService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    issuer: String,
    audience: String,
    ttl_seconds: u64,
}

impl fmt::Debug for AuthService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Do not print key material
        f.debug_struct("AuthService")
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .field("ttl_seconds", &self.ttl_seconds)
            .finish()
    }
}

impl AuthService {
    pub fn new(
        secret: &str,
        issuer: &str,
        audience: &str,
        ttl_seconds: u64,
        leeway_seconds: u64,
    ) -> Result<Self, AppError> {
        if secret.trim().is_empty() {
            tracing::warn!("refusing to build AuthService with an empty signing secret");
            return Err(AppError::Internal);
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[issuer]);
        validation.set_audience(&[audience]);
        validation.leeway = leeway_seconds;

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            issuer: issuer.to_string(),
            audience: audience.to_string(),
            ttl_seconds,
        })
    }

    pub fn ttl_seconds(&self) -> u64 {
        self.ttl_seconds
    }

    /// Issue an access token for an authenticated subject.
    pub fn issue(&self, user_id: Uuid, email: &str) -> Result<String, AppError> {
        let now = Utc::now().timestamp();
        let claims = AccessTokenClaims {
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
            sub: user_id.to_string(),
            email: email.to_string(),
            iat: now,
            exp: now + self.ttl_seconds as i64,
        };

        jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(
            |e| {
                tracing::error!(error = %e, "failed to sign access token");
                AppError::Internal
            },
        )
    }

    /// Verify a token and convert its claims into an application-facing type.
    ///
    /// `jsonwebtoken::Validation` checks signature, `exp`, `iss` and `aud`;
    /// this method additionally requires `sub` to be a UUID.
    pub fn verify(&self, token: &str) -> Result<VerifiedAccessToken, TokenError> {
        let data = jsonwebtoken::decode::<AccessTokenClaims>(
            token,
            &self.decoding_key,
            &self.validation,
        )?;

        let user_id =
            Uuid::parse_str(&data.claims.sub).map_err(|_| TokenError::InvalidSubUuid)?;

        Ok(VerifiedAccessToken {
            user_id,
            email: data.claims.email,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(secret: &str) -> AuthService {
        AuthService::new(secret, "bookmarks-api", "bookmarks-api", 900, 0).unwrap()
    }

    #[test]
    fn issue_then_verify_round_trip() {
        let auth = service("test-secret");
        let user_id = Uuid::new_v4();

        let token = auth.issue(user_id, "user@gmail.com").unwrap();
        let verified = auth.verify(&token).unwrap();

        assert_eq!(verified.user_id, user_id);
        assert_eq!(verified.email, "user@gmail.com");
    }

    #[test]
    fn tampered_token_is_invalid() {
        let auth = service("test-secret");
        let token = auth.issue(Uuid::new_v4(), "user@gmail.com").unwrap();

        // Lengthen the signature segment; it can no longer match.
        let tampered = format!("{}xx", token);

        assert!(matches!(
            auth.verify(&tampered),
            Err(TokenError::Invalid(_))
        ));
    }

    #[test]
    fn wrong_secret_is_invalid() {
        let issuer = service("secret-a");
        let verifier = service("secret-b");

        let token = issuer.issue(Uuid::new_v4(), "user@gmail.com").unwrap();
        assert!(matches!(verifier.verify(&token), Err(TokenError::Invalid(_))));
    }

    #[test]
    fn wrong_audience_is_invalid() {
        let issuer =
            AuthService::new("test-secret", "bookmarks-api", "someone-else", 900, 0).unwrap();
        let verifier = service("test-secret");

        let token = issuer.issue(Uuid::new_v4(), "user@gmail.com").unwrap();
        assert!(matches!(verifier.verify(&token), Err(TokenError::Invalid(_))));
    }

    #[test]
    fn expired_token_is_rejected_even_when_claims_are_valid() {
        let auth = service("test-secret");

        // Hand-craft a token whose validity window already lapsed.
        let now = Utc::now().timestamp();
        let claims = AccessTokenClaims {
            iss: "bookmarks-api".to_string(),
            aud: "bookmarks-api".to_string(),
            sub: Uuid::new_v4().to_string(),
            email: "user@gmail.com".to_string(),
            iat: now - 3600,
            exp: now - 1800,
        };
        let token = jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        assert!(matches!(auth.verify(&token), Err(TokenError::Expired)));
    }

    #[test]
    fn non_uuid_subject_is_rejected() {
        let now = Utc::now().timestamp();
        let claims = AccessTokenClaims {
            iss: "bookmarks-api".to_string(),
            aud: "bookmarks-api".to_string(),
            sub: "not-a-uuid".to_string(),
            email: "user@gmail.com".to_string(),
            iat: now,
            exp: now + 900,
        };
        let token = jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        let auth = service("test-secret");
        assert!(matches!(
            auth.verify(&token),
            Err(TokenError::InvalidSubUuid)
        ));
    }

    #[test]
    fn empty_secret_is_refused() {
        assert!(AuthService::new("  ", "iss", "aud", 900, 0).is_err());
    }
}
