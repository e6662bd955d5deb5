//! Token issuance and verification
//!
//! Tokens are HS256 JWTs carrying the user id, role, and expiry. A failed
//! verification is the explicit "unauthenticated" signal the access layer
//! consumes; callers never see raw decode errors from this path.

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Principal, PrincipalRole, User};
use crate::error::{HelpdeskError, Result};

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// User id in string form
    sub: String,
    role: PrincipalRole,
    /// Expiry as a unix timestamp
    exp: i64,
}

/// Issues and verifies authentication tokens
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiry_hours: i64,
}

impl TokenService {
    /// Create a token service with a shared secret
    #[must_use]
    pub fn new(secret: &str, expiry_hours: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            expiry_hours,
        }
    }

    /// Issue a token for a staff user
    pub fn issue(&self, user: &User) -> Result<String> {
        let claims = Claims {
            sub: user.id.to_string(),
            role: user.role.into(),
            exp: (chrono::Utc::now() + chrono::Duration::hours(self.expiry_hours)).timestamp(),
        };
        Ok(jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &self.encoding_key,
        )?)
    }

    /// Verify a token and resolve it to a principal
    ///
    /// Any invalid, tampered, or expired token fails with `Unauthenticated`.
    pub fn verify(&self, token: &str) -> Result<Principal> {
        let data = jsonwebtoken::decode::<Claims>(
            token,
            &self.decoding_key,
            &Validation::new(Algorithm::HS256),
        )
        .map_err(|e| {
            debug!(error = %e, "token verification failed");
            HelpdeskError::Unauthenticated
        })?;
        Ok(Principal::new(data.claims.sub, data.claims.role))
    }
}
