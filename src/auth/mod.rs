use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::config::SecurityConfig;
use crate::database::models::User;

/// Token lifetime. Fixed contract: every issued token expires exactly
/// 24 hours after issuance, with no refresh mechanism.
pub const TOKEN_TTL_HOURS: i64 = 24;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User id
    pub sub: Uuid,
    pub email: String,
    /// Display name
    pub name: String,
    /// Unique token identifier
    pub jti: Uuid,
    pub iss: String,
    pub aud: String,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    pub fn new(user: &User, issuer: &str, audience: &str) -> Self {
        let now = Utc::now();

        Self {
            sub: user.id,
            email: user.email.clone(),
            name: user.full_name.clone(),
            jti: Uuid::new_v4(),
            iss: issuer.to_string(),
            aud: audience.to_string(),
            exp: (now + Duration::hours(TOKEN_TTL_HOURS)).timestamp(),
            iat: now.timestamp(),
        }
    }
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("JWT generation error: {0}")]
    TokenGeneration(String),

    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("JWT secret is not configured")]
    MissingSecret,

    #[error("Password hashing error: {0}")]
    PasswordHash(String),
}

/// Signing and verification material, built once at startup and passed
/// through application state rather than read from globals per request.
pub struct AuthKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    issuer: String,
    audience: String,
}

impl AuthKeys {
    pub fn new(secret: &str, issuer: &str, audience: &str) -> Result<Self, AuthError> {
        if secret.is_empty() {
            return Err(AuthError::MissingSecret);
        }

        let mut validation = Validation::default();
        validation.set_issuer(&[issuer]);
        validation.set_audience(&[audience]);

        Ok(Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            issuer: issuer.to_string(),
            audience: audience.to_string(),
        })
    }

    pub fn from_config(security: &SecurityConfig) -> Result<Self, AuthError> {
        Self::new(&security.jwt_secret, &security.jwt_issuer, &security.jwt_audience)
    }

    /// Issue a signed bearer token for an authenticated user
    pub fn issue(&self, user: &User) -> Result<String, AuthError> {
        let claims = Claims::new(user, &self.issuer, &self.audience);

        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| AuthError::TokenGeneration(e.to_string()))
    }

    /// Verify signature, issuer, audience and expiry. All failure modes
    /// collapse to `InvalidToken`; callers must not leak the distinction.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|_| AuthError::InvalidToken)
    }
}

/// Hash a plaintext password for storage
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    bcrypt::hash(password, bcrypt::DEFAULT_COST).map_err(|e| AuthError::PasswordHash(e.to_string()))
}

/// Check a plaintext password against a stored hash. Hash parse failures
/// count as a mismatch so login stays a uniform credential error.
pub fn verify_password(password: &str, password_hash: &str) -> bool {
    bcrypt::verify(password, password_hash).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn test_user() -> User {
        User {
            id: Uuid::new_v4(),
            email: "reader@example.com".to_string(),
            password_hash: "ignored".to_string(),
            full_name: "Avid Reader".to_string(),
            created_at: Utc::now(),
        }
    }

    fn test_keys() -> AuthKeys {
        AuthKeys::new("unit-test-secret", "bookshelf-api", "bookshelf-clients").unwrap()
    }

    #[test]
    fn issues_and_verifies_token() {
        let keys = test_keys();
        let user = test_user();

        let token = keys.issue(&user).unwrap();
        let claims = keys.verify(&token).unwrap();

        assert_eq!(claims.sub, user.id);
        assert_eq!(claims.email, user.email);
        assert_eq!(claims.name, user.full_name);
    }

    #[test]
    fn expiry_is_exactly_24h_after_issuance() {
        let keys = test_keys();
        let token = keys.issue(&test_user()).unwrap();
        let claims = keys.verify(&token).unwrap();

        assert_eq!(claims.exp - claims.iat, TOKEN_TTL_HOURS * 3600);
    }

    #[test]
    fn each_token_gets_unique_id() {
        let keys = test_keys();
        let user = test_user();

        let a = keys.verify(&keys.issue(&user).unwrap()).unwrap();
        let b = keys.verify(&keys.issue(&user).unwrap()).unwrap();
        assert_ne!(a.jti, b.jti);
    }

    #[test]
    fn rejects_token_signed_with_other_secret() {
        let token = test_keys().issue(&test_user()).unwrap();

        let other = AuthKeys::new("different-secret", "bookshelf-api", "bookshelf-clients").unwrap();
        assert!(matches!(other.verify(&token), Err(AuthError::InvalidToken)));
    }

    #[test]
    fn rejects_wrong_issuer_and_audience() {
        let keys = test_keys();
        let foreign = AuthKeys::new("unit-test-secret", "someone-else", "other-clients").unwrap();

        let token = foreign.issue(&test_user()).unwrap();
        assert!(keys.verify(&token).is_err());
    }

    #[test]
    fn rejects_tampered_token() {
        let keys = test_keys();
        let mut token = keys.issue(&test_user()).unwrap();
        token.push('x');

        assert!(keys.verify(&token).is_err());
    }

    #[test]
    fn rejects_empty_secret() {
        assert!(matches!(
            AuthKeys::new("", "bookshelf-api", "bookshelf-clients"),
            Err(AuthError::MissingSecret)
        ));
    }

    #[test]
    fn password_hash_round_trip() {
        let hash = hash_password("correct horse battery staple").unwrap();
        assert!(verify_password("correct horse battery staple", &hash));
        assert!(!verify_password("wrong password", &hash));
    }

    #[test]
    fn garbage_hash_is_a_mismatch() {
        assert!(!verify_password("anything", "not-a-bcrypt-hash"));
    }
}
