//! Token issuer - Mints signed, time-bounded session tokens.
//!
//! Tokens are HS256 JWTs signed with the process-wide secret. They are
//! stateless: there is no revocation list and no refresh.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::config::{Config, MAX_TOKEN_EXPIRY_SECONDS, TOKEN_TYPE_BEARER};
use crate::domain::UserRole;
use crate::errors::SigningError;

/// JWT claims payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub role: String,
    pub iat: i64,
    pub exp: i64,
}

/// Identity asserted by a session token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    pub subject: Uuid,
    pub role: UserRole,
}

/// Session token returned after successful registration
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionToken {
    /// JWT access token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub access_token: String,
    /// Token type (always "Bearer")
    #[schema(example = "Bearer")]
    pub token_type: String,
    /// Token lifetime in seconds
    #[schema(example = 3600)]
    pub expires_in: i64,
}

/// Token issuer trait for dependency injection.
pub trait TokenIssuer: Send + Sync {
    /// Sign a token asserting `identity`
    fn issue(&self, identity: &Identity) -> Result<SessionToken, SigningError>;

    /// Verify signature and expiry, returning the embedded claims
    fn decode(&self, token: &str) -> Result<Claims, SigningError>;
}

/// HS256 JWT implementation of [`TokenIssuer`].
pub struct JwtIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiry_seconds: i64,
}

impl std::fmt::Debug for JwtIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtIssuer")
            .field("secret", &"[REDACTED]")
            .field("expiry_seconds", &self.expiry_seconds)
            .finish()
    }
}

impl JwtIssuer {
    /// Create an issuer for `secret` with a fixed validity window.
    ///
    /// # Errors
    /// `MissingSecret` on an empty secret, `InvalidExpiry` unless the window
    /// lies in `1..=MAX_TOKEN_EXPIRY_SECONDS`.
    pub fn new(secret: &[u8], expiry_seconds: i64) -> Result<Self, SigningError> {
        if secret.is_empty() {
            return Err(SigningError::MissingSecret);
        }
        if !(1..=MAX_TOKEN_EXPIRY_SECONDS).contains(&expiry_seconds) {
            return Err(SigningError::InvalidExpiry(expiry_seconds));
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            expiry_seconds,
        })
    }

    /// Create an issuer from application configuration.
    pub fn from_config(config: &Config) -> Result<Self, SigningError> {
        Self::new(config.jwt_secret_bytes(), config.token_expiry_seconds)
    }

    fn validation() -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims(&["exp", "sub"]);
        validation
    }
}

impl TokenIssuer for JwtIssuer {
    fn issue(&self, identity: &Identity) -> Result<SessionToken, SigningError> {
        let now = Utc::now();
        let expires_at = Duration::try_seconds(self.expiry_seconds)
            .and_then(|window| now.checked_add_signed(window))
            .ok_or(SigningError::InvalidExpiry(self.expiry_seconds))?;

        let claims = Claims {
            sub: identity.subject,
            role: identity.role.to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(SigningError::Encoding)?;

        Ok(SessionToken {
            access_token: token,
            token_type: TOKEN_TYPE_BEARER.to_string(),
            expires_in: self.expiry_seconds,
        })
    }

    fn decode(&self, token: &str) -> Result<Claims, SigningError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &Self::validation())
            .map_err(SigningError::InvalidToken)?;

        Ok(token_data.claims)
    }
}
