//! # JWT Token Management
//!
//! Issues and verifies HMAC-signed bearer tokens.
//!
//! ## Invariants
//! - Stateless validation (no session table, no revocation)
//! - Only HMAC algorithms are accepted on verification
//! - `exp` is enforced

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use super::errors::{AuthError, AuthResult};
use super::user::User;

/// Secret used when nothing else is configured
pub const DEFAULT_SECRET: &str = "CHANGE_THIS_SECRET_IN_PRODUCTION";

/// Default access token lifetime in seconds
pub const DEFAULT_TOKEN_TTL_SECS: i64 = 3600;

/// Algorithms accepted on verification
const ACCEPTED_ALGORITHMS: [Algorithm; 3] = [Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];

/// JWT claims for access tokens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtClaims {
    /// User ID
    pub id: i64,

    /// Issued at timestamp (Unix epoch seconds)
    pub iat: i64,

    /// Expiration timestamp (Unix epoch seconds)
    pub exp: i64,
}

/// JWT configuration
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Shared HMAC secret
    pub secret: String,

    /// Access token lifetime
    pub access_token_ttl: Duration,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: DEFAULT_SECRET.to_string(),
            access_token_ttl: Duration::seconds(DEFAULT_TOKEN_TTL_SECS),
        }
    }
}

/// JWT manager for token generation and validation
#[derive(Clone)]
pub struct JwtManager {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtManager {
    /// Create a new JWT manager with the given configuration
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Token lifetime
    pub fn ttl(&self) -> Duration {
        self.config.access_token_ttl
    }

    /// Issue an access token for a user
    pub fn issue(&self, user: &User) -> AuthResult<String> {
        let now = Utc::now();
        let exp = now + self.config.access_token_ttl;

        let claims = JwtClaims {
            id: user.id,
            iat: now.timestamp(),
            exp: exp.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|_| AuthError::TokenGenerationFailed)
    }

    /// Validate a raw token and extract its claims
    pub fn verify(&self, token: &str) -> AuthResult<JwtClaims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.algorithms = ACCEPTED_ALGORITHMS.to_vec();
        validation.validate_aud = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "iat"]);

        let token_data = decode::<JwtClaims>(token, &self.decoding_key, &validation).map_err(
            |e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                ErrorKind::InvalidSignature => AuthError::InvalidSignature,
                ErrorKind::InvalidAlgorithm | ErrorKind::InvalidAlgorithmName => {
                    AuthError::UnexpectedAlgorithm
                }
                _ => AuthError::MalformedToken,
            },
        )?;

        Ok(token_data.claims)
    }

    /// Pull the token out of an `Authorization` header value
    pub fn bearer_token(header: Option<&str>) -> AuthResult<&str> {
        let value = header.ok_or(AuthError::AuthenticationRequired)?;
        let mut parts = value.split(' ');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(scheme), Some(token), None)
                if scheme.eq_ignore_ascii_case("bearer") && !token.is_empty() =>
            {
                Ok(token)
            }
            _ => Err(AuthError::AuthenticationRequired),
        }
    }

    /// Verify the `Authorization` header of a request
    pub fn verify_header(&self, header: Option<&str>) -> AuthResult<JwtClaims> {
        let token = Self::bearer_token(header)?;
        self.verify(token)
    }
}
