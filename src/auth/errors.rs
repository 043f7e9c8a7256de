//! # Auth Errors
//!
//! Error types for the authentication module.

use thiserror::Error;

/// Result type for auth operations
pub type AuthResult<T> = Result<T, AuthError>;

/// Authentication errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    // ==================
    // Login Errors
    // ==================

    /// Username/password pair did not match
    #[error("invalid user")]
    InvalidCredentials,

    // ==================
    // Bearer Token Errors
    // ==================

    /// No usable `Authorization: Bearer` header
    #[error("Authentication required")]
    AuthenticationRequired,

    /// Token could not be decoded or its claims are not well-formed
    #[error("Malformed token")]
    MalformedToken,

    /// Token signature does not match the shared secret
    #[error("Invalid token signature")]
    InvalidSignature,

    /// Token was signed with something other than HMAC
    #[error("Unexpected signing algorithm")]
    UnexpectedAlgorithm,

    /// Token `exp` is in the past
    #[error("Token expired")]
    TokenExpired,

    // ==================
    // Internal Errors
    // ==================

    /// Token signing failed
    #[error("Internal error: token generation failed")]
    TokenGenerationFailed,
}

impl AuthError {
    /// Returns the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            // 401 Unauthorized
            AuthError::InvalidCredentials => 401,
            AuthError::AuthenticationRequired => 401,
            AuthError::MalformedToken => 401,
            AuthError::InvalidSignature => 401,
            AuthError::UnexpectedAlgorithm => 401,
            AuthError::TokenExpired => 401,

            // 500 Internal Server Error
            AuthError::TokenGenerationFailed => 500,
        }
    }

    /// Returns whether this error should be logged at warn level
    pub fn is_client_error(&self) -> bool {
        self.status_code() < 500
    }
}
