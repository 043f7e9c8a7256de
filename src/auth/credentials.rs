//! # Credential Validation
//!
//! Login checks go through [`CredentialValidator`] so a real identity provider
//! can replace the static pair without touching token issuance or handlers.

use serde::{Deserialize, Serialize};
use subtle::ConstantTimeEq;

use super::errors::{AuthError, AuthResult};
use super::user::User;

/// Id given to the single statically configured user
pub const STATIC_USER_ID: i64 = 1;

/// Resolves a username/password pair to a user
pub trait CredentialValidator: Send + Sync {
    fn validate(&self, username: &str, password: &str) -> AuthResult<User>;
}

/// One fixed username/password pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticCredentials {
    pub username: String,
    pub password: String,
}

impl Default for StaticCredentials {
    fn default() -> Self {
        Self {
            username: "pmagnaghi".to_string(),
            password: "123456".to_string(),
        }
    }
}

impl StaticCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Constant-time comparison of two strings
fn constant_time_str_eq(a: &str, b: &str) -> bool {
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

impl CredentialValidator for StaticCredentials {
    fn validate(&self, username: &str, password: &str) -> AuthResult<User> {
        // Evaluate both so timing does not reveal which field was wrong
        let username_ok = constant_time_str_eq(username, &self.username);
        let password_ok = constant_time_str_eq(password, &self.password);

        if username_ok & password_ok {
            Ok(User {
                id: STATIC_USER_ID,
                username: self.username.clone(),
                password: self.password.clone(),
            })
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}
