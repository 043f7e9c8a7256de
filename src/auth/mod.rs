//! # Auth Module
//!
//! Login credential checks and stateless bearer tokens.

pub mod credentials;
pub mod errors;
pub mod jwt;
pub mod user;

pub use credentials::{CredentialValidator, StaticCredentials};
pub use errors::{AuthError, AuthResult};
pub use jwt::{JwtClaims, JwtConfig, JwtManager};
pub use user::{LoginRequest, User};
