//! Auth HTTP Routes
//!
//! `POST /auth/login` exchanges the configured credential pair for a bearer
//! token.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Json, State},
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::auth::{CredentialValidator, JwtManager, LoginRequest};

use super::errors::{ApiError, ApiResult};

/// Shared auth state
pub struct AuthState {
    pub credentials: Arc<dyn CredentialValidator>,
    pub jwt: Arc<JwtManager>,
}

impl AuthState {
    pub fn new(credentials: Arc<dyn CredentialValidator>, jwt: Arc<JwtManager>) -> Self {
        Self { credentials, jwt }
    }
}

/// Auth routes with shared state
pub fn auth_routes(state: Arc<AuthState>) -> Router {
    Router::new()
        .route("/login", post(login_handler))
        .with_state(state)
}

// ==================
// Request/Response Types
// ==================

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

// ==================
// Handlers
// ==================

/// Login handler
async fn login_handler(
    State(state): State<Arc<AuthState>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Json<TokenResponse>> {
    let Json(request) = payload?;
    if !request.is_complete() {
        return Err(ApiError::Validation(
            "username and password are required".to_string(),
        ));
    }

    let user = state
        .credentials
        .validate(&request.username, &request.password)
        .inspect_err(|e| warn!(username = %request.username, reason = %e, "login rejected"))?;

    let access_token = state.jwt.issue(&user)?;
    info!(user_id = user.id, "access token issued");

    Ok(Json(TokenResponse { access_token }))
}
