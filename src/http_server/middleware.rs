//! Bearer token gate for protected routes.
//!
//! Requests without a valid token are answered here and never reach a
//! handler or the store.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::warn;

use crate::auth::JwtManager;

/// Body of every 401 produced by the gate
#[derive(Debug, Serialize)]
pub struct AuthRequiredResponse {
    pub error: &'static str,
}

impl AuthRequiredResponse {
    pub const MESSAGE: &'static str = "Authentication required";
}

/// Verify `Authorization: Bearer <token>` and stash the claims in the request
/// extensions.
pub async fn require_bearer(
    State(jwt): State<Arc<JwtManager>>,
    mut request: Request,
    next: Next,
) -> Response {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok());
    let verified = jwt.verify_header(header);

    match verified {
        Ok(claims) => {
            request.extensions_mut().insert(claims);
            next.run(request).await
        }
        Err(e) => {
            warn!(
                reason = %e,
                method = %request.method(),
                path = %request.uri().path(),
                "rejected request without valid bearer token"
            );
            (
                StatusCode::UNAUTHORIZED,
                Json(AuthRequiredResponse {
                    error: AuthRequiredResponse::MESSAGE,
                }),
            )
                .into_response()
        }
    }
}
