//! # HTTP Server
//!
//! Combines the public auth routes and the protected salary routes into one
//! axum router.

use std::sync::Arc;

use axum::middleware::from_fn_with_state;
use axum::Router;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::auth::{CredentialValidator, JwtManager};
use crate::service::SalaryService;

use super::auth_routes::{auth_routes, AuthState};
use super::config::HttpServerConfig;
use super::middleware::require_bearer;
use super::observability_routes::health_routes;
use super::salary_routes::{salary_routes, SalaryState};

/// HTTP Server for the salaries API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server over the given service, credential check, and token manager
    pub fn new(
        config: HttpServerConfig,
        service: SalaryService,
        credentials: Arc<dyn CredentialValidator>,
        jwt: JwtManager,
    ) -> Self {
        let router = Self::build_router(&config, service, credentials, jwt);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(
        config: &HttpServerConfig,
        service: SalaryService,
        credentials: Arc<dyn CredentialValidator>,
        jwt: JwtManager,
    ) -> Router {
        let jwt = Arc::new(jwt);
        let auth_state = Arc::new(AuthState::new(credentials, jwt.clone()));
        let salary_state = Arc::new(SalaryState::new(service));

        let protected = salary_routes(salary_state).layer(from_fn_with_state(jwt, require_bearer));

        Router::new()
            .merge(health_routes())
            .nest("/auth", auth_routes(auth_state))
            .nest("/api/salaries", protected)
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(Self::cors_layer(config)),
            )
    }

    fn cors_layer(config: &HttpServerConfig) -> CorsLayer {
        if config.cors_origins.is_empty() {
            return CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
        }

        let origins: Vec<_> = config
            .cors_origins
            .iter()
            .filter_map(|s| match s.parse() {
                Ok(origin) => Some(origin),
                Err(_) => {
                    warn!(origin = %s, "ignoring unparsable CORS origin");
                    None
                }
            })
            .collect();

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until Ctrl-C
    pub async fn start(self) -> Result<(), std::io::Error> {
        let listener = TcpListener::bind(self.config.socket_addr()).await?;
        info!(addr = %listener.local_addr()?, "salaries API listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("salaries API stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
