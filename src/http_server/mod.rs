//! # HTTP Server Module
//!
//! Axum server exposing the salaries API.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/auth/login` - Exchange credentials for a bearer token
//! - `/api/salaries/*` - Salary records and statistics (bearer token required)

pub mod auth_routes;
pub mod config;
pub mod errors;
pub mod middleware;
pub mod observability_routes;
pub mod salary_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use server::HttpServer;
