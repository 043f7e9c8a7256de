//! Shared helpers for driving the full router in integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use salaries::auth::{JwtConfig, JwtManager, StaticCredentials};
use salaries::http_server::{HttpServer, HttpServerConfig};
use salaries::service::SalaryService;
use salaries::storage::{SalaryRepository, SqliteSalaryRepository};

pub const TEST_SECRET: &str = "integration_test_secret";
pub const USERNAME: &str = "pmagnaghi";
pub const PASSWORD: &str = "123456";

/// Router over the given store with the default credential pair
pub fn router_with(repo: Arc<dyn SalaryRepository>) -> Router {
    router_with_secret(repo, TEST_SECRET)
}

pub fn router_with_secret(repo: Arc<dyn SalaryRepository>, secret: &str) -> Router {
    HttpServer::new(
        HttpServerConfig::default(),
        SalaryService::new(repo),
        Arc::new(StaticCredentials::default()),
        JwtManager::new(JwtConfig {
            secret: secret.to_string(),
            ..JwtConfig::default()
        }),
    )
    .router()
}

/// Router over a fresh SQLite file; keep the TempDir alive for the test
pub fn sqlite_router() -> (TempDir, Arc<SqliteSalaryRepository>, Router) {
    let tmp = TempDir::new().unwrap();
    let repo = Arc::new(SqliteSalaryRepository::open(tmp.path().join("salaries.db")).unwrap());
    let router = router_with(repo.clone());
    (tmp, repo, router)
}

/// Send a request and decode the JSON body (Null when empty)
pub async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

pub fn json_request(method: Method, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn authed(method: Method, uri: &str, token: &str, body: Option<&str>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token));
    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub fn unauthed(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Log in with the default pair and return the access token
pub async fn login(router: &Router) -> String {
    let body = format!(r#"{{"username":"{}","password":"{}"}}"#, USERNAME, PASSWORD);
    let (status, body) = send(router, json_request(Method::POST, "/auth/login", &body)).await;
    assert_eq!(status, StatusCode::OK);
    body["access_token"].as_str().unwrap().to_string()
}

pub fn salary_json(name: &str, salary: &str, on_contract: bool, dept: &str, sub: &str) -> String {
    format!(
        r#"{{"name":"{}","salary":"{}","currency":"USD","on_contract":"{}","department":"{}","sub_department":"{}"}}"#,
        name, salary, on_contract, dept, sub
    )
}
