//! End-to-end tests over the full router backed by a SQLite file.

mod common;

use std::collections::BTreeSet;

use axum::http::{Method, StatusCode};
use serde_json::{json, Value};

use common::{authed, json_request, login, salary_json, send, sqlite_router, unauthed};
use salaries::storage::SalaryRepository;

fn stat(body: &Value, field: &str) -> f64 {
    body[field].as_f64().unwrap()
}

// =============================================================================
// Health and login
// =============================================================================

#[tokio::test]
async fn test_health_is_public() {
    let (_tmp, _repo, router) = sqlite_router();

    let (status, body) = send(&router, unauthed(Method::GET, "/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_login_with_default_pair_returns_token() {
    let (_tmp, _repo, router) = sqlite_router();

    let token = login(&router).await;
    assert!(!token.is_empty());
    assert_eq!(token.split('.').count(), 3);
}

#[tokio::test]
async fn test_login_rejects_other_pairs() {
    let (_tmp, _repo, router) = sqlite_router();

    for body in [
        r#"{"username":"pmagnaghi","password":"wrong"}"#,
        r#"{"username":"someone","password":"123456"}"#,
        r#"{"username":"PMAGNAGHI","password":"123456"}"#,
    ] {
        let (status, body) = send(&router, json_request(Method::POST, "/auth/login", body)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "invalid user");
        assert_eq!(body["code"], 401);
    }
}

#[tokio::test]
async fn test_login_rejects_malformed_body() {
    let (_tmp, _repo, router) = sqlite_router();

    for body in ["not json", r#"{"username":"pmagnaghi"}"#, "{}"] {
        let (status, body) = send(&router, json_request(Method::POST, "/auth/login", body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], 400);
    }
}

// =============================================================================
// CRUD
// =============================================================================

#[tokio::test]
async fn test_create_then_list_contains_record() {
    let (_tmp, _repo, router) = sqlite_router();
    let token = login(&router).await;

    let payload = salary_json("Anurag", "90000", true, "Banking", "Loan");
    let (status, created) = send(
        &router,
        authed(Method::POST, "/api/salaries", &token, Some(&payload)),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let id = created["id"].as_i64().unwrap();
    assert!(id > 0);
    assert_eq!(created["name"], "Anurag");
    assert_eq!(created["salary"], "90000");
    assert_eq!(created["on_contract"], "true");

    let (status, list) = send(&router, authed(Method::GET, "/api/salaries", &token, None)).await;
    assert_eq!(status, StatusCode::OK);

    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0], created);
}

#[tokio::test]
async fn test_create_ignores_client_id_and_accepts_native_scalars() {
    let (_tmp, _repo, router) = sqlite_router();
    let token = login(&router).await;

    let payload = json!({
        "id": 999,
        "name": "Nikhil",
        "salary": 110000,
        "currency": "EUR",
        "on_contract": false,
        "department": "Engineering",
        "sub_department": "Platform"
    })
    .to_string();

    let (status, created) = send(
        &router,
        authed(Method::POST, "/api/salaries", &token, Some(&payload)),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_ne!(created["id"], 999);
    assert_eq!(created["salary"], "110000");
    assert_eq!(created["on_contract"], "false");
}

#[tokio::test]
async fn test_create_rejects_malformed_record() {
    let (_tmp, repo, router) = sqlite_router();
    let token = login(&router).await;

    let bad_bodies = [
        "{not json".to_string(),
        salary_json("Anurag", "lots", false, "Banking", "Loan"),
        salary_json("", "10", false, "Banking", "Loan"),
        r#"{"name":"Anurag","salary":"10","currency":"USD"}"#.to_string(),
    ];

    for body in &bad_bodies {
        let (status, body) = send(
            &router,
            authed(Method::POST, "/api/salaries", &token, Some(body)),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], 400);
        assert!(body["error"].as_str().is_some());
    }

    assert_eq!(repo.count().unwrap(), 0);
}

#[tokio::test]
async fn test_delete_removes_record() {
    let (_tmp, _repo, router) = sqlite_router();
    let token = login(&router).await;

    let payload = salary_json("Ragini", "30", false, "Engineering", "Platform");
    let (_, created) = send(
        &router,
        authed(Method::POST, "/api/salaries", &token, Some(&payload)),
    )
    .await;
    let uri = format!("/api/salaries/{}", created["id"]);

    let (status, body) = send(&router, authed(Method::DELETE, &uri, &token, None)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (_, list) = send(&router, authed(Method::GET, "/api/salaries", &token, None)).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn test_delete_missing_id_leaves_store_unchanged() {
    let (_tmp, _repo, router) = sqlite_router();
    let token = login(&router).await;

    let payload = salary_json("Guljit", "30", false, "Administration", "Agriculture");
    send(
        &router,
        authed(Method::POST, "/api/salaries", &token, Some(&payload)),
    )
    .await;

    let (status, _) = send(
        &router,
        authed(Method::DELETE, "/api/salaries/424242", &token, None),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, list) = send(&router, authed(Method::GET, "/api/salaries", &token, None)).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_delete_non_integer_id_is_bad_request() {
    let (_tmp, _repo, router) = sqlite_router();
    let token = login(&router).await;

    let (status, body) = send(
        &router,
        authed(Method::DELETE, "/api/salaries/abc", &token, None),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);
}

// =============================================================================
// Statistics
// =============================================================================

async fn create_all(router: &axum::Router, token: &str, rows: &[(&str, &str, bool, &str, &str)]) {
    for (name, salary, on_contract, dept, sub) in rows {
        let payload = salary_json(name, salary, *on_contract, dept, sub);
        let (status, _) = send(
            router,
            authed(Method::POST, "/api/salaries", token, Some(&payload)),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }
}

#[tokio::test]
async fn test_stats_over_all_records() {
    let (_tmp, _repo, router) = sqlite_router();
    let token = login(&router).await;

    create_all(
        &router,
        &token,
        &[
            ("A", "15", false, "Banking", "Loan"),
            ("B", "30", true, "Banking", "Loan"),
            ("C", "45", false, "Tech", "Platform"),
        ],
    )
    .await;

    let (status, body) = send(&router, authed(Method::GET, "/api/salaries/stats", &token, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stat(&body, "min"), 15.0);
    assert_eq!(stat(&body, "max"), 45.0);
    assert_eq!(stat(&body, "mean"), 30.0);

    let (status, body) = send(
        &router,
        authed(Method::GET, "/api/salaries/stats/contracts", &token, None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stat(&body, "min"), 30.0);
    assert_eq!(stat(&body, "max"), 30.0);
    assert_eq!(stat(&body, "mean"), 30.0);
}

#[tokio::test]
async fn test_stats_on_empty_store_are_zero() {
    let (_tmp, _repo, router) = sqlite_router();
    let token = login(&router).await;

    for uri in ["/api/salaries/stats", "/api/salaries/stats/contracts"] {
        let (status, body) = send(&router, authed(Method::GET, uri, &token, None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"mean": 0.0, "max": 0.0, "min": 0.0}));
    }

    for uri in [
        "/api/salaries/stats/departments",
        "/api/salaries/stats/sub-departments",
    ] {
        let (status, body) = send(&router, authed(Method::GET, uri, &token, None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }
}

#[tokio::test]
async fn test_department_stats() {
    let (_tmp, _repo, router) = sqlite_router();
    let token = login(&router).await;

    create_all(
        &router,
        &token,
        &[
            ("A", "10", false, "Banking", "Loan"),
            ("B", "20", false, "Banking", "Loan"),
            ("C", "100", false, "Tech", "Platform"),
        ],
    )
    .await;

    let (status, body) = send(
        &router,
        authed(Method::GET, "/api/salaries/stats/departments", &token, None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let entries = body.as_array().unwrap();
    let departments: BTreeSet<_> = entries
        .iter()
        .map(|e| e["department"].as_str().unwrap())
        .collect();
    assert_eq!(departments, BTreeSet::from(["Banking", "Tech"]));

    for entry in entries {
        let stats = &entry["stats"];
        match entry["department"].as_str().unwrap() {
            "Banking" => {
                assert_eq!(stat(stats, "min"), 10.0);
                assert_eq!(stat(stats, "max"), 20.0);
                assert_eq!(stat(stats, "mean"), 15.0);
            }
            "Tech" => {
                assert_eq!(stat(stats, "min"), 100.0);
                assert_eq!(stat(stats, "max"), 100.0);
                assert_eq!(stat(stats, "mean"), 100.0);
            }
            other => panic!("unexpected department {}", other),
        }
    }
}

#[tokio::test]
async fn test_sub_department_stats_shape() {
    let (_tmp, _repo, router) = sqlite_router();
    let token = login(&router).await;

    create_all(
        &router,
        &token,
        &[
            ("A", "10", false, "Banking", "Loan"),
            ("B", "30", false, "Banking", "Cards"),
            ("C", "100", false, "Tech", "Platform"),
        ],
    )
    .await;

    let (status, body) = send(
        &router,
        authed(Method::GET, "/api/salaries/stats/sub-departments", &token, None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let entries = body.as_array().unwrap();
    assert_eq!(entries.len(), 3);

    let loan = entries
        .iter()
        .find(|e| e["sub_department"] == "Loan")
        .unwrap();
    assert_eq!(loan["department_stats"]["department"], "Banking");
    assert_eq!(stat(&loan["department_stats"]["stats"], "mean"), 10.0);

    let pairs: BTreeSet<_> = entries
        .iter()
        .map(|e| {
            (
                e["department_stats"]["department"].as_str().unwrap(),
                e["sub_department"].as_str().unwrap(),
            )
        })
        .collect();
    assert_eq!(
        pairs,
        BTreeSet::from([("Banking", "Cards"), ("Banking", "Loan"), ("Tech", "Platform")])
    );
}
