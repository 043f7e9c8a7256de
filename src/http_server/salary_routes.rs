//! Salary HTTP Routes
//!
//! CRUD and statistics endpoints under `/api/salaries`. Every route here sits
//! behind the bearer gate; see [`super::middleware::require_bearer`].

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use tracing::info;

use crate::salary::{DepartmentStats, Salary, Stats, SubDepartmentStats};
use crate::service::SalaryService;

use super::errors::ApiResult;

// ==================
// Shared State
// ==================

/// Salary state shared across handlers
pub struct SalaryState {
    pub service: SalaryService,
}

impl SalaryState {
    pub fn new(service: SalaryService) -> Self {
        Self { service }
    }
}

/// Salary routes, relative to `/api/salaries`
pub fn salary_routes(state: Arc<SalaryState>) -> Router {
    Router::new()
        .route("/", get(list_salaries).post(create_salary))
        .route("/:id", delete(delete_salary))
        .route("/stats", get(stats_all))
        .route("/stats/contracts", get(stats_contracts))
        .route("/stats/departments", get(stats_departments))
        .route("/stats/sub-departments", get(stats_sub_departments))
        .with_state(state)
}

// ==================
// CRUD Handlers
// ==================

async fn create_salary(
    State(state): State<Arc<SalaryState>>,
    payload: Result<Json<Salary>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Salary>)> {
    let Json(salary) = payload?;
    salary.validate()?;

    let stored = state.service.create(&salary)?;
    info!(id = ?stored.id, department = %stored.department, "salary created");

    Ok((StatusCode::CREATED, Json(stored)))
}

async fn list_salaries(State(state): State<Arc<SalaryState>>) -> ApiResult<Json<Vec<Salary>>> {
    Ok(Json(state.service.get_all()?))
}

async fn delete_salary(
    State(state): State<Arc<SalaryState>>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<StatusCode> {
    let Path(id) = id?;
    state.service.delete_by_id(id)?;
    info!(id, "salary deleted");

    Ok(StatusCode::NO_CONTENT)
}

// ==================
// Statistics Handlers
// ==================

async fn stats_all(State(state): State<Arc<SalaryState>>) -> ApiResult<Json<Stats>> {
    Ok(Json(state.service.stats_all()?))
}

async fn stats_contracts(State(state): State<Arc<SalaryState>>) -> ApiResult<Json<Stats>> {
    Ok(Json(state.service.stats_contracts()?))
}

async fn stats_departments(
    State(state): State<Arc<SalaryState>>,
) -> ApiResult<Json<Vec<DepartmentStats>>> {
    Ok(Json(state.service.stats_by_department()?))
}

async fn stats_sub_departments(
    State(state): State<Arc<SalaryState>>,
) -> ApiResult<Json<Vec<SubDepartmentStats>>> {
    Ok(Json(state.service.stats_by_subdepartment()?))
}
