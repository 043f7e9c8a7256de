//! # Dataset Seeding
//!
//! One-time bulk load of a JSON fixture. Only runs against an empty table, so
//! repeated startups never duplicate rows.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::salary::Salary;

use super::errors::{StorageError, StorageResult};
use super::repository::SalaryRepository;

/// Parse a dataset: a JSON array in the same format `POST /api/salaries` accepts
pub fn parse_dataset(content: &str) -> StorageResult<Vec<Salary>> {
    let salaries: Vec<Salary> =
        serde_json::from_str(content).map_err(|e| StorageError::Dataset(e.to_string()))?;

    for (index, salary) in salaries.iter().enumerate() {
        salary
            .validate()
            .map_err(|e| StorageError::Dataset(format!("entry {}: {}", index, e)))?;
    }

    Ok(salaries)
}

/// Insert every salary if the store is empty. Returns how many were inserted.
pub fn seed_if_empty(repo: &dyn SalaryRepository, salaries: &[Salary]) -> StorageResult<usize> {
    let existing = repo.count()?;
    if existing > 0 {
        info!(existing, "salary table already populated, skipping seed");
        return Ok(0);
    }

    for salary in salaries {
        repo.create(salary)?;
    }

    info!(inserted = salaries.len(), "seeded salaries from dataset");
    Ok(salaries.len())
}

/// Read a dataset file and seed it if the store is empty
pub fn seed_from_file(repo: &dyn SalaryRepository, path: &Path) -> StorageResult<usize> {
    let content = fs::read_to_string(path)?;
    let salaries = parse_dataset(&content)?;
    seed_if_empty(repo, &salaries)
}
