//! # Salary Service
//!
//! Access layer between the HTTP handlers and the record store. It adds no
//! behaviour of its own; handlers talk to it so the store can be substituted.

use std::sync::Arc;

use crate::salary::{DepartmentStats, Salary, Stats, SubDepartmentStats};
use crate::storage::{SalaryRepository, StorageResult};

/// Salary operations exposed to the HTTP layer
#[derive(Clone)]
pub struct SalaryService {
    repository: Arc<dyn SalaryRepository>,
}

impl SalaryService {
    pub fn new(repository: Arc<dyn SalaryRepository>) -> Self {
        Self { repository }
    }

    pub fn create(&self, salary: &Salary) -> StorageResult<Salary> {
        self.repository.create(salary)
    }

    pub fn get_all(&self) -> StorageResult<Vec<Salary>> {
        self.repository.read_all()
    }

    pub fn delete_by_id(&self, id: i64) -> StorageResult<()> {
        self.repository.delete_by_id(id)
    }

    pub fn stats_all(&self) -> StorageResult<Stats> {
        self.repository.stats_all()
    }

    pub fn stats_contracts(&self) -> StorageResult<Stats> {
        self.repository.stats_contracts()
    }

    pub fn stats_by_department(&self) -> StorageResult<Vec<DepartmentStats>> {
        self.repository.stats_by_department()
    }

    pub fn stats_by_subdepartment(&self) -> StorageResult<Vec<SubDepartmentStats>> {
        self.repository.stats_by_subdepartment()
    }
}
