//! # Salary Repository
//!
//! Capability trait for the record store. Handlers and services only see this
//! trait, so tests can swap the SQLite store for the in-memory one.

use crate::salary::{DepartmentStats, Salary, Stats, SubDepartmentStats};

use super::errors::StorageResult;

/// Salary record store
pub trait SalaryRepository: Send + Sync {
    /// Insert a record and return it with its assigned id.
    /// Any id already on the input is ignored.
    fn create(&self, salary: &Salary) -> StorageResult<Salary>;

    /// Every stored record. Order is not part of the contract.
    fn read_all(&self) -> StorageResult<Vec<Salary>>;

    /// Delete by id. Deleting a missing id is not an error.
    fn delete_by_id(&self, id: i64) -> StorageResult<()>;

    /// Number of stored records
    fn count(&self) -> StorageResult<u64>;

    /// Aggregate over every record
    fn stats_all(&self) -> StorageResult<Stats>;

    /// Aggregate over records flagged on-contract
    fn stats_contracts(&self) -> StorageResult<Stats>;

    /// One entry per department, ordered by department name
    fn stats_by_department(&self) -> StorageResult<Vec<DepartmentStats>>;

    /// One entry per (department, sub-department) pair, ordered by both names
    fn stats_by_subdepartment(&self) -> StorageResult<Vec<SubDepartmentStats>>;
}
