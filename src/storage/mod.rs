//! Salary record store
//!
//! The store owns the `salaries` table and evaluates every statistic as a SQL
//! aggregate. Callers depend on [`SalaryRepository`] only.
//!
//! # Behaviour
//!
//! - Ids are assigned on insert and never change
//! - Deleting a missing id succeeds
//! - Aggregates over zero rows are zeros
//! - Grouped statistics are ordered lexicographically by their keys

mod errors;
mod memory;
mod repository;
pub mod seed;
mod sqlite;

pub use errors::{StorageError, StorageResult};
pub use memory::InMemorySalaryRepository;
pub use repository::SalaryRepository;
pub use sqlite::SqliteSalaryRepository;
