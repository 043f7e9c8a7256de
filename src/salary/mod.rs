//! # Salary Domain
//!
//! The persisted salary record and the derived statistics shapes.

pub mod record;
pub mod stats;
mod string_encoded;

pub use record::{Salary, SalaryValidationError};
pub use stats::{DepartmentStats, Stats, SubDepartmentStats};
