//! # Salary Record
//!
//! The sole persisted entity. Records are created, read, and deleted; never
//! updated in place.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation failures for an incoming salary payload
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SalaryValidationError {
    /// A required text field was empty or whitespace
    #[error("field '{0}' is required")]
    MissingField(&'static str),

    /// Salary was NaN or infinite
    #[error("field 'salary' must be a finite number")]
    NonFiniteSalary,
}

/// One employee's compensation and organizational placement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Salary {
    /// Store-assigned identifier; `None` until persisted
    #[serde(default, skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    pub name: String,

    #[serde(with = "crate::salary::string_encoded::number")]
    pub salary: f64,

    /// Free-form currency code
    pub currency: String,

    #[serde(default, with = "crate::salary::string_encoded::boolean")]
    pub on_contract: bool,

    pub department: String,

    pub sub_department: String,
}

impl Salary {
    /// Build an unpersisted record
    pub fn new(
        name: impl Into<String>,
        salary: f64,
        currency: impl Into<String>,
        on_contract: bool,
        department: impl Into<String>,
        sub_department: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            salary,
            currency: currency.into(),
            on_contract,
            department: department.into(),
            sub_department: sub_department.into(),
        }
    }

    /// Whether the store has assigned an id yet
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Return a copy carrying the given id
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Check required fields before the record reaches the store
    pub fn validate(&self) -> Result<(), SalaryValidationError> {
        let required = [
            ("name", &self.name),
            ("currency", &self.currency),
            ("department", &self.department),
            ("sub_department", &self.sub_department),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(SalaryValidationError::MissingField(field));
            }
        }

        if !self.salary.is_finite() {
            return Err(SalaryValidationError::NonFiniteSalary);
        }

        Ok(())
    }
}
