//! # Salary Statistics
//!
//! `{mean, max, min}` over a subset of salaries, plus the department and
//! sub-department groupings.
//!
//! Empty subsets yield zeros rather than nulls.

use serde::{Deserialize, Serialize};

/// Aggregate over a set of salary values
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub mean: f64,
    pub max: f64,
    pub min: f64,
}

impl Stats {
    /// Build from SQL aggregate columns, where NULL means "no rows"
    pub fn from_aggregates(min: Option<f64>, max: Option<f64>, mean: Option<f64>) -> Self {
        Self {
            mean: mean.unwrap_or_default(),
            max: max.unwrap_or_default(),
            min: min.unwrap_or_default(),
        }
    }

    /// Compute directly over a sequence of values
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let mut count = 0usize;
        let mut sum = 0.0;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;

        for value in values {
            count += 1;
            sum += value;
            min = min.min(value);
            max = max.max(value);
        }

        if count == 0 {
            return Self::default();
        }

        Self {
            mean: sum / count as f64,
            max,
            min,
        }
    }
}

/// Statistics for one department
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentStats {
    pub department: String,
    pub stats: Stats,
}

/// Statistics for one (department, sub-department) pair.
///
/// The stats nested under `department_stats` are the aggregate of the
/// sub-department group itself; the wrapper only carries the department name
/// alongside them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubDepartmentStats {
    pub sub_department: String,
    pub department_stats: DepartmentStats,
}

impl SubDepartmentStats {
    pub fn new(department: impl Into<String>, sub_department: impl Into<String>, stats: Stats) -> Self {
        Self {
            sub_department: sub_department.into(),
            department_stats: DepartmentStats {
                department: department.into(),
                stats,
            },
        }
    }

    pub fn department(&self) -> &str {
        &self.department_stats.department
    }

    pub fn stats(&self) -> Stats {
        self.department_stats.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_values() {
        let stats = Stats::from_values([15.0, 30.0, 45.0]);
        assert_eq!(
            stats,
            Stats {
                mean: 30.0,
                max: 45.0,
                min: 15.0
            }
        );
    }

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(Stats::from_values(std::iter::empty()), Stats::default());
        assert_eq!(Stats::from_aggregates(None, None, None), Stats::default());
    }

    #[test]
    fn test_sub_department_shape() {
        let entry = SubDepartmentStats::new(
            "Banking",
            "Loan",
            Stats {
                mean: 15.0,
                max: 20.0,
                min: 10.0,
            },
        );

        assert_eq!(
            serde_json::to_value(&entry).unwrap(),
            json!({
                "sub_department": "Loan",
                "department_stats": {
                    "department": "Banking",
                    "stats": {"mean": 15.0, "max": 20.0, "min": 10.0}
                }
            })
        );
        assert_eq!(entry.department(), "Banking");
    }
}
