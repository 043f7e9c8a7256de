//! # In-Memory Salary Repository
//!
//! Same contract as the SQLite store, computed in process. Intended for tests.

use std::collections::BTreeMap;
use std::sync::RwLock;

use crate::salary::{DepartmentStats, Salary, Stats, SubDepartmentStats};

use super::errors::{StorageError, StorageResult};
use super::repository::SalaryRepository;

#[derive(Debug, Default)]
struct Inner {
    next_id: i64,
    rows: BTreeMap<i64, Salary>,
}

/// In-memory salary repository for testing
#[derive(Debug, Default)]
pub struct InMemorySalaryRepository {
    inner: RwLock<Inner>,
}

impl InMemorySalaryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn grouped<K, F>(&self, key: F) -> StorageResult<BTreeMap<K, Vec<f64>>>
    where
        K: Ord,
        F: Fn(&Salary) -> K,
    {
        let inner = self.inner.read().map_err(|_| StorageError::LockPoisoned)?;
        let mut groups: BTreeMap<K, Vec<f64>> = BTreeMap::new();
        for salary in inner.rows.values() {
            groups.entry(key(salary)).or_default().push(salary.salary);
        }
        Ok(groups)
    }
}

impl SalaryRepository for InMemorySalaryRepository {
    fn create(&self, salary: &Salary) -> StorageResult<Salary> {
        let mut inner = self.inner.write().map_err(|_| StorageError::LockPoisoned)?;
        inner.next_id += 1;
        let id = inner.next_id;
        let stored = salary.clone().with_id(id);
        inner.rows.insert(id, stored.clone());
        Ok(stored)
    }

    fn read_all(&self) -> StorageResult<Vec<Salary>> {
        let inner = self.inner.read().map_err(|_| StorageError::LockPoisoned)?;
        Ok(inner.rows.values().cloned().collect())
    }

    fn delete_by_id(&self, id: i64) -> StorageResult<()> {
        let mut inner = self.inner.write().map_err(|_| StorageError::LockPoisoned)?;
        inner.rows.remove(&id);
        Ok(())
    }

    fn count(&self) -> StorageResult<u64> {
        let inner = self.inner.read().map_err(|_| StorageError::LockPoisoned)?;
        Ok(inner.rows.len() as u64)
    }

    fn stats_all(&self) -> StorageResult<Stats> {
        let inner = self.inner.read().map_err(|_| StorageError::LockPoisoned)?;
        Ok(Stats::from_values(inner.rows.values().map(|s| s.salary)))
    }

    fn stats_contracts(&self) -> StorageResult<Stats> {
        let inner = self.inner.read().map_err(|_| StorageError::LockPoisoned)?;
        Ok(Stats::from_values(
            inner
                .rows
                .values()
                .filter(|s| s.on_contract)
                .map(|s| s.salary),
        ))
    }

    fn stats_by_department(&self) -> StorageResult<Vec<DepartmentStats>> {
        let groups = self.grouped(|s| s.department.clone())?;
        Ok(groups
            .into_iter()
            .map(|(department, values)| DepartmentStats {
                department,
                stats: Stats::from_values(values),
            })
            .collect())
    }

    fn stats_by_subdepartment(&self) -> StorageResult<Vec<SubDepartmentStats>> {
        let groups = self.grouped(|s| (s.department.clone(), s.sub_department.clone()))?;
        Ok(groups
            .into_iter()
            .map(|((department, sub_department), values)| {
                SubDepartmentStats::new(department, sub_department, Stats::from_values(values))
            })
            .collect())
    }
}
