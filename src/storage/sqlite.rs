//! # SQLite Salary Repository
//!
//! Persists salaries in a single `salaries` table. All statistics are SQL
//! aggregates evaluated by the engine.
//!
//! `rusqlite::Connection` is `Send` but not `Sync`, so the single shared
//! handle lives behind a mutex. Statements are short and never span a
//! transaction.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use rusqlite::{params, Connection, Row};
use tracing::info;

use crate::salary::{DepartmentStats, Salary, Stats, SubDepartmentStats};

use super::errors::{StorageError, StorageResult};
use super::repository::SalaryRepository;

/// Busy timeout applied to the connection
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS salaries (\
    id INTEGER PRIMARY KEY, \
    name VARCHAR(256), \
    salary REAL, \
    currency VARCHAR(64), \
    on_contract INTEGER NULL, \
    department VARCHAR(256), \
    sub_department VARCHAR(256))";

const SELECT_ALL: &str = "SELECT id, name, salary, currency, on_contract, department, sub_department \
    FROM salaries";

const STATS_ALL: &str = "SELECT MIN(salary), MAX(salary), AVG(salary) FROM salaries";

const STATS_CONTRACTS: &str =
    "SELECT MIN(salary), MAX(salary), AVG(salary) FROM salaries WHERE on_contract = 1";

const STATS_BY_DEPARTMENT: &str = "SELECT department, MIN(salary), MAX(salary), AVG(salary) \
    FROM salaries GROUP BY department ORDER BY department";

const STATS_BY_SUB_DEPARTMENT: &str =
    "SELECT department, sub_department, MIN(salary), MAX(salary), AVG(salary) \
    FROM salaries GROUP BY department, sub_department ORDER BY department, sub_department";

/// SQLite-backed salary store
pub struct SqliteSalaryRepository {
    connection: Mutex<Connection>,
}

impl SqliteSalaryRepository {
    /// Open (or create) the database file and ensure the table exists.
    /// `:memory:` opens a private in-memory database.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let path = path.as_ref();
        let connection = if path == Path::new(":memory:") {
            Connection::open_in_memory()?
        } else {
            Connection::open(path)?
        };
        let repo = Self::from_connection(connection)?;
        info!(path = %path.display(), "salary store opened");
        Ok(repo)
    }

    /// Private in-memory database, mostly for tests
    pub fn open_in_memory() -> StorageResult<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(connection: Connection) -> StorageResult<Self> {
        connection.busy_timeout(BUSY_TIMEOUT)?;
        connection.execute(CREATE_TABLE, [])?;
        Ok(Self {
            connection: Mutex::new(connection),
        })
    }

    fn lock(&self) -> StorageResult<MutexGuard<'_, Connection>> {
        self.connection
            .lock()
            .map_err(|_| StorageError::LockPoisoned)
    }

    fn aggregate(&self, sql: &str) -> StorageResult<Stats> {
        let conn = self.lock()?;
        let stats = conn.query_row(sql, [], |row| {
            Ok(Stats::from_aggregates(row.get(0)?, row.get(1)?, row.get(2)?))
        })?;
        Ok(stats)
    }
}

fn salary_from_row(row: &Row<'_>) -> rusqlite::Result<Salary> {
    Ok(Salary {
        id: Some(row.get(0)?),
        name: row.get(1)?,
        salary: row.get(2)?,
        currency: row.get(3)?,
        on_contract: row.get::<_, Option<bool>>(4)?.unwrap_or(false),
        department: row.get(5)?,
        sub_department: row.get(6)?,
    })
}

impl SalaryRepository for SqliteSalaryRepository {
    fn create(&self, salary: &Salary) -> StorageResult<Salary> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO salaries (name, salary, currency, on_contract, department, sub_department) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                salary.name,
                salary.salary,
                salary.currency,
                salary.on_contract,
                salary.department,
                salary.sub_department,
            ],
        )?;
        let id = conn.last_insert_rowid();
        Ok(salary.clone().with_id(id))
    }

    fn read_all(&self) -> StorageResult<Vec<Salary>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(SELECT_ALL)?;
        let rows = stmt.query_map([], salary_from_row)?;
        let salaries = rows.collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(salaries)
    }

    fn delete_by_id(&self, id: i64) -> StorageResult<()> {
        let conn = self.lock()?;
        conn.execute("DELETE FROM salaries WHERE id = ?1", params![id])?;
        Ok(())
    }

    fn count(&self) -> StorageResult<u64> {
        let conn = self.lock()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM salaries", [], |row| row.get(0))?;
        Ok(count.max(0) as u64)
    }

    fn stats_all(&self) -> StorageResult<Stats> {
        self.aggregate(STATS_ALL)
    }

    fn stats_contracts(&self) -> StorageResult<Stats> {
        self.aggregate(STATS_CONTRACTS)
    }

    fn stats_by_department(&self) -> StorageResult<Vec<DepartmentStats>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(STATS_BY_DEPARTMENT)?;
        let rows = stmt.query_map([], |row| {
            Ok(DepartmentStats {
                department: row.get(0)?,
                stats: Stats::from_aggregates(row.get(1)?, row.get(2)?, row.get(3)?),
            })
        })?;
        let groups = rows.collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(groups)
    }

    fn stats_by_subdepartment(&self) -> StorageResult<Vec<SubDepartmentStats>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(STATS_BY_SUB_DEPARTMENT)?;
        let rows = stmt.query_map([], |row| {
            let department: String = row.get(0)?;
            let sub_department: String = row.get(1)?;
            let stats = Stats::from_aggregates(row.get(2)?, row.get(3)?, row.get(4)?);
            Ok(SubDepartmentStats::new(department, sub_department, stats))
        })?;
        let groups = rows.collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(groups)
    }
}
