use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

use crate::config::AppConfig;
use crate::student::Student;

/// Error from the record store: connectivity or constraint failures.
///
/// Absent ids are not errors — lookups return `Option` and mutations
/// report `rows_affected` through a `bool`.
#[derive(Debug)]
pub struct StoreError(sqlx::Error);

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Database error: {}", self.0)
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError(err)
    }
}

/// Durable storage of [`Student`] records; sole owner of identity
/// assignment.
///
/// Wraps a `SqlitePool`: each operation acquires a pooled connection
/// around exactly one statement and releases it on every exit path.
/// `AUTOINCREMENT` keeps ids monotonic, so an id is assigned exactly
/// once and never reused after deletion.
#[derive(Clone)]
pub struct StudentStore {
    pool: SqlitePool,
}

impl StudentStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Connect a bounded pool using the configured URL and acquire timeout.
    pub async fn connect(config: &AppConfig) -> Result<Self, StoreError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .acquire_timeout(config.connect_timeout)
            .connect(&config.database_url)
            .await?;
        Ok(Self::new(pool))
    }

    /// Ensure the `students` table exists. Idempotent; safe on every startup.
    pub async fn initialize(&self) -> Result<(), StoreError> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS students (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                email TEXT NOT NULL,
                phone TEXT NOT NULL,
                mark INTEGER NOT NULL
            )",
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Every record, ordered by ascending id (insertion order).
    pub async fn list_all(&self) -> Result<Vec<Student>, StoreError> {
        let students = sqlx::query_as::<_, Student>(
            "SELECT id, name, email, phone, mark FROM students ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(students)
    }

    /// `None` when the id does not exist — absence is not an error.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Student>, StoreError> {
        let student = sqlx::query_as::<_, Student>(
            "SELECT id, name, email, phone, mark FROM students WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(student)
    }

    /// Insert a new record and return the generated id.
    pub async fn create(
        &self,
        name: &str,
        email: &str,
        phone: &str,
        mark: i64,
    ) -> Result<i64, StoreError> {
        let result =
            sqlx::query("INSERT INTO students (name, email, phone, mark) VALUES (?, ?, ?, ?)")
                .bind(name)
                .bind(email)
                .bind(phone)
                .bind(mark)
                .execute(&self.pool)
                .await?;
        Ok(result.last_insert_rowid())
    }

    /// Overwrite all four mutable fields of the row matching `id`.
    ///
    /// Returns whether a row was found. A missing id is a silent no-op
    /// (`false`), never an error.
    pub async fn update(
        &self,
        id: i64,
        name: &str,
        email: &str,
        phone: &str,
        mark: i64,
    ) -> Result<bool, StoreError> {
        let result =
            sqlx::query("UPDATE students SET name = ?, email = ?, phone = ?, mark = ? WHERE id = ?")
                .bind(name)
                .bind(email)
                .bind(phone)
                .bind(mark)
                .bind(id)
                .execute(&self.pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Remove the row matching `id`; no-op (`false`) when absent.
    pub async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM students WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
