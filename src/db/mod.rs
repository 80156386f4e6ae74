pub mod department;
pub mod employee;
pub mod job_history;

use sqlx::error::ErrorKind;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

use crate::config::{DeletePolicy, Settings};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),
    #[error("database error: {0}")]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        if let Some(db_err) = err.as_database_error() {
            if matches!(db_err.kind(), ErrorKind::ForeignKeyViolation)
                || db_err.message().contains("FOREIGN KEY constraint failed")
            {
                return StorageError::ConstraintViolation(db_err.message().to_string());
            }
        }
        StorageError::Database(err)
    }
}

/// Opens the pool described by `settings` and creates any missing tables.
pub async fn create_pool(settings: &Settings) -> Result<SqlitePool, StorageError> {
    let options = SqliteConnectOptions::from_str(&settings.database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    // An in-memory database lives and dies with its connection, so keep exactly one open.
    let pool = if settings.database_url.contains(":memory:") {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
            .connect_with(options)
            .await?
    } else {
        SqlitePoolOptions::new()
            .max_connections(settings.max_connections)
            .connect_with(options)
            .await?
    };

    init_schema(&pool, settings.delete_policy).await?;
    Ok(pool)
}

async fn init_schema(pool: &SqlitePool, policy: DeletePolicy) -> Result<(), StorageError> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS departments (
            department_id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            region TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await?;

    sqlx::query(&format!(
        "CREATE TABLE IF NOT EXISTS employees (
            employee_id INTEGER PRIMARY KEY AUTOINCREMENT,
            department_id INTEGER REFERENCES departments(department_id) ON DELETE {},
            name TEXT NOT NULL,
            birthday TEXT NOT NULL,
            salary REAL NOT NULL,
            job TEXT NOT NULL
        )",
        policy.as_sql()
    ))
    .execute(pool)
    .await?;

    sqlx::query(&format!(
        "CREATE TABLE IF NOT EXISTS job_histories (
            job_history_id INTEGER PRIMARY KEY AUTOINCREMENT,
            employee_id INTEGER REFERENCES employees(employee_id) ON DELETE {},
            title TEXT NOT NULL,
            start_date TEXT NOT NULL,
            end_date TEXT NOT NULL,
            salary REAL NOT NULL,
            job TEXT NOT NULL
        )",
        policy.as_sql()
    ))
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_employees_department ON employees(department_id)")
        .execute(pool)
        .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_job_histories_employee ON job_histories(employee_id)")
        .execute(pool)
        .await?;

    log::debug!("schema ready (delete policy: {})", policy);
    Ok(())
}

#[cfg(test)]
pub(crate) async fn test_pool(policy: DeletePolicy) -> SqlitePool {
    create_pool(&Settings::in_memory(policy))
        .await
        .expect("in-memory database")
}
