use sqlx::SqliteConnection;

use crate::db::StorageError;
use crate::models::department::{Department, DepartmentFields};

pub async fn list(conn: &mut SqliteConnection) -> Result<Vec<Department>, StorageError> {
    let departments = sqlx::query_as::<_, Department>(
        "SELECT department_id, name, region FROM departments ORDER BY department_id",
    )
    .fetch_all(&mut *conn)
    .await?;
    Ok(departments)
}

pub async fn get(conn: &mut SqliteConnection, id: i64) -> Result<Option<Department>, StorageError> {
    let department = sqlx::query_as::<_, Department>(
        "SELECT department_id, name, region FROM departments WHERE department_id = ?",
    )
    .bind(id)
    .fetch_optional(&mut *conn)
    .await?;
    Ok(department)
}

pub async fn insert(conn: &mut SqliteConnection, fields: &DepartmentFields) -> Result<i64, StorageError> {
    let result = sqlx::query("INSERT INTO departments (name, region) VALUES (?, ?)")
        .bind(&fields.name)
        .bind(&fields.region)
        .execute(&mut *conn)
        .await?;
    Ok(result.last_insert_rowid())
}

/// Replaces every mutable column. Returns `false` when no row has this id.
pub async fn update(conn: &mut SqliteConnection, id: i64, fields: &DepartmentFields) -> Result<bool, StorageError> {
    let result = sqlx::query("UPDATE departments SET name = ?, region = ? WHERE department_id = ?")
        .bind(&fields.name)
        .bind(&fields.region)
        .bind(id)
        .execute(&mut *conn)
        .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn delete(conn: &mut SqliteConnection, id: i64) -> Result<bool, StorageError> {
    let result = sqlx::query("DELETE FROM departments WHERE department_id = ?")
        .bind(id)
        .execute(&mut *conn)
        .await?;
    Ok(result.rows_affected() > 0)
}
