use sqlx::SqliteConnection;

use crate::db::StorageError;
use crate::models::job_history::{JobHistory, JobHistoryFields};

const COLUMNS: &str = "job_history_id, title, start_date, end_date, salary, job, employee_id";

pub async fn list(conn: &mut SqliteConnection) -> Result<Vec<JobHistory>, StorageError> {
    let histories = sqlx::query_as::<_, JobHistory>(&format!(
        "SELECT {COLUMNS} FROM job_histories ORDER BY job_history_id"
    ))
    .fetch_all(&mut *conn)
    .await?;
    Ok(histories)
}

pub async fn list_by_employee(conn: &mut SqliteConnection, employee_id: i64) -> Result<Vec<JobHistory>, StorageError> {
    let histories = sqlx::query_as::<_, JobHistory>(&format!(
        "SELECT {COLUMNS} FROM job_histories WHERE employee_id = ? ORDER BY job_history_id"
    ))
    .bind(employee_id)
    .fetch_all(&mut *conn)
    .await?;
    Ok(histories)
}

pub async fn get(conn: &mut SqliteConnection, id: i64) -> Result<Option<JobHistory>, StorageError> {
    let history = sqlx::query_as::<_, JobHistory>(&format!(
        "SELECT {COLUMNS} FROM job_histories WHERE job_history_id = ?"
    ))
    .bind(id)
    .fetch_optional(&mut *conn)
    .await?;
    Ok(history)
}

pub async fn insert(conn: &mut SqliteConnection, fields: &JobHistoryFields) -> Result<i64, StorageError> {
    let result = sqlx::query(
        "INSERT INTO job_histories (title, start_date, end_date, salary, job, employee_id) VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(&fields.title)
    .bind(&fields.start_date)
    .bind(&fields.end_date)
    .bind(fields.salary)
    .bind(&fields.job)
    .bind(fields.employee_id)
    .execute(&mut *conn)
    .await?;
    Ok(result.last_insert_rowid())
}

pub async fn update(conn: &mut SqliteConnection, id: i64, fields: &JobHistoryFields) -> Result<bool, StorageError> {
    let result = sqlx::query(
        "UPDATE job_histories SET title = ?, start_date = ?, end_date = ?, salary = ?, job = ?, employee_id = ? WHERE job_history_id = ?",
    )
    .bind(&fields.title)
    .bind(&fields.start_date)
    .bind(&fields.end_date)
    .bind(fields.salary)
    .bind(&fields.job)
    .bind(fields.employee_id)
    .bind(id)
    .execute(&mut *conn)
    .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn delete(conn: &mut SqliteConnection, id: i64) -> Result<bool, StorageError> {
    let result = sqlx::query("DELETE FROM job_histories WHERE job_history_id = ?")
        .bind(id)
        .execute(&mut *conn)
        .await?;
    Ok(result.rows_affected() > 0)
}
