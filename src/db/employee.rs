use sqlx::SqliteConnection;

use crate::db::StorageError;
use crate::models::employee::{Employee, EmployeeFields};

const COLUMNS: &str = "employee_id, name, birthday, salary, job, department_id";

pub async fn list(conn: &mut SqliteConnection) -> Result<Vec<Employee>, StorageError> {
    let employees = sqlx::query_as::<_, Employee>(&format!(
        "SELECT {COLUMNS} FROM employees ORDER BY employee_id"
    ))
    .fetch_all(&mut *conn)
    .await?;
    Ok(employees)
}

pub async fn list_by_department(conn: &mut SqliteConnection, department_id: i64) -> Result<Vec<Employee>, StorageError> {
    let employees = sqlx::query_as::<_, Employee>(&format!(
        "SELECT {COLUMNS} FROM employees WHERE department_id = ? ORDER BY employee_id"
    ))
    .bind(department_id)
    .fetch_all(&mut *conn)
    .await?;
    Ok(employees)
}

pub async fn get(conn: &mut SqliteConnection, id: i64) -> Result<Option<Employee>, StorageError> {
    let employee = sqlx::query_as::<_, Employee>(&format!(
        "SELECT {COLUMNS} FROM employees WHERE employee_id = ?"
    ))
    .bind(id)
    .fetch_optional(&mut *conn)
    .await?;
    Ok(employee)
}

/// Fails with `ConstraintViolation` when `department_id` does not reference a department.
pub async fn insert(conn: &mut SqliteConnection, fields: &EmployeeFields) -> Result<i64, StorageError> {
    let result = sqlx::query(
        "INSERT INTO employees (name, birthday, salary, job, department_id) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&fields.name)
    .bind(&fields.birthday)
    .bind(fields.salary)
    .bind(&fields.job)
    .bind(fields.department_id)
    .execute(&mut *conn)
    .await?;
    Ok(result.last_insert_rowid())
}

pub async fn update(conn: &mut SqliteConnection, id: i64, fields: &EmployeeFields) -> Result<bool, StorageError> {
    let result = sqlx::query(
        "UPDATE employees SET name = ?, birthday = ?, salary = ?, job = ?, department_id = ? WHERE employee_id = ?",
    )
    .bind(&fields.name)
    .bind(&fields.birthday)
    .bind(fields.salary)
    .bind(&fields.job)
    .bind(fields.department_id)
    .bind(id)
    .execute(&mut *conn)
    .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn delete(conn: &mut SqliteConnection, id: i64) -> Result<bool, StorageError> {
    let result = sqlx::query("DELETE FROM employees WHERE employee_id = ?")
        .bind(id)
        .execute(&mut *conn)
        .await?;
    Ok(result.rows_affected() > 0)
}
