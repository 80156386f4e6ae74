use actix_web::{web, HttpResponse};
use sqlx::SqlitePool;
use validator::Validate;

use crate::db::{self, StorageError};
use crate::errors::AppError;
use crate::models::employee::{Employee, EmployeeFields, EmployeeWithHistory};

fn not_found() -> AppError {
    AppError::NotFound("Employee not found".to_string())
}

// The engine rejects a department_id that references nothing.
fn map_write_error(err: StorageError) -> AppError {
    match err {
        StorageError::ConstraintViolation(_) => AppError::InvalidReference("Department not found".to_string()),
        other => other.into(),
    }
}

pub async fn get_employees(pool: web::Data<SqlitePool>) -> Result<HttpResponse, AppError> {
    let mut conn = pool.acquire().await?;
    let employees = db::employee::list(&mut conn).await?;
    Ok(HttpResponse::Ok().json(employees))
}

pub async fn get_employee(
    pool: web::Data<SqlitePool>,
    employee_id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let employee_id = employee_id.into_inner();
    let mut conn = pool.acquire().await?;

    let employee = db::employee::get(&mut conn, employee_id)
        .await?
        .ok_or_else(not_found)?;
    let job_histories = db::job_history::list_by_employee(&mut conn, employee_id).await?;

    Ok(HttpResponse::Ok().json(EmployeeWithHistory { employee, job_histories }))
}

pub async fn create_employee(
    pool: web::Data<SqlitePool>,
    new_employee: web::Query<EmployeeFields>,
) -> Result<HttpResponse, AppError> {
    let fields = new_employee.into_inner();
    fields.validate()?;
    let mut conn = pool.acquire().await?;

    let employee_id = db::employee::insert(&mut conn, &fields)
        .await
        .map_err(map_write_error)?;
    log::debug!("created employee {} in department {}", employee_id, fields.department_id);

    Ok(HttpResponse::Ok().json(Employee::from_fields(employee_id, fields)))
}

pub async fn update_employee(
    pool: web::Data<SqlitePool>,
    employee_id: web::Path<i64>,
    updates: web::Query<EmployeeFields>,
) -> Result<HttpResponse, AppError> {
    let employee_id = employee_id.into_inner();
    let fields = updates.into_inner();
    fields.validate()?;
    let mut conn = pool.acquire().await?;

    let updated = db::employee::update(&mut conn, employee_id, &fields)
        .await
        .map_err(map_write_error)?;
    if !updated {
        return Err(not_found());
    }

    Ok(HttpResponse::Ok().json(Employee::from_fields(employee_id, fields)))
}

pub async fn delete_employee(
    pool: web::Data<SqlitePool>,
    employee_id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let employee_id = employee_id.into_inner();
    // Read and delete in one transaction so the returned record is the one removed.
    let mut tx = pool.begin().await?;

    let employee = db::employee::get(&mut tx, employee_id)
        .await?
        .ok_or_else(not_found)?;

    match db::employee::delete(&mut tx, employee_id).await {
        Ok(true) => {}
        Ok(false) => return Err(not_found()),
        Err(StorageError::ConstraintViolation(_)) => {
            return Err(AppError::Conflict("Employee still has job histories".to_string()))
        }
        Err(err) => return Err(err.into()),
    }
    tx.commit().await?;
    log::debug!("deleted employee {}", employee_id);

    Ok(HttpResponse::Ok().json(employee))
}
