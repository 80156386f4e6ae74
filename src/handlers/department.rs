use actix_web::{web, HttpResponse};
use serde_json::json;
use sqlx::SqlitePool;

use crate::db::{self, StorageError};
use crate::errors::AppError;
use crate::models::department::{Department, DepartmentFields, DepartmentWithEmployees};
use crate::models::employee::EmployeeWithHistory;

fn not_found() -> AppError {
    AppError::NotFound("Department not found".to_string())
}

pub async fn get_departments(pool: web::Data<SqlitePool>) -> Result<HttpResponse, AppError> {
    let mut conn = pool.acquire().await?;
    let departments = db::department::list(&mut conn).await?;
    Ok(HttpResponse::Ok().json(departments))
}

/// Department with its employees, each carrying their job histories.
pub async fn get_department(
    pool: web::Data<SqlitePool>,
    department_id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let department_id = department_id.into_inner();
    let mut conn = pool.acquire().await?;

    let department = db::department::get(&mut conn, department_id)
        .await?
        .ok_or_else(not_found)?;

    let mut employees = Vec::new();
    for employee in db::employee::list_by_department(&mut conn, department_id).await? {
        let job_histories = db::job_history::list_by_employee(&mut conn, employee.employee_id).await?;
        employees.push(EmployeeWithHistory { employee, job_histories });
    }

    Ok(HttpResponse::Ok().json(DepartmentWithEmployees { department, employees }))
}

pub async fn create_department(
    pool: web::Data<SqlitePool>,
    new_department: web::Query<DepartmentFields>,
) -> Result<HttpResponse, AppError> {
    let fields = new_department.into_inner();
    let mut conn = pool.acquire().await?;

    let department_id = db::department::insert(&mut conn, &fields).await?;
    log::debug!("created department {}", department_id);

    Ok(HttpResponse::Ok().json(Department::from_fields(department_id, fields)))
}

pub async fn update_department(
    pool: web::Data<SqlitePool>,
    department_id: web::Path<i64>,
    updates: web::Query<DepartmentFields>,
) -> Result<HttpResponse, AppError> {
    let department_id = department_id.into_inner();
    let fields = updates.into_inner();
    let mut conn = pool.acquire().await?;

    if !db::department::update(&mut conn, department_id, &fields).await? {
        return Err(not_found());
    }

    Ok(HttpResponse::Ok().json(Department::from_fields(department_id, fields)))
}

pub async fn delete_department(
    pool: web::Data<SqlitePool>,
    department_id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let department_id = department_id.into_inner();
    let mut conn = pool.acquire().await?;

    match db::department::delete(&mut conn, department_id).await {
        Ok(true) => {}
        Ok(false) => return Err(not_found()),
        Err(StorageError::ConstraintViolation(_)) => {
            return Err(AppError::Conflict("Department still has employees".to_string()))
        }
        Err(err) => return Err(err.into()),
    }
    log::debug!("deleted department {}", department_id);

    Ok(HttpResponse::Ok().json(json!({
        "Departament deleted with ID": department_id,
    })))
}
