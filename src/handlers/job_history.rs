use actix_web::{web, HttpResponse};
use sqlx::SqlitePool;
use validator::Validate;

use crate::db::{self, StorageError};
use crate::errors::AppError;
use crate::models::job_history::{JobHistory, JobHistoryFields};

fn not_found() -> AppError {
    AppError::NotFound("JobHistory not found".to_string())
}

fn map_write_error(err: StorageError) -> AppError {
    match err {
        StorageError::ConstraintViolation(_) => AppError::InvalidReference("Employee not found".to_string()),
        other => other.into(),
    }
}

pub async fn get_job_histories(pool: web::Data<SqlitePool>) -> Result<HttpResponse, AppError> {
    let mut conn = pool.acquire().await?;
    let job_histories = db::job_history::list(&mut conn).await?;
    Ok(HttpResponse::Ok().json(job_histories))
}

pub async fn get_job_history(
    pool: web::Data<SqlitePool>,
    job_history_id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let mut conn = pool.acquire().await?;
    let job_history = db::job_history::get(&mut conn, job_history_id.into_inner())
        .await?
        .ok_or_else(not_found)?;
    Ok(HttpResponse::Ok().json(job_history))
}

pub async fn create_job_history(
    pool: web::Data<SqlitePool>,
    new_job_history: web::Query<JobHistoryFields>,
) -> Result<HttpResponse, AppError> {
    let fields = new_job_history.into_inner();
    fields.validate()?;
    let mut conn = pool.acquire().await?;

    let job_history_id = db::job_history::insert(&mut conn, &fields)
        .await
        .map_err(map_write_error)?;
    log::debug!("created job history {} for employee {}", job_history_id, fields.employee_id);

    Ok(HttpResponse::Ok().json(JobHistory::from_fields(job_history_id, fields)))
}

pub async fn update_job_history(
    pool: web::Data<SqlitePool>,
    job_history_id: web::Path<i64>,
    updates: web::Query<JobHistoryFields>,
) -> Result<HttpResponse, AppError> {
    let job_history_id = job_history_id.into_inner();
    let fields = updates.into_inner();
    fields.validate()?;
    let mut conn = pool.acquire().await?;

    let updated = db::job_history::update(&mut conn, job_history_id, &fields)
        .await
        .map_err(map_write_error)?;
    if !updated {
        return Err(not_found());
    }

    Ok(HttpResponse::Ok().json(JobHistory::from_fields(job_history_id, fields)))
}

pub async fn delete_job_history(
    pool: web::Data<SqlitePool>,
    job_history_id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let job_history_id = job_history_id.into_inner();
    let mut tx = pool.begin().await?;

    let job_history = db::job_history::get(&mut tx, job_history_id)
        .await?
        .ok_or_else(not_found)?;
    if !db::job_history::delete(&mut tx, job_history_id).await? {
        return Err(not_found());
    }
    tx.commit().await?;

    Ok(HttpResponse::Ok().json(job_history))
}
