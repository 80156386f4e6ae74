use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use std::fmt;
use validator::ValidationErrors;

use crate::db::StorageError;

#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    Conflict(String),
    InvalidReference(String),
    DatabaseError(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    detail: String,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            AppError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            AppError::InvalidReference(msg) => write!(f, "Invalid Reference: {}", msg),
            AppError::DatabaseError(msg) => write!(f, "Database Error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::NotFound(msg) => HttpResponse::NotFound().json(ErrorResponse { detail: msg.clone() }),
            AppError::BadRequest(msg) => HttpResponse::BadRequest().json(ErrorResponse { detail: msg.clone() }),
            AppError::Conflict(msg) => HttpResponse::Conflict().json(ErrorResponse { detail: msg.clone() }),
            AppError::InvalidReference(msg) => HttpResponse::UnprocessableEntity().json(ErrorResponse { detail: msg.clone() }),
            // Driver messages stay in the log.
            AppError::DatabaseError(_) => HttpResponse::InternalServerError().json(ErrorResponse {
                detail: "Database error".to_string(),
            }),
        }
    }
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        log::error!("storage failure: {}", err);
        match err {
            StorageError::ConstraintViolation(msg) => AppError::InvalidReference(msg),
            StorageError::Database(err) => AppError::DatabaseError(err.to_string()),
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::from(StorageError::from(err))
    }
}

impl From<ValidationErrors> for AppError {
    fn from(err: ValidationErrors) -> Self {
        AppError::BadRequest(err.to_string())
    }
}
