use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct JobHistory {
    #[serde(rename = "JobHistoryID")]
    pub job_history_id: i64,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "StartDate")]
    pub start_date: String,
    #[serde(rename = "EndDate")]
    pub end_date: String,
    #[serde(rename = "Salary")]
    pub salary: f64,
    #[serde(rename = "Job")]
    pub job: String,
    #[serde(rename = "EmployeeID")]
    pub employee_id: Option<i64>,
}

#[derive(Deserialize, Validate, Debug, Clone)]
#[validate(schema(function = "validate_job_history_salary"))]
pub struct JobHistoryFields {
    pub title: String,
    pub start_date: String,
    pub end_date: String,
    pub salary: f64,
    pub job: String,
    pub employee_id: i64,
}

impl JobHistory {
    pub fn from_fields(job_history_id: i64, fields: JobHistoryFields) -> Self {
        Self {
            job_history_id,
            title: fields.title,
            start_date: fields.start_date,
            end_date: fields.end_date,
            salary: fields.salary,
            job: fields.job,
            employee_id: Some(fields.employee_id),
        }
    }
}

fn validate_job_history_salary(fields: &JobHistoryFields) -> Result<(), ValidationError> {
    crate::models::validate_salary(fields.salary)
}
