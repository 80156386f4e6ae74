use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::models::job_history::JobHistory;

#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Employee {
    #[serde(rename = "EmployeeID")]
    pub employee_id: i64,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Birthday")]
    pub birthday: String,
    #[serde(rename = "Salary")]
    pub salary: f64,
    #[serde(rename = "Job")]
    pub job: String,
    #[serde(rename = "DepartmentID")]
    pub department_id: Option<i64>,
}

#[derive(Deserialize, Validate, Debug, Clone)]
#[validate(schema(function = "validate_employee_salary"))]
pub struct EmployeeFields {
    pub name: String,
    pub birthday: String,
    pub salary: f64,
    pub job: String,
    pub department_id: i64,
}

impl Employee {
    pub fn from_fields(employee_id: i64, fields: EmployeeFields) -> Self {
        Self {
            employee_id,
            name: fields.name,
            birthday: fields.birthday,
            salary: fields.salary,
            job: fields.job,
            department_id: Some(fields.department_id),
        }
    }
}

#[derive(Serialize, Debug)]
pub struct EmployeeWithHistory {
    #[serde(flatten)]
    pub employee: Employee,
    #[serde(rename = "JobHistories")]
    pub job_histories: Vec<JobHistory>,
}

fn validate_employee_salary(fields: &EmployeeFields) -> Result<(), ValidationError> {
    crate::models::validate_salary(fields.salary)
}
