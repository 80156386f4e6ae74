use serde::{Deserialize, Serialize};

use crate::models::employee::EmployeeWithHistory;

#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Department {
    #[serde(rename = "DepartmentID")]
    pub department_id: i64,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Region")]
    pub region: String,
}

/// Mutable columns of a department, as accepted by create and update.
#[derive(Deserialize, Debug, Clone)]
pub struct DepartmentFields {
    pub name: String,
    pub region: String,
}

#[derive(Serialize, Debug)]
pub struct DepartmentWithEmployees {
    #[serde(flatten)]
    pub department: Department,
    #[serde(rename = "Employees")]
    pub employees: Vec<EmployeeWithHistory>,
}

impl Department {
    pub fn from_fields(department_id: i64, fields: DepartmentFields) -> Self {
        Self {
            department_id,
            name: fields.name,
            region: fields.region,
        }
    }
}
