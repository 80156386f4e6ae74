pub mod department;
pub mod employee;
pub mod job_history;

use std::borrow::Cow;
use validator::ValidationError;

// serde_urlencoded accepts `NaN`, `inf` and out-of-range literals for f64.
pub(crate) fn validate_salary(salary: f64) -> Result<(), ValidationError> {
    if !salary.is_finite() {
        let mut err = ValidationError::new("salary_not_finite");
        err.message = Some(Cow::from("Salary must be a finite number"));
        return Err(err);
    }
    Ok(())
}
