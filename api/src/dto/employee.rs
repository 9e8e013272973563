use serde::{Deserialize, Serialize};
use validator::Validate;

use emp_core::domain::entities::employee::{EmployeeUpdate, NewEmployee};
use emp_core::errors::ValidationError;

/// Salary as sent by clients: a JSON number or a numeric string such as `"5000"`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SalaryInput {
    Number(f64),
    Text(String),
}

impl SalaryInput {
    pub fn to_f64(&self) -> Result<f64, ValidationError> {
        match self {
            SalaryInput::Number(value) => Ok(*value),
            SalaryInput::Text(text) => text
                .trim()
                .parse::<f64>()
                .map_err(|_| ValidationError::invalid_format("salary")),
        }
    }
}

/// Body of `POST /employee`
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CreateEmployeeRequest {
    #[serde(default)]
    #[validate(length(max = 255))]
    pub firstname: Option<String>,

    #[serde(default)]
    #[validate(length(max = 255))]
    pub lastname: Option<String>,

    #[serde(default)]
    pub salary: Option<SalaryInput>,
}

impl CreateEmployeeRequest {
    pub fn into_domain(self) -> Result<NewEmployee, ValidationError> {
        Ok(NewEmployee {
            firstname: self.firstname,
            lastname: self.lastname,
            salary: self.salary.as_ref().map(SalaryInput::to_f64).transpose()?,
        })
    }
}

/// Body of `PATCH /employee/{id}`; every field is optional
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateEmployeeRequest {
    #[serde(default)]
    #[validate(length(max = 255))]
    pub firstname: Option<String>,

    #[serde(default)]
    #[validate(length(max = 255))]
    pub lastname: Option<String>,

    #[serde(default)]
    pub salary: Option<SalaryInput>,
}

impl UpdateEmployeeRequest {
    pub fn into_domain(self) -> Result<EmployeeUpdate, ValidationError> {
        Ok(EmployeeUpdate {
            firstname: self.firstname,
            lastname: self.lastname,
            salary: self.salary.as_ref().map(SalaryInput::to_f64).transpose()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_salary_accepts_number_and_numeric_string() {
        let request: CreateEmployeeRequest =
            serde_json::from_str(r#"{"firstname":"Pritesh","lastname":"Patel","salary":"5000"}"#)
                .unwrap();
        assert_eq!(request.into_domain().unwrap().salary, Some(5000.0));

        let request: CreateEmployeeRequest =
            serde_json::from_str(r#"{"firstname":"a","lastname":"b","salary":12.5}"#).unwrap();
        assert_eq!(request.into_domain().unwrap().salary, Some(12.5));
    }

    #[test]
    fn test_non_numeric_salary_is_rejected() {
        let request: CreateEmployeeRequest =
            serde_json::from_str(r#"{"firstname":"a","lastname":"b","salary":"lots"}"#).unwrap();
        assert!(matches!(
            request.into_domain(),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_absent_fields_stay_absent() {
        let request: UpdateEmployeeRequest = serde_json::from_str("{}").unwrap();
        assert!(request.into_domain().unwrap().is_empty());

        let request: UpdateEmployeeRequest = serde_json::from_str(r#"{"salary":null}"#).unwrap();
        assert!(request.into_domain().unwrap().salary.is_none());
    }

    #[test]
    fn test_overlong_name_fails_validation() {
        let request = CreateEmployeeRequest {
            firstname: Some("x".repeat(256)),
            lastname: Some("y".to_string()),
            salary: None,
        };
        assert!(request.validate().is_err());
    }
}
