//! Employee entity and the payloads that create or modify it.
//!
//! Names are stored trimmed and lowercased. Salary defaults to zero and can
//! never be negative.

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Employee record as held by the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Opaque identifier assigned by the store on creation
    pub id: String,
    pub firstname: String,
    pub lastname: String,
    pub salary: f64,
}

impl Employee {
    /// Builds a stored record from validated fields and a store-assigned id
    pub fn from_data(id: impl Into<String>, data: EmployeeData) -> Self {
        Self {
            id: id.into(),
            firstname: data.firstname,
            lastname: data.lastname,
            salary: data.salary,
        }
    }
}

/// Validated, normalized employee fields ready for insertion
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeData {
    pub firstname: String,
    pub lastname: String,
    pub salary: f64,
}

/// Client-submitted creation payload
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewEmployee {
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub salary: Option<f64>,
}

impl NewEmployee {
    pub fn new(firstname: impl Into<String>, lastname: impl Into<String>, salary: f64) -> Self {
        Self {
            firstname: Some(firstname.into()),
            lastname: Some(lastname.into()),
            salary: Some(salary),
        }
    }

    /// Checks required fields and salary, returning normalized data
    pub fn validate(&self) -> Result<EmployeeData, ValidationError> {
        let firstname = required_name(self.firstname.as_deref(), "firstname")?;
        let lastname = required_name(self.lastname.as_deref(), "lastname")?;
        let salary = match self.salary {
            Some(salary) => check_salary(salary)?,
            None => 0.0,
        };

        Ok(EmployeeData {
            firstname,
            lastname,
            salary,
        })
    }
}

/// Partial update payload; absent fields are left untouched
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeUpdate {
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub salary: Option<f64>,
}

impl EmployeeUpdate {
    /// Validates supplied fields and returns a normalized copy
    pub fn validate(&self) -> Result<EmployeeUpdate, ValidationError> {
        let firstname = self
            .firstname
            .as_deref()
            .map(|name| required_name(Some(name), "firstname"))
            .transpose()?;
        let lastname = self
            .lastname
            .as_deref()
            .map(|name| required_name(Some(name), "lastname"))
            .transpose()?;
        let salary = self.salary.map(check_salary).transpose()?;

        Ok(EmployeeUpdate {
            firstname,
            lastname,
            salary,
        })
    }

    /// True when no field is supplied
    pub fn is_empty(&self) -> bool {
        self.firstname.is_none() && self.lastname.is_none() && self.salary.is_none()
    }

    /// Applies supplied fields to `employee`
    pub fn apply_to(&self, employee: &mut Employee) {
        if let Some(firstname) = &self.firstname {
            employee.firstname = firstname.clone();
        }
        if let Some(lastname) = &self.lastname {
            employee.lastname = lastname.clone();
        }
        if let Some(salary) = self.salary {
            employee.salary = salary;
        }
    }
}

/// Trims and lowercases a name
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

fn required_name(value: Option<&str>, field: &str) -> Result<String, ValidationError> {
    let normalized = value.map(normalize_name).unwrap_or_default();
    if normalized.is_empty() {
        return Err(ValidationError::required(field));
    }
    Ok(normalized)
}

fn check_salary(salary: f64) -> Result<f64, ValidationError> {
    if !salary.is_finite() {
        return Err(ValidationError::invalid_format("salary"));
    }
    if salary < 0.0 {
        return Err(ValidationError::negative("salary"));
    }
    Ok(salary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_employee_is_normalized() {
        let data = NewEmployee::new("  Pritesh ", "PATEL", 5000.0).validate().unwrap();

        assert_eq!(data.firstname, "pritesh");
        assert_eq!(data.lastname, "patel");
        assert_eq!(data.salary, 5000.0);
    }

    #[test]
    fn test_salary_defaults_to_zero() {
        let payload = NewEmployee {
            salary: None,
            ..NewEmployee::new("ann", "lee", 1.0)
        };

        assert_eq!(payload.validate().unwrap().salary, 0.0);
    }

    #[test]
    fn test_negative_salary_rejected() {
        let err = NewEmployee::new("ann", "lee", -1.0).validate().unwrap_err();
        assert_eq!(err, ValidationError::negative("salary"));
    }

    #[test]
    fn test_non_finite_salary_rejected() {
        let err = NewEmployee::new("ann", "lee", f64::NAN).validate().unwrap_err();
        assert_eq!(err, ValidationError::invalid_format("salary"));
    }

    #[test]
    fn test_missing_or_blank_names_rejected() {
        let missing = NewEmployee {
            firstname: None,
            ..NewEmployee::new("ann", "lee", 0.0)
        };
        assert_eq!(missing.validate().unwrap_err(), ValidationError::required("firstname"));

        let blank = NewEmployee::new("ann", "   ", 0.0);
        assert_eq!(blank.validate().unwrap_err(), ValidationError::required("lastname"));
    }

    #[test]
    fn test_update_normalizes_and_applies() {
        let update = EmployeeUpdate {
            firstname: Some(" JOHN ".to_string()),
            salary: Some(10.5),
            ..Default::default()
        }
        .validate()
        .unwrap();

        let mut employee = Employee::from_data(
            "id-1",
            EmployeeData {
                firstname: "jon".to_string(),
                lastname: "doe".to_string(),
                salary: 1.0,
            },
        );
        update.apply_to(&mut employee);

        assert_eq!(employee.firstname, "john");
        assert_eq!(employee.lastname, "doe");
        assert_eq!(employee.salary, 10.5);
    }

    #[test]
    fn test_update_rejects_negative_salary_and_blank_name() {
        let update = EmployeeUpdate {
            salary: Some(-5.0),
            ..Default::default()
        };
        assert!(update.validate().is_err());

        let update = EmployeeUpdate {
            lastname: Some("".to_string()),
            ..Default::default()
        };
        assert_eq!(update.validate().unwrap_err(), ValidationError::required("lastname"));
    }

    #[test]
    fn test_empty_update() {
        assert!(EmployeeUpdate::default().is_empty());
    }
}
