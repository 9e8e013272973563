//! Employee record service

use std::sync::Arc;

use crate::domain::entities::employee::{Employee, EmployeeUpdate, NewEmployee};
use crate::errors::DomainError;
use crate::repositories::EmployeeRepository;

/// Create/read/update/delete over employee records
///
/// Validation and normalization happen here; everything else is delegated
/// to the repository.
pub struct EmployeeService<R: EmployeeRepository> {
    repository: Arc<R>,
}

impl<R: EmployeeRepository> EmployeeService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// List every employee
    pub async fn list_all(&self) -> Result<Vec<Employee>, DomainError> {
        self.repository.find_all().await
    }

    /// Employees whose stored first name equals `name` exactly
    pub async fn find_by_first_name(&self, name: &str) -> Result<Vec<Employee>, DomainError> {
        self.repository.find_by_first_name(name).await
    }

    /// Fetch a single employee
    ///
    /// # Errors
    /// `DomainError::NotFound` when no employee has the given id
    pub async fn find_by_id(&self, id: &str) -> Result<Employee, DomainError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::employee_not_found(id))
    }

    /// Validate, normalize and store a new employee
    pub async fn create(&self, payload: NewEmployee) -> Result<Employee, DomainError> {
        let data = payload.validate()?;
        let employee = self.repository.insert(data).await?;
        tracing::debug!(id = %employee.id, "employee created");
        Ok(employee)
    }

    /// Apply a partial update and return the updated record
    ///
    /// # Errors
    /// * `DomainError::ValidationErr` - A supplied field is invalid
    /// * `DomainError::NotFound` - No employee has the given id
    pub async fn update(&self, id: &str, payload: EmployeeUpdate) -> Result<Employee, DomainError> {
        let update = payload.validate()?;
        if update.is_empty() {
            return self.find_by_id(id).await;
        }

        self.repository
            .update(id, &update)
            .await?
            .ok_or_else(|| DomainError::employee_not_found(id))
    }

    /// Delete an employee
    ///
    /// # Errors
    /// `DomainError::NotFound` when no employee has the given id
    pub async fn delete(&self, id: &str) -> Result<(), DomainError> {
        match self.repository.delete(id).await? {
            Some(_) => {
                tracing::debug!(id, "employee deleted");
                Ok(())
            }
            None => Err(DomainError::employee_not_found(id)),
        }
    }
}
