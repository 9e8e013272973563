//! Employee repository trait defining the interface to the document store.
//!
//! The store owns identity: it assigns the opaque id on insert. Each
//! individual write is expected to be atomic; nothing above this trait
//! coordinates concurrent writers.

use async_trait::async_trait;

use crate::domain::entities::employee::{Employee, EmployeeData, EmployeeUpdate};
use crate::errors::DomainError;

/// Repository trait for Employee persistence operations
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use emp_core::domain::entities::employee::{Employee, EmployeeData, EmployeeUpdate};
/// use emp_core::errors::DomainError;
/// use emp_core::repositories::EmployeeRepository;
///
/// struct NullEmployeeRepository;
///
/// #[async_trait]
/// impl EmployeeRepository for NullEmployeeRepository {
///     async fn find_all(&self) -> Result<Vec<Employee>, DomainError> {
///         Ok(Vec::new())
///     }
///
///     async fn find_by_first_name(&self, _firstname: &str) -> Result<Vec<Employee>, DomainError> {
///         Ok(Vec::new())
///     }
///
///     async fn find_by_id(&self, _id: &str) -> Result<Option<Employee>, DomainError> {
///         Ok(None)
///     }
///
///     async fn insert(&self, data: EmployeeData) -> Result<Employee, DomainError> {
///         Ok(Employee::from_data("0", data))
///     }
///
///     async fn update(&self, _id: &str, _update: &EmployeeUpdate) -> Result<Option<Employee>, DomainError> {
///         Ok(None)
///     }
///
///     async fn delete(&self, _id: &str) -> Result<Option<Employee>, DomainError> {
///         Ok(None)
///     }
/// }
/// ```
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Return every stored employee, oldest first
    async fn find_all(&self) -> Result<Vec<Employee>, DomainError>;

    /// Return employees whose stored first name equals `firstname` exactly
    async fn find_by_first_name(&self, firstname: &str) -> Result<Vec<Employee>, DomainError>;

    /// Find an employee by id
    ///
    /// # Returns
    /// * `Ok(Some(Employee))` - Employee found
    /// * `Ok(None)` - No employee with the given id
    /// * `Err(DomainError)` - Store failure
    async fn find_by_id(&self, id: &str) -> Result<Option<Employee>, DomainError>;

    /// Insert validated fields and return the stored record with its new id
    async fn insert(&self, data: EmployeeData) -> Result<Employee, DomainError>;

    /// Apply a partial update by id
    ///
    /// # Returns
    /// * `Ok(Some(Employee))` - The record after the update
    /// * `Ok(None)` - No employee with the given id
    async fn update(&self, id: &str, update: &EmployeeUpdate) -> Result<Option<Employee>, DomainError>;

    /// Delete an employee by id
    ///
    /// # Returns
    /// * `Ok(Some(Employee))` - The deleted record
    /// * `Ok(None)` - No employee with the given id
    async fn delete(&self, id: &str) -> Result<Option<Employee>, DomainError>;
}
