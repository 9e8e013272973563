//! MySQL implementation of the EmployeeRepository trait.
//!
//! Records live in the `employees` table. Ids are UUID v4 strings generated
//! on insert; `created_at` keeps listings in insertion order.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use emp_core::domain::entities::employee::{Employee, EmployeeData, EmployeeUpdate};
use emp_core::errors::DomainError;
use emp_core::repositories::EmployeeRepository;

const SELECT_COLUMNS: &str = "SELECT id, firstname, lastname, salary FROM employees";

/// MySQL implementation of EmployeeRepository
pub struct MySqlEmployeeRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlEmployeeRepository {
    /// Create a new MySQL employee repository
    ///
    /// # Arguments
    /// * `pool` - MySQL connection pool from SQLx
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Create the `employees` table if it does not exist yet
    pub async fn ensure_schema(&self) -> Result<(), DomainError> {
        let query = r#"
            CREATE TABLE IF NOT EXISTS employees (
                id VARCHAR(36) NOT NULL PRIMARY KEY,
                firstname VARCHAR(255) NOT NULL,
                lastname VARCHAR(255) NOT NULL,
                salary DOUBLE NOT NULL DEFAULT 0,
                created_at DATETIME(6) NOT NULL,
                INDEX idx_employees_firstname (firstname)
            )
        "#;

        sqlx::query(query)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal { message: format!("Failed to create employees table: {}", e) })?;

        tracing::info!("employees table ready");
        Ok(())
    }

    /// Convert database row to Employee entity
    fn row_to_employee(row: &sqlx::mysql::MySqlRow) -> Result<Employee, DomainError> {
        Ok(Employee {
            id: row.try_get("id")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get id: {}", e) })?,
            firstname: row.try_get("firstname")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get firstname: {}", e) })?,
            lastname: row.try_get("lastname")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get lastname: {}", e) })?,
            salary: row.try_get("salary")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get salary: {}", e) })?,
        })
    }
}

#[async_trait]
impl EmployeeRepository for MySqlEmployeeRepository {
    async fn find_all(&self) -> Result<Vec<Employee>, DomainError> {
        let query = format!("{} ORDER BY created_at, id", SELECT_COLUMNS);

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Internal { message: format!("Failed to list employees: {}", e) })?;

        rows.iter().map(Self::row_to_employee).collect()
    }

    async fn find_by_first_name(&self, firstname: &str) -> Result<Vec<Employee>, DomainError> {
        // BINARY keeps the match exact under case-insensitive collations
        let query = format!(
            "{} WHERE BINARY firstname = ? ORDER BY created_at, id",
            SELECT_COLUMNS
        );

        let rows = sqlx::query(&query)
            .bind(firstname)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Internal { message: format!("Failed to search employees: {}", e) })?;

        rows.iter().map(Self::row_to_employee).collect()
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Employee>, DomainError> {
        let query = format!("{} WHERE id = ? LIMIT 1", SELECT_COLUMNS);

        let result = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Internal { message: format!("Failed to find employee: {}", e) })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_employee(&row)?)),
            None => Ok(None),
        }
    }

    async fn insert(&self, data: EmployeeData) -> Result<Employee, DomainError> {
        let employee = Employee::from_data(Uuid::new_v4().to_string(), data);

        let query = r#"
            INSERT INTO employees (id, firstname, lastname, salary, created_at)
            VALUES (?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(&employee.id)
            .bind(&employee.firstname)
            .bind(&employee.lastname)
            .bind(employee.salary)
            .bind(Utc::now())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal { message: format!("Failed to save employee: {}", e) })?;

        Ok(employee)
    }

    async fn update(&self, id: &str, update: &EmployeeUpdate) -> Result<Option<Employee>, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::Internal { message: format!("Failed to begin transaction: {}", e) })?;

        let select = format!("{} WHERE id = ? FOR UPDATE", SELECT_COLUMNS);
        let row = sqlx::query(&select)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| DomainError::Internal { message: format!("Failed to find employee: {}", e) })?;

        let mut employee = match row {
            Some(row) => Self::row_to_employee(&row)?,
            None => return Ok(None),
        };
        update.apply_to(&mut employee);

        sqlx::query("UPDATE employees SET firstname = ?, lastname = ?, salary = ? WHERE id = ?")
            .bind(&employee.firstname)
            .bind(&employee.lastname)
            .bind(employee.salary)
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::Internal { message: format!("Failed to update employee: {}", e) })?;

        tx.commit()
            .await
            .map_err(|e| DomainError::Internal { message: format!("Failed to commit update: {}", e) })?;

        Ok(Some(employee))
    }

    async fn delete(&self, id: &str) -> Result<Option<Employee>, DomainError> {
        let existing = self.find_by_id(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let result = sqlx::query("DELETE FROM employees WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal { message: format!("Failed to delete employee: {}", e) })?;

        // A concurrent delete may have won the race
        if result.rows_affected() == 0 {
            return Ok(None);
        }

        Ok(existing)
    }
}
