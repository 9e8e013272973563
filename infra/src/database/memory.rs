//! In-process implementation of EmployeeRepository

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use emp_core::domain::entities::employee::{Employee, EmployeeData, EmployeeUpdate};
use emp_core::errors::DomainError;
use emp_core::repositories::EmployeeRepository;

#[derive(Default)]
struct Records {
    next_seq: u64,
    by_id: HashMap<String, (u64, Employee)>,
}

fn in_insertion_order<'a>(records: impl Iterator<Item = &'a (u64, Employee)>) -> Vec<Employee> {
    let mut records: Vec<_> = records.collect();
    records.sort_by_key(|(seq, _)| *seq);
    records.into_iter().map(|(_, employee)| employee.clone()).collect()
}

/// Employee store held in process memory
///
/// Ids are UUID v4 strings. Listing returns records in insertion order.
/// Cloning shares the underlying records; contents are lost on restart.
#[derive(Clone, Default)]
pub struct InMemoryEmployeeRepository {
    records: Arc<RwLock<Records>>,
}

impl InMemoryEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored employees
    pub async fn len(&self) -> usize {
        self.records.read().await.by_id.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn find_all(&self) -> Result<Vec<Employee>, DomainError> {
        let records = self.records.read().await;
        Ok(in_insertion_order(records.by_id.values()))
    }

    async fn find_by_first_name(&self, firstname: &str) -> Result<Vec<Employee>, DomainError> {
        let records = self.records.read().await;
        Ok(in_insertion_order(
            records
                .by_id
                .values()
                .filter(|(_, employee)| employee.firstname == firstname),
        ))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Employee>, DomainError> {
        Ok(self
            .records
            .read()
            .await
            .by_id
            .get(id)
            .map(|(_, employee)| employee.clone()))
    }

    async fn insert(&self, data: EmployeeData) -> Result<Employee, DomainError> {
        let employee = Employee::from_data(Uuid::new_v4().to_string(), data);

        let mut records = self.records.write().await;
        let seq = records.next_seq;
        records.next_seq += 1;
        records
            .by_id
            .insert(employee.id.clone(), (seq, employee.clone()));

        tracing::debug!(id = %employee.id, "employee stored in memory");
        Ok(employee)
    }

    async fn update(&self, id: &str, update: &EmployeeUpdate) -> Result<Option<Employee>, DomainError> {
        let mut records = self.records.write().await;
        Ok(records.by_id.get_mut(id).map(|(_, employee)| {
            update.apply_to(employee);
            employee.clone()
        }))
    }

    async fn delete(&self, id: &str) -> Result<Option<Employee>, DomainError> {
        Ok(self
            .records
            .write()
            .await
            .by_id
            .remove(id)
            .map(|(_, employee)| employee))
    }
}
