//! Integration tests for the in-memory employee store

use emp_core::domain::entities::employee::{EmployeeData, EmployeeUpdate};
use emp_core::repositories::EmployeeRepository;
use emp_infra::InMemoryEmployeeRepository;

fn data(firstname: &str, lastname: &str, salary: f64) -> EmployeeData {
    EmployeeData {
        firstname: firstname.to_string(),
        lastname: lastname.to_string(),
        salary,
    }
}

#[tokio::test]
async fn test_insert_assigns_unique_uuid_ids() {
    let repo = InMemoryEmployeeRepository::new();

    let first = repo.insert(data("a", "one", 1.0)).await.unwrap();
    let second = repo.insert(data("a", "one", 1.0)).await.unwrap();

    assert_ne!(first.id, second.id);
    assert!(uuid::Uuid::parse_str(&first.id).is_ok());
    assert_eq!(repo.len().await, 2);
}

#[tokio::test]
async fn test_find_all_keeps_insertion_order() {
    let repo = InMemoryEmployeeRepository::new();
    for name in ["carol", "alice", "bob", "dave"] {
        repo.insert(data(name, "x", 0.0)).await.unwrap();
    }

    let names: Vec<_> = repo
        .find_all()
        .await
        .unwrap()
        .into_iter()
        .map(|e| e.firstname)
        .collect();

    assert_eq!(names, vec!["carol", "alice", "bob", "dave"]);
}

#[tokio::test]
async fn test_find_by_first_name_is_exact() {
    let repo = InMemoryEmployeeRepository::new();
    let pritesh = repo.insert(data("pritesh", "patel", 5000.0)).await.unwrap();
    repo.insert(data("priya", "shah", 10.0)).await.unwrap();

    assert_eq!(repo.find_by_first_name("pritesh").await.unwrap(), vec![pritesh]);
    assert!(repo.find_by_first_name("Pritesh").await.unwrap().is_empty());
    assert!(repo.find_by_first_name("pri").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_applies_only_supplied_fields() {
    let repo = InMemoryEmployeeRepository::new();
    let stored = repo.insert(data("a", "one", 1.0)).await.unwrap();

    let update = EmployeeUpdate {
        salary: Some(99.0),
        ..Default::default()
    };
    let updated = repo.update(&stored.id, &update).await.unwrap().unwrap();

    assert_eq!(updated.firstname, "a");
    assert_eq!(updated.salary, 99.0);
    assert_eq!(repo.find_by_id(&stored.id).await.unwrap(), Some(updated));
    assert!(repo.update("missing", &update).await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_removes_record() {
    let repo = InMemoryEmployeeRepository::new();
    let stored = repo.insert(data("a", "one", 1.0)).await.unwrap();

    assert_eq!(repo.delete(&stored.id).await.unwrap(), Some(stored.clone()));
    assert_eq!(repo.delete(&stored.id).await.unwrap(), None);
    assert!(repo.find_by_id(&stored.id).await.unwrap().is_none());
    assert!(repo.is_empty().await);
}

#[tokio::test]
async fn test_clones_share_records() {
    let repo = InMemoryEmployeeRepository::new();
    let handle = repo.clone();

    handle.insert(data("a", "one", 1.0)).await.unwrap();

    assert_eq!(repo.find_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_concurrent_inserts() {
    let repo = InMemoryEmployeeRepository::new();

    let handles: Vec<_> = (0..20)
        .map(|i| {
            let repo = repo.clone();
            tokio::spawn(async move { repo.insert(data(&format!("e{}", i), "x", 0.0)).await })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    assert_eq!(repo.len().await, 20);
}
