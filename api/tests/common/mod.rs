//! Shared setup for API integration tests

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::web;
use emp_api::AppState;
use emp_core::repositories::InMemoryRefreshTokenStore;
use emp_core::services::{EmployeeService, TokenService, TokenServiceConfig};
use emp_infra::InMemoryEmployeeRepository;

pub const ACCESS_SECRET: &str = "test-access-secret";
pub const REFRESH_SECRET: &str = "test-refresh-secret";

pub type TestState = web::Data<AppState<InMemoryEmployeeRepository>>;

/// Fresh application state with empty stores
pub fn test_state() -> TestState {
    let token_service = TokenService::new(
        InMemoryRefreshTokenStore::new(),
        TokenServiceConfig::with_secrets(ACCESS_SECRET, REFRESH_SECRET),
    )
    .unwrap();
    let employee_service = EmployeeService::new(Arc::new(InMemoryEmployeeRepository::new()));

    web::Data::new(AppState::new(Arc::new(token_service), Arc::new(employee_service)))
}

/// Issue a token pair directly through the service
pub async fn login(state: &TestState, username: &str) -> (String, String) {
    let pair = state.token_service.issue_tokens(username).await.unwrap();
    (pair.access_token, pair.refresh_token)
}

pub fn bearer(token: &str) -> (actix_web::http::header::HeaderName, String) {
    (actix_web::http::header::AUTHORIZATION, format!("Bearer {}", token))
}
