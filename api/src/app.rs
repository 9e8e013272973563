//! Application state and factory
//!
//! This module holds the shared application state and provides the factory
//! for creating the Actix-web application.

use std::sync::Arc;

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    error::{InternalError, JsonPayloadError},
    http::StatusCode,
    middleware::Logger,
    web, App, HttpRequest, HttpResponse,
};

use emp_core::repositories::{EmployeeRepository, InMemoryRefreshTokenStore};
use emp_core::services::{EmployeeService, TokenService};
use emp_shared::errors::error_codes;

use crate::dto::{ErrorResponse, ErrorResponseExt};
use crate::middleware::auth::{JwtAuth, TokenServiceWrapper};
use crate::routes::{auth, employee};

/// Default upper bound on JSON request bodies
pub const DEFAULT_JSON_LIMIT: usize = 256 * 1024;

/// Services shared by every worker
pub struct AppState<R: EmployeeRepository> {
    pub token_service: Arc<TokenService<InMemoryRefreshTokenStore>>,
    pub employee_service: Arc<EmployeeService<R>>,
    pub json_limit: usize,
}

impl<R: EmployeeRepository> AppState<R> {
    pub fn new(
        token_service: Arc<TokenService<InMemoryRefreshTokenStore>>,
        employee_service: Arc<EmployeeService<R>>,
    ) -> Self {
        Self {
            token_service,
            employee_service,
            json_limit: DEFAULT_JSON_LIMIT,
        }
    }

    pub fn with_json_limit(mut self, limit: usize) -> Self {
        self.json_limit = limit;
        self
    }
}

/// Create and configure the application with all dependencies
pub fn create_app<R>(
    app_state: web::Data<AppState<R>>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    R: EmployeeRepository + 'static,
{
    let verifier: Arc<dyn TokenServiceWrapper> = app_state.token_service.clone();
    let jwt = JwtAuth::new(verifier);
    let json_config = web::JsonConfig::default()
        .limit(app_state.json_limit)
        .error_handler(json_error_handler);
    let payload_config = web::PayloadConfig::new(app_state.json_limit);

    App::new()
        .app_data(app_state)
        .app_data(json_config)
        .app_data(payload_config)
        .wrap(Logger::default())
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // Token lifecycle
        .route("/login/{username}/{password}", web::post().to(auth::login::<R>))
        .route("/token", web::post().to(auth::refresh::<R>))
        .route("/logout", web::post().to(auth::logout::<R>))
        // Employee records, access token required
        .service(
            web::resource("/employees")
                .wrap(jwt.clone())
                .route(web::get().to(employee::list::<R>)),
        )
        .service(
            web::resource("/employees/firstname/{name}")
                .wrap(jwt.clone())
                .route(web::get().to(employee::search::<R>)),
        )
        .service(
            web::resource("/employee")
                .wrap(jwt.clone())
                .route(web::post().to(employee::create::<R>)),
        )
        .service(
            web::resource("/employee/{id}")
                .wrap(jwt)
                .route(web::patch().to(employee::update::<R>))
                .route(web::delete().to(employee::delete::<R>)),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "employee-service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource was not found"
    }))
}

/// Reports unreadable JSON bodies as 400 with the shared error body
fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::warn!("Rejected request body: {}", err);
    let status = match err {
        JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
            StatusCode::PAYLOAD_TOO_LARGE
        }
        _ => StatusCode::BAD_REQUEST,
    };
    let response = ErrorResponse::new(error_codes::BAD_REQUEST, err.to_string()).to_response(status);
    InternalError::from_response(err, response).into()
}
