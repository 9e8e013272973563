use actix_web::{http::StatusCode, HttpResponse};
use emp_core::errors::{DomainError, TokenError, ValidationError};
use emp_shared::errors::error_codes;

use crate::dto::{ErrorResponse, ErrorResponseExt};

/// Handle domain errors and convert them to appropriate HTTP responses
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    let (status, code, message) = match &error {
        DomainError::Unauthorized => (
            StatusCode::UNAUTHORIZED,
            error_codes::UNAUTHORIZED,
            "Authentication required".to_string(),
        ),
        DomainError::Token(TokenError::TokenGenerationFailed) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            error_codes::INTERNAL_ERROR,
            "Failed to generate token".to_string(),
        ),
        DomainError::Token(TokenError::TokenExpired) => (
            StatusCode::FORBIDDEN,
            error_codes::TOKEN_EXPIRED,
            "Token has expired".to_string(),
        ),
        DomainError::Token(token_error) => (
            StatusCode::FORBIDDEN,
            error_codes::TOKEN_INVALID,
            token_error.to_string(),
        ),
        DomainError::NotFound { resource } => (
            StatusCode::NOT_FOUND,
            error_codes::NOT_FOUND,
            format!("Not found: {}", resource),
        ),
        DomainError::Validation { message } => (
            StatusCode::BAD_REQUEST,
            error_codes::VALIDATION_ERROR,
            message.clone(),
        ),
        DomainError::ValidationErr(validation_error) => (
            StatusCode::BAD_REQUEST,
            error_codes::VALIDATION_ERROR,
            validation_error.to_string(),
        ),
        DomainError::Internal { .. } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            error_codes::INTERNAL_ERROR,
            "An internal error occurred".to_string(),
        ),
    };

    if status.is_server_error() {
        log::error!("Domain Error: {:?}", error);
    } else {
        log::warn!("Request rejected: {}", error);
    }

    ErrorResponse::new(code, message).to_response(status)
}

/// Handle a payload validation error raised while converting a DTO
pub fn handle_validation_error(error: ValidationError) -> HttpResponse {
    handle_domain_error(DomainError::ValidationErr(error))
}

/// Handle field constraint failures reported by `validator`
pub fn handle_field_errors(errors: validator::ValidationErrors) -> HttpResponse {
    log::warn!("Request rejected: {}", errors);
    ErrorResponse::new(error_codes::VALIDATION_ERROR, errors.to_string())
        .to_response(StatusCode::BAD_REQUEST)
}

/// Handle a request body that is present but not valid JSON
pub fn handle_malformed_body(error: serde_json::Error) -> HttpResponse {
    log::warn!("Rejected request body: {}", error);
    ErrorResponse::new(error_codes::BAD_REQUEST, format!("Json deserialize error: {}", error))
        .to_response(StatusCode::BAD_REQUEST)
}
