use actix_web::{web, HttpResponse};

use emp_core::errors::DomainError;
use emp_core::repositories::EmployeeRepository;

use crate::app::AppState;
use crate::dto::auth::{parse_optional_body, RefreshTokenRequest, RefreshTokenResponse};
use crate::handlers::error::{handle_domain_error, handle_malformed_body};

/// Handler for POST /token
///
/// Issues a new access token from a refresh token that is still in the
/// valid set. The refresh token is not rotated.
///
/// # Request Body
///
/// ```json
/// {
///     "token": "eyJ...",
///     "username": "alice"
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "accessToken": "eyJ..."
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Body is present but not JSON
/// - 401 Unauthorized: No token supplied, including an empty body
/// - 403 Forbidden: Token unknown, revoked, or failing verification
pub async fn refresh<R>(
    state: web::Data<AppState<R>>,
    body: web::Bytes,
) -> HttpResponse
where
    R: EmployeeRepository + 'static,
{
    let request: RefreshTokenRequest = match parse_optional_body(&body) {
        Ok(request) => request,
        Err(error) => return handle_malformed_body(error),
    };
    let RefreshTokenRequest { token, username } = request;
    let token = match token {
        Some(token) if !token.is_empty() => token,
        _ => return handle_domain_error(DomainError::Unauthorized),
    };

    match state
        .token_service
        .refresh_access_token(&token, username.as_deref())
        .await
    {
        Ok(access_token) => HttpResponse::Ok().json(RefreshTokenResponse { access_token }),
        Err(error) => handle_domain_error(error),
    }
}
