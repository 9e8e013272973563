use actix_web::{web, HttpResponse};

use emp_core::repositories::EmployeeRepository;

use crate::app::AppState;
use crate::dto::auth::{parse_optional_body, LogoutRequest, LogoutResponse};
use crate::handlers::error::{handle_domain_error, handle_malformed_body};

/// Handler for POST /logout
///
/// Removes the supplied refresh token from the valid set. Unknown or
/// missing tokens, and a missing body, are not an error, so repeated logouts all succeed.
/// Access tokens already issued stay valid until they expire.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "message": "Logout successful"
/// }
/// ```
pub async fn logout<R>(
    state: web::Data<AppState<R>>,
    body: web::Bytes,
) -> HttpResponse
where
    R: EmployeeRepository + 'static,
{
    let request: LogoutRequest = match parse_optional_body(&body) {
        Ok(request) => request,
        Err(error) => return handle_malformed_body(error),
    };

    if let Some(token) = request.token {
        if let Err(error) = state.token_service.revoke_refresh_token(&token).await {
            return handle_domain_error(error);
        }
    }

    HttpResponse::Ok().json(LogoutResponse {
        message: "Logout successful".to_string(),
    })
}
