use actix_web::{web, HttpResponse};

use emp_core::repositories::EmployeeRepository;

use crate::app::AppState;
use crate::dto::auth::LoginResponse;
use crate::handlers::error::handle_domain_error;

/// Handler for POST /login/{username}/{password}
///
/// Issues an access/refresh token pair for `username`. There is no
/// credential store, so the password segment is accepted and ignored.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "status": "Login success",
///     "token": {
///         "accessToken": "eyJ...",
///         "refreshToken": "eyJ..."
///     }
/// }
/// ```
pub async fn login<R>(
    state: web::Data<AppState<R>>,
    path: web::Path<(String, String)>,
) -> HttpResponse
where
    R: EmployeeRepository + 'static,
{
    let (username, _password) = path.into_inner();

    match state.token_service.issue_tokens(&username).await {
        Ok(pair) => {
            log::info!("Issued tokens for {}", username);
            HttpResponse::Ok().json(LoginResponse {
                status: "Login success".to_string(),
                token: pair.into(),
            })
        }
        Err(error) => handle_domain_error(error),
    }
}
