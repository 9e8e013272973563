use actix_web::{web, HttpResponse};

use emp_core::errors::DomainError;
use emp_core::repositories::EmployeeRepository;

use crate::app::AppState;
use crate::middleware::auth::AuthContext;
use crate::handlers::error::handle_domain_error;

/// Handler for DELETE /employee/{id}
///
/// # Response
/// - 200 OK with an empty body
/// - 404 Not Found with the plain text body `No item found`
pub async fn delete<R>(
    state: web::Data<AppState<R>>,
    auth: AuthContext,
    id: web::Path<String>,
) -> HttpResponse
where
    R: EmployeeRepository + 'static,
{
    match state.employee_service.delete(&id).await {
        Ok(()) => {
            log::info!("{} deleted employee {}", auth.username, id.as_str());
            HttpResponse::Ok().finish()
        }
        Err(DomainError::NotFound { .. }) => {
            log::warn!("Delete of unknown employee {}", id.as_str());
            HttpResponse::NotFound().body("No item found")
        }
        Err(error) => handle_domain_error(error),
    }
}
