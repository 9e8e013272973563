use actix_web::{web, HttpResponse};
use validator::Validate;

use emp_core::repositories::EmployeeRepository;

use crate::app::AppState;
use crate::middleware::auth::AuthContext;
use crate::dto::employee::UpdateEmployeeRequest;
use crate::handlers::error::{handle_domain_error, handle_field_errors, handle_validation_error};

/// Handler for PATCH /employee/{id}
///
/// Applies the supplied fields and returns the updated record.
///
/// ## Errors
/// - 400 Bad Request: A supplied field is invalid
/// - 404 Not Found: No employee has this id
pub async fn update<R>(
    state: web::Data<AppState<R>>,
    auth: AuthContext,
    id: web::Path<String>,
    request: web::Json<UpdateEmployeeRequest>,
) -> HttpResponse
where
    R: EmployeeRepository + 'static,
{
    let request = request.into_inner();
    if let Err(errors) = request.validate() {
        return handle_field_errors(errors);
    }

    let payload = match request.into_domain() {
        Ok(payload) => payload,
        Err(error) => return handle_validation_error(error),
    };

    match state.employee_service.update(&id, payload).await {
        Ok(employee) => {
            log::info!("{} updated employee {}", auth.username, employee.id);
            HttpResponse::Ok().json(employee)
        }
        Err(error) => handle_domain_error(error),
    }
}
