use actix_web::{web, HttpResponse};
use validator::Validate;

use emp_core::repositories::EmployeeRepository;

use crate::app::AppState;
use crate::middleware::auth::AuthContext;
use crate::dto::employee::CreateEmployeeRequest;
use crate::handlers::error::{handle_domain_error, handle_field_errors, handle_validation_error};

/// Handler for POST /employee
///
/// # Request Body
///
/// ```json
/// {
///     "firstname": "Pritesh",
///     "lastname": "Patel",
///     "salary": "5000"
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// The stored record with lowercase names and its assigned id.
///
/// ## Errors
/// - 400 Bad Request: Missing name, negative or non-numeric salary
pub async fn create<R>(
    state: web::Data<AppState<R>>,
    auth: AuthContext,
    request: web::Json<CreateEmployeeRequest>,
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

    match state.employee_service.create(payload).await {
        Ok(employee) => {
            log::info!("{} created employee {}", auth.username, employee.id);
            HttpResponse::Ok().json(employee)
        }
        Err(error) => handle_domain_error(error),
    }
}
