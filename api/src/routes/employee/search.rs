use actix_web::{web, HttpResponse};

use emp_core::repositories::EmployeeRepository;

use crate::app::AppState;
use crate::dto::NoDataResponse;
use crate::handlers::error::handle_domain_error;

/// Handler for GET /employees/firstname/{name}
///
/// Matches stored first names exactly. Stored names are lowercase, so a
/// capitalized query finds nothing.
///
/// # Response
///
/// ## Success (200 OK)
/// The matching records, or when there are none:
/// ```json
/// {
///     "status": false,
///     "message": "No data found"
/// }
/// ```
pub async fn search<R>(state: web::Data<AppState<R>>, name: web::Path<String>) -> HttpResponse
where
    R: EmployeeRepository + 'static,
{
    match state.employee_service.find_by_first_name(&name).await {
        Ok(employees) if employees.is_empty() => HttpResponse::Ok().json(NoDataResponse::default()),
        Ok(employees) => HttpResponse::Ok().json(employees),
        Err(error) => handle_domain_error(error),
    }
}
