use actix_web::{web, HttpResponse};

use emp_core::repositories::EmployeeRepository;

use crate::app::AppState;
use crate::handlers::error::handle_domain_error;

/// Handler for GET /employees
///
/// Returns every stored employee as a JSON array, oldest first.
pub async fn list<R>(state: web::Data<AppState<R>>) -> HttpResponse
where
    R: EmployeeRepository + 'static,
{
    match state.employee_service.list_all().await {
        Ok(employees) => HttpResponse::Ok().json(employees),
        Err(error) => handle_domain_error(error),
    }
}
