use actix_web::http::StatusCode;
pub use emp_shared::errors::ErrorResponse;

// Extension trait for ErrorResponse to add actix-web specific methods
pub trait ErrorResponseExt {
    fn to_response(&self, status: StatusCode) -> actix_web::HttpResponse;
}

impl ErrorResponseExt for ErrorResponse {
    fn to_response(&self, status: StatusCode) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(status).json(self)
    }
}

/// Body returned by a first-name search that matched nothing
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct NoDataResponse {
    pub status: bool,
    pub message: String,
}

impl Default for NoDataResponse {
    fn default() -> Self {
        Self {
            status: false,
            message: "No data found".to_string(),
        }
    }
}
