//! JWT authentication middleware for protecting API endpoints.
//!
//! The middleware reads the `Authorization` header, verifies the access
//! token through the core `TokenService`, and injects an [`AuthContext`]
//! into the request. A missing token answers 401; a token that fails
//! verification answers 403.

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::InternalError,
    http::{header::AUTHORIZATION, StatusCode},
    Error, FromRequest, HttpMessage, HttpRequest, HttpResponse,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

use emp_core::{
    domain::entities::token::Claims,
    errors::DomainError,
    repositories::RefreshTokenStore,
    services::token::TokenService,
};
use emp_shared::errors::error_codes;

use crate::dto::{ErrorResponse, ErrorResponseExt};

/// Identity of the caller, taken from a verified access token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    pub username: String,
    pub issued_at: i64,
    pub expires_at: Option<i64>,
}

impl From<Claims> for AuthContext {
    fn from(claims: Claims) -> Self {
        Self {
            username: claims.username,
            issued_at: claims.iat,
            expires_at: claims.exp,
        }
    }
}

/// Trait for wrapping TokenService to allow dynamic dispatch
pub trait TokenServiceWrapper: Send + Sync {
    fn verify_access_token(&self, token: &str) -> Result<Claims, DomainError>;
}

impl<S: RefreshTokenStore> TokenServiceWrapper for TokenService<S> {
    fn verify_access_token(&self, token: &str) -> Result<Claims, DomainError> {
        TokenService::verify_access_token(self, token)
    }
}

/// JWT authentication middleware factory
#[derive(Clone)]
pub struct JwtAuth {
    verifier: Arc<dyn TokenServiceWrapper>,
}

impl JwtAuth {
    pub fn new(verifier: Arc<dyn TokenServiceWrapper>) -> Self {
        Self { verifier }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            verifier: Arc::clone(&self.verifier),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    verifier: Arc<dyn TokenServiceWrapper>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let verifier = Arc::clone(&self.verifier);

        Box::pin(async move {
            let token = match extract_bearer_token(&req) {
                Some(token) => token,
                None => {
                    let response = rejection(
                        StatusCode::UNAUTHORIZED,
                        error_codes::UNAUTHORIZED,
                        "Missing access token",
                    );
                    return Ok(req.into_response(response).map_into_right_body());
                }
            };

            let claims = match verifier.verify_access_token(&token) {
                Ok(claims) => claims,
                Err(e) => {
                    log::debug!("Access token rejected: {}", e);
                    let response = rejection(
                        StatusCode::FORBIDDEN,
                        error_codes::FORBIDDEN,
                        "Invalid or expired access token",
                    );
                    return Ok(req.into_response(response).map_into_right_body());
                }
            };

            req.extensions_mut().insert(AuthContext::from(claims));

            service.call(req).await.map(ServiceResponse::map_into_left_body)
        })
    }
}

fn rejection(status: StatusCode, code: &str, message: &str) -> HttpResponse {
    ErrorResponse::new(code, message).to_response(status)
}

/// Extracts the token from the Authorization header
///
/// The token is the second whitespace-separated word; the scheme word is
/// not checked.
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .split_whitespace()
        .nth(1)
        .map(|s| s.to_string())
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result: Result<Self, Error> = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| {
                let message = "Authentication required";
                let response = rejection(StatusCode::UNAUTHORIZED, error_codes::UNAUTHORIZED, message);
                InternalError::from_response(message, response).into()
            });

        ready(result)
    }
}
