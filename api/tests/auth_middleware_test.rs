//! Integration tests for the access token gate

mod common;

use actix_web::{http::header, http::StatusCode, test};
use chrono::Utc;
use emp_api::create_app;
use emp_core::domain::entities::token::Claims;
use jsonwebtoken::{encode, EncodingKey, Header};

use common::{bearer, test_state, ACCESS_SECRET, REFRESH_SECRET};

fn sign(claims: &Claims, secret: &str) -> String {
    encode(&Header::default(), claims, &EncodingKey::from_secret(secret.as_bytes())).unwrap()
}

#[actix_web::test]
async fn test_missing_header_is_unauthorized() {
    let app = test::init_service(create_app(test_state())).await;

    let req = test::TestRequest::get().uri("/employees").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_header_without_token_is_unauthorized() {
    let app = test::init_service(create_app(test_state())).await;

    for value in ["Bearer", "Bearer ", "just-a-token"] {
        let req = test::TestRequest::get()
            .uri("/employees")
            .insert_header((header::AUTHORIZATION, value))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "header {:?}", value);
    }
}

#[actix_web::test]
async fn test_garbage_token_is_forbidden() {
    let app = test::init_service(create_app(test_state())).await;

    let req = test::TestRequest::get()
        .uri("/employees")
        .insert_header(bearer("garbage"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "FORBIDDEN");
}

#[actix_web::test]
async fn test_expired_token_is_forbidden() {
    let app = test::init_service(create_app(test_state())).await;
    let now = Utc::now().timestamp();
    let claims = Claims {
        username: "alice".to_string(),
        iat: now - 600,
        exp: Some(now - 300),
    };

    let req = test::TestRequest::get()
        .uri("/employees")
        .insert_header(bearer(&sign(&claims, ACCESS_SECRET)))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn test_token_signed_with_other_secret_is_forbidden() {
    let state = test_state();
    let (_, refresh) = common::login(&state, "alice").await;
    let app = test::init_service(create_app(state)).await;

    let forged = sign(&Claims::new_access_token("alice", 120), "not-the-secret");
    let under_refresh_secret = sign(&Claims::new_access_token("alice", 120), REFRESH_SECRET);

    for token in [forged, under_refresh_secret, refresh] {
        let req = test::TestRequest::get()
            .uri("/employees")
            .insert_header(bearer(&token))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::FORBIDDEN);
    }
}

#[actix_web::test]
async fn test_every_employee_route_is_gated() {
    let app = test::init_service(create_app(test_state())).await;

    let requests = vec![
        test::TestRequest::get().uri("/employees"),
        test::TestRequest::get().uri("/employees/firstname/alice"),
        test::TestRequest::post()
            .uri("/employee")
            .set_json(serde_json::json!({ "firstname": "a", "lastname": "b" })),
        test::TestRequest::patch()
            .uri("/employee/some-id")
            .set_json(serde_json::json!({ "salary": 1 })),
        test::TestRequest::delete().uri("/employee/some-id"),
    ];

    for req in requests {
        let resp = test::call_service(&app, req.to_request()).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}

#[actix_web::test]
async fn test_public_routes_need_no_token() {
    let app = test::init_service(create_app(test_state())).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");

    let req = test::TestRequest::get().uri("/no/such/route").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "not_found");
}
