//! Integration tests for login, token refresh and logout

mod common;

use actix_web::{http::StatusCode, test};
use emp_api::create_app;
use serde_json::{json, Value};

use common::{bearer, test_state};

#[actix_web::test]
async fn test_login_returns_token_pair() {
    let state = test_state();
    let app = test::init_service(create_app(state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/login/alice/whatever")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "Login success");

    let access = body["token"]["accessToken"].as_str().unwrap();
    let refresh = body["token"]["refreshToken"].as_str().unwrap();

    let claims = state.token_service.verify_access_token(access).unwrap();
    assert_eq!(claims.username, "alice");
    assert!(state.token_service.is_refresh_token_active(refresh).await.unwrap());
}

#[actix_web::test]
async fn test_login_token_opens_protected_routes() {
    let state = test_state();
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::post().uri("/login/bob/secret").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let access = body["token"]["accessToken"].as_str().unwrap();

    let req = test::TestRequest::get()
        .uri("/employees")
        .insert_header(bearer(access))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_refresh_issues_access_token_for_verified_user() {
    let state = test_state();
    let (_, refresh) = common::login(&state, "alice").await;
    let app = test::init_service(create_app(state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/token")
        .set_json(json!({ "token": refresh, "username": "mallory" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    let access = body["accessToken"].as_str().unwrap();

    let claims = state.token_service.verify_access_token(access).unwrap();
    assert_eq!(claims.username, "alice");
    assert_eq!(claims.exp.unwrap() - claims.iat, 20 * 60);
}

#[actix_web::test]
async fn test_refresh_without_token_is_unauthorized() {
    let app = test::init_service(create_app(test_state())).await;

    for body in [json!({}), json!({ "token": "" }), json!({ "username": "alice" })] {
        let req = test::TestRequest::post().uri("/token").set_json(body).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    let req = test::TestRequest::post().uri("/token").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_refresh_with_unknown_token_is_forbidden() {
    let state = test_state();
    let (access, _) = common::login(&state, "alice").await;
    let app = test::init_service(create_app(state)).await;

    for token in ["not-a-token".to_string(), access] {
        let req = test::TestRequest::post()
            .uri("/token")
            .set_json(json!({ "token": token }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }
}

#[actix_web::test]
async fn test_logout_revokes_refresh_token() {
    let state = test_state();
    let (access, refresh) = common::login(&state, "alice").await;
    let app = test::init_service(create_app(state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/token")
        .set_json(json!({ "token": refresh, "username": "alice" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::post()
        .uri("/logout")
        .set_json(json!({ "token": refresh }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Logout successful");

    let req = test::TestRequest::post()
        .uri("/token")
        .set_json(json!({ "token": refresh, "username": "alice" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::FORBIDDEN);

    // Access tokens issued earlier live until they expire
    let req = test::TestRequest::get()
        .uri("/employees")
        .insert_header(bearer(&access))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_logout_is_idempotent() {
    let state = test_state();
    let (_, refresh) = common::login(&state, "alice").await;
    let app = test::init_service(create_app(state.clone())).await;

    for body in [
        json!({ "token": refresh }),
        json!({ "token": refresh }),
        json!({ "token": "never-issued" }),
        json!({}),
    ] {
        let req = test::TestRequest::post().uri("/logout").set_json(body).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let req = test::TestRequest::post().uri("/logout").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Logout successful");

    assert!(!state.token_service.is_refresh_token_active(&refresh).await.unwrap());
}

#[actix_web::test]
async fn test_malformed_json_is_bad_request() {
    let app = test::init_service(create_app(test_state())).await;

    let req = test::TestRequest::post()
        .uri("/token")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "BAD_REQUEST");

    let req = test::TestRequest::post()
        .uri("/logout")
        .set_payload("token=abc")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
