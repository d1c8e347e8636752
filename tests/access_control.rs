//! Access-control tests that run without a database.
//!
//! Token verification is pure computation, so the middleware can be exercised
//! against a stub handler: reaching the handler at all is the property under
//! test.

use axum::{
    body::Body,
    http::{header::AUTHORIZATION, Request, StatusCode},
    middleware,
    routing::post,
    Extension, Router,
};
use chrono::Utc;
use folio::cli::globals::GlobalArgs;
use folio::folio::auth::{
    middleware::require_bearer,
    token::{self, Claims, TOKEN_EXPIRATION},
};
use tower::ServiceExt;
use uuid::Uuid;

fn globals() -> GlobalArgs {
    GlobalArgs::new(String::from("test-secret").into())
}

/// Stand-in for the create-work / create-blog handlers.
fn protected_app(globals: GlobalArgs) -> Router {
    Router::new()
        .route("/works", post(|| async { StatusCode::CREATED }))
        .route_layer(middleware::from_fn(require_bearer))
        .layer(Extension(globals))
}

fn post_works(authorization: Option<&str>) -> Request<Body> {
    let builder = Request::builder().method("POST").uri("/works");
    let builder = match authorization {
        Some(value) => builder.header(AUTHORIZATION, value),
        None => builder,
    };
    builder.body(Body::empty()).unwrap()
}

#[tokio::test]
async fn missing_header_is_rejected_before_the_handler() {
    let app = protected_app(globals());

    let response = app.oneshot(post_works(None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn non_bearer_scheme_is_rejected() {
    let app = protected_app(globals());

    let response = app
        .oneshot(post_works(Some("Basic YWxpY2U6c2VjcmV0")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn garbage_token_is_rejected() {
    let app = protected_app(globals());

    let response = app
        .oneshot(post_works(Some("Bearer not-a-token")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn valid_token_reaches_the_handler() {
    let globals = globals();
    let app = protected_app(globals.clone());

    let claims = Claims::new(Uuid::new_v4(), "alice".to_string());
    let token = token::sign(&globals, &claims).unwrap();

    let response = app
        .oneshot(post_works(Some(&format!("Bearer {token}"))))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn expired_token_is_rejected() {
    let globals = globals();
    let app = protected_app(globals.clone());

    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: Uuid::new_v4().to_string(),
        username: "alice".to_string(),
        iat: now - 2 * TOKEN_EXPIRATION,
        exp: now - TOKEN_EXPIRATION,
    };
    let token = token::sign(&globals, &claims).unwrap();

    let response = app
        .oneshot(post_works(Some(&format!("Bearer {token}"))))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn token_signed_with_another_secret_is_rejected() {
    let app = protected_app(globals());

    let other = GlobalArgs::new(String::from("other-secret").into());
    let claims = Claims::new(Uuid::new_v4(), "alice".to_string());
    let token = token::sign(&other, &claims).unwrap();

    let response = app
        .oneshot(post_works(Some(&format!("Bearer {token}"))))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
