#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use carepoint::carepoint_auth::{Claims, create_access_token};
use carepoint::carepoint_config::{CorsConfig, JwtConfig};
use carepoint::carepoint_models::{CenterId, Principal, UserId, UserType};
use carepoint::router::init_router;
use carepoint::state::AppState;
use http_body_util::BodyExt;
use jsonwebtoken::{EncodingKey, Header, encode};
use serde_json::Value;
use tower::ServiceExt;

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "integration-test-secret-at-least-32-chars".to_string(),
        access_token_expiry: 3600,
    }
}

pub fn setup_test_app() -> Router {
    let state = AppState::new(
        test_jwt_config(),
        CorsConfig {
            allowed_origins: vec!["http://localhost:5173".to_string()],
        },
    );
    init_router(state)
}

pub fn token_for(role: Option<UserType>, center: Option<i64>) -> String {
    let principal = Principal::new(role, center.map(CenterId::new))
        .with_id(UserId::new(42))
        .with_email("tester@carepoint.kr");
    create_access_token(&principal, &test_jwt_config()).unwrap()
}

/// Signs arbitrary claims, e.g. a role name the server does not know.
pub fn token_with_claims(user_type: Option<&str>, center: Option<i64>) -> String {
    let claims = Claims {
        sub: "42".to_string(),
        email: None,
        user_type: user_type.map(str::to_string),
        center_id: center,
        supervisor_id: None,
        exp: 9_999_999_999,
        iat: 1_700_000_000,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(test_jwt_config().secret.as_bytes()),
    )
    .unwrap()
}

pub async fn get(app: Router, uri: &str, token: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    app.oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_json(app: Router, uri: &str, token: Option<&str>, body: Value) -> Response<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    app.oneshot(builder.body(Body::from(body.to_string())).unwrap())
        .await
        .unwrap()
}

pub async fn read_json(response: Response<Body>) -> (StatusCode, Value) {
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&body).unwrap_or_else(|_| {
        panic!(
            "Response was not JSON. Status: {}, Body: {:?}",
            status,
            String::from_utf8_lossy(&body)
        )
    });
    (status, json)
}
