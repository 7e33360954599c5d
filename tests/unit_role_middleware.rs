mod common;

use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::{Router, middleware, routing::get};
use carepoint::carepoint_config::CorsConfig;
use carepoint::carepoint_models::{CenterId, Principal, UserType};
use carepoint::middleware::role::{
    check_center_access, check_manage_principal, check_menu_path, check_minimum_rank,
    require_admin, require_minimum_rank,
};
use carepoint::state::AppState;
use common::{test_jwt_config, token_for, token_with_claims};
use tower::ServiceExt;

fn test_state() -> AppState {
    AppState::new(
        test_jwt_config(),
        CorsConfig {
            allowed_origins: vec![],
        },
    )
}

fn guarded_app() -> Router {
    let state = test_state();
    Router::new()
        .route(
            "/admin",
            get(|| async { "ok" })
                .route_layer(middleware::from_fn_with_state(state.clone(), require_admin)),
        )
        .route(
            "/manager",
            get(|| async { "ok" }).route_layer(middleware::from_fn_with_state(
                state.clone(),
                |state: State<AppState>, req: Request, next: Next| {
                    require_minimum_rank(state, req, next, UserType::CenterManager)
                },
            )),
        )
        .route(
            "/system",
            get(|| async { "ok" }).route_layer(middleware::from_fn_with_state(
                state.clone(),
                |state: State<AppState>, req: Request, next: Next| {
                    require_minimum_rank(state, req, next, UserType::SuperAdmin)
                },
            )),
        )
        .with_state(state)
}

async fn status_for(uri: &str, token: Option<&str>) -> StatusCode {
    let mut builder = axum::http::Request::builder().uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    guarded_app()
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
        .status()
}

#[tokio::test]
async fn test_layers_follow_rank() {
    let expected = [
        (UserType::General, [false, false, false]),
        (UserType::Expert, [false, false, false]),
        (UserType::Staff, [true, false, false]),
        (UserType::CenterManager, [true, true, false]),
        (UserType::RegionalManager, [true, true, false]),
        (UserType::SuperAdmin, [true, true, true]),
    ];

    for (role, allowed) in expected {
        let token = token_for(Some(role), Some(1));
        for (uri, allowed) in ["/admin", "/manager", "/system"].into_iter().zip(allowed) {
            let want = if allowed {
                StatusCode::OK
            } else {
                StatusCode::FORBIDDEN
            };
            assert_eq!(
                status_for(uri, Some(token.as_str())).await,
                want,
                "{:?} on {}",
                role,
                uri
            );
        }
    }
}

#[tokio::test]
async fn test_layers_require_authentication() {
    assert_eq!(status_for("/admin", None).await, StatusCode::UNAUTHORIZED);
    assert_eq!(
        status_for("/admin", Some("garbage")).await,
        StatusCode::UNAUTHORIZED
    );
}

#[tokio::test]
async fn test_unknown_role_is_forbidden() {
    let token = token_with_claims(Some("owner"), Some(1));
    assert_eq!(
        status_for("/admin", Some(token.as_str())).await,
        StatusCode::FORBIDDEN
    );
}

#[tokio::test]
async fn test_role_claim_is_case_insensitive() {
    let token = token_with_claims(Some("Center_Manager"), Some(7));
    assert_eq!(
        status_for("/manager", Some(token.as_str())).await,
        StatusCode::OK
    );
}

#[test]
fn test_check_helpers() {
    let staff = Principal::new(Some(UserType::Staff), Some(CenterId::new(4)));
    let manager = Principal::new(Some(UserType::CenterManager), Some(CenterId::new(4)));

    assert!(check_minimum_rank(&staff, UserType::Staff).is_ok());
    assert!(check_minimum_rank(&staff, UserType::SuperAdmin).is_err());

    assert!(check_center_access(&staff, Some(CenterId::new(4))).is_ok());
    assert_eq!(
        check_center_access(&staff, None).unwrap_err().status,
        StatusCode::FORBIDDEN
    );

    assert!(check_menu_path(&manager, "/admin/vacations").is_ok());
    assert!(check_menu_path(&staff, "/admin/vacations").is_err());

    assert!(check_manage_principal(&manager, &staff).is_ok());
    assert!(check_manage_principal(&manager, &manager).is_err());
    assert!(check_manage_principal(&staff, &staff).is_err());
}
