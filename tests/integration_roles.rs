mod common;

use axum::http::StatusCode;
use common::{get, read_json, setup_test_app};
use http_body_util::BodyExt;

#[tokio::test]
async fn test_health() {
    let (status, body) = read_json(get(setup_test_app(), "/health", None).await).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_roles_listed_lowest_rank_first() {
    let (status, body) = read_json(get(setup_test_app(), "/api/roles", None).await).await;
    assert_eq!(status, StatusCode::OK);

    let roles = body["roles"].as_array().unwrap();
    let names: Vec<&str> = roles
        .iter()
        .map(|r| r["user_type"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec![
            "general",
            "expert",
            "staff",
            "center_manager",
            "regional_manager",
            "super_admin"
        ]
    );
    assert_eq!(roles[2]["rank"], 2);
    assert_eq!(roles[2]["is_admin"], true);
    assert_eq!(roles[1]["is_admin"], false);
}

#[tokio::test]
async fn test_menu_prefixes() {
    let (status, body) = read_json(get(setup_test_app(), "/api/menu", None).await).await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(body["admin"].as_array().unwrap().len(), 4);
    assert_eq!(body["center_manager"].as_array().unwrap().len(), 5);
    assert!(
        body["super_admin_only"]
            .as_array()
            .unwrap()
            .contains(&serde_json::json!("/admin/revenue"))
    );
}

#[tokio::test]
async fn test_metrics_disabled_without_recorder() {
    let response = get(setup_test_app(), "/metrics", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"Metrics are disabled");
}

#[tokio::test]
async fn test_openapi_document_served() {
    let (status, body) =
        read_json(get(setup_test_app(), "/api-docs/openapi.json", None).await).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/permissions/check-path"].is_object());
    assert!(body["components"]["securitySchemes"]["bearer_auth"].is_object());
}
