mod common;

use axum::http::StatusCode;
use carepoint::carepoint_models::UserType;
use common::{post_json, read_json, setup_test_app, token_for};
use serde_json::{Value, json};

fn centers() -> Value {
    json!({
        "centers": [
            { "id": 1, "name": "Gangnam" },
            { "id": 2, "name": "Mapo", "managerId": 9 },
            { "id": 3, "name": "Busan", "region": "south" }
        ]
    })
}

fn ids(body: &Value) -> Vec<i64> {
    body["centers"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_i64().unwrap())
        .collect()
}

#[tokio::test]
async fn test_visible_centers_requires_admin() {
    let token = token_for(Some(UserType::Expert), Some(1));
    let (status, body) = read_json(
        post_json(setup_test_app(), "/api/centers/visible", Some(token.as_str()), centers()).await,
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "Access denied. Minimum required role: staff");
}

#[tokio::test]
async fn test_visible_centers_requires_token() {
    let response = post_json(setup_test_app(), "/api/centers/visible", None, centers()).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_staff_sees_own_center() {
    let token = token_for(Some(UserType::Staff), Some(2));
    let (status, body) = read_json(
        post_json(setup_test_app(), "/api/centers/visible", Some(token.as_str()), centers()).await,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![2]);
    assert_eq!(body["centers"][0]["manager_id"], 9);
    assert_eq!(body["scope"], json!({ "kind": "restricted_to", "centerIds": [2] }));
}

#[tokio::test]
async fn test_super_admin_sees_all_centers() {
    let token = token_for(Some(UserType::SuperAdmin), None);
    let (_, body) = read_json(
        post_json(setup_test_app(), "/api/centers/visible", Some(token.as_str()), centers()).await,
    )
    .await;

    assert_eq!(ids(&body), vec![1, 2, 3]);
    assert_eq!(body["scope"]["kind"], "all");
}
