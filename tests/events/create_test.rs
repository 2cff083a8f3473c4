use axum::http::StatusCode;
use serde_json::json;

use crate::common::TestContext;

#[tokio::test]
async fn ngo_can_create_event() {
    let ctx = TestContext::new().await;
    let ngo = ctx.signup_user("ngo").await;

    let response = ctx
        .server
        .post("/api/events")
        .authorization_bearer(&ngo.token)
        .json(&json!({
            "title": "Medical camp",
            "description": "Free checkups and vaccinations",
            "location": "North clinic"
        }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "success");
    assert_eq!(body["message"], "Event added successfully");
    let event_id = body["event_id"].as_str().unwrap();

    // The stored row is owned by the caller from the token.
    let (owner,): (String,) = sqlx::query_as("SELECT ngo_id FROM events WHERE id = ?")
        .bind(event_id)
        .fetch_one(&ctx.db)
        .await
        .unwrap();
    assert_eq!(owner, ngo.id);
}

#[tokio::test]
async fn normal_user_cannot_create_event() {
    let ctx = TestContext::new().await;
    let user = ctx.signup_user("normal").await;

    let response = ctx
        .server
        .post("/api/events")
        .authorization_bearer(&user.token)
        .json(&json!({
            "title": "Medical camp",
            "description": "Free checkups",
            "location": "North clinic"
        }))
        .await;

    response.assert_status(StatusCode::FORBIDDEN);

    let body: serde_json::Value = response.json();
    assert_eq!(body["detail"], "Only NGO users can manage events");

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM events")
        .fetch_one(&ctx.db)
        .await
        .unwrap();
    assert_eq!(count.0, 0);
}

#[tokio::test]
async fn create_event_without_token_returns_unauthorized() {
    let ctx = TestContext::new().await;

    let response = ctx
        .server
        .post("/api/events")
        .json(&json!({
            "title": "Medical camp",
            "description": "Free checkups",
            "location": "North clinic"
        }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json();
    assert_eq!(body["detail"], "Not authenticated");
}

#[tokio::test]
async fn create_event_with_garbage_token_returns_unauthorized() {
    let ctx = TestContext::new().await;

    let response = ctx
        .server
        .post("/api/events")
        .authorization_bearer("not-a-real-token")
        .json(&json!({
            "title": "Medical camp",
            "description": "Free checkups",
            "location": "North clinic"
        }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json();
    assert_eq!(body["detail"], "Invalid token");
}

#[tokio::test]
async fn create_event_with_missing_fields_returns_unprocessable() {
    let ctx = TestContext::new().await;
    let ngo = ctx.signup_user("ngo").await;

    let response = ctx
        .server
        .post("/api/events")
        .authorization_bearer(&ngo.token)
        .json(&json!({ "title": "Medical camp" }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}
