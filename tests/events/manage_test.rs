use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use crate::common::TestContext;

// =============================================================================
// EDIT
// =============================================================================

#[tokio::test]
async fn owner_can_edit_event() {
    let ctx = TestContext::new().await;
    let ngo = ctx.signup_user("ngo").await;
    let event_id = ctx.create_event(&ngo).await;

    let response = ctx
        .server
        .put(&format!("/api/events/{}", event_id))
        .authorization_bearer(&ngo.token)
        .json(&json!({
            "title": "Food distribution (rescheduled)",
            "description": "Moved to Saturday morning",
            "location": "Main square"
        }))
        .await;

    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Event updated successfully");

    let (title, location, owner): (String, String, String) =
        sqlx::query_as("SELECT title, location, ngo_id FROM events WHERE id = ?")
            .bind(&event_id)
            .fetch_one(&ctx.db)
            .await
            .unwrap();
    assert_eq!(title, "Food distribution (rescheduled)");
    assert_eq!(location, "Main square");
    assert_eq!(owner, ngo.id);
}

#[tokio::test]
async fn other_ngo_cannot_edit_event() {
    let ctx = TestContext::new().await;
    let owner = ctx.signup_user("ngo").await;
    let intruder = ctx.signup_user("ngo").await;
    let event_id = ctx.create_event(&owner).await;

    let response = ctx
        .server
        .put(&format!("/api/events/{}", event_id))
        .authorization_bearer(&intruder.token)
        .json(&json!({
            "title": "Hijacked",
            "description": "Hijacked",
            "location": "Hijacked"
        }))
        .await;

    response.assert_status(StatusCode::FORBIDDEN);

    let body: serde_json::Value = response.json();
    assert_eq!(body["detail"], "Not authorized to modify this event");

    let (title,): (String,) = sqlx::query_as("SELECT title FROM events WHERE id = ?")
        .bind(&event_id)
        .fetch_one(&ctx.db)
        .await
        .unwrap();
    assert_eq!(title, "Food distribution");
}

#[tokio::test]
async fn normal_user_cannot_edit_event() {
    let ctx = TestContext::new().await;
    let owner = ctx.signup_user("ngo").await;
    let user = ctx.signup_user("normal").await;
    let event_id = ctx.create_event(&owner).await;

    let response = ctx
        .server
        .put(&format!("/api/events/{}", event_id))
        .authorization_bearer(&user.token)
        .json(&json!({
            "title": "Hijacked",
            "description": "Hijacked",
            "location": "Hijacked"
        }))
        .await;

    response.assert_status(StatusCode::FORBIDDEN);

    // The role check fires before the ownership lookup.
    let body: serde_json::Value = response.json();
    assert_eq!(body["detail"], "Only NGO users can manage events");
}

#[tokio::test]
async fn edit_nonexistent_event_returns_not_found() {
    let ctx = TestContext::new().await;
    let ngo = ctx.signup_user("ngo").await;

    let response = ctx
        .server
        .put(&format!("/api/events/{}", Uuid::new_v4()))
        .authorization_bearer(&ngo.token)
        .json(&json!({
            "title": "Ghost",
            "description": "Ghost",
            "location": "Ghost"
        }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);

    let body: serde_json::Value = response.json();
    assert_eq!(body["detail"], "Event not found");
}

#[tokio::test]
async fn edit_event_without_token_returns_unauthorized() {
    let ctx = TestContext::new().await;
    let ngo = ctx.signup_user("ngo").await;
    let event_id = ctx.create_event(&ngo).await;

    let response = ctx
        .server
        .put(&format!("/api/events/{}", event_id))
        .json(&json!({
            "title": "Anonymous edit",
            "description": "Anonymous edit",
            "location": "Anonymous edit"
        }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

// =============================================================================
// DELETE
// =============================================================================

#[tokio::test]
async fn owner_can_delete_event() {
    let ctx = TestContext::new().await;
    let ngo = ctx.signup_user("ngo").await;
    let event_id = ctx.create_event(&ngo).await;

    let response = ctx
        .server
        .delete(&format!("/api/events/{}", event_id))
        .authorization_bearer(&ngo.token)
        .await;

    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Event deleted successfully");

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM events WHERE id = ?")
        .bind(&event_id)
        .fetch_one(&ctx.db)
        .await
        .unwrap();
    assert_eq!(count.0, 0);
}

#[tokio::test]
async fn other_ngo_cannot_delete_event() {
    let ctx = TestContext::new().await;
    let owner = ctx.signup_user("ngo").await;
    let intruder = ctx.signup_user("ngo").await;
    let event_id = ctx.create_event(&owner).await;

    let response = ctx
        .server
        .delete(&format!("/api/events/{}", event_id))
        .authorization_bearer(&intruder.token)
        .await;

    response.assert_status(StatusCode::FORBIDDEN);

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM events WHERE id = ?")
        .bind(&event_id)
        .fetch_one(&ctx.db)
        .await
        .unwrap();
    assert_eq!(count.0, 1);
}

#[tokio::test]
async fn normal_user_cannot_delete_someone_elses_event() {
    let ctx = TestContext::new().await;
    let owner = ctx.signup_user("ngo").await;
    let user = ctx.signup_user("normal").await;
    let event_id = ctx.create_event(&owner).await;

    let response = ctx
        .server
        .delete(&format!("/api/events/{}", event_id))
        .authorization_bearer(&user.token)
        .await;

    response.assert_status(StatusCode::FORBIDDEN);

    // Delete has no role gate; the ownership check is what rejects here.
    let body: serde_json::Value = response.json();
    assert_eq!(body["detail"], "Not authorized to modify this event");
}

#[tokio::test]
async fn delete_event_without_token_returns_unauthorized() {
    let ctx = TestContext::new().await;
    let ngo = ctx.signup_user("ngo").await;
    let event_id = ctx.create_event(&ngo).await;

    let response = ctx
        .server
        .delete(&format!("/api/events/{}", event_id))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json();
    assert_eq!(body["detail"], "Not authenticated");

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM events WHERE id = ?")
        .bind(&event_id)
        .fetch_one(&ctx.db)
        .await
        .unwrap();
    assert_eq!(count.0, 1);
}

#[tokio::test]
async fn delete_nonexistent_event_returns_not_found() {
    let ctx = TestContext::new().await;
    let ngo = ctx.signup_user("ngo").await;

    let response = ctx
        .server
        .delete(&format!("/api/events/{}", Uuid::new_v4()))
        .authorization_bearer(&ngo.token)
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}
