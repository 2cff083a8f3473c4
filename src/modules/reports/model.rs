use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Report {
    pub id: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub status: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
}

/// Report row joined with the reporter's email, used by the listing endpoints.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ReportWithOwner {
    pub id: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub status: String,
    pub user_id: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}
