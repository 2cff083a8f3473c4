use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub ngo_id: String,
    pub created_at: DateTime<Utc>,
}

/// Event row joined with the owning NGO's email, the shape every listing
/// endpoint returns.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EventWithOwner {
    pub id: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub ngo_id: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}
