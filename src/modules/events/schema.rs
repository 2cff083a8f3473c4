use serde::{Deserialize, Serialize};

use super::model::EventWithOwner;

// =============================================================================
// REQUEST SCHEMAS
// =============================================================================

/// Create and edit take the same body: the client always sends the full set
/// of mutable fields.
#[derive(Debug, Deserialize)]
pub struct EventPayload {
    pub title: String,
    pub description: String,
    pub location: String,
}

// =============================================================================
// RESPONSE SCHEMAS
// =============================================================================

#[derive(Debug, Serialize)]
pub struct EventListResponse {
    pub status: &'static str,
    pub all_events: Vec<EventWithOwner>,
}

#[derive(Debug, Serialize)]
pub struct CreateEventResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub event_id: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub status: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct NgoEventsResponse {
    pub ngo_events: Vec<EventWithOwner>,
}
