use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::error::ApiError;
use crate::services::identity::CurrentUser;
use crate::AppState;

use super::crud::EventCrud;
use super::schema::{
    CreateEventResponse, EventListResponse, EventPayload, MessageResponse, NgoEventsResponse,
};

// =============================================================================
// GET /api/events - List every event with its owner's email
// =============================================================================

pub async fn get_all_events(
    State(state): State<Arc<AppState>>,
) -> Result<Json<EventListResponse>, ApiError> {
    let crud = EventCrud::new(state.db.clone());
    let all_events = crud.list_all().await?;

    Ok(Json(EventListResponse {
        status: "success",
        all_events,
    }))
}

// =============================================================================
// POST /api/events - Create an event (NGO accounts only)
// =============================================================================

pub async fn add_event(
    State(state): State<Arc<AppState>>,
    caller: CurrentUser,
    Json(payload): Json<EventPayload>,
) -> Result<(StatusCode, Json<CreateEventResponse>), ApiError> {
    let crud = EventCrud::new(state.db.clone());
    let event_id = crud.create(&payload, &caller).await?;

    tracing::info!(event_id = %event_id, ngo_id = %caller.user_id, "event created");

    Ok((
        StatusCode::CREATED,
        Json(CreateEventResponse {
            status: "success",
            message: "Event added successfully",
            event_id,
        }),
    ))
}

// =============================================================================
// PUT /api/events/{event_id} - Edit an owned event
// =============================================================================

pub async fn update_event(
    State(state): State<Arc<AppState>>,
    caller: CurrentUser,
    Path(event_id): Path<String>,
    Json(payload): Json<EventPayload>,
) -> Result<Json<MessageResponse>, ApiError> {
    let crud = EventCrud::new(state.db.clone());
    crud.edit(&event_id, &payload, &caller).await?;

    Ok(Json(MessageResponse {
        status: "success",
        message: "Event updated successfully",
    }))
}

// =============================================================================
// DELETE /api/events/{event_id} - Delete an owned event
// =============================================================================

pub async fn delete_event(
    State(state): State<Arc<AppState>>,
    caller: CurrentUser,
    Path(event_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let crud = EventCrud::new(state.db.clone());
    crud.delete(&event_id, &caller).await?;

    tracing::info!(event_id = %event_id, ngo_id = %caller.user_id, "event deleted");

    Ok(Json(MessageResponse {
        status: "success",
        message: "Event deleted successfully",
    }))
}

// =============================================================================
// GET /api/ngo/events - List the caller's own events
// =============================================================================

pub async fn get_ngo_events(
    State(state): State<Arc<AppState>>,
    caller: CurrentUser,
) -> Result<Json<NgoEventsResponse>, ApiError> {
    let crud = EventCrud::new(state.db.clone());
    let ngo_events = crud.list_owned(&caller.user_id).await?;

    Ok(Json(NgoEventsResponse { ngo_events }))
}
