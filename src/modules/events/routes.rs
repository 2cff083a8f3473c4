use axum::{
    routing::{get, put},
    Router,
};
use std::sync::Arc;

use crate::AppState;

use super::controller;

pub fn event_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/events",
            get(controller::get_all_events).post(controller::add_event),
        )
        .route(
            "/events/{event_id}",
            put(controller::update_event).delete(controller::delete_event),
        )
        .route("/ngo/events", get(controller::get_ngo_events))
}
