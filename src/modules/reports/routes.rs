use axum::{routing::get, Router};
use std::sync::Arc;

use crate::AppState;

use super::controller;

pub fn report_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/report",
            get(controller::get_all_reports).post(controller::add_report),
        )
        .route(
            "/report/{report_id}",
            get(controller::get_report)
                .put(controller::update_report)
                .delete(controller::delete_report),
        )
        .route("/user/reports", get(controller::get_user_reports))
}
