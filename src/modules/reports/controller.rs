use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::error::ApiError;
use crate::services::identity::CurrentUser;
use crate::AppState;

use super::crud::ReportCrud;
use super::schema::{
    CreateReportResponse, MessageResponse, ReportListResponse, ReportPayload, ReportResponse,
    UserReportsResponse,
};

// =============================================================================
// GET /api/report - List every report with the reporter's email
// =============================================================================

pub async fn get_all_reports(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ReportListResponse>, ApiError> {
    let crud = ReportCrud::new(state.db.clone());
    let fetched_all = crud.list_all().await?;

    Ok(Json(ReportListResponse {
        status: "success",
        fetched_all,
    }))
}

// =============================================================================
// POST /api/report - File a new report (any authenticated user)
// =============================================================================

pub async fn add_report(
    State(state): State<Arc<AppState>>,
    caller: CurrentUser,
    Json(payload): Json<ReportPayload>,
) -> Result<(StatusCode, Json<CreateReportResponse>), ApiError> {
    let crud = ReportCrud::new(state.db.clone());
    let report_id = crud.create(&payload, &caller).await?;

    tracing::info!(report_id = %report_id, user_id = %caller.user_id, "report filed");

    Ok((
        StatusCode::CREATED,
        Json(CreateReportResponse {
            status: "success",
            message: "Report added successfully",
            report_id,
        }),
    ))
}

// =============================================================================
// GET /api/report/{report_id} - Fetch a single report
// =============================================================================

pub async fn get_report(
    State(state): State<Arc<AppState>>,
    Path(report_id): Path<String>,
) -> Result<Json<ReportResponse>, ApiError> {
    let crud = ReportCrud::new(state.db.clone());
    let report = crud.get_by_id(&report_id).await?;

    Ok(Json(ReportResponse {
        status: "success",
        report,
    }))
}

// =============================================================================
// PUT /api/report/{report_id} - Edit an owned report
// =============================================================================

pub async fn update_report(
    State(state): State<Arc<AppState>>,
    caller: CurrentUser,
    Path(report_id): Path<String>,
    Json(payload): Json<ReportPayload>,
) -> Result<Json<MessageResponse>, ApiError> {
    let crud = ReportCrud::new(state.db.clone());
    crud.edit(&report_id, &payload, &caller).await?;

    Ok(Json(MessageResponse {
        status: "success",
        message: "Report updated successfully",
    }))
}

// =============================================================================
// DELETE /api/report/{report_id} - Delete an owned report
// =============================================================================

pub async fn delete_report(
    State(state): State<Arc<AppState>>,
    caller: CurrentUser,
    Path(report_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let crud = ReportCrud::new(state.db.clone());
    crud.delete(&report_id, &caller).await?;

    tracing::info!(report_id = %report_id, user_id = %caller.user_id, "report deleted");

    Ok(Json(MessageResponse {
        status: "success",
        message: "Report deleted successfully",
    }))
}

// =============================================================================
// GET /api/user/reports - List the caller's own reports
// =============================================================================

pub async fn get_user_reports(
    State(state): State<Arc<AppState>>,
    caller: CurrentUser,
) -> Result<Json<UserReportsResponse>, ApiError> {
    let crud = ReportCrud::new(state.db.clone());
    let user_reports = crud.list_owned(&caller.user_id).await?;

    Ok(Json(UserReportsResponse { user_reports }))
}
