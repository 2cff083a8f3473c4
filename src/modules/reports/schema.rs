use serde::{Deserialize, Serialize};

use super::model::{Report, ReportWithOwner};

// =============================================================================
// REQUEST SCHEMAS
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct ReportPayload {
    pub title: String,
    pub description: String,
    pub location: String,
    pub status: String,
}

// =============================================================================
// RESPONSE SCHEMAS
// =============================================================================

#[derive(Debug, Serialize)]
pub struct ReportListResponse {
    pub status: &'static str,
    pub fetched_all: Vec<ReportWithOwner>,
}

#[derive(Debug, Serialize)]
pub struct CreateReportResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub report_id: String,
}

#[derive(Debug, Serialize)]
pub struct ReportResponse {
    pub status: &'static str,
    pub report: Report,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub status: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct UserReportsResponse {
    pub user_reports: Vec<ReportWithOwner>,
}
