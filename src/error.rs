use axum::{http::StatusCode, response::IntoResponse, response::Response, Json};
use serde::Serialize;

/// Every failure the API can surface. Raised anywhere in the stack and
/// converted to an HTTP response exactly once, at the boundary.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("Email already registered")]
    EmailTaken,

    #[error("User not found")]
    UserNotFound,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Not authenticated")]
    MissingToken,

    #[error("Invalid token")]
    InvalidToken,

    #[error("User ID not found in token")]
    TokenMissingUserId,

    #[error("Only NGO users can manage events")]
    NgoOnly,

    #[error("Event not found")]
    EventNotFound,

    #[error("Not authorized to modify this event")]
    NotEventOwner,

    #[error("Report not found")]
    ReportNotFound,

    #[error("Not authorized to modify this report")]
    NotReportOwner,

    #[error("Database error")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error")]
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::EmailTaken => StatusCode::CONFLICT,
            Self::UserNotFound | Self::EventNotFound | Self::ReportNotFound => {
                StatusCode::NOT_FOUND
            }
            Self::InvalidCredentials
            | Self::MissingToken
            | Self::InvalidToken
            | Self::TokenMissingUserId => StatusCode::UNAUTHORIZED,
            Self::NgoOnly | Self::NotEventOwner | Self::NotReportOwner => {
                StatusCode::FORBIDDEN
            }
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error body shape shared by every failure response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = ?self, "request failed");
        }

        (status, Json(ErrorBody { detail: self.to_string() })).into_response()
    }
}
