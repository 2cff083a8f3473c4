use std::sync::Arc;

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use crate::error::ApiError;
use crate::modules::auth::model::UserType;
use crate::AppState;

/// Trusted identity of the caller, resolved from the bearer token.
/// Taking this as a handler argument is what makes a route protected.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user_id: String,
    pub user_type: UserType,
}

impl FromRequestParts<Arc<AppState>> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(ApiError::MissingToken)?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or(ApiError::MissingToken)?;

        let claims = state
            .jwt_service
            .verify(token)
            .map_err(|_| ApiError::InvalidToken)?;

        // A signed token can still carry an empty subject; treat it the same
        // as an unidentified caller.
        if claims.user_id.is_empty() {
            return Err(ApiError::TokenMissingUserId);
        }

        Ok(CurrentUser {
            user_id: claims.user_id,
            user_type: claims.user_type,
        })
    }
}
