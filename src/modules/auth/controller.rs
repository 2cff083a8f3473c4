use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;
use validator::Validate;

use crate::error::ApiError;
use crate::AppState;

use super::crud::UserCrud;
use super::schema::{AuthResponse, AuthUserData, LoginRequest, SignupRequest};

pub async fn signup(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SignupRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    req.validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let crud = UserCrud::new(state.db.clone(), &state.jwt_service);
    let result = crud
        .register(&req.email, &req.password, req.user_type)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            status: "success",
            message: "User registered successfully",
            data: AuthUserData {
                id: result.user.id,
                email: result.user.email,
                user_type: result.user.user_type,
                token: result.token,
            },
        }),
    ))
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let crud = UserCrud::new(state.db.clone(), &state.jwt_service);
    let result = crud.login(&req.email, &req.password).await?;

    Ok(Json(AuthResponse {
        status: "success",
        message: "Login successful",
        data: AuthUserData {
            id: result.user.id,
            email: result.user.email,
            user_type: result.user.user_type,
            token: result.token,
        },
    }))
}
