use axum::{body::Bytes, extract::State, http::StatusCode, Json};

use chirpy_core::model::{decode_json, CreateUserRequest, User};

use super::ApiError;
use crate::app_state::AppState;

/// POST /api/users
#[tracing::instrument(skip_all)]
pub async fn create_user(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let req: CreateUserRequest = decode_json(&body)?;
    let user = state.store().create_user(&req.email).await?;
    tracing::info!(user_id = %user.id, "user created");
    Ok((StatusCode::CREATED, Json(user)))
}
