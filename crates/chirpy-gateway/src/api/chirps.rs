use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use chirpy_core::content::validate_chirp;
use chirpy_core::error::ChirpyError;
use chirpy_core::model::{decode_json, Chirp, CleanedBody, CreateChirpRequest, ValidateChirpRequest};

use super::ApiError;
use crate::app_state::AppState;
use crate::store::StoreError;

/// POST /api/validate_chirp
///
/// Validation-only path kept from the first API revision; `POST /api/chirps`
/// runs the same pipeline and persists the result.
pub async fn validate(body: Bytes) -> Result<Json<CleanedBody>, ApiError> {
    let req: ValidateChirpRequest = decode_json(&body)?;
    let cleaned_body = validate_chirp(&req.body)?;
    Ok(Json(CleanedBody { cleaned_body }))
}

/// POST /api/chirps
#[tracing::instrument(skip_all)]
pub async fn create_chirp(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Chirp>), ApiError> {
    let req: CreateChirpRequest = decode_json(&body)?;
    let cleaned = validate_chirp(&req.body)?;
    let chirp = state.store().create_chirp(&cleaned, req.user_id).await?;
    tracing::info!(chirp_id = %chirp.id, user_id = %chirp.user_id, "chirp created");
    Ok((StatusCode::CREATED, Json(chirp)))
}

/// GET /api/chirps
pub async fn list_chirps(State(state): State<AppState>) -> Result<Json<Vec<Chirp>>, ApiError> {
    Ok(Json(state.store().list_chirps().await?))
}

/// GET /api/chirps/:chirp_id
#[tracing::instrument(skip(state))]
pub async fn get_chirp(
    State(state): State<AppState>,
    Path(chirp_id): Path<String>,
) -> Result<Json<Chirp>, ApiError> {
    let id: Uuid = chirp_id
        .parse()
        .map_err(|_| ChirpyError::InvalidIdentifier(chirp_id.clone()))?;

    match state.store().get_chirp(id).await {
        Ok(chirp) => Ok(Json(chirp)),
        Err(StoreError::NotFound) => Err(ChirpyError::NotFound("Chirp").into()),
        Err(e) => Err(e.into()),
    }
}
