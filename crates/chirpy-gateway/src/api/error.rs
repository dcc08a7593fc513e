use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use chirpy_core::error::ChirpyError;

use crate::store::StoreError;

/// HTTP boundary wrapper for [`ChirpyError`].
#[derive(Debug)]
pub struct ApiError(pub ChirpyError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            ChirpyError::MalformedRequest(_)
            | ChirpyError::ContentTooLong
            | ChirpyError::InvalidIdentifier(_) => StatusCode::BAD_REQUEST,
            ChirpyError::NotFound(_) => StatusCode::NOT_FOUND,
            ChirpyError::Forbidden => StatusCode::FORBIDDEN,
            ChirpyError::StorageFailure(_) | ChirpyError::Config(_) | ChirpyError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<ChirpyError> for ApiError {
    fn from(e: ChirpyError) -> Self {
        ApiError(e)
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        ApiError(e.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(code = self.0.client_code().as_str(), error = %self.0, "request failed");
        } else {
            tracing::debug!(code = self.0.client_code().as_str(), error = %self.0, "request rejected");
        }
        (status, Json(json!({ "error": self.0.client_message() }))).into_response()
    }
}
