//! Domain entities and JSON request/response shapes.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{ChirpyError, Result};

/// Registered account. Immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub email: String,
}

/// Short text post bound to an owning user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chirp {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Already filtered; at most 140 bytes before filtering.
    pub body: String,
    pub user_id: Uuid,
}

/// `POST /api/users`
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub email: String,
}

/// `POST /api/chirps`
#[derive(Debug, Deserialize)]
pub struct CreateChirpRequest {
    pub body: String,
    pub user_id: Uuid,
}

/// `POST /api/validate_chirp`
#[derive(Debug, Deserialize)]
pub struct ValidateChirpRequest {
    pub body: String,
}

/// Response of `POST /api/validate_chirp`.
#[derive(Debug, Serialize, Deserialize)]
pub struct CleanedBody {
    pub cleaned_body: String,
}

/// Decode the first JSON value of a request body, regardless of the declared
/// content type. Anything after that value is ignored.
pub fn decode_json<T: DeserializeOwned>(raw: &[u8]) -> Result<T> {
    match serde_json::Deserializer::from_slice(raw).into_iter::<T>().next() {
        Some(Ok(v)) => Ok(v),
        Some(Err(e)) => Err(ChirpyError::MalformedRequest(e.to_string())),
        None => Err(ChirpyError::MalformedRequest("empty body".into())),
    }
}
