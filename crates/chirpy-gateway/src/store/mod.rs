//! Storage collaborator.
//!
//! Handlers only see the [`Store`] trait, so the request pipeline runs the same
//! against PostgreSQL in production and [`MemoryStore`] in tests.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use chirpy_core::error::ChirpyError;
use chirpy_core::model::{Chirp, User};

pub use memory::MemoryStore;
pub use postgres::PgStore;

pub type StoreResult<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("row not found")]
    NotFound,
    #[error("{0}")]
    Backend(String),
}

impl From<StoreError> for ChirpyError {
    /// Lookup handlers match `StoreError::NotFound` themselves to name the
    /// resource; anything reaching this conversion is a storage failure.
    fn from(e: StoreError) -> Self {
        ChirpyError::StorageFailure(e.to_string())
    }
}

#[async_trait]
pub trait Store: Send + Sync {
    /// Insert a user; emails are unique.
    async fn create_user(&self, email: &str) -> StoreResult<User>;

    /// Remove every user (and, by cascade, every chirp).
    async fn delete_all_users(&self) -> StoreResult<()>;

    async fn create_chirp(&self, body: &str, user_id: Uuid) -> StoreResult<Chirp>;

    /// All chirps, oldest first.
    async fn list_chirps(&self) -> StoreResult<Vec<Chirp>>;

    async fn get_chirp(&self, id: Uuid) -> StoreResult<Chirp>;
}
