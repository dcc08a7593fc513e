//! In-memory store backed by `DashMap`.
//!
//! Mirrors the relational constraints of the PostgreSQL schema: unique email,
//! chirp owner must exist, deleting users cascades to their chirps.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use uuid::Uuid;

use chirpy_core::model::{Chirp, User};

use super::{Store, StoreError, StoreResult};

#[derive(Default)]
pub struct MemoryStore {
    users: DashMap<Uuid, User>,
    /// Keyed by id; the sequence number keeps list order stable when two
    /// chirps share a timestamp.
    chirps: DashMap<Uuid, (u64, Chirp)>,
    seq: AtomicU64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn create_user(&self, email: &str) -> StoreResult<User> {
        if self.users.iter().any(|u| u.email == email) {
            return Err(StoreError::Backend(format!("duplicate email: {email}")));
        }
        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            email: email.to_string(),
        };
        self.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn delete_all_users(&self) -> StoreResult<()> {
        self.users.clear();
        self.chirps.clear();
        Ok(())
    }

    async fn create_chirp(&self, body: &str, user_id: Uuid) -> StoreResult<Chirp> {
        if !self.users.contains_key(&user_id) {
            return Err(StoreError::Backend(format!("unknown user_id: {user_id}")));
        }
        let now = Utc::now();
        let chirp = Chirp {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            body: body.to_string(),
            user_id,
        };
        let seq = self.seq.fetch_add(1, Ordering::Relaxed);
        self.chirps.insert(chirp.id, (seq, chirp.clone()));
        Ok(chirp)
    }

    async fn list_chirps(&self) -> StoreResult<Vec<Chirp>> {
        let mut rows: Vec<(u64, Chirp)> = self.chirps.iter().map(|r| r.value().clone()).collect();
        rows.sort_by_key(|(seq, _)| *seq);
        Ok(rows.into_iter().map(|(_, c)| c).collect())
    }

    async fn get_chirp(&self, id: Uuid) -> StoreResult<Chirp> {
        self.chirps
            .get(&id)
            .map(|r| r.value().1.clone())
            .ok_or(StoreError::NotFound)
    }
}
