//! PostgreSQL store (sqlx, runtime-checked queries).

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use chirpy_core::model::{Chirp, User};

use super::{Store, StoreError, StoreResult};

#[derive(Debug, Clone, sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    email: String,
}

impl From<UserRow> for User {
    fn from(r: UserRow) -> Self {
        User {
            id: r.id,
            created_at: r.created_at,
            updated_at: r.updated_at,
            email: r.email,
        }
    }
}

#[derive(Debug, Clone, sqlx::FromRow)]
struct ChirpRow {
    id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    body: String,
    user_id: Uuid,
}

impl From<ChirpRow> for Chirp {
    fn from(r: ChirpRow) -> Self {
        Chirp {
            id: r.id,
            created_at: r.created_at,
            updated_at: r.updated_at,
            body: r.body,
            user_id: r.user_id,
        }
    }
}

fn backend(context: &str) -> impl FnOnce(sqlx::Error) -> StoreError + '_ {
    move |e| StoreError::Backend(format!("{context}: {e}"))
}

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a PostgreSQL connection pool.
    pub async fn connect(database_url: &str) -> StoreResult<Self> {
        let pool = PgPool::connect(database_url)
            .await
            .map_err(backend("connect failed"))?;
        Ok(Self::new(pool))
    }

    /// Run embedded migrations.
    pub async fn migrate(&self) -> StoreResult<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| StoreError::Backend(format!("migrations failed: {e}")))
    }
}

#[async_trait]
impl Store for PgStore {
    async fn create_user(&self, email: &str) -> StoreResult<User> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"INSERT INTO users (id, created_at, updated_at, email)
               VALUES ($1, NOW(), NOW(), $2)
               RETURNING id, created_at, updated_at, email"#,
        )
        .bind(Uuid::new_v4())
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(backend("create user"))?;
        Ok(row.into())
    }

    async fn delete_all_users(&self) -> StoreResult<()> {
        sqlx::query("DELETE FROM users")
            .execute(&self.pool)
            .await
            .map_err(backend("delete users"))?;
        Ok(())
    }

    async fn create_chirp(&self, body: &str, user_id: Uuid) -> StoreResult<Chirp> {
        let row = sqlx::query_as::<_, ChirpRow>(
            r#"INSERT INTO chirps (id, created_at, updated_at, body, user_id)
               VALUES ($1, NOW(), NOW(), $2, $3)
               RETURNING id, created_at, updated_at, body, user_id"#,
        )
        .bind(Uuid::new_v4())
        .bind(body)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(backend("create chirp"))?;
        Ok(row.into())
    }

    async fn list_chirps(&self) -> StoreResult<Vec<Chirp>> {
        let rows = sqlx::query_as::<_, ChirpRow>(
            "SELECT id, created_at, updated_at, body, user_id FROM chirps ORDER BY created_at ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(backend("list chirps"))?;
        Ok(rows.into_iter().map(Chirp::from).collect())
    }

    async fn get_chirp(&self, id: Uuid) -> StoreResult<Chirp> {
        let row = sqlx::query_as::<_, ChirpRow>(
            "SELECT id, created_at, updated_at, body, user_id FROM chirps WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(backend("get chirp"))?;
        row.map(Chirp::from).ok_or(StoreError::NotFound)
    }
}
