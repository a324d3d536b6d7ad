//! `PostgreSQL` session store.
//!
//! Expects a `sessions` table keyed by the token text with a foreign key to
//! `users`, and a `users` table carrying `email`, `first_name`, `last_name`
//! and `role` text columns. Schema migration is owned by the embedding
//! application, not this crate.

use crate::error::StoreError;
use crate::models::{SessionRecord, SessionUserRow};
use crate::store::SessionStore;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

/// Session store backed by a `PostgreSQL` pool.
#[derive(Clone)]
pub struct PgSessionStore {
    pool: PgPool,
}

impl PgSessionStore {
    /// Create a new store over an existing connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionStore for PgSessionStore {
    async fn insert(&self, record: SessionRecord) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO sessions (id, user_id, expires_at)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(&record.id)
        .bind(record.user_id)
        .bind(record.expires_at)
        .execute(&self.pool)
        .await
        .map_err(StoreError::write)?;

        Ok(())
    }

    async fn find_user_for_live_session(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<SessionUserRow>, StoreError> {
        sqlx::query_as(
            r#"
            SELECT u.id, u.email, u.first_name, u.last_name, u.role
            FROM sessions s
            INNER JOIN users u ON u.id = s.user_id
            WHERE s.id = $1 AND s.expires_at > $2
            LIMIT 1
            "#,
        )
        .bind(token)
        .bind(now)
        .fetch_optional(&self.pool)
        .await
        .map_err(StoreError::read)
    }

    async fn delete(&self, token: &str) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM sessions WHERE id = $1")
            .bind(token)
            .execute(&self.pool)
            .await
            .map_err(StoreError::write)?;

        Ok(())
    }
}
