//! In-process session store.
//!
//! `HashMap`-backed implementation of [`SessionStore`] with the same
//! semantics as the SQL store: strict expiry comparison, one joined read,
//! idempotent delete, uniqueness and referential checks on insert. Used as
//! the test double throughout the session crate and suitable for embedded
//! single-process deployments.

use crate::error::StoreError;
use crate::models::{SessionRecord, SessionUserRow};
use crate::store::SessionStore;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};
use thiserror::Error;

/// A user row seeded into the in-process store.
#[derive(Debug, Clone)]
pub struct MemoryUser {
    /// The user's identifier.
    pub id: i64,
    /// The user's email address.
    pub email: String,
    /// The user's first name.
    pub first_name: String,
    /// The user's last name.
    pub last_name: String,
    /// The stored role text. Deliberately unvalidated here, so tests can
    /// seed out-of-set values and exercise the integrity check above.
    pub role: String,
}

#[derive(Debug, Error)]
#[error("duplicate session id")]
struct DuplicateSessionId;

#[derive(Debug, Error)]
#[error("session references unknown user")]
struct UnknownUserReference;

#[derive(Default)]
struct Inner {
    sessions: HashMap<String, SessionRecord>,
    users: HashMap<i64, MemoryUser>,
}

/// In-process `HashMap` session store.
#[derive(Default)]
pub struct MemorySessionStore {
    inner: RwLock<Inner>,
}

impl MemorySessionStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a user row. Replaces any existing user with the same id.
    pub fn seed_user(&self, user: MemoryUser) {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        inner.users.insert(user.id, user);
    }

    /// Remove a user row, leaving any of their sessions orphaned.
    pub fn remove_user(&self, user_id: i64) {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        inner.users.remove(&user_id);
    }

    /// Number of session records currently held, expired rows included.
    #[must_use]
    pub fn session_count(&self) -> usize {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        inner.sessions.len()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn insert(&self, record: SessionRecord) -> Result<(), StoreError> {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);

        if inner.sessions.contains_key(&record.id) {
            return Err(StoreError::write(DuplicateSessionId));
        }
        if !inner.users.contains_key(&record.user_id) {
            return Err(StoreError::write(UnknownUserReference));
        }

        inner.sessions.insert(record.id.clone(), record);
        Ok(())
    }

    async fn find_user_for_live_session(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<SessionUserRow>, StoreError> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);

        // Unknown, expired, and orphaned all collapse to None, matching the
        // SQL join's behavior.
        let row = inner
            .sessions
            .get(token)
            .filter(|session| session.is_live(now))
            .and_then(|session| inner.users.get(&session.user_id))
            .map(|user| SessionUserRow {
                id: user.id,
                email: user.email.clone(),
                first_name: user.first_name.clone(),
                last_name: user.last_name.clone(),
                role: user.role.clone(),
            });

        Ok(row)
    }

    async fn delete(&self, token: &str) -> Result<(), StoreError> {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        inner.sessions.remove(token);
        Ok(())
    }
}
