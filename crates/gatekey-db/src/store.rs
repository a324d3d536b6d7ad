//! The session store trait.

use crate::error::StoreError;
use crate::models::{SessionRecord, SessionUserRow};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Persistence boundary for session records.
///
/// The session core receives a store by injection rather than reaching for a
/// process-wide handle, so any implementation (or test double) can stand in.
/// Implementations provide per-row read/write atomicity only; no additional
/// locking layer is expected of them, and none is applied above them.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Insert a new session record.
    ///
    /// A rejected insert (engine unreachable, uniqueness violation) surfaces
    /// as [`StoreError::Write`]; it is not retried.
    async fn insert(&self, record: SessionRecord) -> Result<(), StoreError>;

    /// Resolve a candidate token to its owning user, in one atomic read.
    ///
    /// Joins the session row to its user, filtered to `id == token` and
    /// `expires_at > now`, capped to one row. Returns `Ok(None)` whether the
    /// token is unknown, expired, or its user no longer exists; the causes
    /// are deliberately indistinguishable to the caller.
    ///
    /// `now` is supplied by the caller, read once per logical validation.
    async fn find_user_for_live_session(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<SessionUserRow>, StoreError>;

    /// Delete the session record for `token`, if any.
    ///
    /// Deleting an absent token is a no-op, not an error.
    async fn delete(&self, token: &str) -> Result<(), StoreError>;
}

// A shared handle to a store is a store. Lets one store instance back both
// the session service and other holders (tests, an external sweeper).
#[async_trait]
impl<S: SessionStore + ?Sized> SessionStore for Arc<S> {
    async fn insert(&self, record: SessionRecord) -> Result<(), StoreError> {
        (**self).insert(record).await
    }

    async fn find_user_for_live_session(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<SessionUserRow>, StoreError> {
        (**self).find_user_for_live_session(token, now).await
    }

    async fn delete(&self, token: &str) -> Result<(), StoreError> {
        (**self).delete(token).await
    }
}
