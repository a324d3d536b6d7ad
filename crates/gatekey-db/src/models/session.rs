//! Session entity model.
//!
//! A session binds an opaque bearer token to a user for a bounded lifetime.
//! The token value itself is the primary key; there is no surrogate id.

use chrono::{DateTime, Utc};
use gatekey_core::UserId;
use serde::Serialize;
use sqlx::FromRow;

/// A session record in the store.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SessionRecord {
    /// The opaque token identifier. Sole lookup key and the bearer secret;
    /// 64 lowercase hex characters as issued.
    pub id: String,

    /// The user this session belongs to. The user outlives the session; no
    /// cascading delete is assumed on user removal.
    pub user_id: i64,

    /// Absolute expiry. The session is valid iff `now < expires_at`.
    pub expires_at: DateTime<Utc>,
}

impl SessionRecord {
    /// Check whether the session is live at the given instant.
    ///
    /// The comparison is strict: a session whose expiry equals `now` is
    /// already expired. Callers read the clock once and pass it in, so a
    /// single logical validation sees a single instant.
    #[must_use]
    pub fn is_live(&self, now: DateTime<Utc>) -> bool {
        self.expires_at > now
    }

    /// Get the owning user's ID as a typed `UserId`.
    #[must_use]
    pub fn user_id(&self) -> UserId {
        UserId::new(self.user_id)
    }
}
