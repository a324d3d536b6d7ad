//! Joined session-user row model.

use gatekey_core::UserId;
use sqlx::FromRow;

/// The user fields produced by the live-session join.
///
/// This is the raw store-side shape: `role` is still the stored text and is
/// parsed against the closed role set by the session core, not here. The row
/// carries no session fields; by the time it exists, liveness has already
/// been established by the query's filter.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct SessionUserRow {
    /// The user's identifier.
    pub id: i64,

    /// The user's email address.
    pub email: String,

    /// The user's first name.
    pub first_name: String,

    /// The user's last name.
    pub last_name: String,

    /// The stored role text, unvalidated.
    pub role: String,
}

impl SessionUserRow {
    /// Get the user's ID as a typed `UserId`.
    #[must_use]
    pub fn user_id(&self) -> UserId {
        UserId::new(self.id)
    }
}
