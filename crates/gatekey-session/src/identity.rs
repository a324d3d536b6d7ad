//! Resolved identity.
//!
//! The ephemeral tuple returned by successful session validation. It is
//! constructed per call from the store's joined row and discarded by the
//! caller; nothing here is persisted.

use crate::error::SessionError;
use gatekey_core::{UserId, UserRole};
use gatekey_db::SessionUserRow;
use serde::Serialize;

/// The public user fields resolved from a live session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedUser {
    /// The user's identifier.
    pub id: UserId,

    /// The user's email address.
    pub email: String,

    /// The user's first name.
    pub first_name: String,

    /// The user's last name.
    pub last_name: String,

    /// The user's role, validated against the closed set.
    pub role: UserRole,
}

impl TryFrom<SessionUserRow> for ResolvedUser {
    type Error = SessionError;

    /// Converts a raw store row into a resolved identity.
    ///
    /// This is the fallible parse step at the store boundary: an
    /// out-of-set role text fails with [`SessionError::InvalidRole`] instead
    /// of being coerced.
    fn try_from(row: SessionUserRow) -> Result<Self, Self::Error> {
        let role: UserRole = row
            .role
            .parse()
            .map_err(|_| SessionError::InvalidRole { role: row.role.clone() })?;

        Ok(Self {
            id: UserId::new(row.id),
            email: row.email,
            first_name: row.first_name,
            last_name: row.last_name,
            role,
        })
    }
}
