//! Error types for the gatekey-session crate.
//!
//! An absent, unknown, or expired token is NOT an error: it is the `Ok(None)`
//! outcome of resolution, so the three causes stay indistinguishable to a
//! potential attacker. Errors here mean the store failed or the stored data
//! is unsound.

use gatekey_db::StoreError;
use thiserror::Error;

/// Session operation errors.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The session store failed a read or write.
    ///
    /// Propagated unmodified, never retried here; retry and backoff belong
    /// to the calling request layer. Callers should treat this as a
    /// transient failure, distinct from "unauthenticated".
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A resolved session's user carries a role outside the closed set.
    ///
    /// Signals data corruption or a writer/reader schema mismatch. Surfaced
    /// rather than defaulted: silently picking a role would be a
    /// privilege-assignment decision.
    #[error("unrecognized role '{role}' on session user")]
    InvalidRole {
        /// The out-of-set role text read from the store.
        role: String,
    },
}

impl SessionError {
    /// Check if this error came from the store layer.
    #[must_use]
    pub fn is_store(&self) -> bool {
        matches!(self, SessionError::Store(_))
    }

    /// Check if this error is a role-integrity failure.
    #[must_use]
    pub fn is_invalid_role(&self) -> bool {
        matches!(self, SessionError::InvalidRole { .. })
    }
}
