//! Session service: issue, resolve, revoke.

use crate::error::SessionError;
use crate::identity::ResolvedUser;
use crate::transport::{ClearCredential, IssuedCredential};
use chrono::{Duration, Utc};
use gatekey_core::{SessionToken, UserId};
use gatekey_db::{SessionRecord, SessionStore};
use rand::RngCore;
use tracing::{debug, info, warn};

/// Fixed session lifetime in days. Absolute, with no sliding renewal.
pub const SESSION_LIFETIME_DAYS: i64 = 30;

/// Size of issued tokens in bytes (256 bits of entropy).
///
/// The floor for resisting brute-force and birthday guessing across any
/// realistic token volume; not negotiable downward.
pub const TOKEN_BYTES: usize = 32;

/// Session lifecycle service over an injected store.
///
/// One short-lived unit of work per call; no background tasks, no retries,
/// no cross-session shared state. Concurrent calls on the same token are
/// serialized only by the store's per-row atomicity.
#[derive(Clone)]
pub struct SessionService<S> {
    store: S,
}

impl<S: SessionStore> SessionService<S> {
    /// Create a service over a session store.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Issue a new session for an authenticated user.
    ///
    /// The caller has already authenticated `user_id`; it is not
    /// re-validated here. Returns the credential pair the transport layer
    /// stores client-side.
    ///
    /// Token collisions are not probed for before insert: at 256 bits they
    /// are cryptographically negligible, and a violated uniqueness
    /// constraint would surface as the store's write error.
    pub async fn create_session(&self, user_id: UserId) -> Result<IssuedCredential, SessionError> {
        let token = generate_session_token();
        let expires_at = Utc::now() + Duration::days(SESSION_LIFETIME_DAYS);

        self.store
            .insert(SessionRecord {
                id: token.as_str().to_string(),
                user_id: user_id.as_i64(),
                expires_at,
            })
            .await?;

        info!(user_id = %user_id, expires_at = %expires_at, "session issued");

        Ok(IssuedCredential { token, expires_at })
    }

    /// Resolve a candidate token to the owning user's identity.
    ///
    /// `None` in means `Ok(None)` out, with no store access: a request
    /// without a credential is a normal unauthenticated request, not a
    /// failure. For a present token, one joined read decides liveness and
    /// ownership; unknown, expired, and orphaned tokens all come back as
    /// `Ok(None)`, deliberately indistinguishable.
    pub async fn get_session_user(
        &self,
        token: Option<&SessionToken>,
    ) -> Result<Option<ResolvedUser>, SessionError> {
        let Some(token) = token else {
            return Ok(None);
        };

        // One clock read per validation; the store compares every row
        // against this same instant.
        let now = Utc::now();

        let Some(row) = self
            .store
            .find_user_for_live_session(token.as_str(), now)
            .await?
        else {
            debug!("session resolution missed");
            return Ok(None);
        };

        match ResolvedUser::try_from(row) {
            Ok(user) => Ok(Some(user)),
            Err(err) => {
                if let SessionError::InvalidRole { role } = &err {
                    warn!(role = %role, "session user carries out-of-set role");
                }
                Err(err)
            }
        }
    }

    /// Revoke a session.
    ///
    /// Deleting a token with no session is a no-op. Returns the instruction
    /// for the transport layer to clear the client-held credential.
    pub async fn delete_session(
        &self,
        token: &SessionToken,
    ) -> Result<ClearCredential, SessionError> {
        self.store.delete(token.as_str()).await?;

        info!("session revoked");

        Ok(ClearCredential)
    }
}

/// Generate a fresh opaque session token.
///
/// 32 bytes from the operating system's CSPRNG, hex-encoded to a fixed-length
/// 64-character lowercase string. `OsRng` is used directly rather than a
/// seeded userspace generator; token values are bearer secrets.
#[must_use]
pub fn generate_session_token() -> SessionToken {
    use rand::rngs::OsRng;
    let mut bytes = [0u8; TOKEN_BYTES];
    OsRng.fill_bytes(&mut bytes);
    SessionToken::new(hex::encode(bytes))
}
