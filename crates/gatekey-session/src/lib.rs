//! Opaque bearer session tokens for gatekey.
//!
//! This crate is the trust boundary of an application: every authenticated
//! request's identity resolution passes through it. It issues high-entropy
//! bearer tokens, resolves candidate tokens to live user identities, and
//! revokes sessions, over any [`SessionStore`](gatekey_db::SessionStore)
//! implementation.
//!
//! # Example
//!
//! ```
//! use gatekey_core::UserId;
//! use gatekey_db::{MemorySessionStore, MemoryUser};
//! use gatekey_session::SessionService;
//!
//! # async fn example() -> Result<(), gatekey_session::SessionError> {
//! let store = MemorySessionStore::new();
//! store.seed_user(MemoryUser {
//!     id: 7,
//!     email: "a@b.com".into(),
//!     first_name: "Ada".into(),
//!     last_name: "Byron".into(),
//!     role: "user".into(),
//! });
//!
//! let sessions = SessionService::new(store);
//! let issued = sessions.create_session(UserId::new(7)).await?;
//! let identity = sessions.get_session_user(Some(&issued.token)).await?;
//! assert!(identity.is_some());
//!
//! sessions.delete_session(&issued.token).await?;
//! assert!(sessions.get_session_user(Some(&issued.token)).await?.is_none());
//! # Ok(())
//! # }
//! ```
//!
//! Out of scope, by design: password verification, MFA, token
//! refresh/rotation, cookie handling, authorization, and sweeping of expired
//! rows (validation stays O(1) per call; an external sweep owns cleanup).

pub mod error;
pub mod identity;
pub mod service;
pub mod transport;

// Re-export public API
pub use error::SessionError;
pub use identity::ResolvedUser;
pub use service::{generate_session_token, SessionService, SESSION_LIFETIME_DAYS, TOKEN_BYTES};
pub use transport::{ClearCredential, IssuedCredential, TransportPolicy};
