//! Transport boundary types.
//!
//! The core never inspects cookies or headers; it only produces and consumes
//! token values. These types carry the two instructions the transport layer
//! acts on (store a freshly issued credential, clear a revoked one) and the
//! explicit protection flags it should apply. Nothing here reads ambient
//! process state: whether the deployment is production is the caller's
//! configuration, passed in as a value.

use chrono::{DateTime, Utc};
use gatekey_core::SessionToken;
use serde::Serialize;

/// A freshly issued credential, handed to the transport layer for
/// client-side storage.
#[derive(Debug, Clone, Serialize)]
pub struct IssuedCredential {
    /// The bearer token to attach to subsequent requests.
    pub token: SessionToken,

    /// Absolute expiry of the session, for the client-side store's own
    /// expiry (e.g. the cookie `Expires` attribute).
    pub expires_at: DateTime<Utc>,
}

/// Instruction to the transport layer to clear the client-held credential.
///
/// Returned by revocation; carries nothing because the transport layer knows
/// which credential slot it manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearCredential;

/// Transport-level protection flags for the stored credential.
///
/// An explicit value chosen by the embedding application at call time, not
/// derived from environment variables inside this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransportPolicy {
    /// Credential must not be readable by client-side script.
    pub http_only: bool,

    /// Credential is transmitted only over an encrypted channel.
    pub secure: bool,

    /// Credential is withheld from cross-site requests (lax).
    pub same_site_lax: bool,
}

impl TransportPolicy {
    /// Policy for production deployments: all protections on.
    #[must_use]
    pub fn production() -> Self {
        Self {
            http_only: true,
            secure: true,
            same_site_lax: true,
        }
    }

    /// Policy for local development: everything but `secure`, so plain-HTTP
    /// loops keep working.
    #[must_use]
    pub fn development() -> Self {
        Self {
            secure: false,
            ..Self::production()
        }
    }
}
