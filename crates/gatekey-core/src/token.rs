//! Opaque session token.
//!
//! The token value is the bearer secret: possession of it is the credential.
//! The type never exposes the value through `Debug`, so a token can not leak
//! into logs or error output by accident. Use [`SessionToken::as_str`] at the
//! store and transport boundaries, which are the only places the raw value
//! belongs.

use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Formatter};

/// An opaque, high-entropy bearer token identifying a session.
///
/// Issued tokens are 64 lowercase hexadecimal characters (32 bytes of CSPRNG
/// output); the type itself places no constraint on the contents, since
/// candidate tokens arrive unvalidated from the transport layer and are
/// matched against the store as-is.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(String);

impl SessionToken {
    /// Wraps a raw token value.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the raw token value.
    ///
    /// Handle with care: this is the bearer secret.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for SessionToken {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl Debug for SessionToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("SessionToken(<redacted>)")
    }
}
