//! User role enumeration.
//!
//! Roles form a closed set defined by the user store's schema. They are
//! persisted as text and parsed fallibly at the store boundary: a value
//! outside the known set is a data-integrity signal, never silently coerced,
//! because the resolved role drives authorization decisions downstream.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

/// A role value outside the closed set was read from the user store.
///
/// Indicates corruption or a schema/version mismatch between the writer and
/// this reader.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized user role '{role}'")]
pub struct ParseRoleError {
    /// The raw role value that failed to parse.
    pub role: String,
}

/// The closed set of user roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Administrative user.
    Admin,
    /// Regular user.
    User,
}

impl UserRole {
    /// Returns the role's stored text representation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
        }
    }
}

impl Display for UserRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "user" => Ok(Self::User),
            other => Err(ParseRoleError {
                role: other.to_string(),
            }),
        }
    }
}
