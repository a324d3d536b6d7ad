//! gatekey Core Library
//!
//! Shared leaf types for the gatekey session crates.
//!
//! # Modules
//!
//! - [`ids`] - Strongly typed identifiers (`UserId`)
//! - [`role`] - The closed `UserRole` enumeration and its fallible parse
//! - [`token`] - The opaque [`SessionToken`] bearer credential
//!
//! # Example
//!
//! ```
//! use gatekey_core::{SessionToken, UserId, UserRole};
//!
//! let user_id = UserId::new(7);
//! let role: UserRole = "admin".parse().unwrap();
//! let token = SessionToken::new("a".repeat(64));
//!
//! assert_eq!(user_id.as_i64(), 7);
//! assert_eq!(role, UserRole::Admin);
//! assert_eq!(token.as_str().len(), 64);
//! ```

pub mod ids;
pub mod role;
pub mod token;

// Re-export main types for convenient access
pub use ids::{ParseIdError, UserId};
pub use role::{ParseRoleError, UserRole};
pub use token::SessionToken;
