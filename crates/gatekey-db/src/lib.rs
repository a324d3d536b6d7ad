//! Session store boundary for gatekey.
//!
//! This crate defines the [`SessionStore`] trait that the session core is
//! written against, the row models it exchanges, and two implementations:
//!
//! - [`PgSessionStore`] - `PostgreSQL` via `sqlx`
//! - [`MemorySessionStore`] - in-process `HashMap` store, used as the test
//!   double and for embedded deployments
//!
//! The store is deliberately narrow: insert-one, one joined read filtered to
//! live sessions, and delete-by-key. Anything else (schema management,
//! expired-row sweeping, user provisioning) belongs to the surrounding
//! system.

pub mod error;
pub mod memory;
pub mod models;
pub mod pg;
pub mod store;

// Re-export public API
pub use error::StoreError;
pub use memory::{MemorySessionStore, MemoryUser};
pub use models::{SessionRecord, SessionUserRow};
pub use pg::PgSessionStore;
pub use store::SessionStore;
