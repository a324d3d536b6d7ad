//! Error types for the gatekey-db crate.
//!
//! Store failures are split by direction (write vs. read) because callers
//! react differently: a failed write aborts issuance or revocation, a failed
//! read makes validation indeterminate. Neither is retried here; both
//! propagate unmodified to the calling request layer.

use thiserror::Error;

/// Boxed source error from a concrete store implementation.
pub type StoreFailure = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Session store operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The persistence engine rejected an insert or delete.
    ///
    /// Typically the store is unreachable or a uniqueness constraint fired.
    #[error("session store rejected a write: {0}")]
    Write(#[source] StoreFailure),

    /// The persistence engine failed a read.
    #[error("session store read failed: {0}")]
    Read(#[source] StoreFailure),
}

impl StoreError {
    /// Wraps an implementation error as a write failure.
    pub fn write(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Write(Box::new(source))
    }

    /// Wraps an implementation error as a read failure.
    pub fn read(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Read(Box::new(source))
    }

    /// Check if this error came from a write path.
    #[must_use]
    pub fn is_write(&self) -> bool {
        matches!(self, StoreError::Write(_))
    }

    /// Check if this error came from a read path.
    #[must_use]
    pub fn is_read(&self) -> bool {
        matches!(self, StoreError::Read(_))
    }
}
