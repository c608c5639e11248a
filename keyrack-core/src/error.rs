//! Error types for KeyRack
//!
//! This module defines the unified error taxonomy for secret storage
//! operations. Backend-native status codes never cross this boundary:
//! every failure is translated into a `SecretError` before the caller
//! observes it.

use thiserror::Error;

/// Unified error for secret storage operations
///
/// Each variant carries the human-readable message delivered with the
/// terminal outcome; success has no variant here (it is the `Ok` arm of
/// [`SecretResult`]).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SecretError {
    /// No usable secret store was detected on this system
    #[error("{0}")]
    NoBackendAvailable(String),

    /// The backend refused the operation due to permissions or lock state
    #[error("{0}")]
    AccessDenied(String),

    /// Read or delete addressed a credential that does not exist
    #[error("{0}")]
    EntryNotFound(String),

    /// Any other backend failure, with a diagnostic message
    #[error("{0}")]
    Other(String),
}

impl SecretError {
    /// Generic failure reported when a backend call cannot even be
    /// initiated.
    pub(crate) fn unknown() -> Self {
        Self::Other("Unknown error".to_string())
    }
}

/// Result type alias for secret operations
pub type SecretResult<T> = std::result::Result<T, SecretError>;
