//! Legacy keyring daemon status codes
//!
//! This module reproduces the native result enumeration of the legacy
//! keyring daemon and translates failed statuses into the unified error
//! taxonomy. The unified secret-service backend never routes through this
//! mapping; it reports failures in application-level terms already.

use crate::error::SecretError;

/// Native result codes reported by the legacy keyring daemon
///
/// The discriminants of the named codes match the daemon's wire values
/// 0 through 9; anything outside that range is preserved in
/// [`DaemonStatus::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DaemonStatus {
    /// Operation completed successfully
    Ok,
    /// The daemon refused access
    Denied,
    /// No keyring daemon is running
    NoDaemon,
    /// The keyring was already unlocked
    AlreadyUnlocked,
    /// The named keyring does not exist
    NoSuchKeyring,
    /// Malformed request arguments
    BadArguments,
    /// The daemon failed to read or write its store
    IoError,
    /// The user dismissed the operation
    Cancelled,
    /// A keyring with that name already exists
    KeyringAlreadyExists,
    /// No entry matched the lookup attributes
    NoMatch,
    /// A status code outside the known enumeration
    Unknown(i32),
}

impl DaemonStatus {
    /// Converts a raw native status code.
    #[must_use]
    pub fn from_raw(code: i32) -> Self {
        match code {
            0 => Self::Ok,
            1 => Self::Denied,
            2 => Self::NoDaemon,
            3 => Self::AlreadyUnlocked,
            4 => Self::NoSuchKeyring,
            5 => Self::BadArguments,
            6 => Self::IoError,
            7 => Self::Cancelled,
            8 => Self::KeyringAlreadyExists,
            9 => Self::NoMatch,
            other => Self::Unknown(other),
        }
    }

    /// Returns `true` for the success status.
    #[must_use]
    pub fn is_ok(self) -> bool {
        self == Self::Ok
    }
}

/// Translates a failed daemon status into the unified error taxonomy.
///
/// Total over the native enumeration; unrecognized codes map to
/// [`SecretError::Other`] with an "Unknown error" message. Must not be
/// called with [`DaemonStatus::Ok`]: success is handled before mapping,
/// and passing it here is a programming error.
#[must_use]
pub fn map_daemon_status(status: DaemonStatus) -> SecretError {
    debug_assert!(!status.is_ok(), "map_daemon_status called on success");

    match status {
        DaemonStatus::Denied => SecretError::AccessDenied("Access to keychain denied".to_string()),
        DaemonStatus::NoDaemon => {
            SecretError::NoBackendAvailable("No keyring daemon".to_string())
        }
        DaemonStatus::NoMatch => SecretError::EntryNotFound("No match".to_string()),
        DaemonStatus::AlreadyUnlocked => SecretError::Other("Already unlocked".to_string()),
        DaemonStatus::NoSuchKeyring => SecretError::Other("No such keyring".to_string()),
        DaemonStatus::BadArguments => SecretError::Other("Bad arguments".to_string()),
        DaemonStatus::IoError => SecretError::Other("I/O error".to_string()),
        DaemonStatus::Cancelled => SecretError::Other("Cancelled".to_string()),
        DaemonStatus::KeyringAlreadyExists => {
            SecretError::Other("Keyring already exists".to_string())
        }
        DaemonStatus::Ok | DaemonStatus::Unknown(_) => SecretError::unknown(),
    }
}
