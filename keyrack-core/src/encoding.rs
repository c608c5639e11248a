//! Transport encoding for string-only secret stores
//!
//! The legacy keyring daemon stores every secret as a string, with no
//! metadata recording whether the original payload was text or binary.
//! Writers tag each entry with the convention they used (`"plaintext"` or
//! `"base64"`); readers that find nothing under one tag retry under the
//! other. This module owns the mode type, the wire tags, and the payload
//! codec shared by both backend adapters.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::{SecretError, SecretResult};

/// On-the-wire representation of a secret payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransportMode {
    /// Payload stored verbatim as text
    #[default]
    Text,
    /// Payload stored as a standard-base64 string
    Binary,
}

impl TransportMode {
    /// Attribute tag written alongside entries using this mode.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Text => "plaintext",
            Self::Binary => "base64",
        }
    }

    /// Selects the mode a writer uses for `payload`.
    ///
    /// Valid UTF-8 travels verbatim; anything else must survive the
    /// string transport and is base64-encoded.
    #[must_use]
    pub fn for_payload(payload: &[u8]) -> Self {
        if std::str::from_utf8(payload).is_ok() {
            Self::Text
        } else {
            Self::Binary
        }
    }
}

/// Encodes `payload` for string transport in the given mode.
#[must_use]
pub fn encode_payload(mode: TransportMode, payload: &[u8]) -> String {
    match mode {
        TransportMode::Text => String::from_utf8_lossy(payload).into_owned(),
        TransportMode::Binary => STANDARD.encode(payload),
    }
}

/// Decodes a stored string back into payload bytes.
///
/// # Errors
/// Returns [`SecretError::Other`] when a `Binary` entry does not hold
/// valid standard base64.
pub fn decode_payload(mode: TransportMode, stored: &str) -> SecretResult<Vec<u8>> {
    match mode {
        TransportMode::Text => Ok(stored.as_bytes().to_vec()),
        TransportMode::Binary => STANDARD
            .decode(stored)
            .map_err(|e| SecretError::Other(format!("Invalid base64 data in store: {e}"))),
    }
}
