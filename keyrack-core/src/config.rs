//! Store settings
//!
//! This module defines the settings applied to store operations: where
//! daemon-backed entries land and how they are labelled in keyring
//! browser UIs.

use serde::{Deserialize, Serialize};

/// Settings applied to store operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Collection the daemon backend stores entries in
    #[serde(default = "default_collection")]
    pub collection: String,
    /// Label applied to stored entries; the service name when unset
    #[serde(default)]
    pub label: Option<String>,
}

fn default_collection() -> String {
    "default".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            collection: default_collection(),
            label: None,
        }
    }
}

impl StoreConfig {
    /// Returns the label attached to an entry written for `service`.
    #[must_use]
    pub fn entry_label(&self, service: &str) -> String {
        self.label
            .clone()
            .unwrap_or_else(|| service.to_string())
    }
}
