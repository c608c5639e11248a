//! Caller-facing secret store
//!
//! `SecretStore` routes each read/write/delete request to the backend
//! selected by the capability probe and guarantees exactly one terminal
//! outcome per job. When no backend is available the outcome is produced
//! immediately, without any native call.

use std::sync::Arc;

use crate::config::StoreConfig;
use crate::daemon as daemon_dispatch;
use crate::detection::{BackendKind, BackendSet};
use crate::error::{SecretError, SecretResult};
use crate::job::{Completion, Job};
use crate::service as service_dispatch;

/// Uniform read/write/delete facade over the detected secret store
pub struct SecretStore {
    backends: Arc<BackendSet>,
    config: StoreConfig,
}

impl SecretStore {
    /// Creates a store with default settings.
    #[must_use]
    pub fn new(backends: Arc<BackendSet>) -> Self {
        Self::with_config(backends, StoreConfig::default())
    }

    /// Creates a store with explicit settings.
    #[must_use]
    pub fn with_config(backends: Arc<BackendSet>, config: StoreConfig) -> Self {
        Self { backends, config }
    }

    /// Begins reading the secret stored under `(service, key)`.
    ///
    /// The returned job resolves to the payload bytes, decoded back from
    /// whichever transport convention the entry was written with.
    pub fn start_read(&self, service: &str, key: &str) -> Job<Vec<u8>> {
        let (completion, job) = Completion::channel();
        let selection = self.backends.selection();
        tracing::debug!("dispatching read for {service} via {selection:?}");
        match selection {
            BackendKind::None => completion.fulfill(Err(no_backend())),
            BackendKind::SecretService => {
                service_dispatch::read(self.backends.service(), service, key, completion);
            }
            BackendKind::KeyringDaemon => {
                daemon_dispatch::read(
                    Arc::clone(self.backends.daemon()),
                    service.to_owned(),
                    key.to_owned(),
                    completion,
                );
            }
        }
        job
    }

    /// Begins writing `payload` under `(service, key)`.
    pub fn start_write(&self, service: &str, key: &str, payload: &[u8]) -> Job<()> {
        let (completion, job) = Completion::channel();
        let selection = self.backends.selection();
        tracing::debug!("dispatching write for {service} via {selection:?}");
        match selection {
            BackendKind::None => completion.fulfill(Err(no_backend())),
            BackendKind::SecretService => {
                service_dispatch::write(
                    self.backends.service(),
                    service,
                    key,
                    &self.config.entry_label(service),
                    payload,
                    completion,
                );
            }
            BackendKind::KeyringDaemon => {
                daemon_dispatch::write(
                    self.backends.daemon(),
                    &self.config.collection,
                    service,
                    key,
                    &self.config.entry_label(service),
                    payload,
                    completion,
                );
            }
        }
        job
    }

    /// Begins deleting the secret stored under `(service, key)`.
    pub fn start_delete(&self, service: &str, key: &str) -> Job<()> {
        let (completion, job) = Completion::channel();
        let selection = self.backends.selection();
        tracing::debug!("dispatching delete for {service} via {selection:?}");
        match selection {
            BackendKind::None => completion.fulfill(Err(no_backend())),
            BackendKind::SecretService => {
                service_dispatch::delete(self.backends.service(), service, key, completion);
            }
            BackendKind::KeyringDaemon => {
                daemon_dispatch::delete(self.backends.daemon(), service, key, completion);
            }
        }
        job
    }

    /// Reads the secret stored under `(service, key)` and awaits the
    /// outcome.
    ///
    /// # Errors
    /// Returns `SecretError` when no backend is available, the entry does
    /// not exist, or the backend fails.
    pub async fn retrieve(&self, service: &str, key: &str) -> SecretResult<Vec<u8>> {
        self.start_read(service, key).outcome().await
    }

    /// Stores `payload` under `(service, key)` and awaits the outcome.
    ///
    /// # Errors
    /// Returns `SecretError` when no backend is available or storage
    /// fails.
    pub async fn store(&self, service: &str, key: &str, payload: &[u8]) -> SecretResult<()> {
        self.start_write(service, key, payload).outcome().await
    }

    /// Deletes the secret stored under `(service, key)` and awaits the
    /// outcome.
    ///
    /// # Errors
    /// Returns `SecretError` when no backend is available, the entry does
    /// not exist, or deletion fails.
    pub async fn delete(&self, service: &str, key: &str) -> SecretResult<()> {
        self.start_delete(service, key).outcome().await
    }
}

fn no_backend() -> SecretError {
    SecretError::NoBackendAvailable("No backend available".to_string())
}
