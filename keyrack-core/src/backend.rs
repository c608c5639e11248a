//! Secret backend contracts
//!
//! This module defines the traits the dispatcher consumes. Transport-level
//! detail (how a client actually reaches its store over IPC) stays behind
//! these seams; the core only relies on the contracts below.
//!
//! Both clients follow the same completion model: the initiating call
//! returns a `bool` meaning "initiation accepted", and a `false` return
//! guarantees the callback will never fire. Accepted calls complete
//! asynchronously by invoking the callback exactly once, on whatever
//! thread the backend's notification mechanism runs on.

use crate::encoding::TransportMode;
use crate::error::SecretResult;
use crate::status::DaemonStatus;

/// Completion callback for daemon operations without a payload.
pub type DaemonDoneCallback = Box<dyn FnOnce(DaemonStatus) + Send + 'static>;

/// Completion callback for daemon lookups; carries the stored string on
/// success.
pub type DaemonFindCallback = Box<dyn FnOnce(DaemonStatus, Option<String>) + Send + 'static>;

/// Completion callback for unified-service reads.
pub type ServiceReadCallback = Box<dyn FnOnce(SecretResult<Vec<u8>>) + Send + 'static>;

/// Completion callback for unified-service writes and deletes.
pub type ServiceDoneCallback = Box<dyn FnOnce(SecretResult<()>) + Send + 'static>;

/// Client for the unified secret-service API
///
/// Implementations report failures in application-level terms; their
/// callbacks deliver a terminal [`SecretResult`] directly, so no status
/// mapping happens on this path.
pub trait SecretServiceClient: Send + Sync {
    /// Reports whether the unified service is usable. Must not panic.
    fn is_available(&self) -> bool;

    /// Begins a lookup of the secret stored under `(service, key)`.
    fn find_secret(&self, key: &str, service: &str, done: ServiceReadCallback) -> bool;

    /// Begins storing `payload` under `(service, key)`.
    fn store_secret(
        &self,
        service: &str,
        key: &str,
        label: &str,
        mode: TransportMode,
        payload: &[u8],
        done: ServiceDoneCallback,
    ) -> bool;

    /// Begins deleting the secret stored under `(service, key)`.
    fn delete_secret(&self, key: &str, service: &str, done: ServiceDoneCallback) -> bool;
}

/// Client for the legacy keyring daemon
///
/// The daemon stores string secrets addressed by the native three-string
/// scheme `(key, service, transport tag)`; payloads must already be
/// encoded for string transport when they reach this contract.
pub trait KeyringDaemonClient: Send + Sync {
    /// Reports whether a keyring daemon is reachable. Must not panic.
    fn is_available(&self) -> bool;

    /// Begins a lookup of the entry stored under `(key, service)` and
    /// tagged with `transport_tag`.
    fn find_secret(
        &self,
        key: &str,
        service: &str,
        transport_tag: &str,
        done: DaemonFindCallback,
    ) -> bool;

    /// Begins storing an already-encoded `secret` string.
    #[allow(clippy::too_many_arguments)]
    fn store_secret(
        &self,
        collection: &str,
        service: &str,
        key: &str,
        label: &str,
        transport_tag: &str,
        secret: &str,
        done: DaemonDoneCallback,
    ) -> bool;

    /// Begins deleting the entry stored under `(key, service)`.
    fn delete_secret(&self, key: &str, service: &str, done: DaemonDoneCallback) -> bool;
}
