//! Legacy keyring daemon dispatch
//!
//! Adapter between the dispatcher and a [`KeyringDaemonClient`]. The
//! daemon stores every secret as a string under the native three-string
//! scheme, so payloads are encoded before storage, and reads negotiate
//! the encoding: entries written by the text convention live under the
//! `"plaintext"` tag, binary-convention entries under `"base64"`. A read
//! starts in text mode and falls back to the base64 tag exactly once
//! before failing.

use std::sync::Arc;

use crate::backend::{DaemonDoneCallback, DaemonFindCallback, KeyringDaemonClient};
use crate::encoding::{decode_payload, encode_payload, TransportMode};
use crate::error::SecretError;
use crate::job::Completion;
use crate::status::map_daemon_status;

pub(crate) fn read(
    daemon: Arc<dyn KeyringDaemonClient>,
    service: String,
    key: String,
    completion: Arc<Completion<Vec<u8>>>,
) {
    issue_find(daemon, service, key, TransportMode::Text, completion);
}

fn issue_find(
    daemon: Arc<dyn KeyringDaemonClient>,
    service: String,
    key: String,
    mode: TransportMode,
    completion: Arc<Completion<Vec<u8>>>,
) {
    let done = find_callback(
        Arc::clone(&daemon),
        service.clone(),
        key.clone(),
        mode,
        Arc::clone(&completion),
    );
    if !daemon.find_secret(&key, &service, mode.tag(), done) {
        completion.fulfill(Err(SecretError::unknown()));
    }
}

/// Builds the completion callback for one find attempt.
///
/// A failed text-mode attempt re-issues the lookup under the base64 tag;
/// the fallback fires at most once because the re-issued attempt is
/// already in binary mode.
fn find_callback(
    daemon: Arc<dyn KeyringDaemonClient>,
    service: String,
    key: String,
    mode: TransportMode,
    completion: Arc<Completion<Vec<u8>>>,
) -> DaemonFindCallback {
    Box::new(move |status, secret| {
        if status.is_ok() {
            let stored = secret.unwrap_or_default();
            completion.fulfill(decode_payload(mode, &stored));
        } else if mode == TransportMode::Text {
            tracing::debug!("plaintext lookup for {service} failed, retrying under the base64 tag");
            issue_find(daemon, service, key, TransportMode::Binary, completion);
        } else {
            completion.fulfill(Err(map_daemon_status(status)));
        }
    })
}

pub(crate) fn write(
    daemon: &Arc<dyn KeyringDaemonClient>,
    collection: &str,
    service: &str,
    key: &str,
    label: &str,
    payload: &[u8],
    completion: Arc<Completion<()>>,
) {
    let mode = TransportMode::for_payload(payload);
    let secret = encode_payload(mode, payload);
    let done = done_callback(Arc::clone(&completion));
    if !daemon.store_secret(collection, service, key, label, mode.tag(), &secret, done) {
        completion.fulfill(Err(SecretError::unknown()));
    }
}

pub(crate) fn delete(
    daemon: &Arc<dyn KeyringDaemonClient>,
    service: &str,
    key: &str,
    completion: Arc<Completion<()>>,
) {
    let done = done_callback(Arc::clone(&completion));
    if !daemon.delete_secret(key, service, done) {
        completion.fulfill(Err(SecretError::unknown()));
    }
}

/// Shared completion callback for store and delete calls.
fn done_callback(completion: Arc<Completion<()>>) -> DaemonDoneCallback {
    Box::new(move |status| {
        if status.is_ok() {
            completion.fulfill(Ok(()));
        } else {
            completion.fulfill(Err(map_daemon_status(status)));
        }
    })
}
