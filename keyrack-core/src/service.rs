//! Unified secret-service dispatch
//!
//! Thin adapter between the dispatcher and a [`SecretServiceClient`]. The
//! client already reports failures in application-level terms, so the only
//! translation on this path is the synchronous initiation check: a call
//! the client refuses to start is reported once as a generic failure and
//! never retried.

use std::sync::Arc;

use crate::backend::{SecretServiceClient, ServiceDoneCallback, ServiceReadCallback};
use crate::encoding::TransportMode;
use crate::error::SecretError;
use crate::job::Completion;

pub(crate) fn read(
    client: &Arc<dyn SecretServiceClient>,
    service: &str,
    key: &str,
    completion: Arc<Completion<Vec<u8>>>,
) {
    let done: ServiceReadCallback = {
        let completion = Arc::clone(&completion);
        Box::new(move |outcome| completion.fulfill(outcome))
    };
    if !client.find_secret(key, service, done) {
        completion.fulfill(Err(SecretError::unknown()));
    }
}

pub(crate) fn write(
    client: &Arc<dyn SecretServiceClient>,
    service: &str,
    key: &str,
    label: &str,
    payload: &[u8],
    completion: Arc<Completion<()>>,
) {
    let mode = TransportMode::for_payload(payload);
    let done: ServiceDoneCallback = {
        let completion = Arc::clone(&completion);
        Box::new(move |outcome| completion.fulfill(outcome))
    };
    if !client.store_secret(service, key, label, mode, payload, done) {
        completion.fulfill(Err(SecretError::unknown()));
    }
}

pub(crate) fn delete(
    client: &Arc<dyn SecretServiceClient>,
    service: &str,
    key: &str,
    completion: Arc<Completion<()>>,
) {
    let done: ServiceDoneCallback = {
        let completion = Arc::clone(&completion);
        Box::new(move |outcome| completion.fulfill(outcome))
    };
    if !client.delete_secret(key, service, done) {
        completion.fulfill(Err(SecretError::unknown()));
    }
}
