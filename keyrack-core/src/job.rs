//! Job lifecycle primitives
//!
//! Each dispatched operation is represented by a [`Job`] handle paired
//! with a write-once [`Completion`] slot. The backend-facing adapters
//! fulfill the slot exactly once; a second fulfillment is a programming
//! error and panics rather than passing silently.

use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::oneshot;

use crate::error::{SecretError, SecretResult};

/// Handle to an in-flight secret operation
///
/// Resolves to the single terminal outcome delivered by the backend.
/// Dropping the handle does not cancel the operation; the backend still
/// runs it to completion and the late result is discarded.
#[derive(Debug)]
pub struct Job<T> {
    rx: oneshot::Receiver<SecretResult<T>>,
}

impl<T> Job<T> {
    /// Waits for the terminal outcome.
    ///
    /// # Errors
    /// Returns the translated backend error, or [`SecretError::Other`]
    /// when the backend violated its contract by discarding the
    /// completion callback without invoking it.
    pub async fn outcome(self) -> SecretResult<T> {
        self.rx
            .await
            .unwrap_or_else(|_| Err(SecretError::Other("Backend discarded the operation".to_string())))
    }
}

/// Write-once completion slot for an in-flight job
pub(crate) struct Completion<T> {
    tx: Mutex<Option<oneshot::Sender<SecretResult<T>>>>,
}

impl<T> Completion<T> {
    /// Creates a completion slot and the job handle it resolves.
    pub(crate) fn channel() -> (Arc<Self>, Job<T>) {
        let (tx, rx) = oneshot::channel();
        let completion = Arc::new(Self {
            tx: Mutex::new(Some(tx)),
        });
        (completion, Job { rx })
    }

    /// Delivers the terminal outcome.
    ///
    /// # Panics
    /// Panics when an outcome was already delivered; a job produces
    /// exactly one terminal outcome, ever.
    pub(crate) fn fulfill(&self, outcome: SecretResult<T>) {
        let tx = self
            .tx
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        let Some(tx) = tx else {
            panic!("secret job outcome delivered twice");
        };
        // A caller that dropped the job handle ignores the late result;
        // that choice lives at the caller layer, not here.
        let _ = tx.send(outcome);
    }
}
