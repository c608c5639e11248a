//! KeyRack core library
//!
//! Uniform secret storage over OS-level keyrings. Callers issue
//! read/write/delete operations for `(service, key)` credential pairs and
//! the store dispatches to whichever secret-service implementation the
//! capability probe found at first use:
//! - the unified secret-service API (fronts both the GNOME and KDE
//!   password services), preferred;
//! - the legacy keyring daemon, spoken to directly, with a two-attempt
//!   plaintext/base64 read negotiation for entries of unknown encoding;
//! - no backend at all, in which case every operation fails with
//!   `NoBackendAvailable`.
//!
//! Each operation is a job with exactly one terminal outcome, delivered
//! whenever the backend's own notification mechanism calls back; the
//! calling thread never blocks.

pub mod backend;
pub mod config;
pub mod detection;
pub mod encoding;
pub mod error;
pub mod job;
pub mod status;
pub mod store;

mod daemon;
mod service;

pub use backend::{
    DaemonDoneCallback, DaemonFindCallback, KeyringDaemonClient, SecretServiceClient,
    ServiceDoneCallback, ServiceReadCallback,
};
pub use config::StoreConfig;
pub use detection::{BackendKind, BackendSet};
pub use encoding::{decode_payload, encode_payload, TransportMode};
pub use error::{SecretError, SecretResult};
pub use job::Job;
pub use status::{map_daemon_status, DaemonStatus};
pub use store::SecretStore;
