//! Backend capability probe
//!
//! Detects which secret-service implementation is usable. The unified
//! secret-service API is preferred because it fronts both the GNOME and
//! KDE password services; the legacy keyring daemon is the fallback for
//! older sessions. Detection runs at most once per [`BackendSet`] and the
//! result is cached: a daemon that starts later is not picked up.

use std::sync::{Arc, OnceLock};

use crate::backend::{KeyringDaemonClient, SecretServiceClient};

/// Which secret store the dispatcher routes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    /// No usable secret store was found
    None,
    /// Unified secret-service API
    SecretService,
    /// Legacy keyring daemon
    KeyringDaemon,
}

/// The pair of backend clients plus the memoized selection
///
/// One `BackendSet` is intended to live for the whole process and be
/// shared by reference; every operation dispatched through the same set
/// observes the same selection.
pub struct BackendSet {
    service: Arc<dyn SecretServiceClient>,
    daemon: Arc<dyn KeyringDaemonClient>,
    selection: OnceLock<BackendKind>,
}

impl BackendSet {
    /// Creates a set over the two backend clients.
    ///
    /// No probing happens here; the first [`BackendSet::selection`] call
    /// runs the availability checks.
    #[must_use]
    pub fn new(
        service: Arc<dyn SecretServiceClient>,
        daemon: Arc<dyn KeyringDaemonClient>,
    ) -> Self {
        Self {
            service,
            daemon,
            selection: OnceLock::new(),
        }
    }

    /// Returns the selected backend (cached)
    ///
    /// The first caller runs the probe; concurrent first callers block
    /// until it finishes, and every caller observes the same value for
    /// the lifetime of the set.
    pub fn selection(&self) -> BackendKind {
        *self.selection.get_or_init(|| self.probe())
    }

    fn probe(&self) -> BackendKind {
        if self.service.is_available() {
            tracing::debug!("secret store probe selected the unified secret service");
            return BackendKind::SecretService;
        }
        if self.daemon.is_available() {
            tracing::debug!("secret store probe fell back to the legacy keyring daemon");
            return BackendKind::KeyringDaemon;
        }
        tracing::warn!("no usable secret store detected");
        BackendKind::None
    }

    pub(crate) fn service(&self) -> &Arc<dyn SecretServiceClient> {
        &self.service
    }

    pub(crate) fn daemon(&self) -> &Arc<dyn KeyringDaemonClient> {
        &self.daemon
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::backend::{
        DaemonDoneCallback, DaemonFindCallback, ServiceDoneCallback, ServiceReadCallback,
    };
    use crate::encoding::TransportMode;

    struct StubService {
        available: bool,
        probes: AtomicUsize,
    }

    impl StubService {
        fn new(available: bool) -> Arc<Self> {
            Arc::new(Self {
                available,
                probes: AtomicUsize::new(0),
            })
        }
    }

    impl SecretServiceClient for StubService {
        fn is_available(&self) -> bool {
            self.probes.fetch_add(1, Ordering::SeqCst);
            self.available
        }

        fn find_secret(&self, _key: &str, _service: &str, _done: ServiceReadCallback) -> bool {
            false
        }

        fn store_secret(
            &self,
            _service: &str,
            _key: &str,
            _label: &str,
            _mode: TransportMode,
            _payload: &[u8],
            _done: ServiceDoneCallback,
        ) -> bool {
            false
        }

        fn delete_secret(&self, _key: &str, _service: &str, _done: ServiceDoneCallback) -> bool {
            false
        }
    }

    struct StubDaemon {
        available: bool,
        probes: AtomicUsize,
    }

    impl StubDaemon {
        fn new(available: bool) -> Arc<Self> {
            Arc::new(Self {
                available,
                probes: AtomicUsize::new(0),
            })
        }
    }

    impl KeyringDaemonClient for StubDaemon {
        fn is_available(&self) -> bool {
            self.probes.fetch_add(1, Ordering::SeqCst);
            self.available
        }

        fn find_secret(
            &self,
            _key: &str,
            _service: &str,
            _transport_tag: &str,
            _done: DaemonFindCallback,
        ) -> bool {
            false
        }

        fn store_secret(
            &self,
            _collection: &str,
            _service: &str,
            _key: &str,
            _label: &str,
            _transport_tag: &str,
            _secret: &str,
            _done: DaemonDoneCallback,
        ) -> bool {
            false
        }

        fn delete_secret(&self, _key: &str, _service: &str, _done: DaemonDoneCallback) -> bool {
            false
        }
    }

    #[test]
    fn test_unified_service_is_preferred() {
        let service = StubService::new(true);
        let daemon = StubDaemon::new(true);
        let set = BackendSet::new(service, Arc::clone(&daemon) as Arc<dyn KeyringDaemonClient>);

        assert_eq!(set.selection(), BackendKind::SecretService);
        // Ranking short-circuits; the daemon is never probed.
        assert_eq!(daemon.probes.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_daemon_is_the_fallback() {
        let set = BackendSet::new(StubService::new(false), StubDaemon::new(true));
        assert_eq!(set.selection(), BackendKind::KeyringDaemon);
    }

    #[test]
    fn test_nothing_available_selects_none() {
        let set = BackendSet::new(StubService::new(false), StubDaemon::new(false));
        assert_eq!(set.selection(), BackendKind::None);
    }

    #[test]
    fn test_probe_runs_at_most_once() {
        let service = StubService::new(true);
        let set = BackendSet::new(
            Arc::clone(&service) as Arc<dyn SecretServiceClient>,
            StubDaemon::new(false),
        );

        for _ in 0..10 {
            assert_eq!(set.selection(), BackendKind::SecretService);
        }
        assert_eq!(service.probes.load(Ordering::SeqCst), 1);
    }
}
