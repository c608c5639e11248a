//! Property-based tests for the daemon status mapping

use keyrack_core::{map_daemon_status, DaemonStatus, SecretError};
use proptest::prelude::*;

const NAMED_FAILURES: [DaemonStatus; 9] = [
    DaemonStatus::Denied,
    DaemonStatus::NoDaemon,
    DaemonStatus::AlreadyUnlocked,
    DaemonStatus::NoSuchKeyring,
    DaemonStatus::BadArguments,
    DaemonStatus::IoError,
    DaemonStatus::Cancelled,
    DaemonStatus::KeyringAlreadyExists,
    DaemonStatus::NoMatch,
];

proptest! {
    /// The mapper is total over raw status codes and never yields an
    /// empty message.
    #[test]
    fn prop_mapper_is_total_over_raw_codes(code in any::<i32>()) {
        // Success never reaches the mapper.
        prop_assume!(code != 0);
        let err = map_daemon_status(DaemonStatus::from_raw(code));
        prop_assert!(!err.to_string().is_empty());
    }

    /// Codes outside the native enumeration map to the generic failure.
    #[test]
    fn prop_unknown_codes_map_to_unknown_error(
        code in prop_oneof![i32::MIN..0, 10..i32::MAX]
    ) {
        let err = map_daemon_status(DaemonStatus::from_raw(code));
        prop_assert_eq!(err, SecretError::Other("Unknown error".to_string()));
    }
}

#[test]
fn test_named_failures_have_distinct_messages() {
    let mut messages: Vec<String> = NAMED_FAILURES
        .iter()
        .map(|status| map_daemon_status(*status).to_string())
        .collect();
    messages.sort();
    messages.dedup();
    assert_eq!(messages.len(), NAMED_FAILURES.len());
}
