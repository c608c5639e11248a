//! Property-based tests for the transport codec

use keyrack_core::{decode_payload, encode_payload, TransportMode};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Any payload survives the encode/decode cycle in its
    /// writer-selected mode, including payloads that are not valid text.
    #[test]
    fn prop_codec_round_trips(payload in proptest::collection::vec(any::<u8>(), 0..512)) {
        let mode = TransportMode::for_payload(&payload);
        let stored = encode_payload(mode, &payload);
        prop_assert_eq!(decode_payload(mode, &stored).unwrap(), payload);
    }

    /// Valid UTF-8 is always stored verbatim under the plaintext tag.
    #[test]
    fn prop_text_payloads_travel_verbatim(text in ".*") {
        let mode = TransportMode::for_payload(text.as_bytes());
        prop_assert_eq!(mode, TransportMode::Text);
        prop_assert_eq!(encode_payload(mode, text.as_bytes()), text);
    }

    /// Binary-mode strings stay within the standard base64 alphabet, so
    /// they always survive the daemon's string transport.
    #[test]
    fn prop_binary_encoding_stays_in_the_base64_alphabet(
        payload in proptest::collection::vec(any::<u8>(), 1..128)
    ) {
        let stored = encode_payload(TransportMode::Binary, &payload);
        prop_assert!(stored
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '/' | '=')));
    }
}
