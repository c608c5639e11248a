//! Property-based tests for the KeyRack core library

mod encoding_tests;
mod status_tests;
