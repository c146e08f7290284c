//! Integration test suite.
//!
//! 1. Factory scenarios: building types and using their records
//! 2. Round trips through values, serde and the self-describing form
//! 3. Property tests over arbitrary field lists and values

pub mod factory_tests;
pub mod helpers;
pub mod round_trip_tests;
