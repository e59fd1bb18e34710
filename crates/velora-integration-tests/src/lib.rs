//! Integration test crate for the Velora rates & pricing subsystem.
//!
//! This crate has no library code — it only contains integration tests
//! that exercise end-to-end settings flows across multiple workspace crates.
//!
//! Run all integration tests:
//! ```sh
//! cargo test -p velora-integration-tests
//! ```
