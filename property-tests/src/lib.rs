//! Property-based tests for monta-models
//!
//! # Usage
//!
//! ```bash
//! cargo test -p monta-property-tests              # Run all property tests
//! cargo test -p monta-property-tests timestamp    # Only timestamp properties
//! PROPTEST_CASES=1000 cargo test -p monta-property-tests
//! ```
//!
//! # Test Modules
//!
//! - `prop_timestamp`: normalization of every accepted layout to UTC
//! - `prop_decode`: required `id` policy, absent value objects, round-trips

// Re-export for convenience in tests
pub use monta_models::*;
