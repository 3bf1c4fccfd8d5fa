//! Test modules for the Bloomgate server.
//!
//! Unit tests live next to the code they cover. This module holds the tests
//! that cut across components:
//! - Configuration loading and validation
//! - The global error reporter
//! - Property-based tests for the filter, the blacklist and the protocol
//! - Shared fixtures and strategies

pub mod config_tests;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{
    create_test_dir, host_strategy, url_strategy, CountingReporter, TestFixture,
    ERROR_REPORTER_LOCK,
};
