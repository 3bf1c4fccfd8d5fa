// Copyright (c) 2025 Bloomgate Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Error types for the Bloom filter.

/// Errors that can occur while building a Bloom filter.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum BloomFilterError {
    /// The bit count is zero or not a power of two
    #[error("Invalid filter size: {0} (must be a positive power of two)")]
    InvalidSize(usize),

    /// No hash functions were configured
    #[error("At least one hash function is required")]
    NoHashFunctions,

    /// A hash function was configured with zero iterations
    #[error("Invalid hash iteration count: {0} (must be positive)")]
    InvalidIterations(u32),
}

/// Result type for Bloom filter operations
pub type Result<T> = std::result::Result<T, BloomFilterError>;
