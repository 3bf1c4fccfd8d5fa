// Copyright (c) 2025 Bloomgate Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Configuration for the Bloom filter.

use super::error::{BloomFilterError, Result};
use super::hash::HashFunction;

/// Configuration for a [`BloomFilter`](super::BloomFilter).
///
/// The bit count is fixed at construction and must be a positive power of two.
/// One [`HashFunction`] is created per configured iteration count, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BloomFilterConfig {
    /// Number of bits in the filter
    size_bits: usize,

    /// Iteration count per hash function
    hash_iterations: Vec<u32>,
}

impl BloomFilterConfig {
    /// Create a new default configuration.
    ///
    /// Default values:
    /// - size_bits: 1024
    /// - hash_iterations: [3, 5]
    pub fn new() -> Self {
        Self {
            size_bits: 1024,
            hash_iterations: vec![3, 5],
        }
    }

    /// Set the number of bits in the filter.
    pub fn with_size_bits(mut self, size_bits: usize) -> Self {
        self.size_bits = size_bits;
        self
    }

    /// Set the iteration counts, one hash function per entry.
    pub fn with_hash_iterations(mut self, iterations: impl Into<Vec<u32>>) -> Self {
        self.hash_iterations = iterations.into();
        self
    }

    /// Get the number of bits in the filter.
    pub fn get_size_bits(&self) -> usize {
        self.size_bits
    }

    /// Get the configured iteration counts.
    pub fn get_hash_iterations(&self) -> &[u32] {
        &self.hash_iterations
    }

    /// Check the configuration and build the hash functions it describes.
    ///
    /// # Errors
    ///
    /// Fails if the size is not a positive power of two, if no iteration counts
    /// are given, or if any iteration count is zero.
    pub fn build_hash_functions(&self) -> Result<Vec<HashFunction>> {
        if !self.size_bits.is_power_of_two() {
            return Err(BloomFilterError::InvalidSize(self.size_bits));
        }
        if self.hash_iterations.is_empty() {
            return Err(BloomFilterError::NoHashFunctions);
        }
        HashFunction::from_iterations(&self.hash_iterations)
    }
}

impl Default for BloomFilterConfig {
    fn default() -> Self {
        Self::new()
    }
}
