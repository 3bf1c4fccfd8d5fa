//! Bloom filter configuration module.

use super::{ConfigResult, Validate};
use crate::data_structures::BloomFilterConfig;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Bloom filter configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterConfig {
    /// Number of bits in the filter; a positive power of two
    pub size_bits: usize,

    /// One hash function is created per entry, each re-hashing this many times
    pub hash_iterations: Vec<u32>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            size_bits: 1024,
            hash_iterations: vec![3, 5],
        }
    }
}

impl FilterConfig {
    /// The equivalent data structure configuration.
    pub fn to_bloom_config(&self) -> BloomFilterConfig {
        BloomFilterConfig::new()
            .with_size_bits(self.size_bits)
            .with_hash_iterations(self.hash_iterations.clone())
    }
}

impl Validate for FilterConfig {
    fn validate(&self) -> ConfigResult<()> {
        if !self.size_bits.is_power_of_two() {
            return Err(ConfigError::ValueOutOfRange {
                key: "filter.size_bits".to_string(),
                message: format!("{} is not a positive power of two", self.size_bits),
            });
        }

        if self.hash_iterations.is_empty() {
            return Err(ConfigError::ValidationError(
                "hash_iterations must not be empty".to_string(),
            ));
        }

        if self.hash_iterations.contains(&0) {
            return Err(ConfigError::ValidationError(
                "hash_iterations must all be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
