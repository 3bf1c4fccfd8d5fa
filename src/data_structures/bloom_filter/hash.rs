// Copyright (c) 2025 Bloomgate Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Hash functions for the Bloom filter.
//!
//! Every configured function is an iterated re-hash over the same base hash
//! (64-bit FNV-1a of the UTF-8 bytes):
//!
//! ```text
//! h := base(s)
//! repeat n-1 times:
//!     s := decimal(h)
//!     h := base(s)
//! ```
//!
//! Instances differ only by their iteration count, so their outputs are
//! correlated rather than independent. The filter's false positive rate is
//! therefore worse than the textbook `(1 - e^(-kn/m))^k`. The algorithm is kept
//! as is because persisted bit arrays depend on it.

use std::hash::Hasher;

use super::error::{BloomFilterError, Result};

/// A deterministic string hash strategy used by the Bloom filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashFunction {
    /// Base hash re-applied to its own decimal rendering `iterations` times.
    Iterated {
        /// Number of base hash rounds, at least one
        iterations: u32,
    },
}

impl HashFunction {
    /// Build an iterated hash function.
    ///
    /// # Errors
    ///
    /// Returns [`BloomFilterError::InvalidIterations`] when `iterations` is zero.
    pub fn iterated(iterations: u32) -> Result<Self> {
        if iterations == 0 {
            return Err(BloomFilterError::InvalidIterations(iterations));
        }
        Ok(Self::Iterated { iterations })
    }

    /// Build one hash function per iteration count, in order.
    pub fn from_iterations(counts: &[u32]) -> Result<Vec<Self>> {
        counts.iter().map(|&n| Self::iterated(n)).collect()
    }

    /// Compute the digest of `input`.
    pub fn hash(&self, input: &str) -> u64 {
        match *self {
            Self::Iterated { iterations } => {
                let mut value = base_hash(input.as_bytes());
                for _ in 1..iterations {
                    value = base_hash(value.to_string().as_bytes());
                }
                value
            }
        }
    }
}

/// 64-bit FNV-1a over raw bytes.
fn base_hash(bytes: &[u8]) -> u64 {
    let mut hasher = fnv::FnvHasher::default();
    hasher.write(bytes);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_iterations_rejected() {
        assert_eq!(
            HashFunction::iterated(0),
            Err(BloomFilterError::InvalidIterations(0))
        );
        assert!(HashFunction::from_iterations(&[3, 0, 5]).is_err());
    }

    #[test]
    fn test_single_iteration_is_base_hash() {
        let f = HashFunction::iterated(1).unwrap();
        // FNV-1a 64 offset basis for the empty input
        assert_eq!(f.hash(""), 0xcbf2_9ce4_8422_2325);
        assert_eq!(f.hash("http://example.com"), base_hash(b"http://example.com"));
    }

    #[test]
    fn test_iteration_rehashes_decimal_string() {
        let once = HashFunction::iterated(1).unwrap().hash("abc");
        let twice = HashFunction::iterated(2).unwrap().hash("abc");
        assert_eq!(twice, base_hash(once.to_string().as_bytes()));

        let thrice = HashFunction::iterated(3).unwrap().hash("abc");
        assert_eq!(thrice, base_hash(twice.to_string().as_bytes()));
    }

    #[test]
    fn test_hash_stability() {
        let f = HashFunction::iterated(5).unwrap();
        assert_eq!(f.hash("stable"), f.hash("stable"));
        assert_ne!(f.hash("input1"), f.hash("input2"));
    }
}
