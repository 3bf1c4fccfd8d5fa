// Copyright (c) 2025 Bloomgate Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Main implementation of the Bloom filter.

use std::fs;
use std::path::Path;

use parking_lot::RwLock;

use crate::data_structures::bloom_filter::config::BloomFilterConfig;
use crate::data_structures::bloom_filter::error::{BloomFilterError, Result};
use crate::data_structures::bloom_filter::hash::HashFunction;
use crate::data_structures::url::Url;
use crate::error::storage::StorageError;

/// A fixed-size Bloom filter over URLs.
///
/// The bit array sits behind a single `RwLock`, so `add`, `possibly_contains`,
/// `save_to_file` and `load_from_file` each observe a consistent array even when
/// many sessions share one filter through an `Arc`.
///
/// Bits are monotonic: `add` only ever sets bits, and the only way to clear
/// them is to replace the whole array with [`set_bits`](Self::set_bits) or a
/// load. As long as that does not happen, a URL that was added is always
/// reported as possibly present.
///
/// # Examples
///
/// ```
/// use bloomgate_lib::data_structures::{BloomFilter, BloomFilterConfig, Url};
///
/// let config = BloomFilterConfig::new()
///     .with_size_bits(1024)
///     .with_hash_iterations([3, 5]);
/// let filter = BloomFilter::with_config(config).unwrap();
///
/// let url = Url::new("http://example.com");
/// filter.add(&url);
/// assert!(filter.possibly_contains(&url));
/// ```
#[derive(Debug)]
pub struct BloomFilter {
    /// Number of bits, fixed at construction
    size: usize,

    /// One flag per bit position
    bits: RwLock<Vec<bool>>,

    /// Hash functions, applied in order
    hash_functions: Vec<HashFunction>,
}

impl BloomFilter {
    /// Create an empty filter with `size` bits and the given hash functions.
    ///
    /// # Errors
    ///
    /// Fails if `size` is not a positive power of two or `hash_functions` is empty.
    pub fn new(size: usize, hash_functions: Vec<HashFunction>) -> Result<Self> {
        if !size.is_power_of_two() {
            return Err(BloomFilterError::InvalidSize(size));
        }
        if hash_functions.is_empty() {
            return Err(BloomFilterError::NoHashFunctions);
        }

        Ok(Self {
            size,
            bits: RwLock::new(vec![false; size]),
            hash_functions,
        })
    }

    /// Create an empty filter from a configuration.
    pub fn with_config(config: BloomFilterConfig) -> Result<Self> {
        let hash_functions = config.build_hash_functions()?;
        Self::new(config.get_size_bits(), hash_functions)
    }

    /// Set every bit position derived from `url`.
    pub fn add(&self, url: &Url) {
        let positions = self.positions(url);
        let mut bits = self.bits.write();
        for index in positions {
            bits[index] = true;
        }
    }

    /// Returns true if the filter might contain `url`.
    ///
    /// False positives are possible, but false negatives are not.
    pub fn possibly_contains(&self, url: &Url) -> bool {
        let positions = self.positions(url);
        let bits = self.bits.read();
        positions.into_iter().all(|index| bits[index])
    }

    /// The bit positions `url` maps to, one per hash function.
    pub fn positions(&self, url: &Url) -> Vec<usize> {
        let size = self.size as u64;
        self.hash_functions
            .iter()
            .map(|f| (f.hash(url.as_str()) % size) as usize)
            .collect()
    }

    /// A copy of the current bit array.
    pub fn bits(&self) -> Vec<bool> {
        self.bits.read().clone()
    }

    /// Replace the whole bit array.
    ///
    /// Returns false and leaves the filter untouched if `bits` does not hold
    /// exactly [`size`](Self::size) entries.
    pub fn set_bits(&self, bits: Vec<bool>) -> bool {
        if bits.len() != self.size {
            return false;
        }
        *self.bits.write() = bits;
        true
    }

    /// Number of bits in the filter.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The configured hash functions.
    pub fn hash_functions(&self) -> &[HashFunction] {
        &self.hash_functions
    }

    /// Fraction of bits currently set, between 0.0 and 1.0.
    pub fn fill_ratio(&self) -> f64 {
        let set = self.bits.read().iter().filter(|&&bit| bit).count();
        set as f64 / self.size as f64
    }

    /// Write the bit array to `path`, one byte (`0` or `1`) per bit in index order.
    pub fn save_to_file(&self, path: &Path) -> std::result::Result<(), StorageError> {
        let encoded = self
            .bits
            .read()
            .iter()
            .map(|&bit| u8::from(bit))
            .collect::<Vec<u8>>();
        fs::write(path, encoded).map_err(|e| StorageError::io(path, e))
    }

    /// Replace the bit array with the one stored at `path`.
    ///
    /// Any non-zero byte reads as a set bit. If the file holds a different
    /// number of records than the filter size, the current array is kept and
    /// [`StorageError::SizeMismatch`] is returned.
    pub fn load_from_file(&self, path: &Path) -> std::result::Result<(), StorageError> {
        let raw = fs::read(path).map_err(|e| StorageError::io(path, e))?;
        let actual = raw.len();
        let loaded = raw.into_iter().map(|byte| byte != 0).collect::<Vec<bool>>();
        if self.set_bits(loaded) {
            Ok(())
        } else {
            Err(StorageError::SizeMismatch {
                expected: self.size,
                actual,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Barrier};
    use std::thread;

    fn filter(size: usize) -> BloomFilter {
        BloomFilter::with_config(
            BloomFilterConfig::new()
                .with_size_bits(size)
                .with_hash_iterations([3, 5]),
        )
        .unwrap()
    }

    #[test]
    fn test_bloom_filter_basic() {
        let filter = filter(1024);
        let url = Url::new("http://example.com");

        assert!(!filter.possibly_contains(&url));
        filter.add(&url);
        assert!(filter.possibly_contains(&url));
    }

    #[test]
    fn test_add_sets_every_position() {
        let filter = filter(64);
        let url = Url::new("http://a.com");
        filter.add(&url);

        let bits = filter.bits();
        for index in filter.positions(&url) {
            assert!(bits[index]);
        }
    }

    #[test]
    fn test_positions_within_bounds() {
        let filter = filter(16);
        for i in 0..200 {
            let url = Url::new(format!("http://host{i}.com"));
            let positions = filter.positions(&url);
            assert_eq!(positions.len(), 2);
            assert!(positions.iter().all(|&p| p < 16));
        }
    }

    #[test]
    fn test_all_ones_reports_everything() {
        let filter = filter(32);
        assert!(filter.set_bits(vec![true; 32]));
        assert!(filter.possibly_contains(&Url::new("http://anything.com")));
        assert_eq!(filter.fill_ratio(), 1.0);
    }

    #[test]
    fn test_set_bits_size_mismatch_is_noop() {
        let filter = filter(32);
        filter.add(&Url::new("http://keep.com"));
        let before = filter.bits();

        assert!(!filter.set_bits(vec![false; 31]));
        assert_eq!(filter.bits(), before);
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bloom.bin");

        let source = filter(128);
        for i in 0..10 {
            source.add(&Url::new(format!("http://site{i}.org")));
        }
        source.save_to_file(&path).unwrap();
        assert_eq!(fs::metadata(&path).unwrap().len(), 128);

        let restored = filter(128);
        restored.load_from_file(&path).unwrap();
        assert_eq!(restored.bits(), source.bits());
    }

    #[test]
    fn test_load_size_mismatch_keeps_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bloom.bin");
        filter(64).save_to_file(&path).unwrap();

        let target = filter(128);
        target.add(&Url::new("http://kept.com"));
        let before = target.bits();

        let err = target.load_from_file(&path).unwrap_err();
        assert!(matches!(
            err,
            StorageError::SizeMismatch {
                expected: 128,
                actual: 64
            }
        ));
        assert_eq!(target.bits(), before);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = filter(64)
            .load_from_file(&dir.path().join("absent.bin"))
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_new_validates_size() {
        let hashes = HashFunction::from_iterations(&[1]).unwrap();
        assert!(BloomFilter::new(100, hashes.clone()).is_err());
        assert!(BloomFilter::new(0, hashes.clone()).is_err());
        assert!(BloomFilter::new(128, Vec::new()).is_err());
        assert_eq!(BloomFilter::new(128, hashes).unwrap().size(), 128);
    }

    #[test]
    fn test_thread_safety() {
        let filter = Arc::new(filter(4096));
        let thread_count = 8;
        let items_per_thread = 100;
        let barrier = Arc::new(Barrier::new(thread_count));

        let handles = (0..thread_count)
            .map(|t| {
                let filter = Arc::clone(&filter);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    for i in 0..items_per_thread {
                        filter.add(&Url::new(format!("http://t{t}-{i}.com")));
                    }
                })
            })
            .collect::<Vec<_>>();

        for handle in handles {
            handle.join().unwrap();
        }

        for t in 0..thread_count {
            for i in 0..items_per_thread {
                assert!(filter.possibly_contains(&Url::new(format!("http://t{t}-{i}.com"))));
            }
        }
    }
}
