// Copyright (c) 2025 Bloomgate Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Bloom filter over URLs.
//!
//! A fixed-length bit array plus an ordered list of hash functions. It answers
//! "definitely not present" or "possibly present" and never forgets: there is no
//! remove operation, so a URL deleted from the blacklist can keep reporting as
//! possibly present. The blacklist is the authority for exact answers.
//!
//! # Example
//!
//! ```
//! use bloomgate_lib::data_structures::bloom_filter::{BloomFilter, HashFunction};
//! use bloomgate_lib::data_structures::Url;
//!
//! let hashes = HashFunction::from_iterations(&[3, 5]).unwrap();
//! let filter = BloomFilter::new(1024, hashes).unwrap();
//!
//! filter.add(&Url::new("http://example.com"));
//! assert!(filter.possibly_contains(&Url::new("http://example.com")));
//! ```

mod config;
mod error;
mod filter;
mod hash;

pub use config::BloomFilterConfig;
pub use error::{BloomFilterError, Result};
pub use filter::BloomFilter;
pub use hash::HashFunction;
