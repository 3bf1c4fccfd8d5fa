//! Data structures for the Bloom filter server.
//!
//! - [`Url`]: immutable, exactly-compared URL string
//! - [`BloomFilter`]: shared probabilistic membership test
//! - [`BlackList`]: exact, authoritative URL store

pub mod blacklist;
pub mod bloom_filter;
pub mod url;

// Re-export common data structures
pub use blacklist::BlackList;
pub use bloom_filter::{BloomFilter, BloomFilterConfig, BloomFilterError, HashFunction};
pub use url::Url;
