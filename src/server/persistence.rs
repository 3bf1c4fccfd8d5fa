//! On-disk state for the Bloom filter and the blacklist.
//!
//! Both files are rewritten whole after every command. Writes are neither
//! atomic nor crash-safe, so loaders accept missing, empty or truncated files:
//! the blacklist falls back to empty and the Bloom filter keeps its current
//! array.

use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::config::persistence::PersistenceConfig;
use crate::data_structures::{BlackList, BloomFilter};
use crate::error::storage::StorageError;

/// Paths of the persisted state plus a lock serializing writers.
#[derive(Debug)]
pub struct StateStore {
    data_dir: PathBuf,
    bloom_path: PathBuf,
    blacklist_path: PathBuf,
    write_lock: Mutex<()>,
}

impl StateStore {
    /// Create a store for the files named in `config`.
    pub fn new(config: &PersistenceConfig) -> Self {
        Self {
            data_dir: config.data_dir.clone(),
            bloom_path: config.bloom_path(),
            blacklist_path: config.blacklist_path(),
            write_lock: Mutex::new(()),
        }
    }

    /// Directory holding both files.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of the Bloom filter file.
    pub fn bloom_path(&self) -> &Path {
        &self.bloom_path
    }

    /// Path of the blacklist file.
    pub fn blacklist_path(&self) -> &Path {
        &self.blacklist_path
    }

    /// Create the data directory if it does not exist yet.
    pub fn ensure_data_dir(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.data_dir).map_err(|source| StorageError::CreateDir {
            path: self.data_dir.clone(),
            source,
        })
    }

    /// Load a fresh blacklist, empty if the file is missing or unreadable.
    pub fn load_blacklist(&self) -> BlackList {
        BlackList::load_or_default(&self.blacklist_path)
    }

    /// Replace the filter's bits with the persisted ones, if they fit.
    ///
    /// Returns true if the persisted array was applied.
    pub fn restore_bloom(&self, bloom: &BloomFilter) -> bool {
        match bloom.load_from_file(&self.bloom_path) {
            Ok(()) => {
                info!(path = %self.bloom_path.display(), "Restored Bloom filter");
                true
            }
            Err(e) if e.is_not_found() => {
                debug!(path = %self.bloom_path.display(), "No Bloom filter file, starting empty");
                false
            }
            Err(e) => {
                warn!(error = %e, "Ignoring persisted Bloom filter");
                false
            }
        }
    }

    /// Overwrite both files with the current in-memory state.
    ///
    /// Concurrent callers are serialized so the two files are always written
    /// as a pair.
    pub fn save(&self, bloom: &BloomFilter, blacklist: &BlackList) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock();
        self.ensure_data_dir()?;
        bloom.save_to_file(&self.bloom_path)?;
        blacklist.save(&self.blacklist_path)
    }
}
