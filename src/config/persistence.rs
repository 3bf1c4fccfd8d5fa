//! Persistence configuration module.
//!
//! Both state files live under one data directory at fixed relative names.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// How sessions see the blacklist.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum BlacklistScope {
    /// One in-memory blacklist, loaded at startup and shared by every session
    #[default]
    Shared,
    /// Every session loads its own copy from disk when it starts.
    /// Concurrent sessions can overwrite each other's updates.
    PerSession,
}

/// Persistence configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PersistenceConfig {
    /// Directory holding both state files; created on demand
    pub data_dir: PathBuf,

    /// Bloom filter file name, relative to `data_dir`
    pub bloom_file: String,

    /// Blacklist file name, relative to `data_dir`
    pub blacklist_file: String,

    /// How sessions see the blacklist
    pub blacklist_scope: BlacklistScope,

    /// Whether to load the Bloom filter from disk once at startup
    pub restore_bloom_on_start: bool,
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            bloom_file: "bloom_shared.bin".to_string(),
            blacklist_file: "blacklist_shared.txt".to_string(),
            blacklist_scope: BlacklistScope::default(),
            restore_bloom_on_start: true,
        }
    }
}

impl PersistenceConfig {
    /// Full path of the Bloom filter file.
    pub fn bloom_path(&self) -> PathBuf {
        self.data_dir.join(&self.bloom_file)
    }

    /// Full path of the blacklist file.
    pub fn blacklist_path(&self) -> PathBuf {
        self.data_dir.join(&self.blacklist_file)
    }
}

impl Validate for PersistenceConfig {
    fn validate(&self) -> ConfigResult<()> {
        for (key, name) in [
            ("persistence.bloom_file", &self.bloom_file),
            ("persistence.blacklist_file", &self.blacklist_file),
        ] {
            if name.trim().is_empty() {
                return Err(ConfigError::ValidationError(format!(
                    "{key} cannot be empty"
                )));
            }
        }

        if self.bloom_file == self.blacklist_file {
            return Err(ConfigError::ValidationError(
                "bloom_file and blacklist_file must differ".to_string(),
            ));
        }

        Ok(())
    }
}
