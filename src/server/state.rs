//! State shared by every session of one server process.

use std::sync::Arc;

use tracing::{info, warn};

use crate::config::persistence::{BlacklistScope, PersistenceConfig};
use crate::data_structures::{BlackList, BloomFilter};
use crate::error::storage::StorageError;
use crate::server::persistence::StateStore;

/// The process-wide Bloom filter, the blacklist view and the state files.
///
/// The Bloom filter is created once and lives for the whole process; sessions
/// never reload it. The blacklist depends on [`BlacklistScope`]: one shared
/// instance, or a fresh load from disk for every session.
#[derive(Debug, Clone)]
pub struct ServerState {
    bloom: Arc<BloomFilter>,
    shared_blacklist: Option<Arc<BlackList>>,
    store: Arc<StateStore>,
}

impl ServerState {
    /// Prepare the data directory and load whatever the configuration asks for.
    pub fn initialize(
        bloom: Arc<BloomFilter>,
        persistence: &PersistenceConfig,
    ) -> Result<Self, StorageError> {
        let store = Arc::new(StateStore::new(persistence));
        store.ensure_data_dir()?;

        if persistence.restore_bloom_on_start {
            store.restore_bloom(&bloom);
        }

        let shared_blacklist = match persistence.blacklist_scope {
            BlacklistScope::Shared => {
                let blacklist = store.load_blacklist();
                info!(entries = blacklist.len(), "Loaded shared blacklist");
                Some(Arc::new(blacklist))
            }
            BlacklistScope::PerSession => None,
        };

        Ok(Self {
            bloom,
            shared_blacklist,
            store,
        })
    }

    /// The process-wide Bloom filter.
    pub fn bloom(&self) -> &Arc<BloomFilter> {
        &self.bloom
    }

    /// The state files.
    pub fn store(&self) -> &Arc<StateStore> {
        &self.store
    }

    /// The blacklist a new session should use.
    ///
    /// In per-session scope the file is read on the blocking pool.
    pub async fn session_blacklist(&self) -> Arc<BlackList> {
        if let Some(shared) = &self.shared_blacklist {
            return Arc::clone(shared);
        }

        let store = Arc::clone(&self.store);
        match tokio::task::spawn_blocking(move || store.load_blacklist()).await {
            Ok(blacklist) => Arc::new(blacklist),
            Err(e) => {
                warn!(error = %e, "Blacklist load task failed, starting empty");
                Arc::new(BlackList::new())
            }
        }
    }
}
