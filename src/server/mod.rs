//! TCP server for the Bloom filter protocol.
//!
//! ```text
//! Server::run ── accept ──> tokio::spawn(SessionHandler::run)
//!                                 │
//!                                 ├─ receive line
//!                                 ├─ CommandManager::execute
//!                                 ├─ send response
//!                                 └─ StateStore::save (bloom + blacklist)
//! ```
//!
//! Every session shares the process-wide [`BloomFilter`](crate::data_structures::BloomFilter)
//! held by [`ServerState`].

pub mod listener;
pub mod persistence;
pub mod session;
pub mod state;

pub use listener::{Server, ShutdownHandle};
pub use persistence::StateStore;
pub use session::SessionHandler;
pub use state::ServerState;
