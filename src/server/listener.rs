//! Listening socket and accept loop.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use tokio::net::{TcpListener, TcpSocket};
use tokio::sync::Notify;
use tracing::{error, info, info_span, warn, Instrument};

use crate::config::server::ServerConfig;
use crate::error::transport::TransportError;
use crate::server::session::SessionHandler;
use crate::server::state::ServerState;

/// Accepts connections and runs one independent session task per connection.
///
/// There is no connection limit. Sessions are detached: shutting the server
/// down stops accepting but does not wait for or cancel sessions in flight.
#[derive(Debug)]
pub struct Server {
    listener: TcpListener,
    state: ServerState,
    shutdown: ShutdownHandle,
    next_session_id: AtomicU64,
}

/// Stops a running [`Server`] from another task.
#[derive(Debug, Clone)]
pub struct ShutdownHandle {
    running: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl ShutdownHandle {
    fn new() -> Self {
        Self {
            running: Arc::new(AtomicBool::new(true)),
            notify: Arc::new(Notify::new()),
        }
    }

    /// Ask the accept loop to exit. The listening socket is closed once it does.
    pub fn shutdown(&self) {
        self.running.store(false, Ordering::SeqCst);
        self.notify.notify_one();
    }

    /// Returns true until [`shutdown`](Self::shutdown) is called.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }
}

impl Server {
    /// Bind the address and port from `config`.
    pub async fn from_config(
        config: &ServerConfig,
        state: ServerState,
    ) -> Result<Self, TransportError> {
        Self::bind(config.socket_addr(), config.backlog, state).await
    }

    /// Bind `addr` with the given pending-connection backlog.
    pub async fn bind(
        addr: SocketAddr,
        backlog: u32,
        state: ServerState,
    ) -> Result<Self, TransportError> {
        let bind_error = |source| TransportError::Bind { addr, source };

        let socket = match addr {
            SocketAddr::V4(_) => TcpSocket::new_v4(),
            SocketAddr::V6(_) => TcpSocket::new_v6(),
        }
        .map_err(bind_error)?;
        socket.set_reuseaddr(true).map_err(bind_error)?;
        socket.bind(addr).map_err(bind_error)?;
        let listener = socket.listen(backlog).map_err(bind_error)?;

        info!(addr = %listener.local_addr().unwrap_or(addr), backlog, "Listening");
        Ok(Self {
            listener,
            state,
            shutdown: ShutdownHandle::new(),
            next_session_id: AtomicU64::new(1),
        })
    }

    /// The address actually bound, useful when binding port 0.
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// A handle that can stop [`run`](Self::run) from elsewhere.
    pub fn shutdown_handle(&self) -> ShutdownHandle {
        self.shutdown.clone()
    }

    /// Stop accepting connections.
    pub fn shutdown(&self) {
        self.shutdown.shutdown();
    }

    /// Accept connections until shut down, then close the listening socket.
    pub async fn run(self) {
        while self.shutdown.is_running() {
            let accepted = tokio::select! {
                _ = self.shutdown.notify.notified() => break,
                accepted = self.listener.accept() => accepted,
            };

            match accepted {
                Ok((stream, peer)) => self.spawn_session(stream, peer),
                Err(e) => {
                    if !self.shutdown.is_running() {
                        break;
                    }
                    warn!(error = %TransportError::Accept(e), "Failed to accept connection");
                }
            }
        }
        info!("Server stopped accepting connections");
    }

    fn spawn_session(&self, stream: tokio::net::TcpStream, peer: SocketAddr) {
        let id = self.next_session_id.fetch_add(1, Ordering::Relaxed);
        let span = info_span!("session", id, peer = %peer);
        let state = self.state.clone();

        tokio::spawn(
            async move {
                let session = SessionHandler::new(stream, &state).await;
                info!("Session opened");
                if let Err(e) = session.run().await {
                    error!(error = %e, "Session ended with error");
                }
            }
            .instrument(span),
        );
    }
}
