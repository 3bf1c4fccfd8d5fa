//! One client connection.
//!
//! A session reads a line, executes it, writes the response and persists both
//! state files before it reads the next line. An empty line, end of stream or
//! a read error ends the session.

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info};

use crate::data_structures::{BlackList, BloomFilter};
use crate::error::transport::TransportError;
use crate::error::{report_error, BloomgateError, ErrorContext};
use crate::protocol::{CommandManager, Response};
use crate::server::persistence::StateStore;
use crate::server::state::ServerState;

/// Drives the command loop for one connection.
pub struct SessionHandler<S> {
    stream: BufReader<S>,
    manager: CommandManager,
    store: Arc<StateStore>,
}

impl<S> SessionHandler<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    /// Create a session over `stream`, using the server's filter and the
    /// blacklist its scope prescribes.
    pub async fn new(stream: S, state: &ServerState) -> Self {
        Self::with_parts(
            stream,
            Arc::clone(state.bloom()),
            state.session_blacklist().await,
            Arc::clone(state.store()),
        )
    }

    /// Create a session from explicit parts.
    pub fn with_parts(
        stream: S,
        bloom: Arc<BloomFilter>,
        blacklist: Arc<BlackList>,
        store: Arc<StateStore>,
    ) -> Self {
        Self {
            stream: BufReader::new(stream),
            manager: CommandManager::new(bloom, blacklist),
            store,
        }
    }

    /// Run the command loop until the client goes away, then close the stream.
    ///
    /// Every executed command is persisted, including one whose response could
    /// not be written. Returns the number of commands answered.
    pub async fn run(mut self) -> Result<usize, TransportError> {
        let mut processed = 0;
        let outcome = loop {
            let line = match self.receive_line().await {
                Ok(Some(line)) => line,
                Ok(None) => break Ok(processed),
                Err(e) => break Err(e),
            };

            let response = self.manager.execute(&line);
            debug!(status = response.status(), "Handled command");
            let sent = self.send_response(&response).await;
            // Persist even when the client is gone.
            self.persist().await;
            if let Err(e) = sent {
                break Err(e);
            }
            processed += 1;
        };

        // The peer may already be gone; nothing left to report.
        let _ = self.stream.get_mut().shutdown().await;
        info!(processed, "Session closed");
        outcome
    }

    /// Read one `\n`-terminated line with trailing `\r`/`\n` removed.
    ///
    /// Returns `None` at end of stream, on a partial final line, and on an
    /// empty line.
    async fn receive_line(&mut self) -> Result<Option<String>, TransportError> {
        let mut buf = Vec::new();
        let read = self
            .stream
            .read_until(b'\n', &mut buf)
            .await
            .map_err(TransportError::Read)?;
        if read == 0 || buf.last() != Some(&b'\n') {
            return Ok(None);
        }

        while matches!(buf.last(), Some(b'\n' | b'\r')) {
            buf.pop();
        }
        if buf.is_empty() {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }

    async fn send_response(&mut self, response: &Response) -> Result<(), TransportError> {
        let stream = self.stream.get_mut();
        stream
            .write_all(response.to_wire().as_bytes())
            .await
            .map_err(TransportError::Write)?;
        stream.flush().await.map_err(TransportError::Write)
    }

    /// Overwrite both state files. Failures are reported, never sent to the client.
    async fn persist(&self) {
        let bloom = Arc::clone(self.manager.bloom());
        let blacklist = Arc::clone(self.manager.blacklist());
        let store = Arc::clone(&self.store);

        let result = tokio::task::spawn_blocking(move || store.save(&bloom, &blacklist)).await;
        let error = match result {
            Ok(Ok(())) => return,
            Ok(Err(e)) => BloomgateError::from(e),
            Err(e) => BloomgateError::Custom(format!("Persistence task failed: {e}")),
        };
        report_error(ErrorContext::new(error, "session").with_details("state not persisted"));
    }
}
