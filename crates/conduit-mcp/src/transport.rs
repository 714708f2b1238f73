//! Child-process transport: newline-delimited JSON-RPC over stdin/stdout.

use std::process::Stdio;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::process::{Child, ChildStdin, ChildStdout, Command};
use tokio::sync::Mutex;
use tracing::debug;

use crate::launch::ServerCommand;
use crate::protocol::{JsonRpcNotification, JsonRpcRequest, JsonRpcResponse};
use crate::McpError;

/// How long a server gets to exit on its own after stdin closes.
const EXIT_GRACE: Duration = Duration::from_millis(500);

/// Owns the child process and its pipes.
///
/// Slots are `Option` so that [`StdioTransport::shutdown`] can take them
/// exactly once; later calls find them empty and return immediately.
pub(crate) struct StdioTransport {
    label: String,
    next_id: AtomicU64,
    request_timeout: Duration,
    stdin: Mutex<Option<ChildStdin>>,
    stdout: Mutex<BufReader<ChildStdout>>,
    child: Mutex<Option<Child>>,
}

impl StdioTransport {
    /// Spawn the server with piped stdio. Stderr is drained into the log.
    pub(crate) fn spawn(command: &ServerCommand, request_timeout: Duration) -> Result<Self, McpError> {
        let label = command.display();

        let mut cmd = Command::new(&command.program);
        cmd.args(&command.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        // Own process group: a terminal Ctrl-C must not reach the server
        // while a call is in flight.
        #[cfg(unix)]
        cmd.process_group(0);

        let mut child = cmd
            .spawn()
            .map_err(|e| McpError::SpawnFailed(format!("failed to spawn '{label}': {e}")))?;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| McpError::SpawnFailed("failed to capture stdin".into()))?;
        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| McpError::SpawnFailed("failed to capture stdout".into()))?;

        if let Some(stderr) = child.stderr.take() {
            let server = label.clone();
            let mut lines = BufReader::new(stderr).lines();
            tokio::spawn(async move {
                while let Ok(Some(line)) = lines.next_line().await {
                    debug!(server = %server, "stderr: {line}");
                }
            });
        }

        debug!(server = %label, pid = ?child.id(), "tool server spawned");

        Ok(Self {
            label,
            next_id: AtomicU64::new(1),
            request_timeout,
            stdin: Mutex::new(Some(stdin)),
            stdout: Mutex::new(BufReader::new(stdout)),
            child: Mutex::new(Some(child)),
        })
    }

    pub(crate) fn label(&self) -> &str {
        &self.label
    }

    /// Send a request and wait for the response with the same id.
    pub(crate) async fn request(
        &self,
        method: &str,
        params: Option<serde_json::Value>,
    ) -> Result<serde_json::Value, McpError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let request = JsonRpcRequest::new(id, method, params);
        self.write_line(&serde_json::to_string(&request)?).await?;

        let response = tokio::time::timeout(self.request_timeout, self.read_response(id))
            .await
            .map_err(|_| McpError::Timeout(self.request_timeout))??;

        response.into_result()
    }

    pub(crate) async fn notify(
        &self,
        method: &str,
        params: Option<serde_json::Value>,
    ) -> Result<(), McpError> {
        let notification = JsonRpcNotification::new(method, params);
        self.write_line(&serde_json::to_string(&notification)?).await
    }

    async fn write_line(&self, json: &str) -> Result<(), McpError> {
        let mut guard = self.stdin.lock().await;
        let stdin = guard
            .as_mut()
            .ok_or_else(|| McpError::Transport("session is closed".into()))?;
        stdin.write_all(json.as_bytes()).await?;
        stdin.write_all(b"\n").await?;
        stdin.flush().await?;
        Ok(())
    }

    /// Read stdout lines until a JSON-RPC response with `expected_id` shows up.
    async fn read_response(&self, expected_id: u64) -> Result<JsonRpcResponse, McpError> {
        let mut stdout = self.stdout.lock().await;
        let mut buf = String::new();
        loop {
            buf.clear();
            let n = stdout.read_line(&mut buf).await?;
            if n == 0 {
                return Err(McpError::Transport("server closed stdout".into()));
            }
            let trimmed = buf.trim();
            if trimmed.is_empty() {
                continue;
            }

            match serde_json::from_str::<JsonRpcResponse>(trimmed) {
                Ok(resp) if resp.id == Some(expected_id) => return Ok(resp),
                Ok(resp) => {
                    debug!(
                        server = %self.label,
                        id = ?resp.id,
                        "skipping non-matching JSON-RPC message"
                    );
                }
                Err(_) => {
                    debug!(server = %self.label, line = trimmed, "ignoring non-JSON-RPC line");
                }
            }
        }
    }

    /// Close stdin, then reap the child, killing it if it does not exit
    /// within the grace period. Idempotent.
    pub(crate) async fn shutdown(&self) {
        drop(self.stdin.lock().await.take());

        let Some(mut child) = self.child.lock().await.take() else {
            return;
        };

        match tokio::time::timeout(EXIT_GRACE, child.wait()).await {
            Ok(Ok(status)) => debug!(server = %self.label, %status, "tool server exited"),
            Ok(Err(e)) => debug!(server = %self.label, error = %e, "failed to wait for tool server"),
            Err(_) => {
                if let Err(e) = child.kill().await {
                    debug!(server = %self.label, error = %e, "failed to kill tool server");
                } else {
                    debug!(server = %self.label, "tool server killed");
                }
            }
        }
    }
}
