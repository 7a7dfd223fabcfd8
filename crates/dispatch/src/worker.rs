//! Dispatch worker — the single consumer of the task queue.
//!
//! The worker is spawned once at startup with an injected gateway port and
//! runs until the queue closes (every producer handle dropped), which gives
//! drain-and-stop shutdown. Per-task failures are contained: a failed send
//! or cleanup is logged and the loop moves on to the next task.
//!
//! Rate limiting is a fixed pacing sleep on the worker's own path after
//! every send, so producers keep enqueueing while the worker paces.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use courier_common::types::{DeliveryResult, Task};
use courier_gateway::MessagingGateway;

use crate::queue::TaskReceiver;

/// Long-lived task consumer. There must be exactly one per queue; a second
/// consumer would break the per-recipient pacing and ordering guarantees.
pub struct DispatchWorker {
    gateway: Arc<dyn MessagingGateway>,
    rx: TaskReceiver,
    pacing: Duration,
}

impl DispatchWorker {
    pub fn new(gateway: Arc<dyn MessagingGateway>, rx: TaskReceiver, pacing: Duration) -> Self {
        Self {
            gateway,
            rx,
            pacing,
        }
    }

    /// Drain the queue until it closes. Tasks run strictly in enqueue
    /// order, one at a time.
    pub async fn run(mut self) {
        tracing::info!(
            pacing_ms = self.pacing.as_millis() as u64,
            "Dispatch worker started"
        );

        while let Some(task) = self.rx.recv().await {
            match task {
                Task::SendMessage {
                    address,
                    body,
                    attachment_path,
                } => {
                    let result = self
                        .execute_send(&address, &body, attachment_path.as_deref())
                        .await;
                    tracing::info!(
                        address = %result.address,
                        text_sent = result.text_sent,
                        text_status = %result.text_status,
                        file_sent = ?result.file_sent,
                        "Delivery attempted"
                    );
                    tokio::time::sleep(self.pacing).await;
                }
                Task::CleanupFile { path } => {
                    cleanup_file(&path).await;
                }
            }
        }

        tracing::info!("Dispatch queue closed, worker stopped");
    }

    /// Deliver one message: attachment first when present, then the text —
    /// always, even after a file failure.
    async fn execute_send(
        &self,
        address: &str,
        body: &str,
        attachment_path: Option<&Path>,
    ) -> DeliveryResult {
        let (file_sent, file_status) = match attachment_path {
            Some(path) => {
                let outcome = self.gateway.send_file(address, path).await;
                if !outcome.success {
                    tracing::warn!(
                        address = %address,
                        status = %outcome.status,
                        "File send failed, text will still be attempted"
                    );
                }
                (Some(outcome.success), Some(outcome.status))
            }
            None => (None, None),
        };

        let text = self.gateway.send_text(address, body).await;
        if !text.success {
            tracing::warn!(address = %address, status = %text.status, "Text send failed");
        }

        DeliveryResult {
            address: address.to_string(),
            text_sent: text.success,
            text_status: text.status,
            file_sent,
            file_status,
        }
    }
}

/// Delete a batch's shared attachment. Deleting an already-absent file is a
/// no-op; any other failure is logged and never retried.
async fn cleanup_file(path: &Path) {
    match tokio::fs::remove_file(path).await {
        Ok(()) => {
            tracing::info!(path = %path.display(), "Attachment removed");
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "Attachment already absent, nothing to clean");
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Attachment cleanup failed");
        }
    }
}
