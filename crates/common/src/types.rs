use std::collections::HashMap;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single message recipient.
///
/// `address` is an opaque routing identifier understood by the gateway
/// (e.g. `5215512345678@s.whatsapp.net`). `substitutions` must contain a
/// value for every placeholder the active template references.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipient {
    pub address: String,
    #[serde(default)]
    pub substitutions: HashMap<String, String>,
}

/// A batch of personalized messages sharing one template and at most one
/// attachment. Constructed once per dispatch request and decomposed
/// immediately into tasks; the batch itself does not outlive submission.
#[derive(Debug, Clone)]
pub struct Batch {
    pub id: Uuid,
    pub template: String,
    pub recipients: Vec<Recipient>,
    /// Shared read-only attachment, deleted after all deliveries for the
    /// batch have been attempted. Must exist at submission time.
    pub attachment_path: Option<PathBuf>,
    pub submitted_at: DateTime<Utc>,
}

impl Batch {
    pub fn new(
        template: String,
        recipients: Vec<Recipient>,
        attachment_path: Option<PathBuf>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            template,
            recipients,
            attachment_path,
            submitted_at: Utc::now(),
        }
    }
}

/// A unit of work owned by the dispatch queue.
///
/// Tasks are immutable once enqueued; the queue never reorders or merges
/// them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Task {
    /// Deliver one personalized message (and the shared attachment, if any).
    SendMessage {
        address: String,
        body: String,
        attachment_path: Option<PathBuf>,
    },
    /// Delete a batch's shared attachment. Enqueued strictly after every
    /// `SendMessage` of the owning batch.
    CleanupFile { path: PathBuf },
}

/// Per-recipient delivery outcome. Ephemeral — logged, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct DeliveryResult {
    pub address: String,
    pub text_sent: bool,
    pub text_status: String,
    pub file_sent: Option<bool>,
    pub file_status: Option<String>,
}

/// A recipient dropped from a batch before enqueueing, with the reason.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedRecipient {
    pub address: String,
    pub reason: String,
}

/// Synchronous response to a batch submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchReceipt {
    pub batch_id: Uuid,
    /// Number of `SendMessage` tasks enqueued.
    pub enqueued: usize,
    pub skipped: Vec<SkippedRecipient>,
}
