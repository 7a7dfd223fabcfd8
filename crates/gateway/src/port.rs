//! Messaging gateway port — the capability interface the dispatch worker
//! sends through.
//!
//! Implementations never raise: transport failures are folded into the
//! returned [`SendOutcome`] so the worker's control flow stays uniform, and
//! every call is bounded by the underlying transport's timeout.

use std::path::Path;

use async_trait::async_trait;

/// Result of a single gateway send call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendOutcome {
    pub success: bool,
    /// Human-readable status from the gateway (or a transport error summary).
    pub status: String,
}

impl SendOutcome {
    pub fn ok(status: impl Into<String>) -> Self {
        Self {
            success: true,
            status: status.into(),
        }
    }

    pub fn failed(status: impl Into<String>) -> Self {
        Self {
            success: false,
            status: status.into(),
        }
    }
}

/// Capability interface over the external messaging gateway.
///
/// The concrete implementation is injected into the dispatch worker at
/// startup.
#[async_trait]
pub trait MessagingGateway: Send + Sync {
    /// Send a text message to an address.
    async fn send_text(&self, address: &str, body: &str) -> SendOutcome;

    /// Send a file to an address.
    async fn send_file(&self, address: &str, path: &Path) -> SendOutcome;
}
