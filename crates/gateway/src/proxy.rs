//! Gateway status proxy — read-only queries forwarded to the bridge.
//!
//! Two endpoints are proxied: connection status and pairing-QR retrieval.
//! Transport failures become [`ProxyError::Unreachable`] and structurally
//! invalid responses become [`ProxyError::UnexpectedResponse`], so callers
//! can tell a down gateway apart from a misbehaving one.

use std::time::Duration;

use thiserror::Error;

use courier_common::error::AppError;

/// Failure kinds surfaced by the status proxy.
#[derive(Debug, Error)]
pub enum ProxyError {
    /// The gateway process could not be reached (connection refused,
    /// timeout, DNS failure).
    #[error("gateway unreachable: {0}")]
    Unreachable(String),

    /// The gateway answered, but not with the JSON payload its status
    /// surface is expected to produce.
    #[error("unexpected gateway response: {0}")]
    UnexpectedResponse(String),
}

impl From<ProxyError> for AppError {
    fn from(e: ProxyError) -> Self {
        match e {
            ProxyError::Unreachable(msg) => AppError::GatewayUnreachable(msg),
            ProxyError::UnexpectedResponse(msg) => AppError::UnexpectedGatewayResponse(msg),
        }
    }
}

/// Read-only proxy to the gateway's status surface.
#[derive(Clone)]
pub struct StatusProxy {
    client: reqwest::Client,
    base_url: String,
    status_timeout: Duration,
    qr_timeout: Duration,
}

impl StatusProxy {
    pub fn new(
        base_url: impl Into<String>,
        status_timeout: Duration,
        qr_timeout: Duration,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            status_timeout,
            qr_timeout,
        }
    }

    /// Fetch the gateway's connection status. Short timeout — this is a
    /// liveness-style query.
    pub async fn get_status(&self) -> Result<serde_json::Value, ProxyError> {
        self.forward("/api/status", self.status_timeout).await
    }

    /// Fetch the pairing QR payload. Longer timeout, since QR generation on
    /// the gateway side can be slow.
    pub async fn get_pairing_qr(&self) -> Result<serde_json::Value, ProxyError> {
        self.forward("/api/qr", self.qr_timeout).await
    }

    async fn forward(
        &self,
        path: &str,
        timeout: Duration,
    ) -> Result<serde_json::Value, ProxyError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(url = %url, "Forwarding gateway query");

        let response = self
            .client
            .get(&url)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| ProxyError::Unreachable(e.to_string()))?;

        let http_status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| ProxyError::Unreachable(e.to_string()))?;

        serde_json::from_slice(&body).map_err(|_| {
            ProxyError::UnexpectedResponse(format!(
                "gateway returned {} with a non-JSON body",
                http_status
            ))
        })
    }
}
