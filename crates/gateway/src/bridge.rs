//! HTTP bridge implementation of the messaging gateway port.
//!
//! The bridge is a separate process that holds the actual messaging-network
//! session and exposes a small REST surface:
//!
//! - `POST /api/send` with `{ recipient, message }` sends a text message
//! - `POST /api/send` with `{ recipient, media_path }` sends a file
//!
//! Responses are `{ success: bool, message: string }`. Transport failures
//! are reported as failed [`SendOutcome`]s, never as errors.

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::port::{MessagingGateway, SendOutcome};

/// Request body for the bridge's send endpoint.
#[derive(Debug, Serialize)]
struct BridgeSendRequest<'a> {
    recipient: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    media_path: Option<&'a str>,
}

/// Response body from the bridge's send endpoint.
#[derive(Debug, Deserialize)]
struct BridgeSendResponse {
    success: bool,
    #[serde(default)]
    message: String,
}

/// Gateway port implementation backed by the bridge's REST API.
pub struct BridgeGateway {
    client: reqwest::Client,
    base_url: String,
}

impl BridgeGateway {
    pub fn new(
        base_url: impl Into<String>,
        send_timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(send_timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    async fn post_send(&self, request: &BridgeSendRequest<'_>) -> SendOutcome {
        let url = format!("{}/api/send", self.base_url);

        let response = match self.client.post(&url).json(request).send().await {
            Ok(response) => response,
            Err(e) => {
                return SendOutcome::failed(format!("gateway request failed: {}", e));
            }
        };

        let http_status = response.status();
        match response.json::<BridgeSendResponse>().await {
            Ok(body) if body.success => SendOutcome::ok(body.message),
            Ok(body) => SendOutcome::failed(body.message),
            Err(_) => SendOutcome::failed(format!(
                "gateway returned {} with an unreadable body",
                http_status
            )),
        }
    }
}

#[async_trait]
impl MessagingGateway for BridgeGateway {
    async fn send_text(&self, address: &str, body: &str) -> SendOutcome {
        self.post_send(&BridgeSendRequest {
            recipient: address,
            message: Some(body),
            media_path: None,
        })
        .await
    }

    async fn send_file(&self, address: &str, path: &Path) -> SendOutcome {
        let media_path = path.to_string_lossy();
        self.post_send(&BridgeSendRequest {
            recipient: address,
            message: None,
            media_path: Some(&media_path),
        })
        .await
    }
}
