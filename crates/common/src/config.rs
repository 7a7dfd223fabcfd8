use serde::Deserialize;

/// Global application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Base URL of the messaging gateway bridge process
    pub gateway_base_url: String,

    /// Fixed pacing delay between consecutive outbound sends, in milliseconds
    pub send_delay_ms: u64,

    /// Timeout for gateway send calls in seconds
    pub gateway_send_timeout_secs: u64,

    /// Timeout for the gateway status query in seconds
    pub gateway_status_timeout_secs: u64,

    /// Timeout for the pairing-QR query in seconds (QR generation is slower)
    pub gateway_qr_timeout_secs: u64,

    /// Port the API server binds to (default: 3000)
    pub api_port: u16,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            gateway_base_url: std::env::var("GATEWAY_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),
            send_delay_ms: std::env::var("SEND_DELAY_MS")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("SEND_DELAY_MS must be a valid u64"))?,
            gateway_send_timeout_secs: std::env::var("GATEWAY_SEND_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("GATEWAY_SEND_TIMEOUT_SECS must be a valid u64"))?,
            gateway_status_timeout_secs: std::env::var("GATEWAY_STATUS_TIMEOUT_SECS")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("GATEWAY_STATUS_TIMEOUT_SECS must be a valid u64"))?,
            gateway_qr_timeout_secs: std::env::var("GATEWAY_QR_TIMEOUT_SECS")
                .unwrap_or_else(|_| "15".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("GATEWAY_QR_TIMEOUT_SECS must be a valid u64"))?,
            api_port: std::env::var("API_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("API_PORT must be a valid u16"))?,
        })
    }
}
