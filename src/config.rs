// Relay Service Configuration
use anyhow::{Context, Result};
use std::time::Duration;

pub const DEFAULT_DRIVE_API_BASE: &str = "https://www.googleapis.com/drive/v3";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// OAuth client identity the relay attaches to every credential.
///
/// `Debug` redacts the secret.
#[derive(Clone)]
pub struct OAuthClient {
    pub client_id: String,
    pub client_secret: String,
}

impl std::fmt::Debug for OAuthClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OAuthClient")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[redacted]")
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub host: String,
    pub service_port: u16,

    // None when either GOOGLE_OAUTH_CLIENT_ID or GOOGLE_OAUTH_CLIENT_SECRET is unset;
    // credential-bearing requests then fail with 500.
    pub oauth_client: Option<OAuthClient>,

    pub drive_api_base: String,
    pub request_timeout_secs: Option<u64>,

    pub log_format: LogFormat,
}

impl RelayConfig {
    pub fn from_env() -> Result<Self> {
        let client_id = non_blank_var("GOOGLE_OAUTH_CLIENT_ID");
        let client_secret = non_blank_var("GOOGLE_OAUTH_CLIENT_SECRET");
        let oauth_client = match (client_id, client_secret) {
            (Some(client_id), Some(client_secret)) => Some(OAuthClient {
                client_id,
                client_secret,
            }),
            _ => None,
        };

        let request_timeout_secs = match non_blank_var("DRIVE_REQUEST_TIMEOUT_SECS") {
            Some(raw) => Some(
                raw.parse()
                    .with_context(|| format!("invalid DRIVE_REQUEST_TIMEOUT_SECS: {raw}"))?,
            ),
            None => None,
        };

        let log_format = match std::env::var("LOG_FORMAT")
            .unwrap_or_default()
            .to_ascii_lowercase()
            .as_str()
        {
            "json" => LogFormat::Json,
            "" | "pretty" => LogFormat::Pretty,
            other => anyhow::bail!("invalid LOG_FORMAT: {other}"),
        };

        let port = std::env::var("PORT").unwrap_or_else(|_| "8000".to_string());

        Ok(Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            service_port: port
                .parse()
                .with_context(|| format!("invalid PORT: {port}"))?,
            oauth_client,
            drive_api_base: non_blank_var("GOOGLE_DRIVE_API_BASE")
                .map(|base| base.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_DRIVE_API_BASE.to_string()),
            request_timeout_secs,
            log_format,
        })
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            service_port: 8000,
            oauth_client: None,
            drive_api_base: DEFAULT_DRIVE_API_BASE.to_string(),
            request_timeout_secs: None,
            log_format: LogFormat::Pretty,
        }
    }
}

fn non_blank_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
