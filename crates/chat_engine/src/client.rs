use std::time::Duration;

use serde::Serialize;

use crate::types::{FailureKind, GatewayEnvelope, GatewayError, PredictionReply};

/// Connection settings for the widget -> gateway call.
#[derive(Debug, Clone)]
pub struct GatewaySettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for GatewaySettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            connect_timeout: Duration::from_secs(10),
            // Retrieval-backed answers can take a while; the proxy itself
            // imposes no tighter deadline.
            request_timeout: Duration::from_secs(120),
        }
    }
}

impl GatewaySettings {
    /// Settings for the gateway named by `CHAT_GATEWAY_URL`, falling back to
    /// the local-development default.
    pub fn from_env() -> Self {
        let mut settings = Self::default();
        if let Ok(url) = std::env::var("CHAT_GATEWAY_URL") {
            settings.base_url = url;
        }
        settings
    }
}

/// The sole outbound payload shape.
#[derive(Debug, Serialize)]
struct PromptRequest<'a> {
    prompt: &'a str,
}

#[async_trait::async_trait]
pub trait GatewayClient: Send + Sync {
    /// Sends one prompt and returns the parsed reply.
    async fn ask(&self, prompt: &str) -> Result<PredictionReply, GatewayError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestGatewayClient {
    settings: GatewaySettings,
    client: reqwest::Client,
}

impl ReqwestGatewayClient {
    pub fn new(settings: GatewaySettings) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| GatewayError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }
}

#[async_trait::async_trait]
impl GatewayClient for ReqwestGatewayClient {
    async fn ask(&self, prompt: &str) -> Result<PredictionReply, GatewayError> {
        log::debug!("POST {} prompt_len={}", self.settings.base_url, prompt.len());

        let response = self
            .client
            .post(&self.settings.base_url)
            .json(&PromptRequest { prompt })
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        // A 200 whose body does not parse takes the same failure path as a
        // transport error.
        let envelope: GatewayEnvelope = response
            .json()
            .await
            .map_err(|err| GatewayError::new(FailureKind::MalformedBody, err.to_string()))?;
        Ok(envelope.bot)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> GatewayError {
    if err.is_timeout() {
        return GatewayError::new(FailureKind::Timeout, err.to_string());
    }
    GatewayError::new(FailureKind::Network, err.to_string())
}
