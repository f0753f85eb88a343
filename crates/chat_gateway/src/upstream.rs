use std::fmt;
use std::time::Duration;

use serde::Serialize;
use serde_json::Value;

/// Connection settings for the gateway -> prediction-service call.
#[derive(Debug, Clone)]
pub struct UpstreamSettings {
    pub endpoint: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for UpstreamSettings {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8000/prediction".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(120),
        }
    }
}

/// Wire shape of the forwarded prompt. An absent prompt stays absent; the
/// upstream decides what that means.
#[derive(Debug, Serialize)]
struct PredictionRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    input: Option<&'a str>,
}

/// Kind-classified failure for the upstream call. Clients only ever see the
/// generic failure message; the kind and detail go to the server log.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct UpstreamError {
    pub kind: FailureKind,
    pub message: String,
}

impl UpstreamError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    HttpStatus(u16),
    Timeout,
    Network,
    MalformedBody,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::MalformedBody => write!(f, "malformed body"),
        }
    }
}

#[async_trait::async_trait]
pub trait PredictionService: Send + Sync {
    /// Forwards a prompt and returns the upstream body verbatim.
    async fn predict(&self, input: Option<&str>) -> Result<Value, UpstreamError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestPredictionService {
    settings: UpstreamSettings,
    client: reqwest::Client,
}

impl ReqwestPredictionService {
    pub fn new(settings: UpstreamSettings) -> Result<Self, UpstreamError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| UpstreamError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }
}

#[async_trait::async_trait]
impl PredictionService for ReqwestPredictionService {
    async fn predict(&self, input: Option<&str>) -> Result<Value, UpstreamError> {
        let response = self
            .client
            .post(&self.settings.endpoint)
            .json(&PredictionRequest { input })
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        // The body is opaque to the gateway; it is relayed, not interpreted.
        response
            .json::<Value>()
            .await
            .map_err(|err| UpstreamError::new(FailureKind::MalformedBody, err.to_string()))
    }
}

fn map_reqwest_error(err: reqwest::Error) -> UpstreamError {
    if err.is_timeout() {
        return UpstreamError::new(FailureKind::Timeout, err.to_string());
    }
    UpstreamError::new(FailureKind::Network, err.to_string())
}
