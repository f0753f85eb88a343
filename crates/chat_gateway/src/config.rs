use std::net::{AddrParseError, SocketAddr};

use crate::upstream::UpstreamSettings;

/// Gateway runtime configuration. Everything comes from the environment,
/// with local-development defaults.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub addr: SocketAddr,
    pub upstream: UpstreamSettings,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            upstream: UpstreamSettings::default(),
        }
    }
}

impl GatewayConfig {
    /// Reads `CHAT_GATEWAY_ADDR` and `CHAT_UPSTREAM_URL`, keeping defaults
    /// for anything unset.
    pub fn from_env() -> Result<Self, AddrParseError> {
        let mut config = Self::default();
        if let Ok(addr) = std::env::var("CHAT_GATEWAY_ADDR") {
            config.addr = addr.parse()?;
        }
        if let Ok(endpoint) = std::env::var("CHAT_UPSTREAM_URL") {
            config.upstream.endpoint = endpoint;
        }
        Ok(config)
    }
}
