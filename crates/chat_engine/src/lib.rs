//! Chat engine: the widget's IO side of the gateway conversation.
mod client;
mod engine;
mod types;

pub use client::{GatewayClient, GatewaySettings, ReqwestGatewayClient};
pub use engine::EngineHandle;
pub use types::{EngineEvent, FailureKind, GatewayError, MessageId, PredictionReply};
