//! Chat gateway: single-route proxy between the widget and the prediction
//! service.
mod config;
mod routes;
mod upstream;

pub use config::GatewayConfig;
pub use routes::{router, FAILURE_MESSAGE, GREETING_MESSAGE};
pub use upstream::{
    FailureKind, PredictionService, ReqwestPredictionService, UpstreamError, UpstreamSettings,
};
