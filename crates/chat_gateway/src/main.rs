use std::sync::Arc;

use anyhow::Context;
use chat_gateway::{router, GatewayConfig, ReqwestPredictionService};
use log::LevelFilter;
use simplelog::{ColorChoice, CombinedLogger, ConfigBuilder, TermLogger, TerminalMode};
use tokio::net::TcpListener;
use tokio::signal;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let config = GatewayConfig::from_env().context("invalid CHAT_GATEWAY_ADDR")?;
    let service = ReqwestPredictionService::new(config.upstream.clone())
        .context("failed to build upstream client")?;
    let app = router(Arc::new(service));

    let listener = TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;
    log::info!("chat gateway listening on http://{}", config.addr);
    log::info!("forwarding prompts to {}", config.upstream.endpoint);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;
    log::info!("chat gateway exited");
    Ok(())
}

fn init_logging() {
    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build();
    let _ = CombinedLogger::init(vec![TermLogger::new(
        LevelFilter::Info,
        config,
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}

async fn shutdown_signal() {
    if let Err(err) = signal::ctrl_c().await {
        log::warn!("failed to listen for shutdown signal: {err}");
    }
}
