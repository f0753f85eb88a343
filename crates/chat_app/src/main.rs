mod app;
mod effects;
mod logging;
mod tickers;
mod ui;

fn main() -> anyhow::Result<()> {
    app::run_app()
}
