use anyhow::Context;
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};

mod config;
mod routes;

use config::SiteConfig;

fn init_tracing(config: &SiteConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.environment.default_log_filter()));
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutting down");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let config = SiteConfig::from_env()?;
    init_tracing(&config);

    if !config.site_dir.join("index.html").is_file() {
        tracing::warn!(
            "No index.html in {}; run `trunk build --release` in frontend/ first",
            config.site_dir.display()
        );
    }

    let app = routes::app(&config);
    let addr = config.bind_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!(
        "Serving {} on port {} ({:?})",
        config.site_dir.display(),
        config.port,
        config.environment
    );
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;
    Ok(())
}
