//! Go data type catalog server binary.

use clap::Parser;
use gotypes_server::{bind, serve, AppState, Args, ServerConfig, CATALOG_PATH};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line args
    let args = Args::parse();
    let config = ServerConfig::from(args);

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.default_log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let state = AppState::new();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        listen = %config.listen_addr(),
        entries = state.catalog.len(),
        "starting Go data type catalog server"
    );

    let listener = match bind(&config).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, "failed to start server");
            return Err(e.into());
        }
    };
    tracing::info!("serving catalog at http://{}{}", config.listen_addr(), CATALOG_PATH);

    serve(listener, state, shutdown_signal()).await?;

    tracing::info!("server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl+c");
        // Without a signal handler, serve until killed.
        std::future::pending::<()>().await;
    }
    tracing::info!("received shutdown signal");
}
