//! Lawbook gateway binary.

use clap::Parser;
use lawbook_gateway::{create_router, AppState, Args, GatewayConfig};
use lawbook_store::SqliteLawStore;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line args
    let args = Args::parse();

    // Initialize tracing
    let level = args.log_level.clone();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "lawbook_gateway={level},lawbook_store={level},\
                     lawbook_core={level},tower_http=info"
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = GatewayConfig::from(&args);
    config.validate()?;

    info!(
        listen = %config.listen_addr,
        database_url = %config.database_url,
        success_path = %config.success_path,
        "starting Lawbook gateway"
    );

    let store = SqliteLawStore::open(&config.store_config()).await?;

    let state = AppState::new(store.clone(), config.clone());
    let app = create_router(state);

    let listener = TcpListener::bind(&config.listen_addr).await?;
    info!("gateway listening on {}", config.listen_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.close().await;
    info!("gateway shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl+c");
        std::future::pending::<()>().await;
    }
    info!("received shutdown signal");
}
