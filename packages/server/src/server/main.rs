// Main entry point for the Aero Job Monitor server

use std::sync::Arc;

use anyhow::{Context, Result};
use server_core::config::Config;
use server_core::notify::{DiscordWebhook, Notifier};
use server_core::scan::ScanContext;
use server_core::scheduler;
use server_core::server::build_app;
use server_core::store::SnapshotStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server_core=debug,scanner=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Aero Job Monitor");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;

    // Restore the persisted snapshot
    let store = SnapshotStore::new(&config.data_file);
    let snapshot = store
        .load()
        .context("Failed to load persisted snapshot")?;
    tracing::info!(
        listings = snapshot.jobs.len(),
        path = %config.data_file.display(),
        "Restored snapshot"
    );

    let client = scanner::build_client()?;

    let notifier: Option<Box<dyn Notifier>> = match &config.discord_webhook_url {
        Some(url) => Some(Box::new(DiscordWebhook::new(url.clone(), client.clone()))),
        None => {
            tracing::warn!("DISCORD_WEBHOOK_URL not set - Discord notifications disabled");
            None
        }
    };

    let ctx = Arc::new(ScanContext::new(
        store,
        snapshot,
        client,
        config.scan_interval_hours,
        notifier,
    ));

    // Periodic scans plus the startup one-shot
    let _scheduler = scheduler::start(ctx.clone())
        .await
        .context("Failed to start scheduler")?;

    // Start server
    let app = build_app(ctx);
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
