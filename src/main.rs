//! CF Tracker - Application Entry Point
//!
//! This is the main entry point for the CF Tracker server.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cf_tracker::{
    config::CONFIG,
    db, handlers,
    scheduler::SyncScheduler,
    services::{CodeforcesClient, EmailNotifier},
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| CONFIG.server.rust_log.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting CF Tracker server...");

    // Initialize database connection pool
    tracing::info!("Connecting to database...");
    let db_pool = db::create_pool(&CONFIG.database).await?;

    // Run database migrations
    tracing::info!("Running database migrations...");
    db::run_migrations(&db_pool).await?;

    // Initialize the Codeforces client and reminder notifier
    let cf = CodeforcesClient::new(&CONFIG.codeforces)?;
    let notifier = Arc::new(EmailNotifier::new(&CONFIG.smtp)?);

    // Start the sync scheduler from persisted settings
    tracing::info!("Initializing sync scheduler...");
    let scheduler = Arc::new(SyncScheduler::new(db_pool.clone(), cf.clone(), notifier).await?);
    let settings = scheduler.initialize().await?;
    tracing::info!(
        cron = %settings.cron_expression,
        enabled = settings.enabled,
        "Sync scheduler ready"
    );

    // Create application state
    let state = AppState::new(db_pool, cf, scheduler.clone());

    // Build the router
    let app = Router::new()
        .nest("/api", handlers::routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state);

    // Start the server
    let addr = SocketAddr::new(CONFIG.server.host.parse()?, CONFIG.server.port);
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Stop future ticks; an in-flight batch finishes on its own
    tracing::info!("Shutting down scheduler...");
    scheduler.shutdown().await?;

    Ok(())
}

/// Resolve on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
