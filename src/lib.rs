pub mod modules;
mod schema;
pub mod server;
pub mod shared;

use modules::movie::{MovieRepository, MovieRepositoryImpl};
use server::{build_router, AppState};
use shared::{AppConfig, Database};
use std::sync::Arc;

use anyhow::Context;

/// Boot the service: config, logging, database, migrations, HTTP listener.
pub async fn run() -> anyhow::Result<()> {
    shared::utils::init_logger();

    let config = AppConfig::from_env().context("Failed to load configuration")?;

    let database = Arc::new(Database::new(&config).context("Failed to initialize database")?);

    // Migrations touch the database synchronously; keep them off the runtime threads
    let migrator = Arc::clone(&database);
    let applied = tokio::task::spawn_blocking(move || migrator.run_migrations())
        .await
        .context("Migration task panicked")?
        .context("Failed to run database migrations")?;
    log::info!("Database migrations completed successfully ({} applied)", applied);

    let movie_repo: Arc<dyn MovieRepository> =
        Arc::new(MovieRepositoryImpl::new(Arc::clone(&database)));
    let app = build_router(AppState::new(movie_repo, Some(database)));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    log::info!("Server running on http://{}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    log::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
        // Keep serving; the process can still be killed externally
        std::future::pending::<()>().await;
    }
}
