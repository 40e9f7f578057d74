//! Roomie roommate-matching REST API.
//!
//! Stores users, rooms, matches and chats in SQLite and answers the
//! "intelligent" questions through a pluggable brain.

mod config;
mod error;
mod routes;
mod state;

use std::sync::Arc;

use brain_core::{Brain, TimeoutBrain};
use database::{room, Database, MonotonicIds, RetryPolicy};
use mock_brain::FixedBrain;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::from_env()?;
    info!(addr = %config.addr, "Starting Roomie API");

    // Connect to database
    let policy = RetryPolicy {
        max_attempts: config.connect_retries,
        ..RetryPolicy::default()
    };
    let db = Database::connect_with_retry(&config.database_url, config.pool_size, policy).await?;
    db.migrate().await?;

    let brain: Arc<dyn Brain> = Arc::new(TimeoutBrain::new(FixedBrain::new(), config.brain_timeout));
    info!(brain = brain.name(), timeout = ?config.brain_timeout, "Brain ready");

    // Resume room ids after the highest one already stored
    let last_room_id = room::max_room_id(db.pool()).await?;
    info!(last_room_id, "Room id generator seeded");

    // Build application state
    let room_ids = MonotonicIds::starting_after(last_room_id);
    let state = AppState::with_room_ids(db.clone(), brain, room_ids);

    // Build router
    let app = routes::router()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    // Start server
    info!(addr = %config.addr, "Roomie API listening");
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await;
    info!("Roomie API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
