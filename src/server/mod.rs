//! Local REST API.
//!
//! All routes live under `/api`; see [`handlers`] for the status codes.
//! The server owns no connection: [`AppState`] only carries the database
//! path, and every request opens and closes its own handle.

pub mod dto;
pub mod error;
pub mod handlers;

use crate::db::db::Db;
use crate::libs::config::AppConfig;
use crate::libs::messages::Message;
use anyhow::{Context, Result};
use axum::{
    routing::{get, patch},
    Router,
};
use handlers::{
    create_category, create_todo, delete_category, delete_todo, get_category, get_todo, health_check, list_categories,
    list_category_todos, list_todos, toggle_todo, update_category, update_todo,
};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Clone, Debug)]
pub struct AppState {
    pub db_path: Arc<PathBuf>,
}

impl AppState {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: Arc::new(db_path.into()),
        }
    }
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/health", get(health_check))
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}", get(get_todo).put(update_todo).delete(delete_todo))
        .route("/todos/{id}/toggle", patch(toggle_todo))
        .route("/categories", get(list_categories).post(create_category))
        .route(
            "/categories/{id}",
            get(get_category).put(update_category).delete(delete_category),
        )
        .route("/categories/{id}/todos", get(list_category_todos));

    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);

    Router::new()
        .nest("/api", api)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Migrates the database, then serves the API until Ctrl+C.
///
/// Schema initialization finishes before the listener is bound; if it
/// fails, no request is ever accepted.
pub async fn serve(config: AppConfig) -> Result<()> {
    let db_path = config.db_path.clone();
    tokio::task::spawn_blocking(move || Db::new(&db_path).map(drop))
        .await?
        .with_context(|| Message::DatabaseInitFailed(config.db_path.display().to_string()))?;
    tracing::info!("{}", Message::DatabaseReady(config.db_path.display().to_string()));

    let listener = TcpListener::bind(config.address())
        .await
        .with_context(|| format!("failed to bind {}", config.address()))?;
    tracing::info!("{}", Message::ServerStarting(config.api_url()));

    axum::serve(listener, router(AppState::new(config.db_path)))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("{}", Message::ServerStopped);
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
    }
}
