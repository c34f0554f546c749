//! waxnote-web library interface
//!
//! Exposes the router and application state so integration tests can drive
//! the HTTP surface without binding a listener.

pub mod api;
pub mod config;
pub mod control;
pub mod db;
pub mod services;

use axum::Router;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use services::CoverArtClient;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
    /// Cover-art resolution client
    pub cover_art: Arc<CoverArtClient>,
    /// Service startup timestamp for uptime reporting
    pub startup_time: DateTime<Utc>,
}

impl AppState {
    pub fn new(db: SqlitePool, cover_art: CoverArtClient) -> Self {
        Self {
            db,
            cover_art: Arc::new(cover_art),
            startup_time: Utc::now(),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(api::ui_routes())
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
