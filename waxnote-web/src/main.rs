//! waxnote-web - Album review web service
//!
//! Serves the review submission and browsing pages, persists reviews to the
//! SQLite database in the data folder, and resolves cover art through
//! MusicBrainz and the Cover Art Archive. The process is controlled by a
//! stdin command loop: `stop` shuts it down.

use anyhow::Result;
use tokio::sync::oneshot;
use tracing::info;
use waxnote_web::services::CoverArtClient;
use waxnote_web::{build_router, config, control, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Build identification logged immediately, before database delays
    info!(
        "Starting waxnote-web v{} built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let args = config::parse_args();

    let data_folder = waxnote_common::config::resolve_data_folder(args.data_folder.as_deref());
    waxnote_common::config::ensure_data_folder(&data_folder)?;

    let db_path = waxnote_common::config::database_path(&data_folder);
    info!("Database: {}", db_path.display());

    let pool = waxnote_common::db::init_database(&db_path).await?;

    let cover_art = CoverArtClient::new()
        .map_err(|e| anyhow::anyhow!("Failed to create cover-art client: {}", e))?;

    let state = AppState::new(pool, cover_art);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(("127.0.0.1", args.port)).await?;
    info!("waxnote-web listening on http://127.0.0.1:{}", args.port);

    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    tokio::spawn(control::command_loop(shutdown_tx));

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.await;
        })
        .await?;

    info!("Server shut down");
    Ok(())
}
