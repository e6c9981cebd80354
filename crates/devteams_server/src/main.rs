use clap::Parser;
use color_eyre::eyre::{eyre, Result};
use devteams_core::db::{open_db, open_db_in_memory};
use devteams_core::init_logging;
use devteams_server::{app, AppState, ServerConfig};
use log::info;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let config = ServerConfig::parse();
    init_logging(&config.log_level, config.log_dir.as_deref())?;

    let conn = match &config.database {
        Some(path) => open_db(path)?,
        None => open_db_in_memory()?,
    };
    let state = AppState::new(conn, config.public_url.clone());

    let listener = tokio::net::TcpListener::bind(&config.bind)
        .await
        .map_err(|e| eyre!("Failed to bind to {}: {}", config.bind, e))?;

    info!(
        "event=server_start module=server status=ok bind={} store={}",
        config.bind,
        config
            .database
            .as_ref()
            .map_or_else(|| "memory".to_string(), |path| path.display().to_string())
    );

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| eyre!("Server error: {e}"))?;

    info!("event=server_stop module=server status=ok");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        log::error!("event=server_signal module=server status=error error={err}");
    }
}
