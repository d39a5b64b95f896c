use dotenvy::dotenv;
use log::{error, info};
use std::sync::Arc;

use taskserver::config::AppConfig;
use taskserver::shared::state::AppState;
use taskserver::shared::utils::{create_conn, run_migrations};
use taskserver::web_server::app_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env()?;

    let pool = match create_conn(&config.database_url()) {
        Ok(pool) => pool,
        Err(e) => {
            error!("Failed to create database pool: {e}");
            return Err(e.into());
        }
    };
    if let Err(e) = run_migrations(&pool) {
        error!("Failed to run migrations: {e}");
        anyhow::bail!("migrations failed: {e}");
    }

    let app_state = Arc::new(AppState::new(pool));
    let app = app_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            error!("Failed to bind to {addr}: {e} - is another instance running?");
            return Err(e.into());
        }
    };
    info!("HTTP server listening on {addr}");
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install ctrl-c handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Shutting down on ctrl-c"),
        _ = terminate => info!("Shutting down on SIGTERM"),
    }
}
