//! Server mode
//!
//! This module contains the HTTP server startup logic.
//! It configures and starts the HTTP server with all necessary routes.

use actix_web::{
    App, HttpServer,
    middleware::{Compress, DefaultHeaders},
    web,
};
use anyhow::{Context, Result};
use std::time::Duration;
use tracing::{info, warn};

use crate::api::configure_app;
use crate::api::middleware::RequestTrace;
use crate::config::get_config;
use crate::runtime::lifetime;

/// Run the HTTP server
///
/// Logging and configuration must be initialized before calling this.
pub async fn run_server() -> Result<()> {
    let config = get_config();

    let startup = lifetime::startup::prepare_server_startup(&config)
        .await
        .inspect_err(|e| tracing::error!("Server startup failed: {:#}", e))?;

    let state = startup.state.clone();
    let admin = config.admin.clone();
    let db_for_shutdown = startup.storage.get_db().clone();

    let cpu_count = config.server.cpu_count.clamp(1, 32);
    info!("Using {} CPU cores for the server", cpu_count);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Compress::default())
            .wrap(DefaultHeaders::new().add(("X-Content-Type-Options", "nosniff")))
            .wrap(RequestTrace)
            .app_data(web::PayloadConfig::new(64 * 1024))
            .configure(|cfg| configure_app(cfg, &state, &admin))
    })
    .keep_alive(Duration::from_secs(30))
    .client_request_timeout(Duration::from_millis(5000))
    .client_disconnect_timeout(Duration::from_millis(1000))
    .workers(cpu_count)
    .disable_signals();

    let bind_address = format!("{}:{}", config.server.host, config.server.port);
    warn!("Starting server at http://{}", bind_address);

    let server = server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run();
    let handle = server.handle();

    tokio::select! {
        res = server => {
            res?;
        }
        _ = lifetime::shutdown::wait_for_signal() => {
            info!("Stopping HTTP server...");
            handle.stop(true).await;
        }
    }

    lifetime::shutdown::close_database(db_for_shutdown).await;
    warn!("Graceful shutdown completed");
    Ok(())
}
