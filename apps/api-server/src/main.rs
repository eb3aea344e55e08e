//! # Cine API Server
//!
//! The Actix-web HTTP dispatcher in front of the read-through orchestrator.

use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod state;
mod telemetry;

use config::AppConfig;
use state::AppState;
use telemetry::TelemetryConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing; the guard flushes the log file on shutdown
    let _log_guard = telemetry::init_telemetry(&TelemetryConfig::from_env());

    // Load configuration
    let config = AppConfig::from_env()?;

    tracing::info!(
        "Starting Cine API Server on {}:{} ({} workers)",
        config.host,
        config.port,
        config.workers
    );

    // Connect to the stores once; every worker shares them
    let state = AppState::new(&config).await?;

    // Start HTTP server
    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure_routes)
            .default_service(web::to(handlers::not_found))
    })
    .workers(config.workers)
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}
