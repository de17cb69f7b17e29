// Google Drive Relay Entry Point
// Accepts a caller-supplied bearer token, calls Drive files.list on the
// caller's behalf and returns a trimmed listing
use actix_web::{web, App, HttpServer};
use anyhow::Result;
use gdrive_relay::{api, telemetry, AppState, HttpDriveClient, RelayConfig};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_actix_web::TracingLogger;

#[actix_web::main]
async fn main() -> Result<()> {
    // Load configuration
    dotenv::dotenv().ok();
    let config = RelayConfig::from_env()?;

    telemetry::init(config.log_format);
    info!("Starting Google Drive relay");

    if config.oauth_client.is_none() {
        warn!("GOOGLE_OAUTH_CLIENT_ID / GOOGLE_OAUTH_CLIENT_SECRET not set; Drive requests will fail with 500");
    }

    let drive = HttpDriveClient::new(config.drive_api_base.clone(), config.request_timeout())?;
    info!(api_base = drive.api_base(), "Initialized Drive client");

    let bind = (config.host.clone(), config.service_port);
    let state = web::Data::new(AppState::new(config, Arc::new(drive)));

    info!("🚀 Listening on http://{}:{}", bind.0, bind.1);
    info!("   POST /gdrive/list_files");
    info!("   POST /gdrive/list_items");
    info!("   POST /gdrive/search_files");
    info!("   GET  /health");

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(state.clone())
            .configure(api::configure)
    })
    .bind(bind)?
    .run()
    .await?;

    info!("Google Drive relay stopped");
    Ok(())
}
