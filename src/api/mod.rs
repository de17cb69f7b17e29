//! HTTP surface of the relay.
//!
//! `POST /gdrive/list_files`, `POST /gdrive/list_items`,
//! `POST /gdrive/search_files` and `GET /health`.

pub mod gdrive;

use actix_web::{
    error::JsonPayloadError,
    web::{self, Json},
    HttpRequest, Responder,
};
use std::sync::Arc;

use crate::{config::RelayConfig, drive::DriveApi, errors::RelayError};

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<RelayConfig>,
    pub drive: Arc<dyn DriveApi>,
}

impl AppState {
    pub fn new(config: RelayConfig, drive: Arc<dyn DriveApi>) -> Self {
        Self {
            config: Arc::new(config),
            drive,
        }
    }
}

/// Health check endpoint
pub async fn health() -> impl Responder {
    Json(serde_json::json!({ "status": "ok" }))
}

fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    RelayError::InvalidArguments(err.to_string()).into()
}

/// Register relay routes on an app; state is attached by the caller.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error))
        .route("/health", web::get().to(health))
        .service(
            web::scope("/gdrive")
                .route("/list_files", web::post().to(gdrive::list_files))
                .route("/list_items", web::post().to(gdrive::list_items))
                .route("/search_files", web::post().to(gdrive::search_files)),
        );
}
