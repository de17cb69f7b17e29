// Google Drive Relay - forwards caller bearer tokens to the Drive v3 API
// and returns trimmed file listings

pub mod api;
pub mod auth;
pub mod config;
pub mod drive;
pub mod errors;
pub mod telemetry;

pub use api::AppState;
pub use auth::Credential;
pub use config::RelayConfig;
pub use drive::{DriveApi, HttpDriveClient};
pub use errors::{RelayError, RelayResult};
