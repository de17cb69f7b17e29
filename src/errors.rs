// Relay Error Types
use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::drive::DriveError;

pub type RelayResult<T> = Result<T, RelayError>;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Configuration(String),

    #[error("{0}")]
    InvalidArguments(String),

    #[error("Error calling Google Drive API: {0}")]
    DriveApi(String),
}

/// Body of every non-2xx response: `{"detail": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl From<DriveError> for RelayError {
    fn from(err: DriveError) -> Self {
        RelayError::DriveApi(err.to_string())
    }
}

impl ResponseError for RelayError {
    fn status_code(&self) -> StatusCode {
        match self {
            RelayError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            RelayError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            RelayError::InvalidArguments(_) => StatusCode::UNPROCESSABLE_ENTITY,
            RelayError::DriveApi(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            detail: self.to_string(),
        })
    }
}
