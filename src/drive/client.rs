//! Google Drive v3 client used by the relay.
//!
//! The relay never refreshes or validates tokens itself; whatever Drive says
//! about the caller's bearer token is surfaced as a [`DriveError`].

use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use super::query::folder_children_query;
use super::types::{FileListResponse, LIST_FIELDS, LIST_PAGE_SIZE, SEARCH_FIELDS};
use crate::auth::Credential;

#[derive(Debug, Error)]
pub enum DriveError {
    #[error("{0}")]
    Transport(String),

    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Failed to decode Drive response: {0}")]
    Decode(String),
}

pub type DriveResult<T> = Result<T, DriveError>;

/// Parameters for a single `files.list` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListFilesRequest {
    pub page_size: u32,
    pub fields: &'static str,
    pub query: Option<String>,
    pub include_all_drives: bool,
}

impl ListFilesRequest {
    /// The fixed listing served by `/gdrive/list_files`.
    pub fn listing() -> Self {
        Self {
            page_size: LIST_PAGE_SIZE,
            fields: LIST_FIELDS,
            query: None,
            include_all_drives: false,
        }
    }

    pub fn search(query: String, page_size: u32) -> Self {
        Self {
            page_size,
            fields: SEARCH_FIELDS,
            query: Some(query),
            include_all_drives: true,
        }
    }

    /// Direct children of a folder, across My Drive and shared drives.
    pub fn folder(folder_id: &str, page_size: u32) -> Self {
        Self {
            page_size,
            fields: SEARCH_FIELDS,
            query: Some(folder_children_query(folder_id)),
            include_all_drives: true,
        }
    }

    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("pageSize", self.page_size.to_string()),
            ("fields", self.fields.to_string()),
        ];
        if let Some(q) = &self.query {
            pairs.push(("q", q.clone()));
        }
        if self.include_all_drives {
            pairs.push(("supportsAllDrives", "true".to_string()));
            pairs.push(("includeItemsFromAllDrives", "true".to_string()));
        }
        pairs
    }
}

/// Seam between the HTTP handlers and Google Drive.
#[async_trait]
pub trait DriveApi: Send + Sync {
    async fn list_files(
        &self,
        credential: &Credential,
        request: &ListFilesRequest,
    ) -> DriveResult<FileListResponse>;
}

#[derive(Debug, Deserialize)]
struct GoogleErrorBody {
    error: GoogleErrorDetail,
}

#[derive(Debug, Deserialize)]
struct GoogleErrorDetail {
    #[serde(default)]
    message: String,
}

/// reqwest-backed [`DriveApi`].
pub struct HttpDriveClient {
    api_base: String,
    client: Client,
}

impl HttpDriveClient {
    pub fn new(api_base: impl Into<String>, timeout: Option<Duration>) -> anyhow::Result<Self> {
        let mut builder = Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            api_base: api_base.into().trim_end_matches('/').to_string(),
            client: builder.build()?,
        })
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    async fn handle_response(response: reqwest::Response) -> DriveResult<FileListResponse> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| DriveError::Transport(e.to_string()))?;

        if status.is_success() {
            return serde_json::from_str(&body).map_err(|e| DriveError::Decode(e.to_string()));
        }

        Err(DriveError::Status {
            status: status.as_u16(),
            message: error_message(status, &body),
        })
    }
}

fn error_message(status: StatusCode, body: &str) -> String {
    match serde_json::from_str::<GoogleErrorBody>(body) {
        Ok(parsed) if !parsed.error.message.is_empty() => parsed.error.message,
        _ if !body.trim().is_empty() => body.trim().to_string(),
        _ => status
            .canonical_reason()
            .unwrap_or("unexpected status")
            .to_string(),
    }
}

#[async_trait]
impl DriveApi for HttpDriveClient {
    async fn list_files(
        &self,
        credential: &Credential,
        request: &ListFilesRequest,
    ) -> DriveResult<FileListResponse> {
        let url = format!("{}/files", self.api_base);
        debug!(page_size = request.page_size, search = request.query.is_some(), "Calling Drive files.list");

        let response = self
            .client
            .get(&url)
            .header(header::AUTHORIZATION, credential.authorization_header())
            .query(&request.query_pairs())
            .send()
            .await
            .map_err(|e| DriveError::Transport(e.to_string()))?;

        Self::handle_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_request_uses_fixed_page_size_and_mask() {
        let pairs = ListFilesRequest::listing().query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("pageSize", "20".to_string()),
                ("fields", LIST_FIELDS.to_string()),
            ]
        );
    }

    #[test]
    fn search_request_spans_all_drives() {
        let pairs = ListFilesRequest::search("name = 'x'".to_string(), 5).query_pairs();
        assert!(pairs.contains(&("q", "name = 'x'".to_string())));
        assert!(pairs.contains(&("supportsAllDrives", "true".to_string())));
        assert!(pairs.contains(&("includeItemsFromAllDrives", "true".to_string())));
        assert!(pairs.contains(&("pageSize", "5".to_string())));
    }

    #[test]
    fn folder_request_lists_untrashed_children() {
        let request = ListFilesRequest::folder("root", 100);
        assert_eq!(request.query.as_deref(), Some("'root' in parents and trashed=false"));
        assert_eq!(request.fields, SEARCH_FIELDS);
        assert!(request.include_all_drives);
        assert!(request.query_pairs().contains(&("pageSize", "100".to_string())));
    }

    #[test]
    fn error_message_prefers_google_error_body() {
        let body = r#"{"error":{"code":401,"message":"Request had invalid authentication credentials.","status":"UNAUTHENTICATED"}}"#;
        assert_eq!(
            error_message(StatusCode::UNAUTHORIZED, body),
            "Request had invalid authentication credentials."
        );
    }

    #[test]
    fn error_message_falls_back_to_raw_body_then_reason() {
        assert_eq!(error_message(StatusCode::BAD_GATEWAY, " upstream down "), "upstream down");
        assert_eq!(error_message(StatusCode::TOO_MANY_REQUESTS, ""), "Too Many Requests");
    }

    #[test]
    fn status_error_display_includes_code() {
        let err = DriveError::Status {
            status: 403,
            message: "User rate limit exceeded.".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 403: User rate limit exceeded.");
    }
}
