//! Drive endpoints.
//!
//! Both handlers take a [`Credential`] extractor, so header and configuration
//! failures are answered before the Drive client is touched.

use actix_web::web::{self, Json};
use serde::Deserialize;
use tracing::{error, info};

use super::AppState;
use crate::{
    auth::Credential,
    drive::{
        build_drive_query,
        types::{
            DEFAULT_FOLDER_PAGE_SIZE, DEFAULT_SEARCH_PAGE_SIZE, MAX_FOLDER_PAGE_SIZE,
            MAX_SEARCH_PAGE_SIZE, ROOT_FOLDER_ID,
        },
        FileListing, FolderListing, ListFilesRequest, SearchListing, SearchResult,
    },
    errors::{RelayError, RelayResult},
};

#[derive(Debug, Deserialize)]
pub struct SearchFilesRequest {
    pub query: String,
    pub page_size: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct ListItemsRequest {
    pub folder_id: Option<String>,
    pub page_size: Option<u32>,
}

/// List the caller's most recent Drive files.
pub async fn list_files(
    state: web::Data<AppState>,
    credential: Credential,
) -> RelayResult<Json<FileListing>> {
    let response = state
        .drive
        .list_files(&credential, &ListFilesRequest::listing())
        .await
        .map_err(|e| {
            error!("❌ Drive list_files failed: {}", e);
            RelayError::from(e)
        })?;

    let listing = FileListing::from(response);
    info!(files = listing.files.len(), "📁 Listed Drive files");
    Ok(Json(listing))
}

/// Search Drive with either free text or a raw Drive query expression.
pub async fn search_files(
    state: web::Data<AppState>,
    credential: Credential,
    Json(req): Json<SearchFilesRequest>,
) -> RelayResult<Json<SearchListing>> {
    if req.query.trim().is_empty() {
        return Err(RelayError::InvalidArguments(
            "Query cannot be empty".to_string(),
        ));
    }

    let page_size = req
        .page_size
        .unwrap_or(DEFAULT_SEARCH_PAGE_SIZE)
        .clamp(1, MAX_SEARCH_PAGE_SIZE);
    let drive_query = build_drive_query(&req.query);

    info!(page_size, query = %drive_query, "🔍 Searching Drive");

    let response = state
        .drive
        .list_files(&credential, &ListFilesRequest::search(drive_query.clone(), page_size))
        .await
        .map_err(|e| {
            error!("❌ Drive search_files failed: {}", e);
            RelayError::from(e)
        })?;

    let files: Vec<SearchResult> = response.files.into_iter().map(SearchResult::from).collect();
    info!(files = files.len(), "Drive search completed");

    Ok(Json(SearchListing {
        query: drive_query,
        files,
    }))
}

/// List the untrashed children of a folder, `root` by default.
pub async fn list_items(
    state: web::Data<AppState>,
    credential: Credential,
    Json(req): Json<ListItemsRequest>,
) -> RelayResult<Json<FolderListing>> {
    let folder_id = match req.folder_id {
        Some(id) if id.trim().is_empty() => {
            return Err(RelayError::InvalidArguments(
                "folder_id cannot be empty".to_string(),
            ))
        }
        Some(id) => id,
        None => ROOT_FOLDER_ID.to_string(),
    };
    let page_size = req
        .page_size
        .unwrap_or(DEFAULT_FOLDER_PAGE_SIZE)
        .clamp(1, MAX_FOLDER_PAGE_SIZE);

    let response = state
        .drive
        .list_files(&credential, &ListFilesRequest::folder(&folder_id, page_size))
        .await
        .map_err(|e| {
            error!(folder_id = %folder_id, "❌ Drive list_items failed: {}", e);
            RelayError::from(e)
        })?;

    let files: Vec<SearchResult> = response.files.into_iter().map(SearchResult::from).collect();
    info!(folder_id = %folder_id, files = files.len(), "📂 Listed folder items");

    Ok(Json(FolderListing { folder_id, files }))
}
