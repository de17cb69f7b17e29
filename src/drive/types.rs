//! Drive v3 payloads and the trimmed shapes the relay returns.

use serde::{Deserialize, Serialize};

/// Field mask for `files.list` in the plain listing.
pub const LIST_FIELDS: &str = "nextPageToken, files(id, name, mimeType, webViewLink)";
/// Field mask for `files.list` when searching.
pub const SEARCH_FIELDS: &str =
    "nextPageToken, files(id, name, mimeType, webViewLink, iconLink, modifiedTime, size)";

/// Page size of the plain listing.
pub const LIST_PAGE_SIZE: u32 = 20;
pub const DEFAULT_SEARCH_PAGE_SIZE: u32 = 10;
pub const MAX_SEARCH_PAGE_SIZE: u32 = 100;
pub const DEFAULT_FOLDER_PAGE_SIZE: u32 = 100;
pub const MAX_FOLDER_PAGE_SIZE: u32 = 1000;
pub const ROOT_FOLDER_ID: &str = "root";

/// Raw file resource as returned by Drive for either field mask.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriveFile {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub mime_type: String,
    #[serde(default)]
    pub web_view_link: Option<String>,
    #[serde(default)]
    pub icon_link: Option<String>,
    #[serde(default)]
    pub modified_time: Option<String>,
    /// Byte count; Drive sends it as a decimal string and omits it for folders.
    #[serde(default)]
    pub size: Option<String>,
}

/// Response body of `files.list`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileListResponse {
    #[serde(default)]
    pub files: Vec<DriveFile>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

/// The four fields exposed by `/gdrive/list_files`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileSummary {
    pub id: String,
    pub name: String,
    pub mime_type: String,
    pub web_view_link: Option<String>,
}

impl From<DriveFile> for FileSummary {
    fn from(file: DriveFile) -> Self {
        Self {
            id: file.id,
            name: file.name,
            mime_type: file.mime_type,
            web_view_link: file.web_view_link,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileListing {
    pub files: Vec<FileSummary>,
}

impl From<FileListResponse> for FileListing {
    fn from(response: FileListResponse) -> Self {
        Self {
            files: response.files.into_iter().map(FileSummary::from).collect(),
        }
    }
}

/// Search hit with the extra metadata the search mask asks for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub id: String,
    pub name: String,
    pub mime_type: String,
    pub web_view_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

impl From<DriveFile> for SearchResult {
    fn from(file: DriveFile) -> Self {
        Self {
            id: file.id,
            name: file.name,
            mime_type: file.mime_type,
            web_view_link: file.web_view_link,
            icon_link: file.icon_link,
            modified_time: file.modified_time,
            size: file.size,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchListing {
    pub query: String,
    pub files: Vec<SearchResult>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolderListing {
    pub folder_id: String,
    pub files: Vec<SearchResult>,
}
