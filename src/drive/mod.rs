// Google Drive access - listing, search, and response projection
pub mod client;
pub mod query;
pub mod types;

pub use client::{DriveApi, DriveError, DriveResult, HttpDriveClient, ListFilesRequest};
pub use query::build_drive_query;
pub use types::{FileListing, FileSummary, FolderListing, SearchListing, SearchResult};
