use gdrive_relay::{
    auth::Credential,
    config::OAuthClient,
    drive::{types::{LIST_FIELDS, SEARCH_FIELDS}, DriveApi, DriveError, HttpDriveClient, ListFilesRequest},
};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn credential(token: &str) -> Credential {
    Credential::new(
        token,
        &OAuthClient {
            client_id: "client-id".to_string(),
            client_secret: "client-secret".to_string(),
        },
    )
}

fn client_for(server: &MockServer) -> HttpDriveClient {
    HttpDriveClient::new(format!("{}/drive/v3", server.uri()), None).unwrap()
}

#[tokio::test]
async fn list_files_sends_bearer_page_size_and_field_mask() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/drive/v3/files"))
        .and(header("authorization", "Bearer ya29.token"))
        .and(query_param("pageSize", "20"))
        .and(query_param("fields", LIST_FIELDS))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "nextPageToken": "abc",
            "files": [
                {
                    "id": "1",
                    "name": "Roadmap",
                    "mimeType": "application/vnd.google-apps.document",
                    "webViewLink": "https://docs.google.com/document/d/1/edit"
                },
                {
                    "id": "2",
                    "name": "Photos",
                    "mimeType": "application/vnd.google-apps.folder",
                    "webViewLink": "https://drive.google.com/drive/folders/2"
                }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server)
        .list_files(&credential("ya29.token"), &ListFilesRequest::listing())
        .await
        .unwrap();

    assert_eq!(response.files.len(), 2);
    assert_eq!(response.files[0].name, "Roadmap");
    assert_eq!(response.next_page_token.as_deref(), Some("abc"));
}

#[tokio::test]
async fn search_sends_query_and_all_drive_flags() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/drive/v3/files"))
        .and(query_param("q", "fullText contains 'budget'"))
        .and(query_param("supportsAllDrives", "true"))
        .and(query_param("includeItemsFromAllDrives", "true"))
        .and(query_param("pageSize", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"files": []})))
        .expect(1)
        .mount(&server)
        .await;

    let request = ListFilesRequest::search("fullText contains 'budget'".to_string(), 10);
    let response = client_for(&server)
        .list_files(&credential("ya29.token"), &request)
        .await
        .unwrap();

    assert!(response.files.is_empty());
}

#[tokio::test]
async fn expired_token_maps_to_status_error_with_google_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/drive/v3/files"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": {
                "code": 401,
                "message": "Request had invalid authentication credentials.",
                "status": "UNAUTHENTICATED"
            }
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .list_files(&credential("ya29.expired"), &ListFilesRequest::listing())
        .await
        .unwrap_err();

    match &err {
        DriveError::Status { status, message } => {
            assert_eq!(*status, 401);
            assert_eq!(message, "Request had invalid authentication credentials.");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn undecodable_success_body_is_a_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/drive/v3/files"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>captive portal</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .list_files(&credential("ya29.token"), &ListFilesRequest::listing())
        .await
        .unwrap_err();

    assert!(matches!(err, DriveError::Decode(_)));
}

#[tokio::test]
async fn configured_timeout_surfaces_as_transport_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/drive/v3/files"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"files": []}))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let client = HttpDriveClient::new(
        format!("{}/drive/v3", server.uri()),
        Some(Duration::from_millis(100)),
    )
    .unwrap();

    let err = client
        .list_files(&credential("ya29.token"), &ListFilesRequest::listing())
        .await
        .unwrap_err();

    assert!(matches!(err, DriveError::Transport(_)));
}

#[tokio::test]
async fn trailing_slash_in_api_base_is_ignored() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/drive/v3/files"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"files": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpDriveClient::new(format!("{}/drive/v3/", server.uri()), None).unwrap();
    assert!(!client.api_base().ends_with('/'));

    client
        .list_files(&credential("ya29.token"), &ListFilesRequest::listing())
        .await
        .unwrap();
}

#[tokio::test]
async fn folder_listing_sends_parent_query_and_search_mask() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/drive/v3/files"))
        .and(query_param("q", "'1FolderAbc' in parents and trashed=false"))
        .and(query_param("fields", SEARCH_FIELDS))
        .and(query_param("supportsAllDrives", "true"))
        .and(query_param("pageSize", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "files": [{
                "id": "child",
                "name": "notes.txt",
                "mimeType": "text/plain",
                "size": "42",
                "modifiedTime": "2024-05-01T10:00:00.000Z"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server)
        .list_files(
            &credential("ya29.token"),
            &ListFilesRequest::folder("1FolderAbc", 100),
        )
        .await
        .unwrap();

    assert_eq!(response.files.len(), 1);
    assert_eq!(response.files[0].size.as_deref(), Some("42"));
}
