//! Integration tests for metadata reads through the store adapter

use gdrive_core::domain::{UnitId, UnitKind};
use gdrive_core::ports::{IRemoteStore, StoreError};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use gdrive_api::client::DriveClient;
use gdrive_api::store::DriveStore;

use crate::common;

#[tokio::test]
async fn test_metadata_returns_file_unit() {
    let (server, client) = common::setup_drive_mock().await;
    common::mount_file_metadata(&server, "file-001", "report.pdf", "application/pdf", "23").await;

    let store = DriveStore::new(client);
    let id = UnitId::new("file-001".to_string()).unwrap();
    let unit = store.metadata(&id).await.expect("metadata failed");

    assert_eq!(unit.id.as_str(), "file-001");
    assert_eq!(unit.name, "report.pdf");
    assert_eq!(unit.kind, UnitKind::File);
    assert_eq!(unit.version.as_deref(), Some("23"));
}

#[tokio::test]
async fn test_metadata_returns_folder_unit() {
    let (server, client) = common::setup_drive_mock().await;
    common::mount_file_metadata(
        &server,
        "folder-001",
        "photos",
        "application/vnd.google-apps.folder",
        "4",
    )
    .await;

    let store = DriveStore::new(client);
    let id = UnitId::new("folder-001".to_string()).unwrap();
    let unit = store.metadata(&id).await.expect("metadata failed");

    assert_eq!(unit.kind, UnitKind::Folder);
    assert!(unit.is_folder());
}

#[tokio::test]
async fn test_metadata_404_maps_to_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/drive/v3/files/missing-001"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "error": {
                "code": 404,
                "message": "File not found: missing-001.",
                "errors": [{"reason": "notFound"}]
            }
        })))
        .mount(&server)
        .await;

    let client = DriveClient::with_base_url(common::TEST_TOKEN, server.uri());
    let store = DriveStore::new(client);
    let id = UnitId::new("missing-001".to_string()).unwrap();

    let err = store.metadata(&id).await.unwrap_err();
    match err {
        StoreError::NotFound(not_found) => assert_eq!(not_found, id),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_metadata_server_error_is_opaque() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/drive/v3/files/file-001"))
        .respond_with(ResponseTemplate::new(503).set_body_string("backend unavailable"))
        .mount(&server)
        .await;

    let client = DriveClient::with_base_url(common::TEST_TOKEN, server.uri());
    let store = DriveStore::new(client);
    let id = UnitId::new("file-001".to_string()).unwrap();

    let err = store.metadata(&id).await.unwrap_err();
    assert!(matches!(err, StoreError::Other(_)));
    assert!(err.to_string().contains("backend unavailable"));
}

#[tokio::test]
async fn test_metadata_rejects_wrong_token() {
    // The mounted mock requires the standard test token; a client with a
    // different token falls through to the server's 404 catch-all.
    let (server, _client) = common::setup_drive_mock().await;
    common::mount_file_metadata(&server, "file-001", "report.pdf", "application/pdf", "1").await;

    let client = DriveClient::with_base_url("wrong-token", server.uri());
    let store = DriveStore::new(client);
    let id = UnitId::new("file-001".to_string()).unwrap();

    assert!(store.metadata(&id).await.is_err());
}
