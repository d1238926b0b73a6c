//! Integration tests for child listing and folder creation

use gdrive_core::domain::{UnitId, UnitKind};
use gdrive_core::ports::IRemoteStore;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use gdrive_api::store::DriveStore;

use crate::common;

#[tokio::test]
async fn test_list_children_single_page() {
    let (server, client) = common::setup_drive_mock().await;
    common::mount_children_page(
        &server,
        "folder-001",
        None,
        serde_json::json!([
            {"id": "f1", "name": "a.txt", "mimeType": "text/plain", "version": "1"},
            {"id": "d1", "name": "sub", "mimeType": "application/vnd.google-apps.folder", "version": "2"}
        ]),
        None,
    )
    .await;

    let store = DriveStore::new(client);
    let container = UnitId::new("folder-001".to_string()).unwrap();
    let page = store
        .list_children(&container, None)
        .await
        .expect("listing failed");

    assert_eq!(page.units.len(), 2);
    assert_eq!(page.units[0].name, "a.txt");
    assert_eq!(page.units[0].kind, UnitKind::File);
    assert_eq!(page.units[1].name, "sub");
    assert_eq!(page.units[1].kind, UnitKind::Folder);
    assert!(page.next_token.is_none());
}

#[tokio::test]
async fn test_list_children_carries_page_tokens() {
    let (server, client) = common::setup_drive_mock().await;
    common::mount_children_page(
        &server,
        "folder-001",
        None,
        serde_json::json!([
            {"id": "f1", "name": "a.txt", "mimeType": "text/plain", "version": "1"}
        ]),
        Some("page-2"),
    )
    .await;
    common::mount_children_page(
        &server,
        "folder-001",
        Some("page-2"),
        serde_json::json!([
            {"id": "f2", "name": "b.txt", "mimeType": "text/plain", "version": "1"}
        ]),
        None,
    )
    .await;

    let store = DriveStore::new(client);
    let container = UnitId::new("folder-001".to_string()).unwrap();

    let first = store
        .list_children(&container, None)
        .await
        .expect("first page failed");
    assert_eq!(first.units.len(), 1);
    assert_eq!(first.units[0].name, "a.txt");
    assert_eq!(first.next_token.as_deref(), Some("page-2"));

    let second = store
        .list_children(&container, first.next_token.as_deref())
        .await
        .expect("second page failed");
    assert_eq!(second.units.len(), 1);
    assert_eq!(second.units[0].name, "b.txt");
    assert!(second.next_token.is_none());
}

#[tokio::test]
async fn test_list_children_empty_container() {
    let (server, client) = common::setup_drive_mock().await;
    common::mount_children_page(&server, "folder-001", None, serde_json::json!([]), None).await;

    let store = DriveStore::new(client);
    let container = UnitId::new("folder-001".to_string()).unwrap();
    let page = store
        .list_children(&container, None)
        .await
        .expect("listing failed");

    assert!(page.units.is_empty());
    assert!(page.next_token.is_none());
}

#[tokio::test]
async fn test_create_folder_posts_metadata() {
    let (server, client) = common::setup_drive_mock().await;

    Mock::given(method("POST"))
        .and(path("/drive/v3/files"))
        .and(query_param("fields", "id"))
        .and(body_json(serde_json::json!({
            "name": "sub",
            "mimeType": "application/vnd.google-apps.folder",
            "parents": ["folder-001"]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "new-folder-001"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let store = DriveStore::new(client);
    let parent = UnitId::new("folder-001".to_string()).unwrap();
    let created = store
        .create_folder("sub", &parent)
        .await
        .expect("folder creation failed");

    assert_eq!(created.as_str(), "new-folder-001");
}

#[tokio::test]
async fn test_create_folder_error_status() {
    let (server, client) = common::setup_drive_mock().await;

    Mock::given(method("POST"))
        .and(path("/drive/v3/files"))
        .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
            "error": {"code": 403, "message": "The user does not have sufficient permissions."}
        })))
        .mount(&server)
        .await;

    let store = DriveStore::new(client);
    let parent = UnitId::new("folder-001".to_string()).unwrap();
    let err = store.create_folder("sub", &parent).await.unwrap_err();

    assert!(err.to_string().contains("sufficient permissions"));
}
