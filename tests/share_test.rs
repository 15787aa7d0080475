//! Integration tests for the share lifecycle over the HTTP surface.

mod helpers;

use http::StatusCode;
use uuid::Uuid;

use helpers::TestApp;

#[tokio::test]
async fn enable_returns_hash_and_allowed() {
    let app = TestApp::new();
    let user = Uuid::new_v4();
    let folder = app.create_folder(user, "reading list").await;

    let response = app.toggle_folder_share(user, folder, true).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["data"]["hash"].is_string());
    assert_eq!(response.body["data"]["allowed"], true);
}

#[tokio::test]
async fn repeat_enable_keeps_the_same_hash() {
    let app = TestApp::new();
    let user = Uuid::new_v4();
    let folder = app.create_folder(user, "reading list").await;

    let first = app.enable_folder_share(user, folder).await;
    let second = app.enable_folder_share(user, folder).await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn reenable_after_disable_rotates_the_hash() {
    let app = TestApp::new();
    let user = Uuid::new_v4();
    let folder = app.create_folder(user, "reading list").await;

    let first = app.enable_folder_share(user, folder).await;
    let disable = app.toggle_folder_share(user, folder, false).await;
    assert_eq!(disable.status, StatusCode::OK);
    let second = app.enable_folder_share(user, folder).await;

    assert_ne!(first, second);

    // The revoked hash stays dead even though sharing is enabled again.
    let old = app
        .request("GET", &format!("/share/folder/{first}"), None, None)
        .await;
    assert_eq!(old.status, StatusCode::NOT_FOUND);
    let new = app
        .request("GET", &format!("/share/folder/{second}"), None, None)
        .await;
    assert_eq!(new.status, StatusCode::OK);
}

#[tokio::test]
async fn disable_is_idempotent() {
    let app = TestApp::new();
    let user = Uuid::new_v4();
    let folder = app.create_folder(user, "reading list").await;
    app.enable_folder_share(user, folder).await;

    for _ in 0..2 {
        let response = app.toggle_folder_share(user, folder, false).await;
        assert_eq!(response.status, StatusCode::OK);
        assert!(response.body["data"]["hash"].is_null());
        assert_eq!(response.body["data"]["allowed"], false);
    }

    // Disabling a never-shared folder is also fine.
    let fresh = app.create_folder(user, "untouched").await;
    let response = app.toggle_folder_share(user, fresh, false).await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn status_endpoint_reflects_toggles() {
    let app = TestApp::new();
    let user = Uuid::new_v4();
    let folder = app.create_folder(user, "reading list").await;
    let path = format!("/api/v1/folder/share?folderId={folder}");

    let before = app.request("GET", &path, None, Some(user)).await;
    assert_eq!(before.status, StatusCode::OK);
    assert_eq!(before.body["data"]["allowed"], false);
    assert!(before.body["data"]["hash"].is_null());

    let hash = app.enable_folder_share(user, folder).await;
    let after = app.request("GET", &path, None, Some(user)).await;
    assert_eq!(after.body["data"]["allowed"], true);
    assert_eq!(after.body["data"]["hash"], hash.as_str());
}

#[tokio::test]
async fn shared_folder_resolves_with_its_content() {
    let app = TestApp::new();
    let user = Uuid::new_v4();
    let folder = app.create_folder(user, "reading list").await;

    let created = app
        .request(
            "POST",
            "/api/v1/content",
            Some(serde_json::json!({
                "folderId": folder,
                "title": "a post",
                "link": "https://example.com/post",
                "tags": ["rust"],
                "type": "website",
            })),
            Some(user),
        )
        .await;
    assert_eq!(created.status, StatusCode::OK, "{:?}", created.body);

    let hash = app.enable_folder_share(user, folder).await;
    let view = app
        .request("GET", &format!("/share/folder/{hash}"), None, None)
        .await;

    assert_eq!(view.status, StatusCode::OK);
    assert_eq!(view.body["data"]["name"], "reading list");
    assert_eq!(view.body["data"]["content"][0]["title"], "a post");
    assert_eq!(view.body["data"]["content"][0]["type"], "website");
}

#[tokio::test]
async fn revoked_and_unknown_hashes_are_indistinguishable() {
    let app = TestApp::new();
    let user = Uuid::new_v4();
    let folder = app.create_folder(user, "reading list").await;
    let hash = app.enable_folder_share(user, folder).await;
    app.toggle_folder_share(user, folder, false).await;

    let revoked = app
        .request("GET", &format!("/share/folder/{hash}"), None, None)
        .await;
    let unknown = app
        .request("GET", "/share/folder/definitely-not-a-token", None, None)
        .await;

    assert_eq!(revoked.status, StatusCode::NOT_FOUND);
    assert_eq!(unknown.status, StatusCode::NOT_FOUND);
    assert_eq!(revoked.body, unknown.body);
}

#[tokio::test]
async fn deleting_a_folder_kills_its_share_link() {
    let app = TestApp::new();
    let user = Uuid::new_v4();
    let folder = app.create_folder(user, "reading list").await;
    let hash = app.enable_folder_share(user, folder).await;

    let deleted = app
        .request(
            "DELETE",
            &format!("/api/v1/folder/{folder}"),
            None,
            Some(user),
        )
        .await;
    assert_eq!(deleted.status, StatusCode::OK);

    let view = app
        .request("GET", &format!("/share/folder/{hash}"), None, None)
        .await;
    assert_eq!(view.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn non_owner_cannot_toggle_someone_elses_folder() {
    let app = TestApp::new();
    let owner = Uuid::new_v4();
    let stranger = Uuid::new_v4();
    let folder = app.create_folder(owner, "reading list").await;

    let response = app.toggle_folder_share(stranger, folder, true).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let status = app
        .request(
            "GET",
            &format!("/api/v1/folder/share?folderId={folder}"),
            None,
            Some(stranger),
        )
        .await;
    assert_eq!(status.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn share_endpoints_require_identity() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/v1/folder/share",
            Some(serde_json::json!({ "id": Uuid::new_v4(), "share": true })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn toggling_an_unknown_folder_is_not_found() {
    let app = TestApp::new();
    let user = Uuid::new_v4();

    let response = app.toggle_folder_share(user, Uuid::new_v4(), true).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn collection_share_lifecycle() {
    let app = TestApp::new();
    let user = Uuid::new_v4();
    let folder = app.create_folder(user, "reading list").await;
    app.create_folder(user, "videos").await;

    let enabled = app
        .request(
            "POST",
            "/api/v1/collection/share",
            Some(serde_json::json!({ "share": true })),
            Some(user),
        )
        .await;
    assert_eq!(enabled.status, StatusCode::OK);
    let hash = enabled.body["data"]["hash"].as_str().unwrap().to_string();

    let view = app
        .request("GET", &format!("/share/collection/{hash}"), None, None)
        .await;
    assert_eq!(view.status, StatusCode::OK);
    assert_eq!(view.body["data"]["folders"].as_array().unwrap().len(), 2);

    // A collection hash does not resolve on the folder path.
    let wrong_path = app
        .request("GET", &format!("/share/folder/{hash}"), None, None)
        .await;
    assert_eq!(wrong_path.status, StatusCode::NOT_FOUND);

    // Folder shares are independent of the collection share.
    let folder_hash = app.enable_folder_share(user, folder).await;
    assert_ne!(folder_hash, hash);

    let disabled = app
        .request(
            "POST",
            "/api/v1/collection/share",
            Some(serde_json::json!({ "share": false })),
            Some(user),
        )
        .await;
    assert_eq!(disabled.status, StatusCode::OK);
    let dead = app
        .request("GET", &format!("/share/collection/{hash}"), None, None)
        .await;
    assert_eq!(dead.status, StatusCode::NOT_FOUND);
}
