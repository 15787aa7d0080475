//! Integration tests for folder and bookmark CRUD.

mod helpers;

use http::StatusCode;
use uuid::Uuid;

use helpers::TestApp;

#[tokio::test]
async fn create_and_list_folders() {
    let app = TestApp::new();
    let user = Uuid::new_v4();

    app.create_folder(user, "articles").await;
    app.create_folder(user, "videos").await;

    let response = app.request("GET", "/api/v1/folder", None, Some(user)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"].as_array().unwrap().len(), 2);

    // Another user sees none of them.
    let other = app
        .request("GET", "/api/v1/folder", None, Some(Uuid::new_v4()))
        .await;
    assert_eq!(other.body["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn empty_folder_name_is_rejected() {
    let app = TestApp::new();
    let user = Uuid::new_v4();

    let response = app
        .request(
            "POST",
            "/api/v1/folder",
            Some(serde_json::json!({ "name": "" })),
            Some(user),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn rename_folder() {
    let app = TestApp::new();
    let user = Uuid::new_v4();
    let folder = app.create_folder(user, "articles").await;

    let response = app
        .request(
            "PATCH",
            &format!("/api/v1/folder/{folder}"),
            Some(serde_json::json!({ "name": "essays" })),
            Some(user),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["name"], "essays");
}

#[tokio::test]
async fn folder_page_lists_its_bookmarks() {
    let app = TestApp::new();
    let user = Uuid::new_v4();
    let folder = app.create_folder(user, "articles").await;

    let created = app
        .request(
            "POST",
            "/api/v1/content",
            Some(serde_json::json!({
                "folderId": folder,
                "title": "a thread",
                "link": "https://twitter.com/someone/status/1",
                "type": "twitter",
            })),
            Some(user),
        )
        .await;
    assert_eq!(created.status, StatusCode::OK, "{:?}", created.body);

    let page = app
        .request("GET", &format!("/api/v1/folder/{folder}"), None, Some(user))
        .await;
    assert_eq!(page.status, StatusCode::OK);
    assert_eq!(page.body["data"]["name"], "articles");
    assert_eq!(page.body["data"]["content"][0]["title"], "a thread");
}

#[tokio::test]
async fn non_url_bookmark_link_is_rejected() {
    let app = TestApp::new();
    let user = Uuid::new_v4();
    let folder = app.create_folder(user, "articles").await;

    let response = app
        .request(
            "POST",
            "/api/v1/content",
            Some(serde_json::json!({
                "folderId": folder,
                "title": "a post",
                "link": "definitely not a url",
                "type": "website",
            })),
            Some(user),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let page = app
        .request("GET", &format!("/api/v1/folder/{folder}"), None, Some(user))
        .await;
    assert_eq!(page.body["data"]["content"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn delete_bookmark() {
    let app = TestApp::new();
    let user = Uuid::new_v4();
    let folder = app.create_folder(user, "articles").await;

    let created = app
        .request(
            "POST",
            "/api/v1/content",
            Some(serde_json::json!({
                "folderId": folder,
                "title": "a post",
                "link": "https://example.com",
                "type": "website",
            })),
            Some(user),
        )
        .await;
    let content_id = created.body["data"]["id"].as_str().unwrap().to_string();

    let deleted = app
        .request(
            "DELETE",
            &format!("/api/v1/content/{content_id}"),
            None,
            Some(user),
        )
        .await;
    assert_eq!(deleted.status, StatusCode::OK);

    let page = app
        .request("GET", &format!("/api/v1/folder/{folder}"), None, Some(user))
        .await;
    assert_eq!(page.body["data"]["content"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn foreign_folder_access_is_forbidden() {
    let app = TestApp::new();
    let owner = Uuid::new_v4();
    let folder = app.create_folder(owner, "articles").await;
    let stranger = Uuid::new_v4();

    let get = app
        .request(
            "GET",
            &format!("/api/v1/folder/{folder}"),
            None,
            Some(stranger),
        )
        .await;
    assert_eq!(get.status, StatusCode::FORBIDDEN);

    let delete = app
        .request(
            "DELETE",
            &format!("/api/v1/folder/{folder}"),
            None,
            Some(stranger),
        )
        .await;
    assert_eq!(delete.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn health_check() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/v1/health", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
}
