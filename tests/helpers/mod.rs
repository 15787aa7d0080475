//! Shared test helpers for integration tests.

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use linkstash_core::config::AppConfig;
use linkstash_database::StoreManager;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
}

impl TestApp {
    /// Create a new test application over in-memory stores
    pub fn new() -> Self {
        let state = linkstash_api::AppState::new(AppConfig::default(), StoreManager::in_memory());
        Self {
            router: linkstash_api::build_app(state),
        }
    }

    /// Make an HTTP request to the test app, optionally as a user
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        user: Option<Uuid>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(user) = user {
            req = req.header("x-user-id", user.to_string());
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }

    /// Create a folder for `user` and return its ID
    pub async fn create_folder(&self, user: Uuid, name: &str) -> Uuid {
        let response = self
            .request(
                "POST",
                "/api/v1/folder",
                Some(serde_json::json!({ "name": name })),
                Some(user),
            )
            .await;
        assert_eq!(
            response.status,
            StatusCode::OK,
            "Folder create failed: {:?}",
            response.body
        );
        response.body["data"]["id"]
            .as_str()
            .expect("No folder id in response")
            .parse()
            .expect("Folder id is not a UUID")
    }

    /// Toggle sharing on a folder and return the response
    pub async fn toggle_folder_share(&self, user: Uuid, folder: Uuid, share: bool) -> TestResponse {
        self.request(
            "POST",
            "/api/v1/folder/share",
            Some(serde_json::json!({ "id": folder, "share": share })),
            Some(user),
        )
        .await
    }

    /// Enable sharing on a folder and return the minted hash
    pub async fn enable_folder_share(&self, user: Uuid, folder: Uuid) -> String {
        let response = self.toggle_folder_share(user, folder, true).await;
        assert_eq!(
            response.status,
            StatusCode::OK,
            "Share enable failed: {:?}",
            response.body
        );
        response.body["data"]["hash"]
            .as_str()
            .expect("No hash in response")
            .to_string()
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}
