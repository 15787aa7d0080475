//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use linkstash_core::config::AppConfig;
use linkstash_database::StoreManager;
use linkstash_service::content::ContentService;
use linkstash_service::folder::FolderService;
use linkstash_service::share::{ShareAccessService, SharePolicyService, TokenGenerator};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Store backend (PostgreSQL or in-memory)
    pub stores: StoreManager,
    /// Folder service
    pub folder_service: Arc<FolderService>,
    /// Bookmark service
    pub content_service: Arc<ContentService>,
    /// Share policy service (owner-facing toggles)
    pub share_policy: Arc<SharePolicyService>,
    /// Share access service (public resolution)
    pub share_access: Arc<ShareAccessService>,
}

impl AppState {
    /// Wires all services over the given store backend.
    pub fn new(config: AppConfig, stores: StoreManager) -> Self {
        let tokens = TokenGenerator::new(&config.share);
        let share_policy = Arc::new(SharePolicyService::new(
            stores.folders(),
            stores.shares(),
            tokens,
        ));
        let share_access = Arc::new(ShareAccessService::new(
            stores.folders(),
            stores.contents(),
            stores.shares(),
        ));
        let folder_service = Arc::new(FolderService::new(
            stores.folders(),
            stores.contents(),
            Arc::clone(&share_policy),
        ));
        let content_service = Arc::new(ContentService::new(stores.folders(), stores.contents()));

        Self {
            config: Arc::new(config),
            stores,
            folder_service,
            content_service,
            share_policy,
            share_access,
        }
    }
}
