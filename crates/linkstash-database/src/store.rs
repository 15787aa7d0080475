//! Store traits the service layer programs against.
//!
//! Both the PostgreSQL repositories and the in-memory backend implement
//! these. The traits are mechanism-only: ownership checks live in the
//! policy layer, not here.

use async_trait::async_trait;
use uuid::Uuid;

use linkstash_core::result::AppResult;
use linkstash_core::types::{ContentId, FolderId, UserId};
use linkstash_entity::content::{Content, CreateContent};
use linkstash_entity::folder::{CreateFolder, Folder};
use linkstash_entity::share::{ResourceKind, ShareRecord};

/// Folder CRUD operations.
#[async_trait]
pub trait FolderStore: Send + Sync + std::fmt::Debug + 'static {
    /// Find a folder by ID.
    async fn find_by_id(&self, id: FolderId) -> AppResult<Option<Folder>>;

    /// List all folders owned by a user, newest first.
    async fn find_by_owner(&self, owner_id: UserId) -> AppResult<Vec<Folder>>;

    /// Create a new folder.
    async fn create(&self, data: &CreateFolder) -> AppResult<Folder>;

    /// Rename a folder. Returns the updated folder, or `None` if absent.
    async fn rename(&self, id: FolderId, name: &str) -> AppResult<Option<Folder>>;

    /// Delete a folder. Returns `true` if a folder was removed.
    async fn delete(&self, id: FolderId) -> AppResult<bool>;
}

/// Bookmarked content CRUD operations.
#[async_trait]
pub trait ContentStore: Send + Sync + std::fmt::Debug + 'static {
    /// Find a bookmark by ID.
    async fn find_by_id(&self, id: ContentId) -> AppResult<Option<Content>>;

    /// List a folder's bookmarks, newest first.
    async fn find_by_folder(&self, folder_id: FolderId) -> AppResult<Vec<Content>>;

    /// Create a new bookmark.
    async fn create(&self, data: &CreateContent) -> AppResult<Content>;

    /// Delete a bookmark. Returns `true` if one was removed.
    async fn delete(&self, id: ContentId) -> AppResult<bool>;

    /// Delete all bookmarks in a folder. Returns the number removed.
    async fn delete_by_folder(&self, folder_id: FolderId) -> AppResult<u64>;
}

/// Share record operations.
///
/// `upsert_enable` is the heart of the lifecycle: it must execute as an
/// atomic check-and-set so that concurrent enables converge on a single
/// winning token and a disable can never race past an in-flight enable.
#[async_trait]
pub trait ShareStore: Send + Sync + std::fmt::Debug + 'static {
    /// Current share record for a resource, if any.
    async fn get_by_resource(
        &self,
        kind: ResourceKind,
        resource_id: Uuid,
        owner_id: UserId,
    ) -> AppResult<Option<ShareRecord>>;

    /// Idempotent enable.
    ///
    /// Lazily creates an enabled record carrying `fresh_token`; re-enables
    /// a disabled record with `fresh_token` (old links stay dead); returns
    /// an already-enabled record unchanged, discarding `fresh_token`.
    async fn upsert_enable(
        &self,
        kind: ResourceKind,
        resource_id: Uuid,
        owner_id: UserId,
        fresh_token: &str,
    ) -> AppResult<ShareRecord>;

    /// Idempotent disable. Clears the token; a no-op when the record is
    /// already disabled or was never created.
    async fn disable(
        &self,
        kind: ResourceKind,
        resource_id: Uuid,
        owner_id: UserId,
    ) -> AppResult<()>;

    /// Look up an *enabled* record by token. Unknown, revoked, and
    /// disabled tokens all return `None`.
    async fn get_by_token(&self, token: &str) -> AppResult<Option<ShareRecord>>;

    /// Remove every share record for a deleted resource, across owners.
    async fn cascade_delete_resource(
        &self,
        kind: ResourceKind,
        resource_id: Uuid,
    ) -> AppResult<()>;
}
