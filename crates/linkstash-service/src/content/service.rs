//! Bookmark CRUD service.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use linkstash_core::error::AppError;
use linkstash_core::result::AppResult;
use linkstash_core::types::{ContentId, FolderId};
use linkstash_database::store::{ContentStore, FolderStore};
use linkstash_entity::content::{Content, ContentType, CreateContent};

use crate::context::RequestContext;

/// Request to bookmark a new piece of content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewContent {
    /// Destination folder.
    pub folder_id: FolderId,
    /// Bookmark title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// The URL being bookmarked.
    pub link: String,
    /// User-assigned tags.
    pub tags: Vec<String>,
    /// The kind of source.
    pub content_type: ContentType,
}

/// Manages bookmark creation and deletion.
#[derive(Debug, Clone)]
pub struct ContentService {
    /// Folder store for ownership checks.
    folders: Arc<dyn FolderStore>,
    /// Content store.
    contents: Arc<dyn ContentStore>,
}

impl ContentService {
    /// Creates a new content service.
    pub fn new(folders: Arc<dyn FolderStore>, contents: Arc<dyn ContentStore>) -> Self {
        Self { folders, contents }
    }

    /// Adds a bookmark to one of the caller's folders.
    pub async fn add(&self, ctx: &RequestContext, req: NewContent) -> AppResult<Content> {
        let folder = self
            .folders
            .find_by_id(req.folder_id)
            .await?
            .ok_or_else(|| AppError::not_found("Folder not found"))?;
        if folder.owner_id != ctx.user_id {
            return Err(AppError::not_owner());
        }

        let content = self
            .contents
            .create(&CreateContent {
                folder_id: req.folder_id,
                owner_id: ctx.user_id,
                title: req.title,
                description: req.description,
                link: req.link,
                tags: req.tags,
                content_type: req.content_type,
            })
            .await?;
        info!(content_id = %content.id, folder_id = %content.folder_id, "Bookmark added");
        Ok(content)
    }

    /// Removes one of the caller's bookmarks.
    pub async fn remove(&self, ctx: &RequestContext, id: ContentId) -> AppResult<()> {
        let content = self
            .contents
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Bookmark not found"))?;
        if content.owner_id != ctx.user_id {
            return Err(AppError::not_owner());
        }

        self.contents.delete(id).await?;
        info!(content_id = %id, "Bookmark removed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use linkstash_core::error::ErrorKind;
    use linkstash_core::types::UserId;
    use linkstash_database::StoreManager;
    use linkstash_entity::folder::CreateFolder;

    fn ctx(user_id: UserId) -> RequestContext {
        RequestContext::new(user_id, "127.0.0.1".into(), None)
    }

    async fn folder_for(stores: &StoreManager, owner_id: UserId) -> FolderId {
        stores
            .folders()
            .create(&CreateFolder {
                owner_id,
                name: "links".into(),
            })
            .await
            .unwrap()
            .id
    }

    fn new_content(folder_id: FolderId) -> NewContent {
        NewContent {
            folder_id,
            title: "a post".into(),
            description: None,
            link: "https://example.com".into(),
            tags: vec![],
            content_type: ContentType::Website,
        }
    }

    #[tokio::test]
    async fn add_and_remove() {
        let stores = StoreManager::in_memory();
        let svc = ContentService::new(stores.folders(), stores.contents());
        let owner = UserId::new();
        let folder = folder_for(&stores, owner).await;
        let ctx = ctx(owner);

        let content = svc.add(&ctx, new_content(folder)).await.unwrap();
        assert_eq!(content.owner_id, owner);

        svc.remove(&ctx, content.id).await.unwrap();
        let err = svc.remove(&ctx, content.id).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn cannot_add_to_another_users_folder() {
        let stores = StoreManager::in_memory();
        let svc = ContentService::new(stores.folders(), stores.contents());
        let folder = folder_for(&stores, UserId::new()).await;

        let err = svc
            .add(&ctx(UserId::new()), new_content(folder))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authorization);
    }

    #[tokio::test]
    async fn cannot_remove_another_users_bookmark() {
        let stores = StoreManager::in_memory();
        let svc = ContentService::new(stores.folders(), stores.contents());
        let owner = UserId::new();
        let folder = folder_for(&stores, owner).await;
        let content = svc.add(&ctx(owner), new_content(folder)).await.unwrap();

        let err = svc
            .remove(&ctx(UserId::new()), content.id)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authorization);
    }
}
