//! Folder CRUD service.
//!
//! Folder deletion is the trigger for the share cascade: a deleted
//! folder's share records (and their tokens) go with it, so stale
//! public links resolve to nothing.

use std::sync::Arc;

use tracing::info;

use linkstash_core::error::AppError;
use linkstash_core::result::AppResult;
use linkstash_core::types::FolderId;
use linkstash_database::store::{ContentStore, FolderStore};
use linkstash_entity::content::Content;
use linkstash_entity::folder::{CreateFolder, Folder};
use linkstash_entity::share::ResourceKind;

use crate::context::RequestContext;
use crate::share::service::SharePolicyService;

/// A folder together with its bookmarks, for the owner's folder page.
#[derive(Debug, Clone)]
pub struct FolderDetail {
    /// The folder itself.
    pub folder: Folder,
    /// Its bookmarks, newest first.
    pub content: Vec<Content>,
}

/// Manages folder creation, listing, renaming, and deletion.
#[derive(Debug, Clone)]
pub struct FolderService {
    /// Folder store.
    folders: Arc<dyn FolderStore>,
    /// Content store, for emptying deleted folders.
    contents: Arc<dyn ContentStore>,
    /// Share policy service, for the delete cascade.
    share_policy: Arc<SharePolicyService>,
}

impl FolderService {
    /// Creates a new folder service.
    pub fn new(
        folders: Arc<dyn FolderStore>,
        contents: Arc<dyn ContentStore>,
        share_policy: Arc<SharePolicyService>,
    ) -> Self {
        Self {
            folders,
            contents,
            share_policy,
        }
    }

    /// Lists the caller's folders, newest first.
    pub async fn list(&self, ctx: &RequestContext) -> AppResult<Vec<Folder>> {
        self.folders.find_by_owner(ctx.user_id).await
    }

    /// Fetches one of the caller's folders along with its bookmarks.
    pub async fn get(&self, ctx: &RequestContext, id: FolderId) -> AppResult<FolderDetail> {
        let folder = self.owned_folder(ctx, id).await?;
        let content = self.contents.find_by_folder(id).await?;
        Ok(FolderDetail { folder, content })
    }

    /// Creates a folder owned by the caller.
    pub async fn create(&self, ctx: &RequestContext, name: &str) -> AppResult<Folder> {
        let folder = self
            .folders
            .create(&CreateFolder {
                owner_id: ctx.user_id,
                name: name.to_string(),
            })
            .await?;
        info!(folder_id = %folder.id, "Folder created");
        Ok(folder)
    }

    /// Renames one of the caller's folders.
    pub async fn rename(
        &self,
        ctx: &RequestContext,
        id: FolderId,
        name: &str,
    ) -> AppResult<Folder> {
        self.owned_folder(ctx, id).await?;
        self.folders
            .rename(id, name)
            .await?
            .ok_or_else(|| AppError::not_found("Folder not found"))
    }

    /// Deletes one of the caller's folders, its bookmarks, and every
    /// share record pointing at it.
    pub async fn delete(&self, ctx: &RequestContext, id: FolderId) -> AppResult<()> {
        self.owned_folder(ctx, id).await?;

        let removed = self.contents.delete_by_folder(id).await?;
        self.share_policy
            .handle_resource_deleted(ResourceKind::Folder, id.into_uuid())
            .await?;
        self.folders.delete(id).await?;

        info!(folder_id = %id, bookmarks_removed = removed, "Folder deleted");
        Ok(())
    }

    async fn owned_folder(&self, ctx: &RequestContext, id: FolderId) -> AppResult<Folder> {
        let folder = self
            .folders
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Folder not found"))?;
        if folder.owner_id != ctx.user_id {
            return Err(AppError::not_owner());
        }
        Ok(folder)
    }
}
