//! Public share resolution.
//!
//! Turns a bare token into the read-only view the share page renders.
//! Every failure mode reports the same not-found error: a viewer must
//! not be able to tell a revoked link from one that never existed.

use std::sync::Arc;

use linkstash_core::error::AppError;
use linkstash_core::result::AppResult;
use linkstash_core::types::FolderId;
use linkstash_database::store::{ContentStore, FolderStore, ShareStore};
use linkstash_entity::folder::Folder;
use linkstash_entity::share::{ResourceKind, SharedFolderView, SharedView};

/// The one message resolution failures are allowed to carry.
const LINK_NOT_FOUND: &str = "Share link not found";

/// Resolves public share tokens into viewer-facing projections.
#[derive(Debug, Clone)]
pub struct ShareAccessService {
    /// Folder store.
    folders: Arc<dyn FolderStore>,
    /// Content store.
    contents: Arc<dyn ContentStore>,
    /// Share record store.
    shares: Arc<dyn ShareStore>,
}

impl ShareAccessService {
    /// Creates a new share access service.
    pub fn new(
        folders: Arc<dyn FolderStore>,
        contents: Arc<dyn ContentStore>,
        shares: Arc<dyn ShareStore>,
    ) -> Self {
        Self {
            folders,
            contents,
            shares,
        }
    }

    /// Resolves a token into the shared content, without authentication.
    pub async fn resolve(&self, token: &str) -> AppResult<SharedView> {
        let record = self
            .shares
            .get_by_token(token)
            .await?
            .ok_or_else(|| AppError::not_found(LINK_NOT_FOUND))?;

        match record.resource_kind {
            ResourceKind::Folder => {
                let folder = self
                    .folders
                    .find_by_id(FolderId::from_uuid(record.resource_id))
                    .await?
                    .ok_or_else(|| AppError::not_found(LINK_NOT_FOUND))?;
                Ok(SharedView::Folder(self.folder_view(&folder).await?))
            }
            ResourceKind::Collection => {
                let mut views = Vec::new();
                for folder in self.folders.find_by_owner(record.owner_id).await? {
                    views.push(self.folder_view(&folder).await?);
                }
                Ok(SharedView::Collection { folders: views })
            }
        }
    }

    /// Resolves a token that must point at a single folder. A valid
    /// collection token on this path still reports not-found.
    pub async fn resolve_folder(&self, token: &str) -> AppResult<SharedFolderView> {
        match self.resolve(token).await? {
            SharedView::Folder(view) => Ok(view),
            SharedView::Collection { .. } => Err(AppError::not_found(LINK_NOT_FOUND)),
        }
    }

    /// Resolves a token that must point at a whole collection.
    pub async fn resolve_collection(&self, token: &str) -> AppResult<Vec<SharedFolderView>> {
        match self.resolve(token).await? {
            SharedView::Collection { folders } => Ok(folders),
            SharedView::Folder(_) => Err(AppError::not_found(LINK_NOT_FOUND)),
        }
    }

    async fn folder_view(&self, folder: &Folder) -> AppResult<SharedFolderView> {
        let items = self.contents.find_by_folder(folder.id).await?;
        Ok(SharedFolderView {
            name: folder.name.clone(),
            content: items.into_iter().map(Into::into).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use linkstash_core::types::UserId;
    use linkstash_database::StoreManager;
    use linkstash_entity::content::{ContentType, CreateContent};
    use linkstash_entity::folder::CreateFolder;

    use crate::context::RequestContext;
    use crate::share::service::{SharePolicyService, ShareTarget};
    use crate::share::token::TokenGenerator;

    struct Fixture {
        stores: StoreManager,
        policy: SharePolicyService,
        access: ShareAccessService,
        owner: UserId,
    }

    fn fixture() -> Fixture {
        let stores = StoreManager::in_memory();
        let policy = SharePolicyService::new(
            stores.folders(),
            stores.shares(),
            TokenGenerator::default(),
        );
        let access =
            ShareAccessService::new(stores.folders(), stores.contents(), stores.shares());
        Fixture {
            stores,
            policy,
            access,
            owner: UserId::new(),
        }
    }

    impl Fixture {
        fn ctx(&self) -> RequestContext {
            RequestContext::new(self.owner, "127.0.0.1".into(), None)
        }

        async fn folder_with_bookmark(&self, name: &str, title: &str) -> FolderId {
            let folder = self
                .stores
                .folders()
                .create(&CreateFolder {
                    owner_id: self.owner,
                    name: name.into(),
                })
                .await
                .unwrap();
            self.stores
                .contents()
                .create(&CreateContent {
                    folder_id: folder.id,
                    owner_id: self.owner,
                    title: title.into(),
                    description: None,
                    link: "https://example.com".into(),
                    tags: vec!["rust".into()],
                    content_type: ContentType::Website,
                })
                .await
                .unwrap();
            folder.id
        }
    }

    #[tokio::test]
    async fn resolves_a_shared_folder() {
        let fx = fixture();
        let folder = fx.folder_with_bookmark("reading list", "a post").await;
        let status = fx
            .policy
            .request_enable(&fx.ctx(), ShareTarget::Folder(folder))
            .await
            .unwrap();

        let view = fx.access.resolve(&status.hash.unwrap()).await.unwrap();
        match view {
            SharedView::Folder(folder) => {
                assert_eq!(folder.name, "reading list");
                assert_eq!(folder.content.len(), 1);
                assert_eq!(folder.content[0].title, "a post");
            }
            SharedView::Collection { .. } => panic!("expected a folder view"),
        }
    }

    #[tokio::test]
    async fn resolves_a_shared_collection() {
        let fx = fixture();
        fx.folder_with_bookmark("one", "first").await;
        fx.folder_with_bookmark("two", "second").await;
        let status = fx
            .policy
            .request_enable(&fx.ctx(), ShareTarget::Collection)
            .await
            .unwrap();

        let view = fx.access.resolve(&status.hash.unwrap()).await.unwrap();
        match view {
            SharedView::Collection { folders } => assert_eq!(folders.len(), 2),
            SharedView::Folder(_) => panic!("expected a collection view"),
        }
    }

    #[tokio::test]
    async fn revoked_token_is_indistinguishable_from_unknown() {
        let fx = fixture();
        let folder = fx.folder_with_bookmark("reading list", "a post").await;
        let status = fx
            .policy
            .request_enable(&fx.ctx(), ShareTarget::Folder(folder))
            .await
            .unwrap();
        let token = status.hash.unwrap();
        fx.policy
            .request_disable(&fx.ctx(), ShareTarget::Folder(folder))
            .await
            .unwrap();

        let revoked = fx.access.resolve(&token).await.unwrap_err();
        let unknown = fx.access.resolve("no-such-token").await.unwrap_err();
        assert_eq!(revoked.kind, unknown.kind);
        assert_eq!(revoked.message, unknown.message);
    }

    #[tokio::test]
    async fn kind_mismatch_reports_the_same_not_found() {
        let fx = fixture();
        let folder = fx.folder_with_bookmark("reading list", "a post").await;
        let status = fx
            .policy
            .request_enable(&fx.ctx(), ShareTarget::Folder(folder))
            .await
            .unwrap();
        let token = status.hash.unwrap();

        let err = fx.access.resolve_collection(&token).await.unwrap_err();
        let unknown = fx.access.resolve("no-such-token").await.unwrap_err();
        assert_eq!(err.message, unknown.message);
        assert!(fx.access.resolve_folder(&token).await.is_ok());
    }

    #[tokio::test]
    async fn old_token_stays_dead_after_reenable() {
        let fx = fixture();
        let folder = fx.folder_with_bookmark("reading list", "a post").await;
        let ctx = fx.ctx();

        let first = fx
            .policy
            .request_enable(&ctx, ShareTarget::Folder(folder))
            .await
            .unwrap();
        fx.policy
            .request_disable(&ctx, ShareTarget::Folder(folder))
            .await
            .unwrap();
        let second = fx
            .policy
            .request_enable(&ctx, ShareTarget::Folder(folder))
            .await
            .unwrap();

        assert!(fx.access.resolve(&first.hash.unwrap()).await.is_err());
        assert!(fx.access.resolve(&second.hash.unwrap()).await.is_ok());
    }
}
