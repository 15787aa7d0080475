//! Share policy service.
//!
//! Gatekeeper for every owner-facing share operation: proves the caller
//! controls the target resource, then delegates the state transition to
//! the store. Token rotation rules live in the store's `upsert_enable`;
//! this layer only ever supplies a candidate fresh token.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use linkstash_core::error::{AppError, ErrorKind};
use linkstash_core::result::AppResult;
use linkstash_core::types::FolderId;
use linkstash_database::store::{FolderStore, ShareStore};
use linkstash_entity::share::ResourceKind;

use super::token::TokenGenerator;
use crate::context::RequestContext;

/// Attempts to mint a unique token before giving up. Collisions on
/// 128-bit tokens are practically impossible, so one retry is plenty.
const MAX_TOKEN_ATTEMPTS: usize = 3;

/// A shareable resource as named by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareTarget {
    /// A single bookmark folder.
    Folder(FolderId),
    /// The caller's entire collection.
    Collection,
}

impl ShareTarget {
    /// The resource kind this target maps to.
    pub fn kind(&self) -> ResourceKind {
        match self {
            Self::Folder(_) => ResourceKind::Folder,
            Self::Collection => ResourceKind::Collection,
        }
    }
}

/// Current share state of a resource, as reported to its owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareStatus {
    /// The active token, present only while sharing is enabled.
    pub hash: Option<String>,
    /// Whether sharing is currently enabled.
    pub allowed: bool,
}

/// Manages share enabling, disabling, and status reads.
#[derive(Debug, Clone)]
pub struct SharePolicyService {
    /// Folder store for ownership checks.
    folders: Arc<dyn FolderStore>,
    /// Share record store.
    shares: Arc<dyn ShareStore>,
    /// Token generator for fresh share links.
    tokens: TokenGenerator,
}

impl SharePolicyService {
    /// Creates a new share policy service.
    pub fn new(
        folders: Arc<dyn FolderStore>,
        shares: Arc<dyn ShareStore>,
        tokens: TokenGenerator,
    ) -> Self {
        Self {
            folders,
            shares,
            tokens,
        }
    }

    /// Reads the current share status of a resource.
    pub async fn share_status(
        &self,
        ctx: &RequestContext,
        target: ShareTarget,
    ) -> AppResult<ShareStatus> {
        let (kind, resource_id) = self.authorize(ctx, target).await?;
        let record = self
            .shares
            .get_by_resource(kind, resource_id, ctx.user_id)
            .await?;

        Ok(match record {
            Some(record) => ShareStatus {
                allowed: record.enabled,
                hash: record.token,
            },
            None => ShareStatus {
                hash: None,
                allowed: false,
            },
        })
    }

    /// Enables sharing for a resource.
    ///
    /// Idempotent: re-enabling an already-shared resource returns its
    /// existing token unchanged, while enabling after a disable mints a
    /// fresh one so revoked links stay dead.
    pub async fn request_enable(
        &self,
        ctx: &RequestContext,
        target: ShareTarget,
    ) -> AppResult<ShareStatus> {
        let (kind, resource_id) = self.authorize(ctx, target).await?;

        let mut last_err = None;
        for _ in 0..MAX_TOKEN_ATTEMPTS {
            let fresh_token = self.tokens.generate();
            match self
                .shares
                .upsert_enable(kind, resource_id, ctx.user_id, &fresh_token)
                .await
            {
                Ok(record) => {
                    info!(
                        resource_kind = %kind_label(kind),
                        resource_id = %resource_id,
                        "Sharing enabled"
                    );
                    return Ok(ShareStatus {
                        hash: record.token,
                        allowed: true,
                    });
                }
                Err(e) if e.kind == ErrorKind::Conflict => {
                    last_err = Some(e);
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_err.unwrap_or_else(|| {
            AppError::internal("Could not allocate a unique share token")
        }))
    }

    /// Disables sharing for a resource. Idempotent; the token is cleared
    /// and never handed out again.
    pub async fn request_disable(
        &self,
        ctx: &RequestContext,
        target: ShareTarget,
    ) -> AppResult<ShareStatus> {
        let (kind, resource_id) = self.authorize(ctx, target).await?;
        self.shares.disable(kind, resource_id, ctx.user_id).await?;

        info!(
            resource_kind = %kind_label(kind),
            resource_id = %resource_id,
            "Sharing disabled"
        );
        Ok(ShareStatus {
            hash: None,
            allowed: false,
        })
    }

    /// Removes every share record for a deleted resource. Called from
    /// the owning service's delete path, never directly from a handler.
    pub async fn handle_resource_deleted(
        &self,
        kind: ResourceKind,
        resource_id: Uuid,
    ) -> AppResult<()> {
        self.shares.cascade_delete_resource(kind, resource_id).await
    }

    /// Resolves a target to its resource identity, verifying the caller
    /// controls it.
    ///
    /// A collection is identified by its owner's user ID and is always
    /// controlled by that owner. A folder must exist and belong to the
    /// caller; the rejection message never reveals which check failed
    /// beyond existence.
    async fn authorize(
        &self,
        ctx: &RequestContext,
        target: ShareTarget,
    ) -> AppResult<(ResourceKind, Uuid)> {
        match target {
            ShareTarget::Folder(folder_id) => {
                let folder = self
                    .folders
                    .find_by_id(folder_id)
                    .await?
                    .ok_or_else(|| AppError::not_found("Folder not found"))?;
                if folder.owner_id != ctx.user_id {
                    return Err(AppError::not_owner());
                }
                Ok((ResourceKind::Folder, folder_id.into_uuid()))
            }
            ShareTarget::Collection => {
                Ok((ResourceKind::Collection, ctx.user_id.into_uuid()))
            }
        }
    }
}

fn kind_label(kind: ResourceKind) -> &'static str {
    match kind {
        ResourceKind::Folder => "folder",
        ResourceKind::Collection => "collection",
    }
}
