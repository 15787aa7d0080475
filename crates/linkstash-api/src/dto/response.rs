//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::Serialize;

use linkstash_core::types::{ContentId, FolderId};
use linkstash_entity::content::{Content, ContentType};
use linkstash_entity::folder::Folder;
use linkstash_service::folder::FolderDetail;
use linkstash_service::share::ShareStatus;

/// A folder as listed on the dashboard.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderResponse {
    /// Folder ID.
    pub id: FolderId,
    /// Folder name.
    pub name: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last update time.
    pub updated_at: DateTime<Utc>,
}

impl From<Folder> for FolderResponse {
    fn from(folder: Folder) -> Self {
        Self {
            id: folder.id,
            name: folder.name,
            created_at: folder.created_at,
            updated_at: folder.updated_at,
        }
    }
}

/// A bookmark as rendered inside a folder.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentResponse {
    /// Bookmark ID.
    pub id: ContentId,
    /// Containing folder.
    pub folder_id: FolderId,
    /// Bookmark title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// The bookmarked URL.
    pub link: String,
    /// User-assigned tags.
    pub tags: Vec<String>,
    /// The kind of source.
    #[serde(rename = "type")]
    pub content_type: ContentType,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

impl From<Content> for ContentResponse {
    fn from(content: Content) -> Self {
        Self {
            id: content.id,
            folder_id: content.folder_id,
            title: content.title,
            description: content.description,
            link: content.link,
            tags: content.tags,
            content_type: content.content_type,
            created_at: content.created_at,
        }
    }
}

/// A folder together with its bookmarks, for the folder page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderDetailResponse {
    /// Folder ID.
    pub id: FolderId,
    /// Folder name.
    pub name: String,
    /// The folder's bookmarks, newest first.
    pub content: Vec<ContentResponse>,
}

impl From<FolderDetail> for FolderDetailResponse {
    fn from(detail: FolderDetail) -> Self {
        Self {
            id: detail.folder.id,
            name: detail.folder.name,
            content: detail.content.into_iter().map(Into::into).collect(),
        }
    }
}

/// Share state as reported to the resource owner.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareStatusResponse {
    /// The active token, `null` while sharing is disabled.
    pub hash: Option<String>,
    /// Whether sharing is currently enabled.
    pub allowed: bool,
}

impl From<ShareStatus> for ShareStatusResponse {
    fn from(status: ShareStatus) -> Self {
        Self {
            hash: status.hash,
            allowed: status.allowed,
        }
    }
}
