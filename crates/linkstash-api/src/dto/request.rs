//! Request DTOs with validation rules.

use serde::Deserialize;
use validator::Validate;

use linkstash_core::types::FolderId;
use linkstash_entity::content::ContentType;

/// POST /api/v1/folder
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateFolderRequest {
    /// Folder name.
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: String,
}

/// PATCH /api/v1/folder/{id}
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RenameFolderRequest {
    /// New folder name.
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: String,
}

/// POST /api/v1/folder/share
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderShareToggleRequest {
    /// The folder being toggled.
    pub id: FolderId,
    /// Desired share state.
    pub share: bool,
}

/// Query string for GET /api/v1/folder/share
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderShareQuery {
    /// The folder to report on.
    pub folder_id: FolderId,
}

/// POST /api/v1/collection/share
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionShareToggleRequest {
    /// Desired share state.
    pub share: bool,
}

/// POST /api/v1/content
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateContentRequest {
    /// Destination folder.
    pub folder_id: FolderId,
    /// Bookmark title.
    #[validate(length(min = 1, max = 200, message = "title must be 1-200 characters"))]
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// The URL being bookmarked.
    #[validate(
        url(message = "link must be a valid URL"),
        length(max = 2048, message = "link must be at most 2048 characters")
    )]
    pub link: String,
    /// User-assigned tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// The kind of source.
    #[serde(rename = "type")]
    pub content_type: ContentType,
}
