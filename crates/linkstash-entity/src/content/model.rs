//! Bookmarked content entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use linkstash_core::types::{ContentId, FolderId, UserId};

/// The kind of source a bookmark points at.
///
/// Mirrors the filter set the bookmark client offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "content_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Telegram,
    Twitter,
    Instagram,
    Youtube,
    Reddit,
    Discord,
    Pinterest,
    Linkedin,
    Website,
}

/// A bookmarked link inside a folder.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Content {
    /// Unique content identifier.
    pub id: ContentId,
    /// The folder this bookmark belongs to.
    pub folder_id: FolderId,
    /// The bookmark owner (denormalized from the folder for ownership checks).
    pub owner_id: UserId,
    /// Bookmark title.
    pub title: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// The bookmarked URL.
    pub link: String,
    /// User-assigned tags.
    pub tags: Vec<String>,
    /// The kind of source the link points at.
    pub content_type: ContentType,
    /// When the bookmark was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new bookmark.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateContent {
    /// Target folder.
    pub folder_id: FolderId,
    /// The bookmark owner.
    pub owner_id: UserId,
    /// Bookmark title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// The bookmarked URL.
    pub link: String,
    /// User-assigned tags.
    pub tags: Vec<String>,
    /// The kind of source.
    pub content_type: ContentType,
}
