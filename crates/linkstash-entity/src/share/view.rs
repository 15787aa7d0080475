//! Read-only projections served to unauthenticated share viewers.
//!
//! These carry exactly the fields the public share page renders. No
//! internal ids, owner information, or mutation-capable fields.

use serde::{Deserialize, Serialize};

use crate::content::{Content, ContentType};

/// A single bookmark as seen by a share viewer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SharedItem {
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
}

impl From<Content> for SharedItem {
    fn from(content: Content) -> Self {
        Self {
            title: content.title,
            description: content.description,
            link: content.link,
            tags: content.tags,
            content_type: content.content_type,
        }
    }
}

/// A shared folder: its name and its bookmarks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SharedFolderView {
    /// Folder name.
    pub name: String,
    /// The folder's bookmarks.
    pub content: Vec<SharedItem>,
}

/// The resolution result for a public token.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SharedView {
    /// A single shared folder.
    Folder(SharedFolderView),
    /// A whole shared collection.
    Collection {
        /// All folders in the collection.
        folders: Vec<SharedFolderView>,
    },
}
