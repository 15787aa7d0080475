//! # linkstash-entity
//!
//! Domain entity models for Linkstash: folders, bookmarked content, and
//! share records, plus the read-only projections served to unauthenticated
//! share viewers.

pub mod content;
pub mod folder;
pub mod share;

pub use content::{Content, ContentType, CreateContent};
pub use folder::{CreateFolder, Folder};
pub use share::{ResourceKind, ShareRecord, SharedFolderView, SharedItem, SharedView};
