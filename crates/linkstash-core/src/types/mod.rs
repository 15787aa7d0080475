//! Shared type definitions.

pub mod id;

pub use id::{ContentId, FolderId, ShareRecordId, UserId};
