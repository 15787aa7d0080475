//! Share record entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use linkstash_core::types::{ShareRecordId, UserId};

/// The kind of resource a share record covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "resource_kind", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    /// A single bookmark folder.
    Folder,
    /// The owner's entire collection of folders.
    Collection,
}

/// The persisted share state of a resource.
///
/// One record per (`resource_kind`, `resource_id`, `owner_id`); the record
/// is mutated in place on toggles, never duplicated. For `Collection`
/// records, `resource_id` holds the owner's user id.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ShareRecord {
    /// Unique record identifier.
    pub id: ShareRecordId,
    /// What kind of resource is shared.
    pub resource_kind: ResourceKind,
    /// The shared resource (folder id, or owner id for collections).
    pub resource_id: Uuid,
    /// The account controlling the share.
    pub owner_id: UserId,
    /// The public token. Present if and only if `enabled`.
    pub token: Option<String>,
    /// Whether the resource is currently shared.
    pub enabled: bool,
    /// When the record was first created.
    pub created_at: DateTime<Utc>,
    /// When sharing was last toggled.
    pub last_toggled_at: DateTime<Utc>,
}

impl ShareRecord {
    /// Whether the record's token invariant holds.
    pub fn is_consistent(&self) -> bool {
        self.token.is_some() == self.enabled
    }
}
