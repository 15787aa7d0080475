//! In-memory share record store.
//!
//! Records are keyed by `(resource_kind, resource_id, owner_id)`; a
//! secondary map indexes active tokens for resolution and enforces
//! token uniqueness. Lock ordering is records before tokens.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use uuid::Uuid;

use linkstash_core::error::AppError;
use linkstash_core::result::AppResult;
use linkstash_core::types::{ShareRecordId, UserId};
use linkstash_entity::share::{ResourceKind, ShareRecord};

use crate::store::ShareStore;

/// Identity of a shareable resource from one owner's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct ResourceKey {
    kind: ResourceKind,
    resource_id: Uuid,
    owner_id: UserId,
}

/// Share record store keeping all records in process memory.
#[derive(Debug, Default)]
pub struct MemoryShareStore {
    records: DashMap<ResourceKey, ShareRecord>,
    tokens: DashMap<String, ResourceKey>,
}

impl MemoryShareStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `token` for `key` in the token index. Fails with a
    /// conflict when another resource already holds the token.
    fn claim_token(&self, token: &str, key: ResourceKey) -> AppResult<()> {
        match self.tokens.entry(token.to_string()) {
            Entry::Vacant(slot) => {
                slot.insert(key);
                Ok(())
            }
            Entry::Occupied(existing) if *existing.get() == key => Ok(()),
            Entry::Occupied(_) => Err(AppError::conflict("Share token already in use")),
        }
    }
}

#[async_trait]
impl ShareStore for MemoryShareStore {
    async fn get_by_resource(
        &self,
        kind: ResourceKind,
        resource_id: Uuid,
        owner_id: UserId,
    ) -> AppResult<Option<ShareRecord>> {
        let key = ResourceKey {
            kind,
            resource_id,
            owner_id,
        };
        Ok(self.records.get(&key).map(|entry| entry.value().clone()))
    }

    async fn upsert_enable(
        &self,
        kind: ResourceKind,
        resource_id: Uuid,
        owner_id: UserId,
        fresh_token: &str,
    ) -> AppResult<ShareRecord> {
        let key = ResourceKey {
            kind,
            resource_id,
            owner_id,
        };

        // The entry guard serializes racing enables on the same
        // resource: the first writer installs the fresh token, the
        // rest observe enabled = true and read it back unchanged.
        match self.records.entry(key) {
            Entry::Occupied(mut slot) => {
                let record = slot.get_mut();
                if !record.enabled {
                    self.claim_token(fresh_token, key)?;
                    record.token = Some(fresh_token.to_string());
                    record.enabled = true;
                    record.last_toggled_at = Utc::now();
                }
                Ok(record.clone())
            }
            Entry::Vacant(slot) => {
                self.claim_token(fresh_token, key)?;
                let now = Utc::now();
                let record = ShareRecord {
                    id: ShareRecordId::new(),
                    resource_kind: kind,
                    resource_id,
                    owner_id,
                    token: Some(fresh_token.to_string()),
                    enabled: true,
                    created_at: now,
                    last_toggled_at: now,
                };
                slot.insert(record.clone());
                Ok(record)
            }
        }
    }

    async fn disable(
        &self,
        kind: ResourceKind,
        resource_id: Uuid,
        owner_id: UserId,
    ) -> AppResult<()> {
        let key = ResourceKey {
            kind,
            resource_id,
            owner_id,
        };

        let released = match self.records.get_mut(&key) {
            Some(mut entry) => {
                let record = entry.value_mut();
                if record.enabled {
                    record.enabled = false;
                    record.last_toggled_at = Utc::now();
                    record.token.take()
                } else {
                    None
                }
            }
            None => None,
        };

        if let Some(token) = released {
            self.tokens.remove(&token);
        }
        Ok(())
    }

    async fn get_by_token(&self, token: &str) -> AppResult<Option<ShareRecord>> {
        // Copy the key out before touching the records map so the two
        // shard locks are never held at once.
        let key = match self.tokens.get(token) {
            Some(entry) => *entry.value(),
            None => return Ok(None),
        };

        let record = self
            .records
            .get(&key)
            .map(|entry| entry.value().clone())
            .filter(|record| record.enabled && record.token.as_deref() == Some(token));
        Ok(record)
    }

    async fn cascade_delete_resource(
        &self,
        kind: ResourceKind,
        resource_id: Uuid,
    ) -> AppResult<()> {
        let keys: Vec<ResourceKey> = self
            .records
            .iter()
            .filter(|entry| {
                entry.key().kind == kind && entry.key().resource_id == resource_id
            })
            .map(|entry| *entry.key())
            .collect();

        for key in keys {
            if let Some((_, record)) = self.records.remove(&key) {
                if let Some(token) = record.token {
                    self.tokens.remove(&token);
                }
            }
        }
        Ok(())
    }
}
