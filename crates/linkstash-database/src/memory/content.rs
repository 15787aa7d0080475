//! In-memory bookmark store.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;

use linkstash_core::result::AppResult;
use linkstash_core::types::{ContentId, FolderId};
use linkstash_entity::content::{Content, CreateContent};

use crate::store::ContentStore;

/// Bookmark store keeping all records in process memory.
#[derive(Debug, Default)]
pub struct MemoryContentStore {
    content: DashMap<ContentId, Content>,
}

impl MemoryContentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContentStore for MemoryContentStore {
    async fn find_by_id(&self, id: ContentId) -> AppResult<Option<Content>> {
        Ok(self.content.get(&id).map(|entry| entry.value().clone()))
    }

    async fn find_by_folder(&self, folder_id: FolderId) -> AppResult<Vec<Content>> {
        let mut items: Vec<Content> = self
            .content
            .iter()
            .filter(|entry| entry.value().folder_id == folder_id)
            .map(|entry| entry.value().clone())
            .collect();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(items)
    }

    async fn create(&self, data: &CreateContent) -> AppResult<Content> {
        let item = Content {
            id: ContentId::new(),
            folder_id: data.folder_id,
            owner_id: data.owner_id,
            title: data.title.clone(),
            description: data.description.clone(),
            link: data.link.clone(),
            tags: data.tags.clone(),
            content_type: data.content_type,
            created_at: Utc::now(),
        };
        self.content.insert(item.id, item.clone());
        Ok(item)
    }

    async fn delete(&self, id: ContentId) -> AppResult<bool> {
        Ok(self.content.remove(&id).is_some())
    }

    async fn delete_by_folder(&self, folder_id: FolderId) -> AppResult<u64> {
        let ids: Vec<ContentId> = self
            .content
            .iter()
            .filter(|entry| entry.value().folder_id == folder_id)
            .map(|entry| *entry.key())
            .collect();

        let mut removed = 0u64;
        for id in ids {
            if self.content.remove(&id).is_some() {
                removed += 1;
            }
        }
        Ok(removed)
    }
}
