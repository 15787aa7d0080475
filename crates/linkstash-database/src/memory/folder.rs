//! In-memory folder store.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;

use linkstash_core::result::AppResult;
use linkstash_core::types::{FolderId, UserId};
use linkstash_entity::folder::{CreateFolder, Folder};

use crate::store::FolderStore;

/// Folder store keeping all records in process memory.
#[derive(Debug, Default)]
pub struct MemoryFolderStore {
    folders: DashMap<FolderId, Folder>,
}

impl MemoryFolderStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FolderStore for MemoryFolderStore {
    async fn find_by_id(&self, id: FolderId) -> AppResult<Option<Folder>> {
        Ok(self.folders.get(&id).map(|entry| entry.value().clone()))
    }

    async fn find_by_owner(&self, owner_id: UserId) -> AppResult<Vec<Folder>> {
        let mut folders: Vec<Folder> = self
            .folders
            .iter()
            .filter(|entry| entry.value().owner_id == owner_id)
            .map(|entry| entry.value().clone())
            .collect();
        folders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(folders)
    }

    async fn create(&self, data: &CreateFolder) -> AppResult<Folder> {
        let now = Utc::now();
        let folder = Folder {
            id: FolderId::new(),
            owner_id: data.owner_id,
            name: data.name.clone(),
            created_at: now,
            updated_at: now,
        };
        self.folders.insert(folder.id, folder.clone());
        Ok(folder)
    }

    async fn rename(&self, id: FolderId, name: &str) -> AppResult<Option<Folder>> {
        match self.folders.get_mut(&id) {
            Some(mut entry) => {
                let folder = entry.value_mut();
                folder.name = name.to_string();
                folder.updated_at = Utc::now();
                Ok(Some(folder.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: FolderId) -> AppResult<bool> {
        Ok(self.folders.remove(&id).is_some())
    }
}
