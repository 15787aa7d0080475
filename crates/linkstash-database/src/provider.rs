//! Store manager that dispatches to the configured backend.

use std::sync::Arc;

use tracing::info;

use linkstash_core::config::DatabaseConfig;
use linkstash_core::error::AppError;
use linkstash_core::result::AppResult;

use crate::connection::DatabasePool;
use crate::memory::{MemoryContentStore, MemoryFolderStore, MemoryShareStore};
use crate::migration::run_migrations;
use crate::repositories::{ContentRepository, FolderRepository, ShareRepository};
use crate::store::{ContentStore, FolderStore, ShareStore};

/// Bundle of store handles behind the configured backend.
///
/// The backend is selected at construction time based on configuration.
#[derive(Debug, Clone)]
pub struct StoreManager {
    folders: Arc<dyn FolderStore>,
    contents: Arc<dyn ContentStore>,
    shares: Arc<dyn ShareStore>,
}

impl StoreManager {
    /// Create a new store manager from configuration.
    ///
    /// The `postgres` provider connects a pool and runs pending
    /// migrations before handing out repositories.
    pub async fn new(config: &DatabaseConfig) -> AppResult<Self> {
        match config.provider.as_str() {
            "postgres" => {
                info!("Initializing PostgreSQL store backend");
                let pool = DatabasePool::connect(config).await?.into_pool();
                run_migrations(&pool).await?;
                Ok(Self {
                    folders: Arc::new(FolderRepository::new(pool.clone())),
                    contents: Arc::new(ContentRepository::new(pool.clone())),
                    shares: Arc::new(ShareRepository::new(pool)),
                })
            }
            "memory" => {
                info!("Initializing in-memory store backend");
                Ok(Self::in_memory())
            }
            other => Err(AppError::configuration(format!(
                "Unknown database provider: '{other}'. Supported: memory, postgres"
            ))),
        }
    }

    /// Create a store manager backed by in-memory stores (for testing).
    pub fn in_memory() -> Self {
        Self {
            folders: Arc::new(MemoryFolderStore::new()),
            contents: Arc::new(MemoryContentStore::new()),
            shares: Arc::new(MemoryShareStore::new()),
        }
    }

    /// Folder store handle.
    pub fn folders(&self) -> Arc<dyn FolderStore> {
        self.folders.clone()
    }

    /// Content store handle.
    pub fn contents(&self) -> Arc<dyn ContentStore> {
        self.contents.clone()
    }

    /// Share record store handle.
    pub fn shares(&self) -> Arc<dyn ShareStore> {
        self.shares.clone()
    }
}
