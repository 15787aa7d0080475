//! Bookmarked content repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use linkstash_core::error::{AppError, ErrorKind};
use linkstash_core::result::AppResult;
use linkstash_core::types::{ContentId, FolderId};
use linkstash_entity::content::{Content, CreateContent};

use crate::store::ContentStore;

/// Repository for bookmark CRUD operations.
#[derive(Debug, Clone)]
pub struct ContentRepository {
    pool: PgPool,
}

impl ContentRepository {
    /// Create a new content repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContentStore for ContentRepository {
    async fn find_by_id(&self, id: ContentId) -> AppResult<Option<Content>> {
        sqlx::query_as::<_, Content>("SELECT * FROM content WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find content", e))
    }

    async fn find_by_folder(&self, folder_id: FolderId) -> AppResult<Vec<Content>> {
        sqlx::query_as::<_, Content>(
            "SELECT * FROM content WHERE folder_id = $1 ORDER BY created_at DESC",
        )
        .bind(folder_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list content", e))
    }

    async fn create(&self, data: &CreateContent) -> AppResult<Content> {
        sqlx::query_as::<_, Content>(
            "INSERT INTO content (id, folder_id, owner_id, title, description, link, tags, content_type) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(data.folder_id)
        .bind(data.owner_id)
        .bind(&data.title)
        .bind(&data.description)
        .bind(&data.link)
        .bind(&data.tags)
        .bind(data.content_type)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create content", e))
    }

    async fn delete(&self, id: ContentId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM content WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete content", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_by_folder(&self, folder_id: FolderId) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM content WHERE folder_id = $1")
            .bind(folder_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to clear folder content", e)
            })?;
        Ok(result.rows_affected())
    }
}
