//! Share record repository implementation.
//!
//! The enable path is a single `INSERT .. ON CONFLICT .. DO UPDATE`
//! statement so the fresh-vs-stable token decision happens atomically
//! inside PostgreSQL. Racing enables converge on the first writer's
//! token; the losers read it back from the same statement.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use linkstash_core::error::{AppError, ErrorKind};
use linkstash_core::result::AppResult;
use linkstash_core::types::UserId;
use linkstash_entity::share::{ResourceKind, ShareRecord};

use crate::store::ShareStore;

/// Repository for share record operations and token lookup.
#[derive(Debug, Clone)]
pub struct ShareRepository {
    pool: PgPool,
}

impl ShareRepository {
    /// Create a new share repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShareStore for ShareRepository {
    async fn get_by_resource(
        &self,
        kind: ResourceKind,
        resource_id: Uuid,
        owner_id: UserId,
    ) -> AppResult<Option<ShareRecord>> {
        sqlx::query_as::<_, ShareRecord>(
            "SELECT * FROM share_records \
             WHERE resource_kind = $1 AND resource_id = $2 AND owner_id = $3",
        )
        .bind(kind)
        .bind(resource_id)
        .bind(owner_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find share record", e))
    }

    async fn upsert_enable(
        &self,
        kind: ResourceKind,
        resource_id: Uuid,
        owner_id: UserId,
        fresh_token: &str,
    ) -> AppResult<ShareRecord> {
        sqlx::query_as::<_, ShareRecord>(
            "INSERT INTO share_records \
                 (id, resource_kind, resource_id, owner_id, token, enabled, created_at, last_toggled_at) \
             VALUES ($1, $2, $3, $4, $5, TRUE, NOW(), NOW()) \
             ON CONFLICT (resource_kind, resource_id, owner_id) DO UPDATE SET \
                 token = CASE WHEN share_records.enabled \
                              THEN share_records.token ELSE EXCLUDED.token END, \
                 enabled = TRUE, \
                 last_toggled_at = CASE WHEN share_records.enabled \
                              THEN share_records.last_toggled_at ELSE NOW() END \
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(kind)
        .bind(resource_id)
        .bind(owner_id)
        .bind(fresh_token)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            // uq_share_token: a fresh token collided with an active one.
            if let sqlx::Error::Database(db) = &e {
                if db.constraint() == Some("uq_share_token") {
                    return AppError::conflict("Share token already in use");
                }
            }
            AppError::with_source(ErrorKind::Database, "Failed to enable sharing", e)
        })
    }

    async fn disable(
        &self,
        kind: ResourceKind,
        resource_id: Uuid,
        owner_id: UserId,
    ) -> AppResult<()> {
        sqlx::query(
            "UPDATE share_records SET enabled = FALSE, token = NULL, last_toggled_at = NOW() \
             WHERE resource_kind = $1 AND resource_id = $2 AND owner_id = $3 AND enabled",
        )
        .bind(kind)
        .bind(resource_id)
        .bind(owner_id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to disable sharing", e))?;
        Ok(())
    }

    async fn get_by_token(&self, token: &str) -> AppResult<Option<ShareRecord>> {
        sqlx::query_as::<_, ShareRecord>(
            "SELECT * FROM share_records WHERE token = $1 AND enabled",
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find share by token", e)
        })
    }

    async fn cascade_delete_resource(
        &self,
        kind: ResourceKind,
        resource_id: Uuid,
    ) -> AppResult<()> {
        sqlx::query("DELETE FROM share_records WHERE resource_kind = $1 AND resource_id = $2")
            .bind(kind)
            .bind(resource_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to cascade share records", e)
            })?;
        Ok(())
    }
}
