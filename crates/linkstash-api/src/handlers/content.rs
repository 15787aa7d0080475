//! Bookmark handlers.

use axum::Json;
use axum::extract::{Path, State};
use validator::Validate;

use linkstash_core::error::AppError;
use linkstash_core::types::ContentId;
use linkstash_service::content::NewContent;

use crate::dto::request::CreateContentRequest;
use crate::dto::response::ContentResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/v1/content
pub async fn create_content(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateContentRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let content = state
        .content_service
        .add(
            &auth,
            NewContent {
                folder_id: req.folder_id,
                title: req.title,
                description: req.description,
                link: req.link,
                tags: req.tags,
                content_type: req.content_type,
            },
        )
        .await?;

    Ok(Json(
        serde_json::json!({ "data": ContentResponse::from(content) }),
    ))
}

/// DELETE /api/v1/content/{id}
pub async fn delete_content(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<ContentId>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.content_service.remove(&auth, id).await?;
    Ok(Json(
        serde_json::json!({ "data": { "message": "Bookmark deleted" } }),
    ))
}
