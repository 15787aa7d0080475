//! Folder CRUD handlers.

use axum::Json;
use axum::extract::{Path, State};
use validator::Validate;

use linkstash_core::error::AppError;
use linkstash_core::types::FolderId;

use crate::dto::request::{CreateFolderRequest, RenameFolderRequest};
use crate::dto::response::{FolderDetailResponse, FolderResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/v1/folder
pub async fn list_folders(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<serde_json::Value>, ApiError> {
    let folders: Vec<FolderResponse> = state
        .folder_service
        .list(&auth)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(Json(serde_json::json!({ "data": folders })))
}

/// POST /api/v1/folder
pub async fn create_folder(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateFolderRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let folder = state.folder_service.create(&auth, &req.name).await?;
    Ok(Json(
        serde_json::json!({ "data": FolderResponse::from(folder) }),
    ))
}

/// GET /api/v1/folder/{id}
pub async fn get_folder(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<FolderId>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let detail = state.folder_service.get(&auth, id).await?;
    Ok(Json(
        serde_json::json!({ "data": FolderDetailResponse::from(detail) }),
    ))
}

/// PATCH /api/v1/folder/{id}
pub async fn rename_folder(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<FolderId>,
    Json(req): Json<RenameFolderRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let folder = state.folder_service.rename(&auth, id, &req.name).await?;
    Ok(Json(
        serde_json::json!({ "data": FolderResponse::from(folder) }),
    ))
}

/// DELETE /api/v1/folder/{id}
pub async fn delete_folder(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<FolderId>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.folder_service.delete(&auth, id).await?;
    Ok(Json(
        serde_json::json!({ "data": { "message": "Folder deleted" } }),
    ))
}
