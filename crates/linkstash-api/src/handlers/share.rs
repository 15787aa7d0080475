//! Share toggle and public resolution handlers.

use axum::Json;
use axum::extract::{Path, Query, State};

use crate::dto::request::{CollectionShareToggleRequest, FolderShareQuery, FolderShareToggleRequest};
use crate::dto::response::ShareStatusResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

use linkstash_service::share::ShareTarget;

/// GET /api/v1/folder/share?folderId=...
pub async fn folder_share_status(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<FolderShareQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let status = state
        .share_policy
        .share_status(&auth, ShareTarget::Folder(params.folder_id))
        .await?;

    Ok(Json(
        serde_json::json!({ "data": ShareStatusResponse::from(status) }),
    ))
}

/// POST /api/v1/folder/share
pub async fn toggle_folder_share(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<FolderShareToggleRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let target = ShareTarget::Folder(req.id);
    let status = if req.share {
        state.share_policy.request_enable(&auth, target).await?
    } else {
        state.share_policy.request_disable(&auth, target).await?
    };

    Ok(Json(
        serde_json::json!({ "data": ShareStatusResponse::from(status) }),
    ))
}

/// GET /api/v1/collection/share
pub async fn collection_share_status(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<serde_json::Value>, ApiError> {
    let status = state
        .share_policy
        .share_status(&auth, ShareTarget::Collection)
        .await?;

    Ok(Json(
        serde_json::json!({ "data": ShareStatusResponse::from(status) }),
    ))
}

/// POST /api/v1/collection/share
pub async fn toggle_collection_share(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CollectionShareToggleRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let status = if req.share {
        state
            .share_policy
            .request_enable(&auth, ShareTarget::Collection)
            .await?
    } else {
        state
            .share_policy
            .request_disable(&auth, ShareTarget::Collection)
            .await?
    };

    Ok(Json(
        serde_json::json!({ "data": ShareStatusResponse::from(status) }),
    ))
}

/// GET /share/folder/{hash} — public, unauthenticated
pub async fn resolve_folder_share(
    State(state): State<AppState>,
    Path(hash): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let view = state.share_access.resolve_folder(&hash).await?;
    Ok(Json(serde_json::json!({ "data": view })))
}

/// GET /share/collection/{hash} — public, unauthenticated
pub async fn resolve_collection_share(
    State(state): State<AppState>,
    Path(hash): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let folders = state.share_access.resolve_collection(&hash).await?;
    Ok(Json(serde_json::json!({ "data": { "folders": folders } })))
}
