//! Route definitions for the Linkstash HTTP API.
//!
//! Owner-facing routes live under `/api/v1` and require the gateway
//! identity header. Public share resolution lives under `/share` and
//! takes nothing but the token.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(folder_routes())
        .merge(collection_routes())
        .merge(content_routes())
        .merge(health_routes());

    let public_routes = Router::new()
        .route("/folder/{hash}", get(handlers::share::resolve_folder_share))
        .route(
            "/collection/{hash}",
            get(handlers::share::resolve_collection_share),
        );

    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api/v1", api_routes)
        .nest("/share", public_routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Folder CRUD and folder share toggling
fn folder_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/folder",
            get(handlers::folder::list_folders).post(handlers::folder::create_folder),
        )
        .route(
            "/folder/share",
            get(handlers::share::folder_share_status).post(handlers::share::toggle_folder_share),
        )
        .route(
            "/folder/{id}",
            get(handlers::folder::get_folder)
                .patch(handlers::folder::rename_folder)
                .delete(handlers::folder::delete_folder),
        )
}

/// Whole-collection share toggling
fn collection_routes() -> Router<AppState> {
    Router::new().route(
        "/collection/share",
        get(handlers::share::collection_share_status)
            .post(handlers::share::toggle_collection_share),
    )
}

/// Bookmark creation and deletion
fn content_routes() -> Router<AppState> {
    Router::new()
        .route("/content", post(handlers::content::create_content))
        .route(
            "/content/{id}",
            axum::routing::delete(handlers::content::delete_content),
        )
}

/// Liveness probe
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
