//! # linkstash-api
//!
//! HTTP API layer for Linkstash built on Axum.
//!
//! Provides the owner-facing REST endpoints, the public share resolution
//! endpoints, middleware (CORS, logging), extractors, DTOs, and error
//! mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use state::AppState;
