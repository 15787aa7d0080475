//! # linkstash-database
//!
//! Persistence layer for Linkstash. Defines the store traits the service
//! layer programs against, plus two implementations: PostgreSQL (sqlx)
//! for the shared production store and an in-memory backend (dashmap)
//! for single-node development and tests.
//!
//! The backend is selected at startup by [`provider::StoreManager`].

pub mod connection;
pub mod memory;
pub mod migration;
pub mod provider;
pub mod repositories;
pub mod store;

pub use provider::StoreManager;
pub use store::{ContentStore, FolderStore, ShareStore};
