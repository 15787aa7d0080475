//! # linkstash-service
//!
//! Business logic for Linkstash. Orchestrates the store layer: the share
//! lifecycle (enable, disable, public resolution), folder CRUD with its
//! share cascade, and bookmark management.

pub mod content;
pub mod context;
pub mod folder;
pub mod share;

pub use content::ContentService;
pub use context::RequestContext;
pub use folder::FolderService;
pub use share::{ShareAccessService, SharePolicyService, ShareStatus, ShareTarget, TokenGenerator};
