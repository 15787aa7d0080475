//! Folder management.

pub mod service;

pub use service::{FolderDetail, FolderService};
