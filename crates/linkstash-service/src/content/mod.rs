//! Bookmark management.

pub mod service;

pub use service::{ContentService, NewContent};
