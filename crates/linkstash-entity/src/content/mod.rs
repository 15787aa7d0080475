//! Bookmarked content domain entities.

pub mod model;

pub use model::{Content, ContentType, CreateContent};
