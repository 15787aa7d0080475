//! HTTP request handlers, organized by domain.

pub mod content;
pub mod folder;
pub mod health;
pub mod share;
