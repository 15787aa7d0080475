//! In-memory store backend built on dashmap.
//!
//! Used for single-node development and tests. Per-key atomicity comes
//! from `DashMap::entry`, which holds the shard lock while the
//! fresh-vs-stable token decision is made.

pub mod content;
pub mod folder;
pub mod share;

pub use content::MemoryContentStore;
pub use folder::MemoryFolderStore;
pub use share::MemoryShareStore;
