//! PostgreSQL repository implementations.

pub mod content;
pub mod folder;
pub mod share;

pub use content::ContentRepository;
pub use folder::FolderRepository;
pub use share::ShareRepository;
