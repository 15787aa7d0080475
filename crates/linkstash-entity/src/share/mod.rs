//! Share domain entities.

pub mod model;
pub mod view;

pub use model::{ResourceKind, ShareRecord};
pub use view::{SharedFolderView, SharedItem, SharedView};
