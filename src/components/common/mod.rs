//! Widgets shared by the directory and listing pages.

mod filters;
mod modal;
mod status;

pub use filters::{CategorySelect, CategoryTabs, SearchBox};
pub use modal::Modal;
pub use status::{EmptyState, LoadFailed, Loading};
