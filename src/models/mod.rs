//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`ContentHost`] - Repository that serves dynamic content
//! - [`ParsedItem`], [`MediaRef`], [`ItemDate`], [`FileType`] - Listing records
//! - [`FacultyMember`] - Static directory entries
//! - [`AppRoute`] - Hash-based navigation

mod faculty;
mod host;
mod item;
mod route;

pub use faculty::FacultyMember;
pub use host::ContentHost;
pub use item::{FileType, ItemDate, MediaRef, ParsedItem, extension, file_name, file_stem};
pub use route::AppRoute;
