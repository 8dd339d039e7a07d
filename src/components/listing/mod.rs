//! Pages backed by the remote-listing pipeline.
//!
//! - [`GalleryPage`] - Photo grid with category tabs
//! - [`AchievementsPage`] - Achievement and activity cards
//! - [`FilesPage`] - Downloadable uploads
//! - [`NoticeBoardPage`] - Pinned and recent notices with search

mod achievements;
mod card;
mod files;
mod frame;
mod gallery;
mod hook;
mod notices;

pub use achievements::AchievementsPage;
pub use files::FilesPage;
pub use gallery::GalleryPage;
pub use hook::{ListingData, use_listing};
pub use notices::NoticeBoardPage;
