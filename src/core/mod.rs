//! Content pipeline for the listing pages.
//!
//! This module provides:
//! - [`ContentSource`] access to the content repository ([`HttpSource`])
//! - [`group_entries`] grouping of tree entries into item folders
//! - [`LineSchema`] parsing of line-oriented metadata files
//! - [`load_listing`] which runs the whole pipeline for a [`ListingKind`]
//! - [`presenter`] filtering and sorting for the views
//! - [`gallery_manifest`] for prebuilt gallery listings

pub mod error;
pub mod group;
pub mod listing;
pub mod manifest;
pub mod metadata;
pub mod presenter;
pub mod source;
pub mod state;
pub mod tree;

pub use error::{ConfigError, FetchError, ParseError};
pub use group::{ItemGroup, Layout, group_entries};
pub use listing::{ListingKind, load_listing};
pub use manifest::{ManifestEntry, gallery_manifest};
pub use metadata::{LineSchema, Metadata};
pub use presenter::{DisplayState, Listable, SortOrder, category_options, filter_items, sort_items};
pub use source::{ContentSource, HttpSource};
pub use state::{LoadGuard, LoadState, LoadTicket};
pub use tree::{TreeEntry, decode_tree};

#[cfg(any(test, feature = "mock"))]
pub use source::MemorySource;
