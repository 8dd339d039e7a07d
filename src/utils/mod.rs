//! Browser and formatting helpers.
//!
//! Provides:
//! - [`fetch_text`], [`fetch_bytes`] - Network fetching with timeout and abort
//! - [`download_file`] - Blob download with a new-tab fallback
//! - [`format_size`], [`truncate`] - Display formatting
//! - [`logger`] - `log` backend for the browser console

pub mod dom;
mod download;
pub mod fetch;
mod format;
pub mod logger;

pub use download::download_file;
pub use fetch::{FetchOptions, fetch_bytes, fetch_text, race_with_timeout};
pub use format::{format_optional_size, format_size, truncate};
