//! UI components built with Leptos.
//!
//! - [`router`] - Application routing (main entry point)
//! - [`layout`] - Header and footer
//! - [`home`] - Landing page sections and stat counters
//! - [`pages`] - About, faculty directory and not-found pages
//! - [`listing`] - Gallery, achievements, files and notice board
//! - [`common`] - Modal, filters and status placeholders
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod common;
pub mod home;
pub mod icons;
pub mod layout;
pub mod listing;
pub mod pages;
pub mod router;

pub use router::AppRouter;
