//! Website of Govt. Higher Secondary School, Portha.
//!
//! Static pages are compiled in; gallery, achievements, uploads and notices
//! are listed live from the school's content repository through the
//! pipeline in [`core`].

pub mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;
