//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Site data is loaded at compile time using `include_str!` and decoded once
//! at startup into a [`SiteConfig`] that is passed down through context.

use serde::Deserialize;

use crate::core::error::ConfigError;
use crate::models::{ContentHost, FacultyMember};

// =============================================================================
// Text Assets (loaded at compile time)
// =============================================================================

/// Site configuration (school details, content host, counters).
const SITE_TOML: &str = include_str!("../assets/site.toml");

/// Faculty and staff directory.
const FACULTY_TOML: &str = include_str!("../assets/faculty.toml");

// =============================================================================
// Content Layout
// =============================================================================

/// Name of the per-folder metadata file.
pub const METADATA_FILE: &str = "data.txt";

/// Extension of flat metadata files (notices).
pub const TEXT_EXTENSION: &str = "txt";

/// Extensions accepted as displayable images.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp"];

/// File stem required for the achievement cover image (`image.jpg` etc).
pub const COVER_IMAGE_STEM: &str = "image";

/// Wildcard category that matches every item.
pub const ALL_CATEGORY: &str = "All";

/// Category given to notices that do not name one.
pub const DEFAULT_NOTICE_CATEGORY: &str = "General";

// =============================================================================
// Network Configuration
// =============================================================================

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: u32 = 10000;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display truncation limits.
pub mod display {
    /// Maximum card description length before truncation.
    pub const DESCRIPTION_PREVIEW_LEN: usize = 150;
}

/// Stat counter animation.
pub mod counter {
    /// Total animation time in milliseconds.
    pub const DURATION_MS: u32 = 2000;
    /// Frame interval in milliseconds.
    pub const FRAME_MS: u32 = 16;
}

/// Viewport width below which the header collapses into a menu.
pub const MOBILE_BREAKPOINT: &str = "(max-width: 767px)";

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Lucide` - Minimal, thin strokes (default)
/// - `Bootstrap` - Familiar, slightly bolder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Lucide,
    Bootstrap,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Lucide;

// =============================================================================
// Site Configuration
// =============================================================================

/// School details shown in the header, footer and page titles.
#[derive(Clone, Debug, Deserialize)]
pub struct SiteInfo {
    /// Full school name
    pub name: String,
    /// Short name for the header logo
    pub short_name: String,
    /// Tagline used on the home page and its title
    pub tagline: String,
    /// Founding year
    pub established: u16,
    /// Postal address
    pub address: String,
    /// Contact email
    pub email: String,
}

/// Icon shown above a stat counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatIcon {
    Students,
    Faculty,
    School,
}

/// A home/about page counter.
#[derive(Clone, Debug, Deserialize)]
pub struct StatCounter {
    pub label: String,
    pub value: u32,
    #[serde(default)]
    pub suffix: String,
    pub icon: StatIcon,
}

/// Logging configuration.
#[derive(Clone, Debug, Deserialize)]
pub struct LogConfig {
    /// One of `error`, `warn`, `info`, `debug`, `trace`
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl LogConfig {
    /// Parsed level filter; unknown values fall back to `Info`.
    pub fn level_filter(&self) -> log::LevelFilter {
        self.level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

/// Site configuration resolved once at startup.
#[derive(Clone, Debug, Deserialize)]
pub struct SiteConfig {
    pub site: SiteInfo,
    pub content: ContentHost,
    #[serde(default)]
    pub log: LogConfig,
    #[serde(default)]
    pub stats: Vec<StatCounter>,
}

impl SiteConfig {
    /// Decode the embedded `site.toml`.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_toml(SITE_TOML)
    }

    /// Decode and validate a configuration document.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text).map_err(|source| ConfigError::Toml {
            file: "site.toml",
            source,
        })?;
        config
            .content
            .validate()
            .map_err(ConfigError::InvalidHost)?;
        Ok(config)
    }

    /// Browser tab title for a page.
    pub fn page_title(&self, page: Option<&str>) -> String {
        match page {
            Some(page) => format!("{} - {}", page, self.site.name),
            None => format!("{} - {}", self.site.name, self.site.tagline),
        }
    }
}

#[derive(Deserialize)]
struct FacultyFile {
    #[serde(default)]
    members: Vec<FacultyMember>,
}

/// Decode the embedded faculty directory.
pub fn load_faculty() -> Result<Vec<FacultyMember>, ConfigError> {
    toml::from_str::<FacultyFile>(FACULTY_TOML)
        .map(|file| file.members)
        .map_err(|source| ConfigError::Toml {
            file: "faculty.toml",
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_loads() {
        let config = SiteConfig::load().unwrap();
        assert_eq!(config.content.owner, "GHSS-School");
        assert_eq!(config.content.repo, "GHSS_School");
        assert_eq!(config.content.branch, "main");
        assert_eq!(config.stats.len(), 3);
    }

    #[test]
    fn test_embedded_faculty_loads() {
        let members = load_faculty().unwrap();
        assert!(!members.is_empty());
        assert!(members.iter().all(|m| !m.name.is_empty()));
    }

    #[test]
    fn test_defaults_applied() {
        let config = SiteConfig::from_toml(
            r#"
            [site]
            name = "Test School"
            short_name = "TS"
            tagline = "Learning"
            established = 2000
            address = "Somewhere"
            email = "office@example.com"

            [content]
            owner = "o"
            repo = "r"
            branch = "main"
            "#,
        )
        .unwrap();
        assert_eq!(config.content.api_base, "https://api.github.com");
        assert_eq!(config.content.timeout_ms, FETCH_TIMEOUT_MS);
        assert_eq!(config.log.level_filter(), log::LevelFilter::Info);
        assert!(config.stats.is_empty());
    }

    #[test]
    fn test_invalid_host_rejected() {
        let result = SiteConfig::from_toml(
            r#"
            [site]
            name = "Test School"
            short_name = "TS"
            tagline = "Learning"
            established = 2000
            address = "Somewhere"
            email = "office@example.com"

            [content]
            owner = ""
            repo = "r"
            branch = "main"
            "#,
        );
        assert!(matches!(result, Err(ConfigError::InvalidHost(_))));
    }

    #[test]
    fn test_page_title() {
        let config = SiteConfig::load().unwrap();
        assert_eq!(
            config.page_title(Some("Gallery")),
            "Gallery - Govt. Higher Secondary School, Portha"
        );
        assert!(config.page_title(None).ends_with(&config.site.tagline));
    }
}
