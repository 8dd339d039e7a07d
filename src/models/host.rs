//! Content host identifiers.
//!
//! A [`ContentHost`] names the repository that holds the site's dynamic
//! content (gallery photos, notices, uploads) and knows how to build the
//! two URLs the pipeline needs: the recursive tree listing and the raw
//! content location of a file.

use serde::Deserialize;
use url::Url;

use crate::core::error::FetchError;

fn default_api_base() -> String {
    "https://api.github.com".to_string()
}

fn default_raw_base() -> String {
    "https://raw.githubusercontent.com".to_string()
}

fn default_user_agent() -> String {
    "ghss-site".to_string()
}

fn default_timeout_ms() -> u32 {
    crate::config::FETCH_TIMEOUT_MS
}

/// GitHub repository holding the site content.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ContentHost {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Branch to read from
    pub branch: String,
    /// REST API root
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Raw content root
    #[serde(default = "default_raw_base")]
    pub raw_base: String,
    /// `User-Agent` header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Per-request timeout
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u32,
}

impl ContentHost {
    /// Create a GitHub host with default endpoints.
    pub fn github(
        owner: impl Into<String>,
        repo: impl Into<String>,
        branch: impl Into<String>,
    ) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
            branch: branch.into(),
            api_base: default_api_base(),
            raw_base: default_raw_base(),
            user_agent: default_user_agent(),
            timeout_ms: default_timeout_ms(),
        }
    }

    /// URL of the recursive tree listing for the configured branch.
    pub fn tree_url(&self) -> Result<String, FetchError> {
        let mut url = parse_base(&self.api_base)?;
        url.path_segments_mut()
            .map_err(|_| FetchError::InvalidUrl(self.api_base.clone()))?
            .pop_if_empty()
            .extend([
                "repos",
                self.owner.as_str(),
                self.repo.as_str(),
                "git",
                "trees",
                self.branch.as_str(),
            ]);
        url.query_pairs_mut().append_pair("recursive", "1");
        Ok(url.into())
    }

    /// Raw content URL for a repository path.
    ///
    /// Each path segment is percent-encoded on its own so folder names
    /// with spaces or unicode survive intact.
    pub fn raw_url(&self, path: &str) -> Result<String, FetchError> {
        let mut url = parse_base(&self.raw_base)?;
        url.path_segments_mut()
            .map_err(|_| FetchError::InvalidUrl(self.raw_base.clone()))?
            .pop_if_empty()
            .extend([&self.owner, &self.repo, &self.branch])
            .extend(path.split('/').filter(|s| !s.is_empty()));
        Ok(url.into())
    }

    /// Check that identifiers are present and both roots are absolute URLs.
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in [
            ("owner", &self.owner),
            ("repo", &self.repo),
            ("branch", &self.branch),
        ] {
            if value.trim().is_empty() {
                return Err(format!("{} must not be empty", name));
            }
        }
        parse_base(&self.api_base).map_err(|e| e.to_string())?;
        parse_base(&self.raw_base).map_err(|e| e.to_string())?;
        Ok(())
    }
}

fn parse_base(base: &str) -> Result<Url, FetchError> {
    let url = Url::parse(base).map_err(|e| FetchError::InvalidUrl(format!("{}: {}", base, e)))?;
    if url.cannot_be_a_base() {
        return Err(FetchError::InvalidUrl(base.to_string()));
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host() -> ContentHost {
        ContentHost::github("GHSS-School", "GHSS_School", "main")
    }

    #[test]
    fn test_tree_url() {
        assert_eq!(
            host().tree_url().unwrap(),
            "https://api.github.com/repos/GHSS-School/GHSS_School/git/trees/main?recursive=1"
        );
    }

    #[test]
    fn test_raw_url() {
        assert_eq!(
            host().raw_url("Achievements/01/data.txt").unwrap(),
            "https://raw.githubusercontent.com/GHSS-School/GHSS_School/main/Achievements/01/data.txt"
        );
    }

    #[test]
    fn test_raw_url_encodes_segments() {
        assert_eq!(
            host().raw_url("Gallery/Annual Day/photo 1.jpg").unwrap(),
            "https://raw.githubusercontent.com/GHSS-School/GHSS_School/main/Gallery/Annual%20Day/photo%201.jpg"
        );
    }

    #[test]
    fn test_custom_base_with_trailing_slash() {
        let mut host = host();
        host.raw_base = "https://cdn.example.com/mirror/".to_string();
        assert_eq!(
            host.raw_url("Notices/1.txt").unwrap(),
            "https://cdn.example.com/mirror/GHSS-School/GHSS_School/main/Notices/1.txt"
        );
    }

    #[test]
    fn test_validate() {
        assert!(host().validate().is_ok());

        let mut missing = host();
        missing.branch = " ".to_string();
        assert!(missing.validate().is_err());

        let mut bad_base = host();
        bad_base.api_base = "not a url".to_string();
        assert!(bad_base.validate().is_err());
    }
}
