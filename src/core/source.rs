//! Content sources for the listing pipeline.
//!
//! [`ContentSource`] is the seam between the pipeline and the network:
//! [`HttpSource`] talks to GitHub from the browser, while
//! [`MemorySource`] serves canned data to tests.

use web_sys::AbortSignal;

use super::error::FetchError;
use super::tree::{TreeEntry, decode_tree};
use crate::models::ContentHost;
use crate::utils::fetch::{FetchOptions, fetch_text};

/// Read-only access to a content repository.
#[allow(async_fn_in_trait)]
pub trait ContentSource {
    /// Repository identifiers, used to resolve raw URLs.
    fn host(&self) -> &ContentHost;

    /// Fetch the full recursive file tree.
    async fn fetch_tree(&self) -> Result<Vec<TreeEntry>, FetchError>;

    /// Fetch the text of one repository file.
    async fn fetch_text(&self, path: &str) -> Result<String, FetchError>;

    /// Raw content URL of a repository file.
    fn raw_url(&self, path: &str) -> Result<String, FetchError> {
        self.host().raw_url(path)
    }
}

/// Browser source backed by the GitHub tree API and raw content host.
pub struct HttpSource {
    host: ContentHost,
    opts: FetchOptions,
}

impl HttpSource {
    pub fn new(host: ContentHost) -> Self {
        let opts = FetchOptions {
            user_agent: host.user_agent.clone(),
            timeout_ms: host.timeout_ms,
            abort: None,
        };
        Self { host, opts }
    }

    /// Tie every request to `signal` so the owning view can cancel them.
    pub fn with_abort(mut self, signal: AbortSignal) -> Self {
        self.opts.abort = Some(signal);
        self
    }
}

impl ContentSource for HttpSource {
    fn host(&self) -> &ContentHost {
        &self.host
    }

    async fn fetch_tree(&self) -> Result<Vec<TreeEntry>, FetchError> {
        let url = self.host.tree_url()?;
        let body = fetch_text(&url, &self.opts).await?;
        decode_tree(&body)
    }

    async fn fetch_text(&self, path: &str) -> Result<String, FetchError> {
        let url = self.host.raw_url(path)?;
        fetch_text(&url, &self.opts).await
    }
}

#[cfg(any(test, feature = "mock"))]
pub use mock::MemorySource;

#[cfg(any(test, feature = "mock"))]
mod mock {
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;

    use super::*;

    /// In-memory source with scripted responses.
    pub struct MemorySource {
        host: ContentHost,
        tree: RefCell<Result<Vec<TreeEntry>, FetchError>>,
        files: HashMap<String, Result<String, FetchError>>,
        tree_calls: Cell<usize>,
        text_calls: Cell<usize>,
    }

    impl MemorySource {
        pub fn new(paths: &[&str]) -> Self {
            Self {
                host: ContentHost::github("owner", "repo", "main"),
                tree: RefCell::new(Ok(paths
                    .iter()
                    .map(|p| TreeEntry::file(*p, None))
                    .collect())),
                files: HashMap::new(),
                tree_calls: Cell::new(0),
                text_calls: Cell::new(0),
            }
        }

        /// Serve `text` for `path`.
        pub fn with_file(mut self, path: &str, text: &str) -> Self {
            self.files.insert(path.to_string(), Ok(text.to_string()));
            self
        }

        /// Fail requests for `path` with `err`.
        pub fn with_failing_file(mut self, path: &str, err: FetchError) -> Self {
            self.files.insert(path.to_string(), Err(err));
            self
        }

        /// Replace the tree response.
        pub fn set_tree(&self, tree: Result<Vec<TreeEntry>, FetchError>) {
            *self.tree.borrow_mut() = tree;
        }

        pub fn tree_calls(&self) -> usize {
            self.tree_calls.get()
        }

        pub fn text_calls(&self) -> usize {
            self.text_calls.get()
        }
    }

    impl ContentSource for MemorySource {
        fn host(&self) -> &ContentHost {
            &self.host
        }

        async fn fetch_tree(&self) -> Result<Vec<TreeEntry>, FetchError> {
            self.tree_calls.set(self.tree_calls.get() + 1);
            self.tree.borrow().clone()
        }

        async fn fetch_text(&self, path: &str) -> Result<String, FetchError> {
            self.text_calls.set(self.text_calls.get() + 1);
            self.files
                .get(path)
                .cloned()
                .unwrap_or(Err(FetchError::HttpError(404)))
        }
    }
}
