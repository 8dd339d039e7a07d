//! Load lifecycle of a listing page.

use super::error::FetchError;

/// Where a page is in fetching its content.
///
/// ```text
/// Idle --start--> Loading --finish(Ok)--> Loaded
///                    ^    --finish(Err)-> Failed
///                    +------- retry ---------+
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadState<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    /// User-facing error message
    Failed(String),
}

impl<T> LoadState<T> {
    /// Enter `Loading`. Allowed from any state; a reload discards the
    /// previous outcome.
    pub fn start(&mut self) {
        *self = Self::Loading;
    }

    /// Record the outcome of the pending load.
    ///
    /// Returns `false` (and leaves the state untouched) when no load is
    /// pending or the load was aborted.
    pub fn finish(&mut self, result: Result<T, FetchError>) -> bool {
        if !self.is_loading() {
            return false;
        }
        match result {
            Ok(value) => *self = Self::Loaded(value),
            Err(e) if e.is_aborted() => return false,
            Err(e) => *self = Self::Failed(failure_message(&e)),
        }
        true
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Identifies one load started through a [`LoadGuard`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Tracks the most recent load so late results of superseded loads can be
/// dropped.
#[derive(Clone, Copy, Debug, Default)]
pub struct LoadGuard {
    latest: u64,
}

impl LoadGuard {
    /// Start a new load, superseding every earlier ticket.
    pub fn begin(&mut self) -> LoadTicket {
        self.latest += 1;
        LoadTicket(self.latest)
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.latest
    }
}

/// Message shown beside the retry button.
pub fn failure_message(err: &FetchError) -> String {
    match err {
        FetchError::HttpError(403) => {
            "The content service is rate limiting requests. Please try again later.".to_string()
        }
        FetchError::HttpError(404) => "The content repository could not be found.".to_string(),
        FetchError::Timeout => "The request timed out. Please try again.".to_string(),
        other => format!("Failed to load content: {}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::listing::{ListingKind, load_listing};
    use crate::core::source::MemorySource;
    use crate::core::tree::TreeEntry;

    #[test]
    fn test_default_is_idle() {
        let state: LoadState<u32> = LoadState::default();
        assert_eq!(state, LoadState::Idle);
        assert!(state.loaded().is_none());
    }

    #[test]
    fn test_finish_requires_pending_load() {
        let mut state: LoadState<u32> = LoadState::Idle;
        assert!(!state.finish(Ok(1)));
        assert_eq!(state, LoadState::Idle);

        state.start();
        assert!(state.finish(Ok(1)));
        assert_eq!(state.loaded(), Some(&1));

        assert!(!state.finish(Ok(2)));
        assert_eq!(state.loaded(), Some(&1));
    }

    #[test]
    fn test_aborted_load_stays_pending() {
        let mut state: LoadState<u32> = LoadState::Loading;
        assert!(!state.finish(Err(FetchError::Aborted)));
        assert!(state.is_loading());
    }

    #[test]
    fn test_failure_messages() {
        let mut state: LoadState<u32> = LoadState::Loading;
        state.finish(Err(FetchError::HttpError(500)));
        assert_eq!(
            state.error(),
            Some("Failed to load content: HTTP error: 500")
        );
        assert!(failure_message(&FetchError::HttpError(403)).contains("rate limiting"));
    }

    #[test]
    fn test_superseded_result_is_dropped() {
        let mut guard = LoadGuard::default();
        let mut state: LoadState<&str> = LoadState::Idle;

        let first = guard.begin();
        state.start();
        let second = guard.begin();
        state.start();

        // The first load answers late, after the reload started
        assert!(!guard.is_current(first));
        assert!(state.is_loading());

        assert!(guard.is_current(second));
        assert!(state.finish(Ok("fresh")));
        assert_eq!(state.loaded(), Some(&"fresh"));
    }

    #[tokio::test]
    async fn test_failed_tree_then_retry() {
        let source = MemorySource::new(&[]).with_file(
            "Notices/exam.txt",
            "Exam Schedule\n2024-02-15\nExams\ntrue\nRoom 4",
        );
        source.set_tree(Err(FetchError::HttpError(403)));

        let mut state = LoadState::Idle;
        state.start();
        state.finish(load_listing(&source, ListingKind::Notices).await);
        assert!(state.error().is_some_and(|m| m.contains("rate limiting")));

        source.set_tree(Ok(vec![TreeEntry::file("Notices/exam.txt", Some(64))]));
        state.start();
        assert!(state.is_loading());
        state.finish(load_listing(&source, ListingKind::Notices).await);

        let items = state.loaded().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Exam Schedule");
        assert!(items[0].pinned);
        assert_eq!(source.tree_calls(), 2);
    }
}
