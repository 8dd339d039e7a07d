//! Network fetching utilities with timeout support.
//!
//! Thin wrappers over `gloo-net` that race every request against a timer
//! and translate failures into [`FetchError`]. A request that loses the
//! race is aborted so the browser stops downloading it.

use std::future::Future;
use std::pin::pin;

use futures::future::{Either, select};
use gloo_net::http::{Request, Response};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AbortController, AbortSignal};

use crate::core::error::FetchError;

/// Options shared by every request of one page load.
#[derive(Clone, Debug, Default)]
pub struct FetchOptions {
    /// `User-Agent` header value (empty to omit)
    pub user_agent: String,
    /// Timeout in milliseconds (0 disables the timer)
    pub timeout_ms: u32,
    /// Cancels in-flight requests when the owning view goes away
    pub abort: Option<AbortSignal>,
}

impl FetchOptions {
    fn is_aborted(&self) -> bool {
        self.abort.as_ref().is_some_and(AbortSignal::aborted)
    }
}

/// Race a future against a timeout.
///
/// Returns `FetchError::Timeout` if the timer fires first.
pub async fn race_with_timeout<F, T>(future: F, timeout_ms: u32) -> Result<T, FetchError>
where
    F: Future<Output = Result<T, FetchError>>,
{
    if timeout_ms == 0 {
        return future.await;
    }

    let future = pin!(future);
    let timeout = pin!(TimeoutFuture::new(timeout_ms));

    match select(future, timeout).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(FetchError::Timeout),
    }
}

// =============================================================================
// Per-request Abort
// =============================================================================

/// Abort handle of a single request.
///
/// Follows the page-level signal from [`FetchOptions::abort`] and can also
/// be fired on its own when the request times out.
struct RequestAbort {
    controller: Option<AbortController>,
    parent: Option<(AbortSignal, Closure<dyn FnMut()>)>,
}

impl RequestAbort {
    fn new(parent: Option<&AbortSignal>) -> Self {
        let controller = AbortController::new().ok();
        let parent = match (parent, &controller) {
            (Some(parent), Some(controller)) if parent.aborted() => {
                controller.abort();
                None
            }
            (Some(parent), Some(controller)) => {
                let child = controller.clone();
                let on_abort = Closure::<dyn FnMut()>::new(move || child.abort());
                parent
                    .add_event_listener_with_callback("abort", on_abort.as_ref().unchecked_ref())
                    .ok()
                    .map(|_| (parent.clone(), on_abort))
            }
            _ => None,
        };
        Self { controller, parent }
    }

    fn signal(&self) -> Option<AbortSignal> {
        self.controller.as_ref().map(AbortController::signal)
    }

    fn abort(&self) {
        if let Some(controller) = &self.controller {
            controller.abort();
        }
    }

    /// Race `future` against the timeout, aborting the request if it loses.
    async fn within<F, T>(&self, future: F, timeout_ms: u32) -> Result<T, FetchError>
    where
        F: Future<Output = Result<T, FetchError>>,
    {
        let result = race_with_timeout(future, timeout_ms).await;
        if matches!(result, Err(FetchError::Timeout)) {
            self.abort();
        }
        result
    }
}

impl Drop for RequestAbort {
    fn drop(&mut self) {
        if let Some((parent, on_abort)) = self.parent.take() {
            let _ = parent
                .remove_event_listener_with_callback("abort", on_abort.as_ref().unchecked_ref());
        }
    }
}

// =============================================================================
// Requests
// =============================================================================

/// Fetch text content from a URL.
pub async fn fetch_text(url: &str, opts: &FetchOptions) -> Result<String, FetchError> {
    let abort = RequestAbort::new(opts.abort.as_ref());
    let response = send(url, opts, &abort).await?;
    abort
        .within(
            async {
                response
                    .text()
                    .await
                    .map_err(|e| read_error(opts, e))
            },
            opts.timeout_ms,
        )
        .await
}

/// Fetch binary content from a URL.
pub async fn fetch_bytes(url: &str, opts: &FetchOptions) -> Result<Vec<u8>, FetchError> {
    let abort = RequestAbort::new(opts.abort.as_ref());
    let response = send(url, opts, &abort).await?;
    abort
        .within(
            async {
                response
                    .binary()
                    .await
                    .map_err(|e| read_error(opts, e))
            },
            opts.timeout_ms,
        )
        .await
}

fn read_error(opts: &FetchOptions, err: gloo_net::Error) -> FetchError {
    if opts.is_aborted() {
        FetchError::Aborted
    } else {
        FetchError::ResponseReadFailed(err.to_string())
    }
}

/// Issue a GET and reject non-2xx responses.
async fn send(url: &str, opts: &FetchOptions, abort: &RequestAbort) -> Result<Response, FetchError> {
    let signal = abort.signal();
    let mut request = Request::get(url).abort_signal(signal.as_ref());
    if !opts.user_agent.is_empty() {
        request = request.header("User-Agent", &opts.user_agent);
    }

    let response = abort
        .within(
            async {
                request.send().await.map_err(|e| {
                    if opts.is_aborted() {
                        FetchError::Aborted
                    } else {
                        FetchError::NetworkError(e.to_string())
                    }
                })
            },
            opts.timeout_ms,
        )
        .await?;

    if !response.ok() {
        return Err(FetchError::HttpError(response.status()));
    }

    Ok(response)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn test_timeout_wins_over_pending_future() {
        let result: Result<(), _> = race_with_timeout(futures::future::pending(), 10).await;
        assert_eq!(result, Err(FetchError::Timeout));
    }

    #[wasm_bindgen_test]
    async fn test_timeout_aborts_request() {
        let abort = RequestAbort::new(None);
        let signal = abort.signal().unwrap();

        let result: Result<(), _> = abort.within(futures::future::pending(), 10).await;
        assert_eq!(result, Err(FetchError::Timeout));
        assert!(signal.aborted());
    }

    #[wasm_bindgen_test]
    fn test_page_abort_reaches_request() {
        let page = AbortController::new().unwrap();
        let abort = RequestAbort::new(Some(&page.signal()));
        let signal = abort.signal().unwrap();
        assert!(!signal.aborted());

        page.abort();
        assert!(signal.aborted());

        let late = RequestAbort::new(Some(&page.signal()));
        assert!(late.signal().unwrap().aborted());
    }
}
