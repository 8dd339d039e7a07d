//! Save remote files through the browser.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, HtmlAnchorElement, Url};

use super::dom::{open_in_new_tab, window};
use super::fetch::{FetchOptions, fetch_bytes};
use crate::config::FETCH_TIMEOUT_MS;
use crate::core::error::FetchError;

#[derive(Debug, Error)]
enum DownloadError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("browser API failed: {0}")]
    Dom(String),
}

impl From<JsValue> for DownloadError {
    fn from(value: JsValue) -> Self {
        Self::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

/// Download `url` as `filename`.
///
/// Cross-origin `download` attributes are ignored by browsers, so the file
/// is fetched into a blob first. If that fails the URL opens in a new tab.
pub async fn download_file(url: &str, filename: &str) {
    if let Err(e) = save_via_blob(url, filename).await {
        log::warn!("download of {} failed ({}), opening in a new tab", filename, e);
        open_in_new_tab(url);
    }
}

async fn save_via_blob(url: &str, filename: &str) -> Result<(), DownloadError> {
    let opts = FetchOptions {
        timeout_ms: FETCH_TIMEOUT_MS,
        ..Default::default()
    };
    let bytes = fetch_bytes(url, &opts).await?;

    let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes.as_slice()));
    let blob = Blob::new_with_u8_array_sequence(&parts)?;
    let object_url = Url::create_object_url_with_blob(&blob)?;

    let result = click_anchor(&object_url, filename);
    let _ = Url::revoke_object_url(&object_url);
    result
}

fn click_anchor(href: &str, filename: &str) -> Result<(), DownloadError> {
    let document = window()
        .and_then(|w| w.document())
        .ok_or(FetchError::NoWindow)?;
    let body = document.body().ok_or(FetchError::NoWindow)?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")?
        .dyn_into()
        .map_err(|_| DownloadError::Dom("created element is not an anchor".to_string()))?;
    anchor.set_href(href);
    anchor.set_download(filename);
    body.append_child(&anchor)?;
    anchor.click();
    body.remove_child(&anchor)?;
    Ok(())
}
