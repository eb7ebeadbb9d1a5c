//! Patient report PDF download.
//!
//! SYSTEM CONTEXT
//! ==============
//! The report is generated on demand and can take a while, so the fetch is
//! raced against the configured deadline and can be cancelled from the UI
//! through a [`DownloadHandle`]. On success the bytes are handed to the
//! browser as a blob link and clicked.

#[cfg(test)]
#[path = "download_test.rs"]
mod download_test;

use std::cell::Cell;
use std::rc::Rc;

use super::error::ApiError;

/// Cancellation handle for one in-flight download.
#[derive(Clone, Default)]
pub struct DownloadHandle {
    cancelled: Rc<Cell<bool>>,
    #[cfg(feature = "csr")]
    controller: Option<web_sys::AbortController>,
}

impl DownloadHandle {
    pub fn new() -> Self {
        Self {
            cancelled: Rc::new(Cell::new(false)),
            #[cfg(feature = "csr")]
            controller: web_sys::AbortController::new().ok(),
        }
    }

    /// Abort the request; the pending download resolves to [`ApiError::Cancelled`].
    pub fn cancel(&self) {
        self.cancelled.set(true);
        #[cfg(feature = "csr")]
        if let Some(controller) = &self.controller {
            controller.abort();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

pub const DOWNLOAD_FAILED: &str = "No se pudo descargar el reporte.";

/// Text shown after a failed download. Only a cancellation gets its own
/// wording; backend details stay in the log.
pub fn failure_message(err: &ApiError) -> String {
    match err {
        ApiError::Cancelled => err.to_string(),
        _ => DOWNLOAD_FAILED.to_owned(),
    }
}

/// `Reporte_Genetico_{name}.pdf`, with anything outside `[A-Za-z0-9_-]`
/// replaced so the name is safe on every filesystem.
pub fn report_filename(name: &str) -> String {
    let cleaned: String = name
        .trim()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    let cleaned = cleaned.trim_matches('_');
    let stem = if cleaned.is_empty() { "usuario" } else { cleaned };
    format!("Reporte_Genetico_{stem}.pdf")
}

/// Fetch the current user's report and save it as `report_filename(name)`.
///
/// # Errors
///
/// [`ApiError::Cancelled`] after [`DownloadHandle::cancel`],
/// [`ApiError::Timeout`] past the configured deadline, or the backend error.
pub async fn download_report(handle: &DownloadHandle, name: &str) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        use futures::future::{Either, select};

        let millis = u32::try_from(crate::util::config::config().pdf_timeout.as_millis()).unwrap_or(u32::MAX);
        let fetch = Box::pin(fetch_pdf(handle));
        let timer = Box::pin(gloo_timers::future::TimeoutFuture::new(millis));
        let bytes = match select(fetch, timer).await {
            Either::Left((result, _)) => result?,
            Either::Right(_) => {
                if let Some(controller) = &handle.controller {
                    controller.abort();
                }
                log::warn!("report download timed out after {millis} ms");
                return Err(ApiError::Timeout);
            }
        };
        save_pdf(&bytes, &report_filename(name))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = name;
        if handle.is_cancelled() { Err(ApiError::Cancelled) } else { Err(ApiError::Network) }
    }
}

#[cfg(feature = "csr")]
async fn fetch_pdf(handle: &DownloadHandle) -> Result<Vec<u8>, ApiError> {
    use gloo_net::http::Request;
    use schema::ApiResponse;

    use super::endpoints;
    use super::http::parse_body;

    let mut builder = Request::get(&endpoints::url(endpoints::REPORT_PDF));
    if let Some(token) = crate::util::token::get_token() {
        builder = builder.header("Authorization", &crate::util::token::bearer(&token));
    }
    let signal = handle.controller.as_ref().map(web_sys::AbortController::signal);
    let resp = match builder.abort_signal(signal.as_ref()).send().await {
        Ok(resp) => resp,
        Err(err) => {
            if handle.is_cancelled() {
                return Err(ApiError::Cancelled);
            }
            log::warn!("report download failed: {err}");
            return Err(ApiError::Network);
        }
    };
    if !resp.ok() {
        let status = resp.status();
        let text = resp.text().await.unwrap_or_default();
        return Err(ApiError::from_response(&ApiResponse::new(status, parse_body(&text)), "Error al generar el reporte"));
    }
    resp.binary().await.map_err(|err| {
        if handle.is_cancelled() {
            ApiError::Cancelled
        } else {
            log::warn!("report body read failed: {err}");
            ApiError::Browser(DOWNLOAD_FAILED.to_owned())
        }
    })
}

#[cfg(feature = "csr")]
fn save_pdf(bytes: &[u8], filename: &str) -> Result<(), ApiError> {
    use wasm_bindgen::JsCast;

    let fail = || ApiError::Browser(DOWNLOAD_FAILED.to_owned());

    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("application/pdf");
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(|_| fail())?;
    let href = web_sys::Url::create_object_url_with_blob(&blob).map_err(|_| fail())?;

    let document = web_sys::window().and_then(|w| w.document()).ok_or_else(fail)?;
    let anchor = document
        .create_element("a")
        .map_err(|_| fail())?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| fail())?;
    anchor.set_href(&href);
    anchor.set_download(filename);
    if let Some(body) = document.body() {
        let _ = body.append_child(&anchor);
    }
    anchor.click();
    anchor.remove();
    let _ = web_sys::Url::revoke_object_url(&href);
    Ok(())
}
