//! Thin request wrapper producing the `{ok, status, data}` envelope.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every REST call in the client goes through [`api_request`]. It attaches the
//! JSON content type and the stored bearer token, decodes the body leniently,
//! and folds transport failures into a status-0 envelope instead of an error.
//!
//! Outside the browser (`csr` disabled) every request resolves to the
//! connection-error envelope.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use schema::ApiResponse;
use serde::Serialize;
use serde_json::Value;

use super::endpoints;
use super::error::ApiError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// Decode a response body; empty or non-JSON text becomes `{}`.
#[cfg(any(test, feature = "csr"))]
pub(crate) fn parse_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Object(serde_json::Map::new());
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::Object(serde_json::Map::new()))
}

/// Send one JSON request to an absolute `url`.
pub async fn api_request(method: Method, url: &str, body: Option<Value>) -> ApiResponse {
    #[cfg(feature = "csr")]
    {
        match send(method, url, body).await {
            Ok(resp) => resp,
            Err(err) => {
                log::warn!("request {method:?} {url} failed: {err}");
                ApiResponse::connection_error()
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (method, url, body);
        ApiResponse::connection_error()
    }
}

#[cfg(feature = "csr")]
async fn send(method: Method, url: &str, body: Option<Value>) -> Result<ApiResponse, gloo_net::Error> {
    use gloo_net::http::Request;

    let mut builder = match method {
        Method::Get => Request::get(url),
        Method::Post => Request::post(url),
    };
    builder = builder.header("Content-Type", "application/json");
    if let Some(token) = crate::util::token::get_token() {
        builder = builder.header("Authorization", &crate::util::token::bearer(&token));
    }
    let resp = match body {
        Some(payload) => builder.json(&payload)?.send().await?,
        None => builder.send().await?,
    };
    let status = resp.status();
    let text = resp.text().await.unwrap_or_default();
    log::debug!("{method:?} {url} -> {status}");
    Ok(ApiResponse::new(status, parse_body(&text)))
}

/// Multipart upload; the browser sets the boundary content type itself.
#[cfg(feature = "csr")]
pub async fn upload_form(url: &str, form: web_sys::FormData) -> ApiResponse {
    use gloo_net::http::Request;

    let mut builder = Request::post(url);
    if let Some(token) = crate::util::token::get_token() {
        builder = builder.header("Authorization", &crate::util::token::bearer(&token));
    }
    let sent = match builder.body(form) {
        Ok(req) => req.send().await,
        Err(err) => Err(err),
    };
    match sent {
        Ok(resp) => {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            ApiResponse::new(status, parse_body(&text))
        }
        Err(err) => {
            log::warn!("upload to {url} failed: {err}");
            ApiResponse::connection_error()
        }
    }
}

/// `GET` a backend path.
pub async fn get(path: &str) -> ApiResponse {
    api_request(Method::Get, &endpoints::url(path), None).await
}

/// `POST` a serializable body to a backend path.
pub async fn post<T: Serialize>(path: &str, body: &T) -> ApiResponse {
    match serde_json::to_value(body) {
        Ok(value) => api_request(Method::Post, &endpoints::url(path), Some(value)).await,
        Err(err) => {
            log::warn!("could not encode body for {path}: {err}");
            ApiResponse::new(400, serde_json::json!({ "error": err.to_string() }))
        }
    }
}

/// `POST` with no body.
pub async fn post_empty(path: &str) -> ApiResponse {
    api_request(Method::Post, &endpoints::url(path), None).await
}

/// Pass a successful envelope through; map anything else to [`ApiError`].
///
/// # Errors
///
/// Returns [`ApiError::Network`] or [`ApiError::Http`] for failed requests.
pub fn ensure_ok(resp: ApiResponse, fallback: &str) -> Result<ApiResponse, ApiError> {
    if resp.ok { Ok(resp) } else { Err(ApiError::from_response(&resp, fallback)) }
}

/// Like [`ensure_ok`] but also requires `data.success == true`.
///
/// # Errors
///
/// Returns [`ApiError::Http`] when the body reports failure.
pub fn ensure_success(resp: ApiResponse, fallback: &str) -> Result<ApiResponse, ApiError> {
    let resp = ensure_ok(resp, fallback)?;
    if resp.flag("success") { Ok(resp) } else { Err(ApiError::from_response(&resp, fallback)) }
}
