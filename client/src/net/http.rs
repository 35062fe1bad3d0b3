//! The single HTTP request issuer shared by every page.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: every request resolves to
//! [`ApiError::Unavailable`] since the remote API is only called from the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, non-2xx statuses, and undecodable bodies are kept
//! distinct so call sites can log precisely and still collapse them into one
//! localized message. There is no retry, backoff, caching, or de-duplication.
//!
//! The API answers lists either as a bare array or as `{ "data": [...] }`.
//! [`normalize_list`] and [`normalize_object`] absorb both shapes here so
//! pages only ever see typed values.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Errors produced by [`ApiClient`].
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, CORS, offline, ...).
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("request failed with status {0}")]
    Status(u16),
    /// The request body could not be encoded or the response body decoded.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// No browser HTTP stack is available (SSR or native tests).
    #[error("http client unavailable outside the browser")]
    Unavailable,
}

/// HTTP verbs used against the CMS API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

/// Request issuer bound to a fixed API base address.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Build a client for `base_url`; a trailing `/` is dropped.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim().trim_end_matches('/').to_owned();
        Self { base_url }
    }

    /// Absolute URL for an API path such as `/api/tags`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }

    /// Issue a request without a body.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn send_empty(&self, method: Method, path: &str, token: Option<&str>) -> Result<Value, ApiError> {
        self.dispatch(method, path, token, None).await
    }

    /// Issue a request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn send_json<B>(&self, method: Method, path: &str, token: Option<&str>, body: &B) -> Result<Value, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_value(body)?;
        self.dispatch(method, path, token, Some(body)).await
    }

    async fn dispatch(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> Result<Value, ApiError> {
        let url = self.url(path);
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;

            let mut builder = match method {
                Method::Get => Request::get(&url),
                Method::Post => Request::post(&url),
                Method::Put => Request::put(&url),
                Method::Patch => Request::patch(&url),
                Method::Delete => Request::delete(&url),
            };
            if let Some(token) = token {
                builder = builder.header("Authorization", &bearer(token));
            }
            let request = match body {
                Some(body) => builder.json(&body),
                None => builder.build(),
            }
            .map_err(|e| ApiError::Network(e.to_string()))?;

            let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
            if !resp.ok() {
                leptos::logging::warn!("{} {url} -> {}", method.as_str(), resp.status());
                return Err(ApiError::Status(resp.status()));
            }
            let text = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
            parse_body(&text)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (url, method, token, body);
            Err(ApiError::Unavailable)
        }
    }
}

/// `Authorization` header value for `token`.
#[must_use]
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Decode a response body; an empty body (e.g. `204 No Content`) is `null`.
///
/// # Errors
///
/// Returns [`ApiError::Json`] when the body is not valid JSON.
pub fn parse_body(text: &str) -> Result<Value, ApiError> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(text)?)
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum ListEnvelope<T> {
    Bare(Vec<T>),
    Wrapped { data: Vec<T> },
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum ObjectEnvelope<T> {
    Bare(T),
    Wrapped { data: T },
}

/// Extract a list from either a bare array or a `{ "data": [...] }` envelope.
///
/// Any other shape yields an empty list. Rows are decoded one at a time; a
/// row that does not decode as `T` is skipped and the rest are kept.
pub fn normalize_list<T: DeserializeOwned>(body: Value) -> Vec<T> {
    let rows = match serde_json::from_value::<ListEnvelope<Value>>(body) {
        Ok(ListEnvelope::Bare(rows) | ListEnvelope::Wrapped { data: rows }) => rows,
        Err(e) => {
            leptos::logging::warn!("unexpected list response shape: {e}");
            return Vec::new();
        }
    };
    rows.into_iter()
        .filter_map(|row| match serde_json::from_value(row) {
            Ok(item) => Some(item),
            Err(e) => {
                leptos::logging::warn!("skipping undecodable list row: {e}");
                None
            }
        })
        .collect()
}

/// Extract an object from either a bare object or a `{ "data": {...} }` envelope.
///
/// # Errors
///
/// Returns [`ApiError::Json`] when neither shape matches `T`.
pub fn normalize_object<T: DeserializeOwned>(body: Value) -> Result<T, ApiError> {
    match serde_json::from_value::<ObjectEnvelope<T>>(body)? {
        ObjectEnvelope::Bare(item) | ObjectEnvelope::Wrapped { data: item } => Ok(item),
    }
}
