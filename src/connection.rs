//! HTTP transport to the dashboard backend with per-key response caching.
//!
//! Each request goes through three steps:
//! - a fresh cache entry for the request's [`QueryKey`] is returned as-is
//! - otherwise the endpoint is fetched, retrying failed attempts
//! - non-2xx responses are normalized into a single [`DashboardError::Api`]

use crate::cache::{QueryCache, QueryKey, QueryScope};
use crate::error::{DashboardError, Result};
use crate::query_params::QueryParams;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::cell::RefCell;
use std::time::Duration;

/// Message used when a failed response has no parsable JSON body.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Blocking HTTP connection to the backend plus its query cache.
pub struct Connection {
    /// Base URL without a trailing slash, e.g. `http://localhost:3000`.
    pub base_url: String,
    /// Additional attempts after a failed request.
    pub retries: u32,
    pub(crate) cache: RefCell<QueryCache>,
    client: Client,
}

impl Connection {
    /// Create a connection to `base_url`.
    ///
    /// Fails only if the underlying HTTP client cannot be constructed.
    pub fn new(base_url: &str, timeout: Duration, retries: u32, cache: QueryCache) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            retries,
            cache: RefCell::new(cache),
            client,
        })
    }

    /// Fetch and decode the response for `request`, served from the cache
    /// while the entry for `key` is fresh.
    ///
    /// Only bodies that decode successfully are cached.
    pub fn fetch<T: DeserializeOwned>(&self, key: QueryKey, request: &QueryParams) -> Result<T> {
        if let Some(body) = self.cache.borrow().get_fresh(&key) {
            tracing::debug!(%key, "serving cached response");
            return Ok(serde_json::from_value(body.clone())?);
        }

        let body = self.get_json(request)?;
        let decoded = serde_json::from_value(body.clone())?;
        self.cache.borrow_mut().insert(key, body);
        Ok(decoded)
    }

    /// Issue a GET for `request`, bypassing the cache.
    ///
    /// A failed attempt is retried up to [`retries`](Self::retries) times;
    /// the last error is returned.
    pub fn get_json(&self, request: &QueryParams) -> Result<Value> {
        let url = self.url_for(request);
        let mut attempt = 0;
        loop {
            match self.send(&url) {
                Ok(body) => return Ok(body),
                Err(e) if attempt < self.retries => {
                    attempt += 1;
                    tracing::warn!(%url, attempt, error = %e, "request failed, retrying");
                }
                Err(e) => {
                    tracing::warn!(%url, error = %e, "request failed");
                    return Err(e);
                }
            }
        }
    }

    /// Absolute URL for a request.
    pub fn url_for(&self, request: &QueryParams) -> String {
        format!("{}{}", self.base_url, request.to_url_path())
    }

    fn send(&self, url: &str) -> Result<Value> {
        tracing::debug!(%url, "GET");
        let resp = self
            .client
            .get(url)
            .header(CONTENT_TYPE, "application/json")
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            return Err(DashboardError::Api {
                status: status.as_u16(),
                message: error_message(status.as_u16(), &body),
            });
        }

        Ok(resp.json()?)
    }

    // -- Cache control ------------------------------------------------------

    /// Drop every cached response of `scope`.
    pub fn invalidate(&self, scope: QueryScope) -> usize {
        let removed = self.cache.borrow_mut().invalidate(scope);
        tracing::info!(%scope, removed, "invalidated cached queries");
        removed
    }

    /// Drop the cached response for one key.
    pub fn invalidate_key(&self, key: &QueryKey) -> bool {
        self.cache.borrow_mut().invalidate_key(key)
    }

    /// Drop every cached response.
    pub fn clear_cache(&self) {
        self.cache.borrow_mut().clear();
    }

    /// Number of cached responses, fresh or stale.
    pub fn cached_queries(&self) -> usize {
        self.cache.borrow().len()
    }

    /// The configured staleness window.
    pub fn stale_time(&self) -> Duration {
        self.cache.borrow().stale_time
    }
}

/// Human-readable message for a non-2xx response body.
///
/// Uses the body's `error` field when present, a status-based message when
/// the body is JSON without one, and [`UNKNOWN_ERROR`] when the body is not
/// JSON at all.
pub fn error_message(status: u16, body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(json) => json
            .get("error")
            .and_then(|e| e.as_str())
            .filter(|m| !m.is_empty())
            .map(|m| m.to_string())
            .unwrap_or_else(|| format!("HTTP error! status: {}", status)),
        Err(_) => UNKNOWN_ERROR.to_string(),
    }
}
