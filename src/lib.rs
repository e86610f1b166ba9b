//! Purchase dashboard SDK for Rust.
//!
//! Provides a client for the shopping purchase dashboard backend together
//! with the pure logic that sits between user input and the API: date
//! filter resolution, price range and revenue labels, and pagination.
//! Responses are cached in memory per parameter set and refetched once
//! they go stale.
//!
//! # Quick start
//!
//! ```no_run
//! use purchase_dashboard_sdk::{date_range, DashboardClient};
//! use purchase_dashboard_sdk::queries::SearchCustomersParams;
//! use time::macros::date;
//!
//! let client = DashboardClient::builder()
//!     .base_url("http://localhost:3000")
//!     .build()
//!     .unwrap();
//!
//! // Price buckets for one week
//! let range = date_range::resolve(Some(date!(2024 - 07 - 15)), Some(date!(2024 - 07 - 20)), false);
//! let buckets = client.purchase_frequency().by_date_range(&range).unwrap();
//!
//! // Customers ordered by total amount, highest first
//! let params = SearchCustomersParams {
//!     sort: purchase_dashboard_sdk::models::CustomerSort::Desc,
//!     name: None,
//! };
//! let customers = client.customers().list(&params).unwrap();
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod cache;
pub mod config;
pub mod connection;
pub mod date_range;
pub mod error;
pub mod format;
pub mod models;
pub mod pagination;
pub mod queries;
pub mod query_params;
pub mod views;

#[cfg(feature = "async")]
pub use async_client::AsyncDashboardClient;
pub use cache::{QueryCache, QueryKey, QueryScope};
pub use connection::Connection;
pub use date_range::{DateRangeFilter, DateRangeQuery};
pub use error::{DashboardError, Result};
pub use pagination::Pagination;
pub use query_params::QueryParams;

use std::fmt;
use std::time::Duration;

// ---------------------------------------------------------------------------
// DashboardClientBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`DashboardClient`] instance.
///
/// Use [`DashboardClient::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](DashboardClientBuilder::build) to create the client.
#[derive(Debug, Clone)]
pub struct DashboardClientBuilder {
    base_url: Option<String>,
    timeout: Duration,
    stale_time: Duration,
    retries: u32,
}

impl Default for DashboardClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: config::DEFAULT_TIMEOUT,
            stale_time: config::DEFAULT_STALE_TIME,
            retries: config::DEFAULT_RETRIES,
        }
    }
}

impl DashboardClientBuilder {
    /// Set the backend base URL.
    ///
    /// If not set, `DASHBOARD_API_BASE_URL` is read from the environment,
    /// falling back to `http://localhost:3000`.
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = Some(url.to_string());
        self
    }

    /// Set the HTTP request timeout.
    ///
    /// Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set how long a response is served from the cache before it is refetched.
    ///
    /// Defaults to 5 minutes. `Duration::ZERO` disables caching.
    pub fn stale_time(mut self, stale_time: Duration) -> Self {
        self.stale_time = stale_time;
        self
    }

    /// Set how many times a failed request is retried.
    ///
    /// Defaults to 1.
    pub fn retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    /// Build the client. No request is made until the first query.
    pub fn build(self) -> Result<DashboardClient> {
        let base_url = self.base_url.unwrap_or_else(config::default_base_url);
        let cache = QueryCache::new(self.stale_time);
        let conn = Connection::new(&base_url, self.timeout, self.retries, cache)?;
        tracing::debug!(base_url = %conn.base_url, "dashboard client ready");
        Ok(DashboardClient { conn })
    }
}

// ---------------------------------------------------------------------------
// DashboardClient
// ---------------------------------------------------------------------------

/// The main entry point for the dashboard SDK.
///
/// Wraps a [`Connection`] (which owns the HTTP client and the
/// [`QueryCache`]) and exposes endpoint-specific query interfaces as
/// lightweight borrowing wrappers.
///
/// Created via [`DashboardClient::builder()`].
pub struct DashboardClient {
    conn: Connection,
}

impl DashboardClient {
    /// Create a new builder for configuring the client.
    pub fn builder() -> DashboardClientBuilder {
        DashboardClientBuilder::default()
    }

    // -- Query accessors ---------------------------------------------------

    /// Access the purchase frequency (price bucket) query interface.
    pub fn purchase_frequency(&self) -> queries::PurchaseFrequencyQuery<'_> {
        queries::PurchaseFrequencyQuery::new(&self.conn)
    }

    /// Access the customer list query interface.
    pub fn customers(&self) -> queries::CustomerQuery<'_> {
        queries::CustomerQuery::new(&self.conn)
    }

    /// Access the per-customer purchase history query interface.
    pub fn customer_purchases(&self) -> queries::CustomerPurchaseQuery<'_> {
        queries::CustomerPurchaseQuery::new(&self.conn)
    }

    // -- Cache control -----------------------------------------------------

    /// Drop all cached responses of one endpoint so the next query refetches.
    ///
    /// Returns the number of cached responses removed.
    pub fn invalidate(&self, scope: QueryScope) -> usize {
        self.conn.invalidate(scope)
    }

    /// Drop the cached response for a single parameter set.
    pub fn invalidate_key(&self, key: &QueryKey) -> bool {
        self.conn.invalidate_key(key)
    }

    /// Drop every cached response.
    pub fn clear_cache(&self) {
        self.conn.clear_cache();
    }

    /// Number of cached responses, fresh or stale.
    pub fn cached_queries(&self) -> usize {
        self.conn.cached_queries()
    }

    /// Return a reference to the underlying [`Connection`] for advanced usage.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for DashboardClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DashboardClient(base_url={}, stale_time={}s, retries={}, cached={})",
            self.conn.base_url,
            self.conn.stale_time().as_secs(),
            self.conn.retries,
            self.conn.cached_queries()
        )
    }
}
