//! Async wrapper around [`DashboardClient`] for use in async runtimes (Tokio, etc.).
//!
//! Runs all client operations on a blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free.
//!
//! # Example
//!
//! ```no_run
//! use purchase_dashboard_sdk::AsyncDashboardClient;
//! use purchase_dashboard_sdk::DateRangeQuery;
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = AsyncDashboardClient::builder().build().await.unwrap();
//!
//!     // Run any sync client method via closure
//!     let customers = client.run(|c| c.customers().all()).await.unwrap();
//!
//!     // Convenience method for the price buckets
//!     let buckets = client.purchase_frequency(DateRangeQuery::full_range()).await.unwrap();
//! }
//! ```

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::cache::QueryScope;
use crate::config;
use crate::date_range::DateRangeQuery;
use crate::error::{DashboardError, Result};
use crate::models::{CustomerStat, PriceBucketStat, PurchaseDetail};
use crate::queries::SearchCustomersParams;
use crate::DashboardClient;

// ---------------------------------------------------------------------------
// AsyncDashboardClientBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncDashboardClient`] instance.
pub struct AsyncDashboardClientBuilder {
    base_url: Option<String>,
    timeout: Duration,
    stale_time: Duration,
    retries: u32,
}

impl Default for AsyncDashboardClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: config::DEFAULT_TIMEOUT,
            stale_time: config::DEFAULT_STALE_TIME,
            retries: config::DEFAULT_RETRIES,
        }
    }
}

impl AsyncDashboardClientBuilder {
    /// Set the backend base URL.
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = Some(url.to_string());
        self
    }

    /// Set the HTTP request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the cache staleness window.
    pub fn stale_time(mut self, stale_time: Duration) -> Self {
        self.stale_time = stale_time;
        self
    }

    /// Set how many times a failed request is retried.
    pub fn retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    /// Build the async client.
    ///
    /// The blocking HTTP client is constructed on the blocking thread pool
    /// since it spins up its own runtime internally.
    pub async fn build(self) -> Result<AsyncDashboardClient> {
        tokio::task::spawn_blocking(move || {
            let mut builder = DashboardClient::builder();
            if let Some(url) = self.base_url {
                builder = builder.base_url(&url);
            }
            builder = builder
                .timeout(self.timeout)
                .stale_time(self.stale_time)
                .retries(self.retries);
            let client = builder.build()?;
            Ok(AsyncDashboardClient {
                inner: Some(Arc::new(Mutex::new(client))),
            })
        })
        .await
        .map_err(|e| DashboardError::InvalidArgument(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncDashboardClient
// ---------------------------------------------------------------------------

/// Async wrapper around [`DashboardClient`].
///
/// All operations are dispatched to a blocking thread pool via
/// [`tokio::task::spawn_blocking`]. The underlying [`DashboardClient`] is
/// protected by a [`Mutex`] since its cache uses `RefCell` internally, so
/// concurrent calls run one at a time and a repeated call with the same
/// parameters is answered from the cache.
///
/// The blocking client must not be dropped on an async worker thread. Call
/// [`close`](Self::close) to release it, or drop the wrapper inside a Tokio
/// runtime, which hands it to the blocking pool.
pub struct AsyncDashboardClient {
    inner: Option<Arc<Mutex<DashboardClient>>>,
}

impl AsyncDashboardClient {
    /// Create a new builder for configuring the async client.
    pub fn builder() -> AsyncDashboardClientBuilder {
        AsyncDashboardClientBuilder::default()
    }

    /// Run a sync client operation on the blocking thread pool.
    ///
    /// The closure receives a `&DashboardClient` reference and should return
    /// a `Result<T>`.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&DashboardClient) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let client = self
            .inner
            .clone()
            .ok_or_else(|| DashboardError::InvalidArgument("Client is closed".into()))?;
        tokio::task::spawn_blocking(move || {
            let guard = client
                .lock()
                .map_err(|_| DashboardError::InvalidArgument("Client lock poisoned".into()))?;
            f(&guard)
        })
        .await
        .map_err(|e| DashboardError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// Price buckets for a resolved date range.
    pub async fn purchase_frequency(&self, range: DateRangeQuery) -> Result<Vec<PriceBucketStat>> {
        self.run(move |c| c.purchase_frequency().by_date_range(&range))
            .await
    }

    /// Customers matching `params`.
    pub async fn customers(&self, params: SearchCustomersParams) -> Result<Vec<CustomerStat>> {
        self.run(move |c| c.customers().list(&params)).await
    }

    /// Purchase history of one customer.
    pub async fn customer_purchases(&self, customer_id: i64) -> Result<Vec<PurchaseDetail>> {
        self.run(move |c| c.customer_purchases().list(customer_id))
            .await
    }

    /// Drop all cached responses of one endpoint.
    pub async fn invalidate(&self, scope: QueryScope) -> Result<usize> {
        self.run(move |c| Ok(c.invalidate(scope))).await
    }

    /// Number of cached responses, fresh or stale.
    pub async fn cached_queries(&self) -> Result<usize> {
        self.run(|c| Ok(c.cached_queries())).await
    }

    /// Release the underlying client on the blocking thread pool.
    pub async fn close(mut self) -> Result<()> {
        let Some(inner) = self.inner.take() else {
            return Ok(());
        };
        tokio::task::spawn_blocking(move || drop(inner))
            .await
            .map_err(|e| DashboardError::InvalidArgument(format!("Task join error: {e}")))
    }
}

impl Drop for AsyncDashboardClient {
    fn drop(&mut self) {
        let Some(inner) = self.inner.take() else {
            return;
        };
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn_blocking(move || drop(inner));
            }
            Err(_) => drop(inner),
        }
    }
}
