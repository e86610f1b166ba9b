//! In-memory query cache keyed by normalized request parameters.
//!
//! Every fetch is identified by a [`QueryKey`] built from its full parameter
//! set. Successful response bodies are kept until they are older than the
//! configured stale time or until they are invalidated.

use crate::models::SortOrder;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::time::{Duration, Instant};

/// Group of keys belonging to one endpoint, used for bulk invalidation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryScope {
    PurchaseFrequency,
    Customers,
    CustomerPurchases,
}

impl fmt::Display for QueryScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            QueryScope::PurchaseFrequency => "purchase-frequency",
            QueryScope::Customers => "customers",
            QueryScope::CustomerPurchases => "customer-purchases",
        };
        f.write_str(name)
    }
}

/// Normalized parameter tuple identifying one cached request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryKey {
    PurchaseFrequency {
        from: Option<String>,
        to: Option<String>,
    },
    Customers {
        sort_by: Option<SortOrder>,
        name: Option<String>,
    },
    CustomerPurchases {
        customer_id: i64,
    },
}

impl QueryKey {
    /// The endpoint group this key belongs to.
    pub fn scope(&self) -> QueryScope {
        match self {
            QueryKey::PurchaseFrequency { .. } => QueryScope::PurchaseFrequency,
            QueryKey::Customers { .. } => QueryScope::Customers,
            QueryKey::CustomerPurchases { .. } => QueryScope::CustomerPurchases,
        }
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let part = |v: &Option<String>| v.clone().unwrap_or_else(|| "-".to_string());
        match self {
            QueryKey::PurchaseFrequency { from, to } => {
                write!(f, "{}[{}, {}]", self.scope(), part(from), part(to))
            }
            QueryKey::Customers { sort_by, name } => {
                let sort = sort_by.map(|s| s.to_string());
                write!(f, "{}[{}, {}]", self.scope(), part(&sort), part(name))
            }
            QueryKey::CustomerPurchases { customer_id } => {
                write!(f, "{}[{}]", self.scope(), customer_id)
            }
        }
    }
}

struct CacheEntry {
    body: Value,
    fetched_at: Instant,
}

/// Stores successful response bodies per [`QueryKey`].
///
/// An entry is fresh while its age is strictly less than `stale_time`.
/// Stale entries are never returned by [`get_fresh`](Self::get_fresh) and
/// are evicted the next time any response is stored, so the map holds at
/// most the keys fetched within the last `stale_time`.
pub struct QueryCache {
    /// How long a response is served without refetching.
    pub stale_time: Duration,
    entries: HashMap<QueryKey, CacheEntry>,
}

impl QueryCache {
    /// Create an empty cache with the given staleness window.
    pub fn new(stale_time: Duration) -> Self {
        Self {
            stale_time,
            entries: HashMap::new(),
        }
    }

    /// Return the cached body for `key` if it is still fresh.
    pub fn get_fresh(&self, key: &QueryKey) -> Option<&Value> {
        self.get_fresh_at(key, Instant::now())
    }

    /// Like [`get_fresh`](Self::get_fresh), evaluated at `now`.
    pub fn get_fresh_at(&self, key: &QueryKey, now: Instant) -> Option<&Value> {
        let entry = self.entries.get(key)?;
        let age = now.saturating_duration_since(entry.fetched_at);
        if age < self.stale_time {
            Some(&entry.body)
        } else {
            None
        }
    }

    /// Whether `key` has an entry that is older than the stale time.
    pub fn is_stale(&self, key: &QueryKey) -> bool {
        self.entries.contains_key(key) && self.get_fresh(key).is_none()
    }

    /// Store a successful response body, replacing any previous entry.
    pub fn insert(&mut self, key: QueryKey, body: Value) {
        self.insert_at(key, body, Instant::now());
    }

    /// Store a body as if it had been fetched at `fetched_at`.
    ///
    /// Entries that are stale as of `fetched_at` are evicted first.
    pub fn insert_at(&mut self, key: QueryKey, body: Value, fetched_at: Instant) {
        let stale_time = self.stale_time;
        self.entries.retain(|_, entry| {
            fetched_at.saturating_duration_since(entry.fetched_at) < stale_time
        });
        self.entries.insert(key, CacheEntry { body, fetched_at });
    }

    /// Drop a single key. Returns `true` if it was present.
    pub fn invalidate_key(&mut self, key: &QueryKey) -> bool {
        self.entries.remove(key).is_some()
    }

    /// Drop every key in `scope`. Returns the number of entries removed.
    pub fn invalidate(&mut self, scope: QueryScope) -> usize {
        let before = self.entries.len();
        self.entries.retain(|k, _| k.scope() != scope);
        before - self.entries.len()
    }

    /// Drop all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of entries, fresh or stale.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
