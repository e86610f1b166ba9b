//! Purchase frequency by price range, backed by `/api/purchase-frequency`.

use crate::cache::QueryKey;
use crate::config;
use crate::connection::Connection;
use crate::date_range::DateRangeQuery;
use crate::error::Result;
use crate::models::PriceBucketStat;
use crate::query_params::QueryParams;

// ---------------------------------------------------------------------------
// PurchaseFrequencyQuery
// ---------------------------------------------------------------------------

/// Query interface for the price bucket aggregation.
pub struct PurchaseFrequencyQuery<'a> {
    conn: &'a Connection,
}

impl<'a> PurchaseFrequencyQuery<'a> {
    /// Create a new `PurchaseFrequencyQuery` bound to the given connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Price buckets for the resolved date range.
    ///
    /// `from` and `to` are only sent when set, so a full-range query hits
    /// the bare endpoint.
    pub fn by_date_range(&self, range: &DateRangeQuery) -> Result<Vec<PriceBucketStat>> {
        let key = QueryKey::PurchaseFrequency {
            from: range.from.clone(),
            to: range.to.clone(),
        };
        let request = Self::request(range);
        self.conn.fetch(key, &request)
    }

    /// Price buckets over all available data.
    pub fn all(&self) -> Result<Vec<PriceBucketStat>> {
        self.by_date_range(&DateRangeQuery::full_range())
    }

    /// The request issued for `range`.
    pub fn request(range: &DateRangeQuery) -> QueryParams {
        let mut request = QueryParams::new(config::PURCHASE_FREQUENCY_PATH);
        request
            .param_opt("from", range.from.as_deref())
            .param_opt("to", range.to.as_deref());
        request
    }
}
