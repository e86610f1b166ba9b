//! Purchase history of a single customer, backed by `/api/customers/{id}/purchases`.

use crate::cache::QueryKey;
use crate::config;
use crate::connection::Connection;
use crate::error::Result;
use crate::models::PurchaseDetail;
use crate::query_params::QueryParams;

// ---------------------------------------------------------------------------
// CustomerPurchaseQuery
// ---------------------------------------------------------------------------

/// Query interface for one customer's purchases.
pub struct CustomerPurchaseQuery<'a> {
    conn: &'a Connection,
}

impl<'a> CustomerPurchaseQuery<'a> {
    /// Create a new `CustomerPurchaseQuery` bound to the given connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Purchases of `customer_id` in the order returned by the backend.
    pub fn list(&self, customer_id: i64) -> Result<Vec<PurchaseDetail>> {
        let request = QueryParams::new(&config::customer_purchases_path(customer_id));
        self.conn
            .fetch(QueryKey::CustomerPurchases { customer_id }, &request)
    }
}
