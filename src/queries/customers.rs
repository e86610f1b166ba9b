//! Customer listing backed by `/api/customers`.

use crate::cache::QueryKey;
use crate::config;
use crate::connection::Connection;
use crate::error::Result;
use crate::models::{CustomerSort, CustomerStat};
use crate::query_params::QueryParams;

// ---------------------------------------------------------------------------
// SearchCustomersParams
// ---------------------------------------------------------------------------

/// Parameters for [`CustomerQuery::list`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCustomersParams {
    /// Table ordering. `Id` sorts client-side; the others are sent as `sortBy`.
    pub sort: CustomerSort,
    /// Name filter. Blank values are not sent.
    pub name: Option<String>,
}

impl SearchCustomersParams {
    /// The name filter to send, with blank input treated as absent.
    pub fn name_filter(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.trim().is_empty())
    }

    /// The cache key for these parameters.
    pub fn key(&self) -> QueryKey {
        QueryKey::Customers {
            sort_by: self.sort.sort_by(),
            name: self.name_filter().map(|n| n.to_string()),
        }
    }

    /// The request issued for these parameters.
    pub fn request(&self) -> QueryParams {
        let mut request = QueryParams::new(config::CUSTOMERS_PATH);
        request
            .param_opt("sortBy", self.sort.sort_by().map(|s| s.as_str()))
            .param_opt("name", self.name_filter());
        request
    }
}

// ---------------------------------------------------------------------------
// CustomerQuery
// ---------------------------------------------------------------------------

/// Query interface for per-customer purchase totals.
pub struct CustomerQuery<'a> {
    conn: &'a Connection,
}

impl<'a> CustomerQuery<'a> {
    /// Create a new `CustomerQuery` bound to the given connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Customers matching `params`.
    ///
    /// With [`CustomerSort::Id`] the result is ordered by ascending id;
    /// otherwise the backend's order is kept.
    pub fn list(&self, params: &SearchCustomersParams) -> Result<Vec<CustomerStat>> {
        let mut customers: Vec<CustomerStat> = self.conn.fetch(params.key(), &params.request())?;
        if params.sort == CustomerSort::Id {
            customers.sort_by_key(|c| c.id);
        }
        Ok(customers)
    }

    /// Every customer, ordered by id.
    pub fn all(&self) -> Result<Vec<CustomerStat>> {
        self.list(&SearchCustomersParams::default())
    }

    /// Customers whose name matches `name`, ordered by id.
    pub fn search(&self, name: &str) -> Result<Vec<CustomerStat>> {
        self.list(&SearchCustomersParams {
            sort: CustomerSort::Id,
            name: Some(name.to_string()),
        })
    }
}
