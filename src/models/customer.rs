use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// CustomerStat — Per-customer purchase totals
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerStat {
    pub id: i64,
    pub name: String,
    pub count: u64,
    pub total_amount: f64,
}

// ---------------------------------------------------------------------------
// SortOrder — Server-side ordering by total amount
// ---------------------------------------------------------------------------

/// Value of the `sortBy` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// CustomerSort — Ordering selected in the customer table
// ---------------------------------------------------------------------------

/// Ordering of the customer table.
///
/// `Id` is applied client-side because the backend does not guarantee any
/// order when `sortBy` is absent. `Asc` and `Desc` order by total amount and
/// are delegated to the backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CustomerSort {
    #[default]
    Id,
    Asc,
    Desc,
}

impl CustomerSort {
    /// The `sortBy` value to send, if any.
    pub fn sort_by(&self) -> Option<SortOrder> {
        match self {
            CustomerSort::Id => None,
            CustomerSort::Asc => Some(SortOrder::Asc),
            CustomerSort::Desc => Some(SortOrder::Desc),
        }
    }
}
