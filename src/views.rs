//! Presentation view-models for the chart, the customer table and the
//! purchase detail dialog.
//!
//! Everything here is derived from fetched data and explicit state values;
//! nothing is cached or mutated in place.

use crate::config::DEFAULT_ITEMS_PER_PAGE;
use crate::error::Result;
use crate::format::{
    format_krw, format_price_range, format_purchase_count, format_purchase_date,
    format_purchase_date_at, format_revenue,
};
use crate::models::{CustomerSort, CustomerStat, PriceBucketStat, PurchaseDetail};
use crate::pagination::{page_items, PageItem, Pagination};
use crate::queries::SearchCustomersParams;
use time::UtcOffset;

// ---------------------------------------------------------------------------
// QueryState
// ---------------------------------------------------------------------------

/// Outcome of a load as the UI renders it.
///
/// An empty successful result is `Ready` with no rows, which is shown as
/// "no results" rather than as a failure.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryState<T> {
    Ready(T),
    Failed(String),
}

impl<T> QueryState<T> {
    pub fn is_failed(&self) -> bool {
        matches!(self, QueryState::Failed(_))
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            QueryState::Ready(data) => Some(data),
            QueryState::Failed(_) => None,
        }
    }
}

impl<T> QueryState<Vec<T>> {
    /// `true` only for a successful load with no rows.
    pub fn is_empty(&self) -> bool {
        matches!(self, QueryState::Ready(rows) if rows.is_empty())
    }
}

impl<T> From<Result<T>> for QueryState<T> {
    fn from(result: Result<T>) -> Self {
        match result {
            Ok(data) => QueryState::Ready(data),
            Err(e) => QueryState::Failed(e.message()),
        }
    }
}

// ---------------------------------------------------------------------------
// Purchase frequency chart
// ---------------------------------------------------------------------------

/// One bar of the purchase frequency chart.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyChartPoint {
    pub range: String,
    pub range_label: String,
    pub count: u64,
    pub revenue: f64,
    pub revenue_label: String,
}

impl FrequencyChartPoint {
    pub fn from_bucket(bucket: &PriceBucketStat) -> Result<Self> {
        Ok(Self {
            range: bucket.range.clone(),
            range_label: format_price_range(&bucket.range)?,
            count: bucket.count,
            revenue: bucket.revenue,
            revenue_label: format_revenue(bucket.revenue),
        })
    }
}

/// Chart points for `buckets`, in the same order.
///
/// Fails on the first bucket whose range is malformed.
pub fn chart_points(buckets: &[PriceBucketStat]) -> Result<Vec<FrequencyChartPoint>> {
    buckets.iter().map(FrequencyChartPoint::from_bucket).collect()
}

// ---------------------------------------------------------------------------
// Customer table
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerRow {
    pub id: i64,
    pub name: String,
    pub purchase_count_label: String,
    pub total_amount_label: String,
}

impl From<&CustomerStat> for CustomerRow {
    fn from(customer: &CustomerStat) -> Self {
        Self {
            id: customer.id,
            name: customer.name.clone(),
            purchase_count_label: format_purchase_count(customer.count),
            total_amount_label: format_krw(customer.total_amount),
        }
    }
}

/// Search, sort and page cursor of the customer table.
///
/// Changing the search text or the sort order returns to the first page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerTableState {
    pub search_name: String,
    pub sort: CustomerSort,
    pub current_page: u64,
    pub items_per_page: u64,
}

impl Default for CustomerTableState {
    fn default() -> Self {
        Self {
            search_name: String::new(),
            sort: CustomerSort::Id,
            current_page: 1,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
        }
    }
}

impl CustomerTableState {
    pub fn with_search(self, search_name: &str) -> Self {
        Self {
            search_name: search_name.to_string(),
            current_page: 1,
            ..self
        }
    }

    pub fn with_sort(self, sort: CustomerSort) -> Self {
        Self {
            sort,
            current_page: 1,
            ..self
        }
    }

    /// Jump to `page`. Clamping against the page count is up to the caller.
    pub fn with_page(self, page: u64) -> Self {
        Self {
            current_page: page.max(1),
            ..self
        }
    }

    /// Move one page back, stopping at page 1.
    pub fn previous_page(self) -> Self {
        let page = Pagination::previous_page(self.current_page);
        self.with_page(page)
    }

    /// Move one page forward, stopping at the last page.
    pub fn next_page(self, total_pages: u64) -> Self {
        let page = Pagination::next_page(self.current_page, total_pages);
        self.with_page(page)
    }

    /// Request parameters for the current search and sort.
    pub fn params(&self) -> SearchCustomersParams {
        SearchCustomersParams {
            sort: self.sort,
            name: Some(self.search_name.clone()).filter(|n| !n.trim().is_empty()),
        }
    }

    /// Page boundaries for a result of `total_items` rows.
    pub fn pagination(&self, total_items: usize) -> Pagination {
        Pagination::calculate(total_items as u64, self.current_page, self.items_per_page)
    }

    /// The rows of the current page.
    pub fn page(&self, customers: &[CustomerStat]) -> CustomerPage {
        let pagination = self.pagination(customers.len());
        let total_items = customers.len() as u64;
        CustomerPage {
            rows: pagination.slice(customers).iter().map(CustomerRow::from).collect(),
            total_items,
            display_range: pagination.display_range(total_items),
            pages: page_items(self.current_page, pagination.total_pages),
            pagination,
        }
    }
}

/// One rendered page of the customer table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerPage {
    pub rows: Vec<CustomerRow>,
    pub total_items: u64,
    pub pagination: Pagination,
    /// 1-based inclusive item numbers on this page.
    pub display_range: Option<(u64, u64)>,
    /// Page buttons to show, with gaps where pages are skipped.
    pub pages: Vec<PageItem>,
}

impl CustomerPage {
    /// Pagination controls are only shown when there is more than one page.
    pub fn shows_controls(&self) -> bool {
        self.pagination.total_pages > 1
    }

    /// Summary such as `11-20 / 25개`.
    pub fn summary(&self) -> Option<String> {
        self.display_range
            .map(|(first, last)| format!("{}-{} / {}개", first, last, self.total_items))
    }
}

// ---------------------------------------------------------------------------
// Purchase detail dialog
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseRow {
    pub date_label: String,
    pub quantity: u32,
    pub product: String,
    pub price_label: String,
    pub img_src: String,
}

impl From<&PurchaseDetail> for PurchaseRow {
    fn from(purchase: &PurchaseDetail) -> Self {
        Self {
            date_label: format_purchase_date(&purchase.date),
            quantity: purchase.quantity,
            product: purchase.product.clone(),
            price_label: format_krw(purchase.price),
            img_src: purchase.img_src.clone(),
        }
    }
}

impl PurchaseRow {
    /// Like `From<&PurchaseDetail>`, with timestamps labelled by their
    /// calendar day at `offset`.
    pub fn at_offset(purchase: &PurchaseDetail, offset: UtcOffset) -> Self {
        Self {
            date_label: format_purchase_date_at(&purchase.date, offset),
            ..Self::from(purchase)
        }
    }
}

pub fn purchase_rows(purchases: &[PurchaseDetail]) -> Vec<PurchaseRow> {
    purchases.iter().map(PurchaseRow::from).collect()
}

/// Purchase rows for a viewer at `offset`.
pub fn purchase_rows_at(purchases: &[PurchaseDetail], offset: UtcOffset) -> Vec<PurchaseRow> {
    purchases
        .iter()
        .map(|purchase| PurchaseRow::at_offset(purchase, offset))
        .collect()
}
