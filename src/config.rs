use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
pub const BASE_URL_ENV: &str = "DASHBOARD_API_BASE_URL";

pub const PURCHASE_FREQUENCY_PATH: &str = "/api/purchase-frequency";
pub const CUSTOMERS_PATH: &str = "/api/customers";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_STALE_TIME: Duration = Duration::from_secs(5 * 60);
pub const DEFAULT_RETRIES: u32 = 1;
pub const DEFAULT_ITEMS_PER_PAGE: u64 = 10;

/// Path of the purchase list for one customer.
pub fn customer_purchases_path(customer_id: i64) -> String {
    format!("{}/{}/purchases", CUSTOMERS_PATH, customer_id)
}

/// Base URL from `DASHBOARD_API_BASE_URL`, or the local development server.
pub fn default_base_url() -> String {
    match std::env::var(BASE_URL_ENV) {
        Ok(url) if !url.trim().is_empty() => url.trim().to_string(),
        _ => DEFAULT_BASE_URL.to_string(),
    }
}
