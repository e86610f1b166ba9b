//! Display formatting for amounts, price ranges and dates.
//!
//! Amounts are in won. Labels use the Korean magnitude suffixes 만
//! (10,000) and 억 (100,000,000).

use std::sync::OnceLock;

use numfmt::{Formatter, Precision};
use time::format_description::well_known::Rfc3339;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, OffsetDateTime, UtcOffset};

use crate::error::{DashboardError, Result};

const MAN: f64 = 10_000.0;
const EOK: f64 = 100_000_000.0;

const API_DATE_FORMAT: &[BorrowedFormatItem] =
    format_description!("[year]-[month repr:numerical padding:zero]-[day padding:zero]");

// ---------------------------------------------------------------------------
// Price ranges and revenue
// ---------------------------------------------------------------------------

/// Split a `"<min> - <max>"` bucket range into its bounds.
pub fn parse_price_range(range: &str) -> Result<(f64, f64)> {
    let malformed = || DashboardError::InvalidArgument(format!("Malformed price range: {:?}", range));

    let (min, max) = range.split_once(" - ").ok_or_else(malformed)?;
    let min: f64 = min.trim().parse().map_err(|_| malformed())?;
    let max: f64 = max.trim().parse().map_err(|_| malformed())?;
    Ok((min, max))
}

/// Label a price bucket in 만원.
///
/// The first bucket (starting at zero) reads `~2만원`, every other bucket
/// `2만~3만원`. Bounds are rounded to the nearest 만.
///
/// ```rust
/// use purchase_dashboard_sdk::format::format_price_range;
/// assert_eq!(format_price_range("0 - 20000").unwrap(), "~2만원");
/// assert_eq!(format_price_range("20001 - 30000").unwrap(), "2만~3만원");
/// ```
pub fn format_price_range(range: &str) -> Result<String> {
    let (min, max) = parse_price_range(range)?;
    let max_man = (max / MAN).round();

    if min == 0.0 {
        return Ok(format!("~{}만원", max_man));
    }

    let min_man = (min / MAN).round();
    Ok(format!("{}만~{}만원", min_man, max_man))
}

/// Label a revenue amount in 억 or 만.
///
/// - at least 10억, or a whole number of 억: truncated, e.g. `150억`, `2억`
/// - between 1억 and 10억: one decimal, e.g. `1.5억`
/// - below 1억: truncated to 만, e.g. `5000만`, `0만`
pub fn format_revenue(value: f64) -> String {
    let eok = value / EOK;
    let man = value / MAN;

    if eok >= 1.0 {
        if eok >= 10.0 || eok.fract() == 0.0 {
            return format!("{}억", eok.floor() as u64);
        }
        return format!("{:.1}억", (eok * 10.0).round() / 10.0);
    }

    format!("{}만", man.floor() as u64)
}

/// Currency label in won, rounded to the whole won, e.g. `₩12,345`.
pub fn format_krw(amount: f64) -> String {
    static KRW_FMT: OnceLock<Formatter> = OnceLock::new();

    let fmt = KRW_FMT.get_or_init(|| {
        Formatter::currency("₩")
            .expect("currency prefix fits numfmt's prefix limit")
            .precision(Precision::Decimals(0))
    });

    let amount = amount.round();
    if amount == 0.0 {
        // numfmt renders zero without its prefix
        return "₩0".to_owned();
    }
    if amount < 0.0 {
        return format!("-{}", fmt.fmt_string(amount.abs()));
    }
    fmt.fmt_string(amount)
}

/// Purchase count label, e.g. `3회`.
pub fn format_purchase_count(count: u64) -> String {
    format!("{}회", count)
}

// ---------------------------------------------------------------------------
// Dates
// ---------------------------------------------------------------------------

/// Format a calendar date as `YYYY-MM-DD` for query parameters.
///
/// Uses the date's own calendar fields; no time zone conversion happens.
pub fn format_date_for_api(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

/// The calendar day `instant` falls on at `offset`.
///
/// Convert timestamps with this before formatting so a date picked late in
/// the evening is not sent as the next (UTC) day.
pub fn local_date(instant: OffsetDateTime, offset: UtcOffset) -> Date {
    instant.to_offset(offset).date()
}

/// Parse the leading `YYYY-MM-DD` of an ISO date or datetime.
pub fn parse_api_date(value: &str) -> Result<Date> {
    let day = value
        .get(..10)
        .ok_or_else(|| DashboardError::InvalidDate(value.to_string()))?;
    Date::parse(day, API_DATE_FORMAT).map_err(|e| DashboardError::InvalidDate(format!("{}: {}", value, e)))
}

/// Purchase date label, e.g. `2024년 07월 15일`.
///
/// Uses the calendar day written in `value`, so a timestamp is labelled in
/// its own offset. Input that does not start with a valid date is returned
/// unchanged.
pub fn format_purchase_date(value: &str) -> String {
    match parse_api_date(value) {
        Ok(date) => purchase_date_label(date),
        Err(_) => value.to_string(),
    }
}

/// Purchase date label for the viewer at `offset`.
///
/// An RFC 3339 timestamp is converted to the calendar day it falls on at
/// `offset`, so `2024-07-15T23:30:00Z` reads as July 16th at +09:00. Plain
/// dates are labelled as written.
pub fn format_purchase_date_at(value: &str, offset: UtcOffset) -> String {
    match OffsetDateTime::parse(value, &Rfc3339) {
        Ok(instant) => purchase_date_label(local_date(instant, offset)),
        Err(_) => format_purchase_date(value),
    }
}

fn purchase_date_label(date: Date) -> String {
    format!(
        "{:04}년 {:02}월 {:02}일",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}
