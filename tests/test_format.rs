//! Display formatting: price ranges, revenue, currency and dates.

use purchase_dashboard_sdk::format::{
    format_date_for_api, format_krw, format_price_range, format_purchase_count,
    format_purchase_date, format_purchase_date_at, format_revenue, local_date, parse_api_date, parse_price_range,
};
use purchase_dashboard_sdk::DashboardError;
use time::macros::{date, datetime, offset};

// ---------------------------------------------------------------------------
// format_price_range
// ---------------------------------------------------------------------------

#[test]
fn first_bucket_uses_upper_bound_only() {
    assert_eq!(format_price_range("0 - 20000").unwrap(), "~2만원");
    assert_eq!(format_price_range("0 - 10000").unwrap(), "~1만원");
    assert_eq!(format_price_range("0 - 50000").unwrap(), "~5만원");
}

#[test]
fn later_buckets_show_both_bounds() {
    assert_eq!(format_price_range("20001 - 30000").unwrap(), "2만~3만원");
    assert_eq!(format_price_range("40001 - 50000").unwrap(), "4만~5만원");
    assert_eq!(format_price_range("90001 - 100000").unwrap(), "9만~10만원");
}

#[test]
fn large_buckets_are_formatted() {
    assert_eq!(format_price_range("100001 - 200000").unwrap(), "10만~20만원");
}

#[test]
fn bounds_round_half_away_from_zero() {
    assert_eq!(format_price_range("15000 - 25000").unwrap(), "2만~3만원");
    assert_eq!(format_price_range("14999 - 24999").unwrap(), "1만~2만원");
}

#[test]
fn malformed_range_is_rejected() {
    for range in ["", "0-20000", "abc - 20000", "0 - ", "20000"] {
        let err = format_price_range(range).unwrap_err();
        assert!(
            matches!(err, DashboardError::InvalidArgument(_)),
            "expected InvalidArgument for {:?}, got {:?}",
            range,
            err
        );
    }
}

#[test]
fn parse_price_range_returns_bounds() {
    assert_eq!(parse_price_range("20001 - 30000").unwrap(), (20001.0, 30000.0));
}

// ---------------------------------------------------------------------------
// format_revenue
// ---------------------------------------------------------------------------

#[test]
fn revenue_of_one_eok_or_more_uses_eok() {
    assert_eq!(format_revenue(100_000_000.0), "1억");
    assert_eq!(format_revenue(150_000_000.0), "1.5억");
    assert_eq!(format_revenue(200_000_000.0), "2억");
    assert_eq!(format_revenue(1_000_000_000.0), "10억");
}

#[test]
fn revenue_of_ten_eok_or_more_has_no_decimals() {
    assert_eq!(format_revenue(1_000_000_000.0), "10억");
    assert_eq!(format_revenue(15_000_000_000.0), "150억");
    assert_eq!(format_revenue(1_250_000_000.0), "12억");
}

#[test]
fn revenue_below_one_eok_uses_man() {
    assert_eq!(format_revenue(10_000.0), "1만");
    assert_eq!(format_revenue(50_000.0), "5만");
    assert_eq!(format_revenue(100_000.0), "10만");
    assert_eq!(format_revenue(50_000_000.0), "5000만");
    assert_eq!(format_revenue(99_990_000.0), "9999만");
}

#[test]
fn revenue_below_one_man_truncates_to_zero() {
    assert_eq!(format_revenue(0.0), "0만");
    assert_eq!(format_revenue(9_999.0), "0만");
}

// ---------------------------------------------------------------------------
// Currency and counts
// ---------------------------------------------------------------------------

#[test]
fn krw_groups_thousands() {
    assert_eq!(format_krw(12_345.0), "₩12,345");
    assert_eq!(format_krw(1_234_567.0), "₩1,234,567");
}

#[test]
fn krw_rounds_to_whole_won() {
    assert_eq!(format_krw(999.6), "₩1,000");
}

#[test]
fn krw_zero() {
    assert_eq!(format_krw(0.0), "₩0");
}

#[test]
fn purchase_count_label() {
    assert_eq!(format_purchase_count(3), "3회");
    assert_eq!(format_purchase_count(0), "0회");
}

// ---------------------------------------------------------------------------
// Dates
// ---------------------------------------------------------------------------

#[test]
fn api_date_is_zero_padded() {
    assert_eq!(format_date_for_api(date!(2024 - 07 - 15)), "2024-07-15");
    assert_eq!(format_date_for_api(date!(2024 - 01 - 05)), "2024-01-05");
    assert_eq!(format_date_for_api(date!(2024 - 12 - 31)), "2024-12-31");
    assert_eq!(format_date_for_api(date!(2023 - 03 - 01)), "2023-03-01");
}

#[test]
fn local_date_uses_the_local_calendar_day() {
    // 23:30 in Seoul is still 14:30 UTC the same day
    let evening = datetime!(2024-07-15 23:30 +9);
    assert_eq!(local_date(evening, offset!(+9)), date!(2024 - 07 - 15));

    // 00:30 in Seoul on the 16th is the 15th in UTC
    let after_midnight = datetime!(2024-07-16 00:30 +9);
    assert_eq!(local_date(after_midnight, offset!(+9)), date!(2024 - 07 - 16));
    assert_eq!(local_date(after_midnight, offset!(UTC)), date!(2024 - 07 - 15));
}

#[test]
fn parse_api_date_accepts_dates_and_datetimes() {
    assert_eq!(parse_api_date("2024-07-15").unwrap(), date!(2024 - 07 - 15));
    assert_eq!(
        parse_api_date("2024-07-15T09:30:00.000Z").unwrap(),
        date!(2024 - 07 - 15)
    );
    assert!(matches!(
        parse_api_date("15/07/2024"),
        Err(DashboardError::InvalidDate(_))
    ));
    assert!(parse_api_date("2024").is_err());
}

#[test]
fn purchase_date_label() {
    assert_eq!(format_purchase_date("2024-07-15"), "2024년 07월 15일");
    assert_eq!(format_purchase_date("2024-01-05T10:00:00Z"), "2024년 01월 05일");
}

#[test]
fn purchase_timestamp_is_labelled_in_the_viewer_offset() {
    assert_eq!(
        format_purchase_date_at("2024-07-15T23:30:00Z", offset!(+9)),
        "2024년 07월 16일"
    );
    assert_eq!(
        format_purchase_date_at("2024-07-15T23:30:00Z", offset!(UTC)),
        "2024년 07월 15일"
    );
    assert_eq!(
        format_purchase_date_at("2024-07-16T01:00:00.000+09:00", offset!(-5)),
        "2024년 07월 15일"
    );
}

#[test]
fn plain_purchase_date_ignores_the_viewer_offset() {
    assert_eq!(format_purchase_date_at("2024-07-15", offset!(+9)), "2024년 07월 15일");
    assert_eq!(format_purchase_date_at("2024-07-15", offset!(-10)), "2024년 07월 15일");
    assert_eq!(format_purchase_date_at("yesterday", offset!(+9)), "yesterday");
}

#[test]
fn unparsable_purchase_date_is_returned_unchanged() {
    assert_eq!(format_purchase_date("yesterday"), "yesterday");
    assert_eq!(format_purchase_date(""), "");
}
