//! Date filter resolution for the purchase frequency endpoint.
//!
//! The chart filter has two modes. In range mode the user picks a start and
//! an end date; in single-date mode one calendar day (00:00:00 to 23:59:59)
//! is queried. Either way the backend receives a `from`/`to` pair that is
//! both set or both absent.

use crate::format::format_date_for_api;
use serde::{Deserialize, Serialize};
use time::Date;

/// The `from`/`to` pair sent to `/api/purchase-frequency`.
///
/// Both fields are `None` for a full-range query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRangeQuery {
    pub from: Option<String>,
    pub to: Option<String>,
}

impl DateRangeQuery {
    /// A query over all available data.
    pub fn full_range() -> Self {
        Self::default()
    }

    /// A query where `from` and `to` are the same day.
    pub fn single_day(date: Date) -> Self {
        let day = format_date_for_api(date);
        Self {
            from: Some(day.clone()),
            to: Some(day),
        }
    }

    pub fn is_full_range(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }
}

/// Resolve the picker state into the request pair.
///
/// Single-date mode prefers `from_date` and falls back to `to_date`. Range
/// mode sends both dates when both are set. A lone bound in range mode is
/// duplicated into both fields because the backend rejects a request with
/// only one of `from`/`to`; this narrows an open-ended range to one day.
pub fn resolve(from_date: Option<Date>, to_date: Option<Date>, single_date_mode: bool) -> DateRangeQuery {
    if single_date_mode {
        return match from_date.or(to_date) {
            Some(date) => DateRangeQuery::single_day(date),
            None => DateRangeQuery::full_range(),
        };
    }

    match (from_date, to_date) {
        (Some(from), Some(to)) => DateRangeQuery {
            from: Some(format_date_for_api(from)),
            to: Some(format_date_for_api(to)),
        },
        (Some(date), None) | (None, Some(date)) => DateRangeQuery::single_day(date),
        (None, None) => DateRangeQuery::full_range(),
    }
}

// ---------------------------------------------------------------------------
// DateRangeFilter
// ---------------------------------------------------------------------------

/// Picker state of the purchase frequency chart.
///
/// Transitions return a new value; the current filter is never mutated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRangeFilter {
    pub from_date: Option<Date>,
    pub to_date: Option<Date>,
    pub single_date_mode: bool,
}

impl DateRangeFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_from_date(self, date: Option<Date>) -> Self {
        Self {
            from_date: date,
            ..self
        }
    }

    pub fn with_to_date(self, date: Option<Date>) -> Self {
        Self {
            to_date: date,
            ..self
        }
    }

    pub fn with_single_date_mode(self, single_date_mode: bool) -> Self {
        Self {
            single_date_mode,
            ..self
        }
    }

    /// Clear both dates and return to range mode.
    pub fn reset(self) -> Self {
        Self::default()
    }

    /// The request pair for the current picker state.
    pub fn resolve(&self) -> DateRangeQuery {
        resolve(self.from_date, self.to_date, self.single_date_mode)
    }

    /// Whether `date` may be picked as the start date.
    ///
    /// In range mode the start may not come after the chosen end date.
    pub fn is_from_selectable(&self, date: Date) -> bool {
        match self.to_date {
            Some(to) if !self.single_date_mode => date <= to,
            _ => true,
        }
    }

    /// Whether `date` may be picked as the end date.
    ///
    /// In range mode the end may not come before the chosen start date.
    pub fn is_to_selectable(&self, date: Date) -> bool {
        match self.from_date {
            Some(from) if !self.single_date_mode => date >= from,
            _ => true,
        }
    }

    /// Helper text shown under the pickers.
    pub fn hint(&self) -> &'static str {
        if self.single_date_mode {
            "선택한 날짜의 00:00:00 ~ 23:59:59 범위로 조회됩니다"
        } else {
            "종료 날짜를 입력하지 않으면 시작 날짜부터 데이터 끝까지 조회됩니다"
        }
    }
}
