//! Date capability interface used by every other engine module.
//!
//! Grid building, selection and keyboard navigation only talk to [`DateAdapter`], so the clock
//! source, accepted input formats and formatting rules can be swapped per host. Values are plain
//! [`NaiveDate`]s; every operation returns a new value and never panics on overflow.

use std::fmt::{self, Write as _};

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Datelike, Days, Local, Months, NaiveDate, NaiveDateTime};
use leptos::logging;

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];
const DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Values accepted by [`DateAdapter::convert_to_date`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateLike<'a> {
    /// Already a calendar date.
    Date(NaiveDate),
    /// A date-time; the time component is discarded.
    DateTime(NaiveDateTime),
    /// A date-like string parsed with [`DateAdapter::parse`].
    Text(&'a str),
}

impl From<NaiveDate> for DateLike<'_> {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl From<NaiveDateTime> for DateLike<'_> {
    fn from(value: NaiveDateTime) -> Self {
        Self::DateTime(value)
    }
}

impl<'a> From<&'a str> for DateLike<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

/// Returns `true` for Gregorian leap years.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1-12) of `year`. Returns 0 for invalid months.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

fn clamped_date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    let last = days_in_month(year, month);
    NaiveDate::from_ymd_opt(year, month, day.clamp(1, last.max(1)))
}

/// Date parsing, arithmetic, boundary and comparison capability.
///
/// Only [`DateAdapter::today`] is required. The provided methods implement Gregorian semantics on
/// top of `chrono` and can be overridden by adapters that need different parsing or formatting.
pub trait DateAdapter: fmt::Debug {
    /// Current local calendar date.
    fn today(&self) -> NaiveDate;

    /// Parses a date-like string, returning `None` when no supported shape matches.
    fn parse(&self, text: &str) -> Option<NaiveDate> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        if let Some(date) = DATE_FORMATS
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
        {
            return Some(date);
        }
        if let Ok(date_time) = DateTime::parse_from_rfc3339(text) {
            return Some(date_time.date_naive());
        }
        DATE_TIME_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
            .map(|date_time| date_time.date())
    }

    /// Formats `date` with a strftime pattern, falling back to ISO-8601 for invalid patterns.
    fn format(&self, date: NaiveDate, pattern: &str) -> String {
        let items: Vec<Item<'_>> = StrftimeItems::new(pattern).collect();
        if items.iter().any(|item| matches!(item, Item::Error)) {
            logging::warn!("invalid date format pattern `{pattern}`");
            return date.to_string();
        }
        let mut out = String::new();
        if write!(out, "{}", date.format_with_items(items.iter())).is_err() {
            logging::warn!("date format pattern `{pattern}` needs time fields");
            return date.to_string();
        }
        out
    }

    /// Converts a date, date-time or date-like string into a date.
    fn convert_to_date(&self, value: DateLike<'_>) -> Option<NaiveDate> {
        match value {
            DateLike::Date(date) => Some(date),
            DateLike::DateTime(date_time) => Some(date_time.date()),
            DateLike::Text(text) => self.parse(text),
        }
    }

    /// Adds `days` (may be negative).
    fn add_days(&self, date: NaiveDate, days: i64) -> NaiveDate {
        let shifted = if days >= 0 {
            date.checked_add_days(Days::new(days.unsigned_abs()))
        } else {
            date.checked_sub_days(Days::new(days.unsigned_abs()))
        };
        shifted.unwrap_or_else(|| {
            logging::warn!("date overflow adding {days} days to {date}");
            date
        })
    }

    /// Subtracts `days` (may be negative).
    fn subtract_days(&self, date: NaiveDate, days: i64) -> NaiveDate {
        self.add_days(date, days.saturating_neg())
    }

    /// Adds `months`, clamping the day to the end of the target month.
    fn add_months(&self, date: NaiveDate, months: i32) -> NaiveDate {
        let shifted = if months >= 0 {
            date.checked_add_months(Months::new(months.unsigned_abs()))
        } else {
            date.checked_sub_months(Months::new(months.unsigned_abs()))
        };
        shifted.unwrap_or_else(|| {
            logging::warn!("date overflow adding {months} months to {date}");
            date
        })
    }

    /// Subtracts `months`, clamping the day to the end of the target month.
    fn subtract_months(&self, date: NaiveDate, months: i32) -> NaiveDate {
        self.add_months(date, months.saturating_neg())
    }

    /// Adds `years`; Feb 29 clamps to Feb 28 in non-leap years.
    fn add_years(&self, date: NaiveDate, years: i32) -> NaiveDate {
        self.add_months(date, years.saturating_mul(12))
    }

    /// Subtracts `years`; Feb 29 clamps to Feb 28 in non-leap years.
    fn subtract_years(&self, date: NaiveDate, years: i32) -> NaiveDate {
        self.add_years(date, years.saturating_neg())
    }

    /// First day of the month containing `date`.
    fn start_of_month(&self, date: NaiveDate) -> NaiveDate {
        date.with_day(1).unwrap_or(date)
    }

    /// Last day of the month containing `date`.
    fn end_of_month(&self, date: NaiveDate) -> NaiveDate {
        date.with_day(days_in_month(date.year(), date.month()))
            .unwrap_or(date)
    }

    /// January 1st of the year containing `date`.
    fn start_of_year(&self, date: NaiveDate) -> NaiveDate {
        NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap_or(date)
    }

    /// December 31st of the year containing `date`.
    fn end_of_year(&self, date: NaiveDate) -> NaiveDate {
        NaiveDate::from_ymd_opt(date.year(), 12, 31).unwrap_or(date)
    }

    /// Day of week with 0 = Sunday .. 6 = Saturday.
    fn day_of_week(&self, date: NaiveDate) -> u32 {
        date.weekday().num_days_from_sunday()
    }

    /// First day of the week containing `date` for the given first-day-of-week.
    fn start_of_week(&self, date: NaiveDate, first_day_of_week: u32) -> NaiveDate {
        let offset = (self.day_of_week(date) + 7 - first_day_of_week % 7) % 7;
        self.subtract_days(date, i64::from(offset))
    }

    /// Last day of the week containing `date` for the given first-day-of-week.
    fn end_of_week(&self, date: NaiveDate, first_day_of_week: u32) -> NaiveDate {
        self.add_days(self.start_of_week(date, first_day_of_week), 6)
    }

    /// Same calendar day.
    fn is_same_day(&self, a: NaiveDate, b: NaiveDate) -> bool {
        a == b
    }

    /// Same month of the same year.
    fn is_same_month(&self, a: NaiveDate, b: NaiveDate) -> bool {
        a.year() == b.year() && a.month() == b.month()
    }

    /// Same year.
    fn is_same_year(&self, a: NaiveDate, b: NaiveDate) -> bool {
        a.year() == b.year()
    }

    /// `a` is strictly before `b` at day granularity.
    fn is_before(&self, a: NaiveDate, b: NaiveDate) -> bool {
        a < b
    }

    /// `a` is strictly after `b` at day granularity.
    fn is_after(&self, a: NaiveDate, b: NaiveDate) -> bool {
        a > b
    }

    /// `date` is the adapter's current day.
    fn is_today(&self, date: NaiveDate) -> bool {
        self.is_same_day(date, self.today())
    }

    /// Inclusive list of dates from `start` to `end`; empty when `start > end`.
    fn dates_between(&self, start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
        if start > end {
            return Vec::new();
        }
        start.iter_days().take_while(|date| *date <= end).collect()
    }

    /// Replaces the year, clamping Feb 29 to Feb 28 when needed.
    fn set_year(&self, date: NaiveDate, year: i32) -> NaiveDate {
        clamped_date(year, date.month(), date.day()).unwrap_or_else(|| {
            logging::warn!("cannot move {date} to year {year}");
            date
        })
    }

    /// Replaces the month (1-12). Months outside that range roll into adjacent years, and the day
    /// clamps to the last valid day of the resulting month.
    fn set_month(&self, date: NaiveDate, month: i32) -> NaiveDate {
        let zero_based = i64::from(month) - 1;
        let target = i32::try_from(i64::from(date.year()) + zero_based.div_euclid(12))
            .ok()
            .and_then(|year| {
                let month = zero_based.rem_euclid(12) as u32 + 1;
                clamped_date(year, month, date.day())
            });
        target.unwrap_or_else(|| {
            logging::warn!("cannot move {date} to month {month}");
            date
        })
    }

    /// Number of days in the month containing `date`.
    fn days_in_month(&self, date: NaiveDate) -> u32 {
        days_in_month(date.year(), date.month())
    }
}

/// Adapter backed by the host's local clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemDateAdapter;

impl DateAdapter for SystemDateAdapter {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Adapter with a pinned "today", for deterministic rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDateAdapter {
    today: NaiveDate,
}

impl FixedDateAdapter {
    /// Creates an adapter whose [`DateAdapter::today`] always returns `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }
}

impl DateAdapter for FixedDateAdapter {
    fn today(&self) -> NaiveDate {
        self.today
    }
}
