use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{CalendarError, TimeError};

/// Number of cells in a day grid: six full weeks.
pub const DAY_GRID_CELLS: usize = 42;
/// Number of years shown by the year picker.
pub const YEAR_BLOCK_SIZE: i32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarType {
    Day,
    Week,
    Month,
    Year,
    Range,
}

impl CalendarType {
    pub fn token(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
            Self::Range => "range",
        }
    }

    /// Picker granularity a calendar of this type opens on.
    pub fn initial_view(self) -> CalendarView {
        match self {
            Self::Day | Self::Week | Self::Range => CalendarView::Day,
            Self::Month => CalendarView::Month,
            Self::Year => CalendarView::Year,
        }
    }

    /// Range and week selections always span several dates and ignore cardinality.
    pub fn supports_cardinality(self) -> bool {
        matches!(self, Self::Day | Self::Month | Self::Year)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    Single,
    Multiple,
}

impl SelectionMode {
    pub fn token(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Multiple => "multiple",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarView {
    Day,
    Month,
    Year,
}

impl CalendarView {
    pub fn token(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Month => "month",
            Self::Year => "year",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Business-defined tag attached to a day by the host's status callback.
pub enum DayStatus {
    Success,
    Warning,
    Danger,
    Info,
}

impl DayStatus {
    pub fn token(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
            Self::Info => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
/// One cell of the 42-cell day grid. Rebuilt from scratch on every render.
pub struct CalendarDay {
    pub date: NaiveDate,
    pub day_number: u32,
    pub is_current_month: bool,
    pub is_today: bool,
    pub is_weekend: bool,
    pub is_selected: bool,
    pub is_in_range: bool,
    pub is_disabled: bool,
    pub is_hovered: bool,
    pub status: Option<DayStatus>,
    pub aria_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthCell {
    pub month: u32,
    pub year: i32,
    pub label: String,
    pub is_current: bool,
    pub is_selected: bool,
    pub is_disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearCell {
    pub year: i32,
    pub is_current: bool,
    pub is_selected: bool,
    pub is_disabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// A date range. `end` is `None` while the second endpoint has not been picked.
pub struct DateRange {
    pub start: NaiveDate,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    /// Builds a complete range with its endpoints in chronological order.
    pub fn ordered(a: NaiveDate, b: NaiveDate) -> Self {
        Self {
            start: a.min(b),
            end: Some(a.max(b)),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.end.is_some()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.end
            .map(|end| self.start <= date && date <= end)
            .unwrap_or(false)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl WeekRange {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
/// A month of a specific year. `month` is 1-based.
pub struct MonthValue {
    pub year: i32,
    pub month: u32,
}

impl MonthValue {
    pub fn new(month: u32, year: i32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HourFormat {
    H12,
    H24,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Period {
    Am,
    Pm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeValue {
    pub hour: u8,
    pub minute: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,
}

impl TimeValue {
    /// Validates a time against the hour format: 0-23 without a period, or 1-12 with one.
    pub fn new(
        hour: u8,
        minute: u8,
        period: Option<Period>,
        format: HourFormat,
    ) -> Result<Self, TimeError> {
        if minute > 59 {
            return Err(TimeError::MinuteOutOfRange(minute));
        }
        match (format, period) {
            (HourFormat::H24, Some(_)) => return Err(TimeError::UnexpectedPeriod),
            (HourFormat::H12, None) => return Err(TimeError::MissingPeriod),
            _ => {}
        }
        let valid_hour = match format {
            HourFormat::H24 => hour <= 23,
            HourFormat::H12 => (1..=12).contains(&hour),
        };
        if !valid_hour {
            return Err(TimeError::HourOutOfRange { hour, format });
        }
        Ok(Self {
            hour,
            minute,
            period,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// The active selection slot. Only one slot exists at a time, so switching calendar type
/// implicitly resets every other slot.
pub enum SelectionState {
    #[default]
    Empty,
    Day(NaiveDate),
    Days(Vec<NaiveDate>),
    Range(DateRange),
    Week(WeekRange),
    Month(MonthValue),
    Months(Vec<MonthValue>),
    Year(i32),
    Years(Vec<i32>),
}

impl SelectionState {
    pub fn slot_name(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Day(_) => "day",
            Self::Days(_) => "days",
            Self::Range(_) => "range",
            Self::Week(_) => "week",
            Self::Month(_) => "month",
            Self::Months(_) => "months",
            Self::Year(_) => "year",
            Self::Years(_) => "years",
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Days(dates) => dates.is_empty(),
            Self::Months(months) => months.is_empty(),
            Self::Years(years) => years.is_empty(),
            _ => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
/// Normalized output emitted after every committed selection.
pub enum CalendarValue {
    Day {
        date: Option<NaiveDate>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        time: Option<TimeValue>,
    },
    Days {
        dates: Vec<NaiveDate>,
    },
    Range {
        range: Option<DateRange>,
    },
    Week {
        week: Option<WeekRange>,
    },
    Month {
        month: Option<MonthValue>,
    },
    Months {
        months: Vec<MonthValue>,
    },
    Year {
        year: Option<i32>,
    },
    Years {
        years: Vec<i32>,
    },
}

impl CalendarValue {
    /// Builds the output value for a calendar type and cardinality from the active selection.
    ///
    /// An empty selection produces the empty value of the requested shape.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InconsistentValue`] when the selection slot belongs to another
    /// type or cardinality, and [`CalendarError::UnexpectedTime`] when `time` is supplied for a
    /// shape other than a single day.
    pub fn build(
        calendar_type: CalendarType,
        selection_mode: SelectionMode,
        selection: &SelectionState,
        time: Option<TimeValue>,
    ) -> Result<Self, CalendarError> {
        let single = selection_mode == SelectionMode::Single;
        if time.is_some() && !(calendar_type == CalendarType::Day && single) {
            return Err(CalendarError::UnexpectedTime);
        }
        let value = match (calendar_type, single, selection) {
            (CalendarType::Day, true, SelectionState::Empty) => Self::Day { date: None, time },
            (CalendarType::Day, true, SelectionState::Day(date)) => Self::Day {
                date: Some(*date),
                time,
            },
            (CalendarType::Day, false, SelectionState::Empty) => Self::Days { dates: Vec::new() },
            (CalendarType::Day, false, SelectionState::Days(dates)) => Self::Days {
                dates: dates.clone(),
            },
            (CalendarType::Range, _, SelectionState::Empty) => Self::Range { range: None },
            (CalendarType::Range, _, SelectionState::Range(range)) => Self::Range {
                range: Some(*range),
            },
            (CalendarType::Week, _, SelectionState::Empty) => Self::Week { week: None },
            (CalendarType::Week, _, SelectionState::Week(week)) => Self::Week { week: Some(*week) },
            (CalendarType::Month, true, SelectionState::Empty) => Self::Month { month: None },
            (CalendarType::Month, true, SelectionState::Month(month)) => Self::Month {
                month: Some(*month),
            },
            (CalendarType::Month, false, SelectionState::Empty) => Self::Months {
                months: Vec::new(),
            },
            (CalendarType::Month, false, SelectionState::Months(months)) => Self::Months {
                months: months.clone(),
            },
            (CalendarType::Year, true, SelectionState::Empty) => Self::Year { year: None },
            (CalendarType::Year, true, SelectionState::Year(year)) => {
                Self::Year { year: Some(*year) }
            }
            (CalendarType::Year, false, SelectionState::Empty) => Self::Years { years: Vec::new() },
            (CalendarType::Year, false, SelectionState::Years(years)) => Self::Years {
                years: years.clone(),
            },
            _ => {
                return Err(CalendarError::InconsistentValue {
                    calendar_type,
                    selection_mode,
                    slot: selection.slot_name(),
                })
            }
        };
        Ok(value)
    }

    /// Simplified value for generic form binding.
    pub fn form_value(&self) -> FormValue {
        match self {
            Self::Day {
                date: Some(date), ..
            } => FormValue::Date(*date),
            Self::Days { dates } if !dates.is_empty() => FormValue::Dates(dates.clone()),
            Self::Range {
                range: Some(DateRange { start, end }),
            } => FormValue::Dates(std::iter::once(*start).chain(*end).collect()),
            Self::Week { week: Some(week) } => FormValue::Dates(vec![week.start, week.end]),
            _ => FormValue::Empty,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
/// Bare date or date list for hosts that bind the calendar to a plain form control.
pub enum FormValue {
    Empty,
    Date(NaiveDate),
    Dates(Vec<NaiveDate>),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
/// Every value shape a host may write into the calendar.
///
/// Variant order matters for untagged deserialization. Lists come before the struct variants
/// because serde also accepts a struct from a sequence, and `Month` must precede `Range` because
/// the range endpoints are optional. JSON strings become [`CalendarInput::Text`] and are parsed by
/// the date adapter.
pub enum CalendarInput {
    Year(i32),
    Text(String),
    Years(Vec<i32>),
    Months(Vec<MonthValue>),
    Texts(Vec<String>),
    Month {
        month: u32,
        year: i32,
    },
    Range {
        start: Option<String>,
        end: Option<String>,
    },
    #[serde(skip)]
    Date(NaiveDate),
    #[serde(skip)]
    Dates(Vec<NaiveDate>),
}

impl From<NaiveDate> for CalendarInput {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl From<Vec<NaiveDate>> for CalendarInput {
    fn from(value: Vec<NaiveDate>) -> Self {
        Self::Dates(value)
    }
}

impl From<MonthValue> for CalendarInput {
    fn from(value: MonthValue) -> Self {
        Self::Month {
            month: value.month,
            year: value.year,
        }
    }
}

impl From<&str> for CalendarInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}
