//! Layered calendar configuration.
//!
//! Every option resolves once, in this order: the per-instance [`CalendarOptions`], then the
//! host-provided [`CalendarDefaults`], then the hardcoded default. The resolved
//! [`CalendarConfig`] is what the controller and view-model builder read.

use chrono::NaiveDate;
use leptos::logging;
use serde::Deserialize;

use crate::model::{CalendarType, HourFormat, SelectionMode, YEAR_BLOCK_SIZE};
use crate::view_model::DateBounds;

const DEFAULT_FIRST_DAY_OF_WEEK: u32 = 0;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// Explicit per-instance options. Unset fields fall through to [`CalendarDefaults`].
pub struct CalendarOptions {
    pub calendar_type: Option<CalendarType>,
    pub selection_mode: Option<SelectionMode>,
    pub first_day_of_week: Option<u32>,
    pub min_date: Option<NaiveDate>,
    pub max_date: Option<NaiveDate>,
    pub disabled_dates: Option<Vec<NaiveDate>>,
    pub show_time: Option<bool>,
    pub hour_format: Option<HourFormat>,
    pub auto_close: Option<bool>,
}

/// Application-wide calendar defaults injected by the host.
///
/// Same shape as [`CalendarOptions`]; kept as a distinct type so call sites cannot swap the two
/// layers by accident.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct CalendarDefaults(pub CalendarOptions);

#[derive(Debug, Clone, PartialEq, Eq)]
/// Fully resolved configuration for one calendar instance.
pub struct CalendarConfig {
    pub calendar_type: CalendarType,
    pub selection_mode: SelectionMode,
    pub first_day_of_week: u32,
    pub min_date: Option<NaiveDate>,
    pub max_date: Option<NaiveDate>,
    pub disabled_dates: Vec<NaiveDate>,
    pub show_time: bool,
    pub hour_format: HourFormat,
    pub auto_close: bool,
    /// Years per picker page. Fixed at [`YEAR_BLOCK_SIZE`] so pages align with
    /// [`year_block_start`](crate::view_model::year_block_start); options cannot override it.
    pub year_block_size: i32,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            calendar_type: CalendarType::Day,
            selection_mode: SelectionMode::Single,
            first_day_of_week: DEFAULT_FIRST_DAY_OF_WEEK,
            min_date: None,
            max_date: None,
            disabled_dates: Vec::new(),
            show_time: false,
            hour_format: HourFormat::H24,
            auto_close: true,
            year_block_size: YEAR_BLOCK_SIZE,
        }
    }
}

fn valid_first_day(layer: &'static str, value: Option<u32>) -> Option<u32> {
    match value {
        Some(day) if day > 6 => {
            logging::warn!("ignoring {layer} firstDayOfWeek {day}: expected 0-6");
            None
        }
        other => other,
    }
}

impl CalendarConfig {
    /// Resolves explicit options over host defaults over hardcoded defaults.
    pub fn resolve(options: &CalendarOptions, defaults: &CalendarDefaults) -> Self {
        let global = &defaults.0;
        let fallback = Self::default();

        let first_day_of_week = valid_first_day("explicit", options.first_day_of_week)
            .or_else(|| valid_first_day("global", global.first_day_of_week))
            .unwrap_or(fallback.first_day_of_week);

        let mut min_date = options.min_date.or(global.min_date);
        let mut max_date = options.max_date.or(global.max_date);
        if let (Some(min), Some(max)) = (min_date, max_date) {
            if min > max {
                logging::warn!("ignoring date bounds: minDate {min} is after maxDate {max}");
                min_date = None;
                max_date = None;
            }
        }

        let mut disabled_dates = options
            .disabled_dates
            .clone()
            .or_else(|| global.disabled_dates.clone())
            .unwrap_or_default();
        disabled_dates.sort_unstable();
        disabled_dates.dedup();

        Self {
            calendar_type: options
                .calendar_type
                .or(global.calendar_type)
                .unwrap_or(fallback.calendar_type),
            selection_mode: options
                .selection_mode
                .or(global.selection_mode)
                .unwrap_or(fallback.selection_mode),
            first_day_of_week,
            min_date,
            max_date,
            disabled_dates,
            show_time: options
                .show_time
                .or(global.show_time)
                .unwrap_or(fallback.show_time),
            hour_format: options
                .hour_format
                .or(global.hour_format)
                .unwrap_or(fallback.hour_format),
            auto_close: options
                .auto_close
                .or(global.auto_close)
                .unwrap_or(fallback.auto_close),
            year_block_size: fallback.year_block_size,
        }
    }

    /// Effective cardinality; range and week calendars are always treated as single.
    pub fn effective_mode(&self) -> SelectionMode {
        if self.calendar_type.supports_cardinality() {
            self.selection_mode
        } else {
            SelectionMode::Single
        }
    }

    /// Configured min/max bounds.
    pub fn bounds(&self) -> DateBounds {
        DateBounds {
            min: self.min_date,
            max: self.max_date,
        }
    }
}
