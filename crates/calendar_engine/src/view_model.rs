//! View-model builders for the day, month and year grids.
//!
//! Builders are pure: they read the adapter, the options and the selection snapshot and return
//! fresh cells. Nothing here mutates selection state.

use chrono::{Datelike, NaiveDate};

use crate::date_adapter::DateAdapter;
use crate::i18n::{TranslationKey, Translator};
use crate::model::{
    CalendarDay, DateRange, DayStatus, MonthCell, MonthValue, SelectionState, WeekRange, YearCell,
    DAY_GRID_CELLS, YEAR_BLOCK_SIZE,
};

/// Host callback tagging a date with a business status.
pub type StatusFn<'a> = &'a dyn Fn(NaiveDate) -> Option<DayStatus>;
/// Host predicate deciding whether a date can be picked.
pub type EnabledFn<'a> = &'a dyn Fn(NaiveDate) -> bool;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Inclusive min/max bounds. Missing bounds are open.
pub struct DateBounds {
    pub min: Option<NaiveDate>,
    pub max: Option<NaiveDate>,
}

impl DateBounds {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.min.map_or(true, |min| date >= min) && self.max.map_or(true, |max| date <= max)
    }

    /// The whole span `[start, end]` lies outside the bounds.
    pub fn excludes_span(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.min.is_some_and(|min| end < min) || self.max.is_some_and(|max| start > max)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// The parts of the selection the day grid highlights.
pub struct SelectionSnapshot {
    pub dates: Vec<NaiveDate>,
    pub range: Option<DateRange>,
    pub week: Option<WeekRange>,
}

impl SelectionSnapshot {
    pub fn from_state(state: &SelectionState) -> Self {
        match state {
            SelectionState::Day(date) => Self {
                dates: vec![*date],
                ..Self::default()
            },
            SelectionState::Days(dates) => Self {
                dates: dates.clone(),
                ..Self::default()
            },
            SelectionState::Range(range) => Self {
                range: Some(*range),
                ..Self::default()
            },
            SelectionState::Week(week) => Self {
                week: Some(*week),
                ..Self::default()
            },
            _ => Self::default(),
        }
    }
}

#[derive(Clone, Copy, Default)]
/// Inputs for [`build_calendar_days`] beyond the anchor month and first day of week.
pub struct GridOptions<'a> {
    pub disabled_dates: &'a [NaiveDate],
    pub bounds: DateBounds,
    pub selection: Option<&'a SelectionSnapshot>,
    pub hovered: Option<NaiveDate>,
    pub status_fn: Option<StatusFn<'a>>,
    pub enabled_fn: Option<EnabledFn<'a>>,
}

impl GridOptions<'_> {
    /// A supplied enabled-predicate replaces the static disabled list entirely; min/max bounds
    /// apply either way.
    pub fn is_disabled(&self, date: NaiveDate) -> bool {
        let blocked = match self.enabled_fn {
            Some(enabled) => !enabled(date),
            None => self.disabled_dates.contains(&date),
        };
        blocked || !self.bounds.contains(date)
    }

    fn preview_window(&self) -> Option<(NaiveDate, NaiveDate)> {
        let range = self.selection?.range?;
        if range.is_complete() {
            return None;
        }
        let hovered = self.hovered?;
        Some((range.start.min(hovered), range.start.max(hovered)))
    }
}

/// Long-form date such as "Monday, January 15, 2024".
pub fn format_long_date(date: NaiveDate, translator: &Translator) -> String {
    format!(
        "{}, {} {}, {}",
        translator.text(TranslationKey::WeekdayName(
            date.weekday().num_days_from_sunday()
        )),
        translator.text(TranslationKey::MonthName(date.month())),
        date.day(),
        date.year()
    )
}

fn aria_label(day: &CalendarDay, translator: &Translator) -> String {
    let mut parts = vec![format_long_date(day.date, translator)];
    if day.is_today {
        parts.push(translator.text(TranslationKey::Today));
    }
    if day.is_selected {
        parts.push(translator.text(TranslationKey::Selected));
    }
    if day.is_in_range {
        parts.push(translator.text(TranslationKey::InRange));
    }
    if day.is_disabled {
        parts.push(translator.text(TranslationKey::Disabled));
    }
    if let Some(status) = day.status {
        parts.push(translator.text(TranslationKey::Status(status)));
    }
    parts.join(", ")
}

/// Builds the 42-cell day grid for the month containing `reference`.
///
/// The first cell is the start of the week holding the first of the month, so every row starts on
/// `first_day_of_week` and months of any length render without reflow.
pub fn build_calendar_days(
    adapter: &dyn DateAdapter,
    reference: NaiveDate,
    first_day_of_week: u32,
    options: &GridOptions<'_>,
    translator: &Translator,
) -> Vec<CalendarDay> {
    let month_start = adapter.start_of_month(reference);
    let grid_start = adapter.start_of_week(month_start, first_day_of_week);
    let today = adapter.today();
    let empty = SelectionSnapshot::default();
    let selection = options.selection.unwrap_or(&empty);
    let preview = options.preview_window();

    (0..DAY_GRID_CELLS as i64)
        .map(|offset| {
            let date = adapter.add_days(grid_start, offset);
            let weekday = adapter.day_of_week(date);
            let is_selected = selection.dates.contains(&date)
                || selection
                    .range
                    .is_some_and(|range| range.start == date || range.end == Some(date));
            let is_in_range = selection.range.is_some_and(|range| range.contains(date))
                || selection.week.is_some_and(|week| week.contains(date))
                || preview.is_some_and(|(start, end)| start <= date && date <= end);
            let mut day = CalendarDay {
                date,
                day_number: date.day(),
                is_current_month: adapter.is_same_month(date, month_start),
                is_today: adapter.is_same_day(date, today),
                is_weekend: weekday == 0 || weekday == 6,
                is_selected,
                is_in_range,
                is_disabled: options.is_disabled(date),
                is_hovered: options.hovered == Some(date),
                status: options.status_fn.and_then(|status| status(date)),
                aria_label: String::new(),
            };
            day.aria_label = aria_label(&day, translator);
            day
        })
        .collect()
}

/// Short weekday names in display order starting at `first_day_of_week`.
pub fn weekday_headers(first_day_of_week: u32, translator: &Translator) -> Vec<String> {
    (0..7)
        .map(|offset| translator.text(TranslationKey::WeekdayShort((first_day_of_week + offset) % 7)))
        .collect()
}

/// First year of the fixed-size block containing `year`.
pub fn year_block_start(year: i32) -> i32 {
    year - year.rem_euclid(YEAR_BLOCK_SIZE)
}

/// Twelve month cells for `year`, laid out three per row.
pub fn build_month_cells(
    adapter: &dyn DateAdapter,
    year: i32,
    bounds: DateBounds,
    selected: &[MonthValue],
    translator: &Translator,
) -> Vec<MonthCell> {
    let today = adapter.today();
    (1..=12)
        .filter_map(|month| {
            let start = NaiveDate::from_ymd_opt(year, month, 1)?;
            let end = adapter.end_of_month(start);
            Some(MonthCell {
                month,
                year,
                label: translator.text(TranslationKey::MonthShort(month)),
                is_current: today.year() == year && today.month() == month,
                is_selected: selected.contains(&MonthValue { year, month }),
                is_disabled: bounds.excludes_span(start, end),
            })
        })
        .collect()
}

/// Year cells for the block containing `year`.
pub fn build_year_cells(
    adapter: &dyn DateAdapter,
    year: i32,
    bounds: DateBounds,
    selected: &[i32],
) -> Vec<YearCell> {
    let today = adapter.today();
    let block_start = year_block_start(year);
    (block_start..block_start + YEAR_BLOCK_SIZE)
        .filter_map(|year| {
            let start = NaiveDate::from_ymd_opt(year, 1, 1)?;
            let end = NaiveDate::from_ymd_opt(year, 12, 31)?;
            Some(YearCell {
                year,
                is_current: today.year() == year,
                is_selected: selected.contains(&year),
                is_disabled: bounds.excludes_span(start, end),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::Weekday;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::date_adapter::FixedDateAdapter;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    fn adapter() -> FixedDateAdapter {
        FixedDateAdapter::new(ymd(2024, 3, 15))
    }

    fn day_of(days: &[CalendarDay], date: NaiveDate) -> &CalendarDay {
        days.iter().find(|day| day.date == date).expect("date in grid")
    }

    #[test]
    fn grid_always_has_42_cells_aligned_to_first_day_of_week() {
        let adapter = adapter();
        let translator = Translator::default();
        for year in [2023, 2024, 2025] {
            for month in 1..=12 {
                for first_day in 0..7 {
                    let days = build_calendar_days(
                        &adapter,
                        ymd(year, month, 1),
                        first_day,
                        &GridOptions::default(),
                        &translator,
                    );
                    assert_eq!(days.len(), 42);
                    for row in days.chunks(7) {
                        assert_eq!(row[0].date.weekday().num_days_from_sunday(), first_day);
                    }
                    assert!(days[..7].iter().any(|day| day.day_number == 1 && day.is_current_month));
                    let current = days.iter().filter(|day| day.is_current_month).count() as u32;
                    assert_eq!(current, crate::date_adapter::days_in_month(year, month));
                }
            }
        }
    }

    #[test]
    fn today_and_weekend_flags() {
        let adapter = adapter();
        let days = build_calendar_days(
            &adapter,
            ymd(2024, 3, 1),
            1,
            &GridOptions::default(),
            &Translator::default(),
        );
        assert!(day_of(&days, ymd(2024, 3, 15)).is_today);
        assert_eq!(days.iter().filter(|day| day.is_today).count(), 1);
        for day in &days {
            let weekend = matches!(day.date.weekday(), Weekday::Sat | Weekday::Sun);
            assert_eq!(day.is_weekend, weekend);
        }
    }

    #[test]
    fn enabled_predicate_overrides_disabled_list_but_not_bounds() {
        let adapter = adapter();
        let not_friday = |date: NaiveDate| date.weekday() != Weekday::Fri;
        let disabled = [ymd(2024, 3, 4), ymd(2024, 3, 8)];
        let options = GridOptions {
            disabled_dates: &disabled,
            bounds: DateBounds {
                min: Some(ymd(2024, 3, 3)),
                max: None,
            },
            enabled_fn: Some(&not_friday),
            ..GridOptions::default()
        };
        let days = build_calendar_days(&adapter, ymd(2024, 3, 1), 0, &options, &Translator::default());

        for day in &days {
            if day.date.weekday() == Weekday::Fri {
                assert!(day.is_disabled, "{} should be disabled", day.date);
            }
        }
        assert!(!day_of(&days, ymd(2024, 3, 4)).is_disabled);
        assert!(day_of(&days, ymd(2024, 3, 2)).is_disabled);
    }

    #[test]
    fn static_disabled_list_applies_without_predicate() {
        let adapter = adapter();
        let disabled = [ymd(2024, 3, 4)];
        let options = GridOptions {
            disabled_dates: &disabled,
            bounds: DateBounds {
                min: None,
                max: Some(ymd(2024, 3, 20)),
            },
            ..GridOptions::default()
        };
        let days = build_calendar_days(&adapter, ymd(2024, 3, 1), 0, &options, &Translator::default());
        assert!(day_of(&days, ymd(2024, 3, 4)).is_disabled);
        assert!(!day_of(&days, ymd(2024, 3, 5)).is_disabled);
        assert!(day_of(&days, ymd(2024, 3, 21)).is_disabled);
    }

    #[test]
    fn in_progress_range_selects_start_and_previews_hover_window() {
        let adapter = adapter();
        let selection = SelectionSnapshot {
            range: Some(DateRange {
                start: ymd(2024, 3, 12),
                end: None,
            }),
            ..SelectionSnapshot::default()
        };
        let options = GridOptions {
            selection: Some(&selection),
            hovered: Some(ymd(2024, 3, 8)),
            ..GridOptions::default()
        };
        let days = build_calendar_days(&adapter, ymd(2024, 3, 1), 0, &options, &Translator::default());

        let selected: Vec<_> = days.iter().filter(|day| day.is_selected).map(|day| day.date).collect();
        assert_eq!(selected, vec![ymd(2024, 3, 12)]);
        let in_range: Vec<_> = days.iter().filter(|day| day.is_in_range).map(|day| day.date).collect();
        assert_eq!(
            in_range,
            adapter.dates_between(ymd(2024, 3, 8), ymd(2024, 3, 12))
        );
        assert!(day_of(&days, ymd(2024, 3, 8)).is_hovered);
    }

    #[test]
    fn completed_range_selects_both_endpoints_and_ignores_hover() {
        let adapter = adapter();
        let selection = SelectionSnapshot {
            range: Some(DateRange::ordered(ymd(2024, 3, 5), ymd(2024, 3, 10))),
            ..SelectionSnapshot::default()
        };
        let options = GridOptions {
            selection: Some(&selection),
            hovered: Some(ymd(2024, 3, 20)),
            ..GridOptions::default()
        };
        let days = build_calendar_days(&adapter, ymd(2024, 3, 1), 0, &options, &Translator::default());
        let selected: Vec<_> = days.iter().filter(|day| day.is_selected).map(|day| day.date).collect();
        assert_eq!(selected, vec![ymd(2024, 3, 5), ymd(2024, 3, 10)]);
        assert_eq!(days.iter().filter(|day| day.is_in_range).count(), 6);
        assert!(!day_of(&days, ymd(2024, 3, 20)).is_in_range);
    }

    #[test]
    fn week_selection_marks_in_range_only() {
        let adapter = adapter();
        let selection = SelectionSnapshot {
            week: Some(WeekRange {
                start: ymd(2024, 3, 10),
                end: ymd(2024, 3, 16),
            }),
            ..SelectionSnapshot::default()
        };
        let options = GridOptions {
            selection: Some(&selection),
            ..GridOptions::default()
        };
        let days = build_calendar_days(&adapter, ymd(2024, 3, 1), 0, &options, &Translator::default());
        assert_eq!(days.iter().filter(|day| day.is_in_range).count(), 7);
        assert_eq!(days.iter().filter(|day| day.is_selected).count(), 0);
    }

    #[test]
    fn aria_label_lists_state_words_and_status() {
        let adapter = adapter();
        let selection = SelectionSnapshot {
            dates: vec![ymd(2024, 3, 15)],
            ..SelectionSnapshot::default()
        };
        let status = |date: NaiveDate| (date.day() == 15).then_some(DayStatus::Success);
        let options = GridOptions {
            selection: Some(&selection),
            status_fn: Some(&status),
            ..GridOptions::default()
        };
        let days = build_calendar_days(&adapter, ymd(2024, 3, 1), 0, &options, &Translator::default());
        let day = day_of(&days, ymd(2024, 3, 15));
        assert_eq!(day.status, Some(DayStatus::Success));
        assert_eq!(
            day.aria_label,
            "Friday, March 15, 2024, today, selected, success"
        );
        assert_eq!(
            day_of(&days, ymd(2024, 3, 16)).aria_label,
            "Saturday, March 16, 2024"
        );
    }

    #[test]
    fn weekday_headers_rotate_with_first_day() {
        let headers = weekday_headers(1, &Translator::default());
        assert_eq!(headers, vec!["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"]);
    }

    #[test]
    fn month_and_year_cells_respect_bounds() {
        let adapter = adapter();
        let bounds = DateBounds {
            min: Some(ymd(2024, 1, 15)),
            max: Some(ymd(2031, 6, 1)),
        };
        let months = build_month_cells(
            &adapter,
            2024,
            bounds,
            &[MonthValue { year: 2024, month: 2 }],
            &Translator::default(),
        );
        assert_eq!(months.len(), 12);
        assert!(!months[0].is_disabled);
        assert!(months[1].is_selected);
        assert!(months[2].is_current);
        assert_eq!(months[2].label, "Mar");

        let years = build_year_cells(&adapter, 2024, bounds, &[2025]);
        assert_eq!(years.len(), 20);
        assert_eq!(years[0].year, 2020);
        assert!(years[0].is_disabled);
        assert!(!years[4].is_disabled);
        assert!(years[4].is_current);
        assert!(years[5].is_selected);
        assert!(years[12].is_disabled);
    }

    #[test]
    fn year_blocks_are_multiples_of_twenty() {
        assert_eq!(year_block_start(2024), 2020);
        assert_eq!(year_block_start(2040), 2040);
        assert_eq!(year_block_start(-1), -20);
    }
}
