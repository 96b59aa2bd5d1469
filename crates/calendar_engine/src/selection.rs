//! Selection state controller for one calendar instance.
//!
//! [`CalendarController::apply`] is the single transition entry point: it takes a
//! [`CalendarAction`], mutates the owned state and returns the [`CalendarEffect`]s the host should
//! act on. Invalid input is logged and ignored, so the previous state always survives a bad action.

use std::fmt;
use std::rc::Rc;

use chrono::{Datelike, NaiveDate};
use leptos::logging;

use crate::config::CalendarConfig;
use crate::date_adapter::{DateAdapter, DateLike};
use crate::error::CalendarError;
use crate::i18n::{TranslationKey, Translator};
use crate::keyboard::{self, KeyOutcome, NavKey, DAY_GRID, MONTH_GRID, YEAR_GRID};
use crate::model::{
    CalendarDay, CalendarInput, CalendarType, CalendarValue, CalendarView, DateRange, DayStatus,
    MonthCell, MonthValue, SelectionMode, SelectionState, TimeValue, WeekRange, YearCell,
};
use crate::view_model::{
    build_calendar_days, build_month_cells, build_year_cells, weekday_headers, year_block_start,
    DateBounds, GridOptions, SelectionSnapshot,
};

/// Shared host callback tagging dates with a status.
pub type SharedStatusFn = Rc<dyn Fn(NaiveDate) -> Option<DayStatus>>;
/// Shared host predicate deciding whether a date can be picked.
pub type SharedEnabledFn = Rc<dyn Fn(NaiveDate) -> bool>;

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`CalendarController::apply`].
pub enum CalendarAction {
    /// Pick a day cell.
    SelectDate(NaiveDate),
    /// Pick a month cell in the month picker.
    SelectMonth(MonthValue),
    /// Pick a year cell in the year picker.
    SelectYear(i32),
    /// Pointer entered a day cell.
    Hover(NaiveDate),
    /// Pointer left the grid.
    ClearHover,
    PreviousMonth,
    NextMonth,
    PreviousYear,
    NextYear,
    PreviousYearBlock,
    NextYearBlock,
    /// Switch picker granularity, keeping the anchor.
    SetView(CalendarView),
    /// Show the current month without touching the selection.
    GoToToday,
    /// Attach a time to a single-day selection.
    SetTime(TimeValue),
    /// Drop the selection and emit the empty value.
    Clear,
    /// Programmatic value write from a form binding. `None` clears silently.
    WriteValue(Option<CalendarInput>),
    /// Keyboard navigation on the active grid.
    Key(NavKey),
    /// Pointer or programmatic focus of a cell in the active grid.
    FocusCell(usize),
    /// Switch type and cardinality. Resets every selection slot.
    SetCalendarType {
        calendar_type: CalendarType,
        selection_mode: SelectionMode,
    },
    /// Replace the resolved configuration. The selection survives unless the type or
    /// cardinality changes.
    Reconfigure(CalendarConfig),
}

#[derive(Debug, Clone, PartialEq)]
/// Side effects emitted by [`CalendarController::apply`] for the host to execute.
pub enum CalendarEffect {
    /// Normalized output value after a committed selection or clear.
    ValueChanged(CalendarValue),
    /// Simplified value for generic form bindings.
    FormValueChanged(crate::model::FormValue),
    /// A selection was committed by the user.
    SelectionFinished,
    /// The selection is complete and the host container may close.
    AutoClose,
    /// Move DOM focus to the given cell once the grid has rendered.
    FocusCell(usize),
}

#[derive(Clone)]
/// Owns the anchor, active view, selection and cached day grid for one calendar.
pub struct CalendarController {
    config: CalendarConfig,
    adapter: Rc<dyn DateAdapter>,
    translator: Translator,
    status_fn: Option<SharedStatusFn>,
    enabled_fn: Option<SharedEnabledFn>,
    anchor: NaiveDate,
    view: CalendarView,
    selection: SelectionState,
    time: Option<TimeValue>,
    hovered: Option<NaiveDate>,
    focused: Option<usize>,
    keyboard_origin: Option<(NaiveDate, CalendarView)>,
    days: Vec<CalendarDay>,
    dirty: bool,
}

impl fmt::Debug for CalendarController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CalendarController")
            .field("config", &self.config)
            .field("anchor", &self.anchor)
            .field("view", &self.view)
            .field("selection", &self.selection)
            .field("time", &self.time)
            .field("hovered", &self.hovered)
            .field("focused", &self.focused)
            .finish_non_exhaustive()
    }
}

impl CalendarController {
    pub fn new(config: CalendarConfig, adapter: Rc<dyn DateAdapter>, translator: Translator) -> Self {
        let bounds = DateBounds {
            min: config.min_date,
            max: config.max_date,
        };
        let today = adapter.today();
        let anchor = clamp_to_bounds(today, bounds);
        let view = config.calendar_type.initial_view();
        let mut controller = Self {
            config,
            adapter,
            translator,
            status_fn: None,
            enabled_fn: None,
            anchor,
            view,
            selection: SelectionState::Empty,
            time: None,
            hovered: None,
            focused: None,
            keyboard_origin: None,
            days: Vec::new(),
            dirty: true,
        };
        controller.refresh();
        controller
    }

    pub fn with_status_fn(mut self, status_fn: SharedStatusFn) -> Self {
        self.set_status_fn(Some(status_fn));
        self
    }

    pub fn with_enabled_fn(mut self, enabled_fn: SharedEnabledFn) -> Self {
        self.set_enabled_fn(Some(enabled_fn));
        self
    }

    pub fn set_status_fn(&mut self, status_fn: Option<SharedStatusFn>) {
        self.status_fn = status_fn;
        self.dirty = true;
        self.refresh();
    }

    pub fn set_enabled_fn(&mut self, enabled_fn: Option<SharedEnabledFn>) {
        self.enabled_fn = enabled_fn;
        self.dirty = true;
        self.refresh();
    }

    pub fn config(&self) -> &CalendarConfig {
        &self.config
    }

    pub fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    pub fn view(&self) -> CalendarView {
        self.view
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn time(&self) -> Option<TimeValue> {
        self.time
    }

    pub fn hovered(&self) -> Option<NaiveDate> {
        self.hovered
    }

    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    /// Grid index that owns keyboard focus in the active view.
    ///
    /// The last focused cell wins. Otherwise the day grid prefers the selected date, then today,
    /// then the first enabled day of the month; the pickers start on the anchor's month or year.
    /// Renderers use this as the roving tab stop so arrow keys start where the user landed.
    pub fn keyboard_index(&self) -> usize {
        let layout = match self.view {
            CalendarView::Day => DAY_GRID,
            CalendarView::Month => MONTH_GRID,
            CalendarView::Year => YEAR_GRID,
        };
        self.focused
            .filter(|index| *index < layout.len)
            .unwrap_or_else(|| match self.view {
                CalendarView::Day => self.default_day_focus(),
                CalendarView::Month => self.anchor.month0() as usize,
                CalendarView::Year => {
                    (self.anchor.year() - year_block_start(self.anchor.year())) as usize
                }
            })
    }

    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    /// The cached 42-cell grid for the displayed month.
    pub fn days(&self) -> &[CalendarDay] {
        &self.days
    }

    pub fn month_cells(&self) -> Vec<MonthCell> {
        let selected: Vec<MonthValue> = match &self.selection {
            SelectionState::Month(month) => vec![*month],
            SelectionState::Months(months) => months.clone(),
            _ => Vec::new(),
        };
        build_month_cells(
            self.adapter.as_ref(),
            self.anchor.year(),
            self.bounds(),
            &selected,
            &self.translator,
        )
    }

    pub fn year_cells(&self) -> Vec<YearCell> {
        let selected: Vec<i32> = match &self.selection {
            SelectionState::Year(year) => vec![*year],
            SelectionState::Years(years) => years.clone(),
            _ => Vec::new(),
        };
        build_year_cells(
            self.adapter.as_ref(),
            self.anchor.year(),
            self.bounds(),
            &selected,
        )
    }

    pub fn weekday_headers(&self) -> Vec<String> {
        weekday_headers(self.config.first_day_of_week, &self.translator)
    }

    /// Header caption for the active view: "March 2024", "2024" or "2020 - 2039".
    pub fn header_label(&self) -> String {
        match self.view {
            CalendarView::Day => format!(
                "{} {}",
                self.translator
                    .text(TranslationKey::MonthName(self.anchor.month())),
                self.anchor.year()
            ),
            CalendarView::Month => self.anchor.year().to_string(),
            CalendarView::Year => {
                let start = year_block_start(self.anchor.year());
                format!("{} - {}", start, start + self.config.year_block_size - 1)
            }
        }
    }

    /// Current output value.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InconsistentValue`] if the selection slot does not match the
    /// configured type, which indicates a controller bug rather than bad input.
    pub fn value(&self) -> Result<CalendarValue, CalendarError> {
        CalendarValue::build(
            self.config.calendar_type,
            self.config.effective_mode(),
            &self.selection,
            self.value_time(),
        )
    }

    /// Whether the header's "previous" control can move the active view.
    pub fn can_go_previous(&self) -> bool {
        let action = match self.view {
            CalendarView::Day => CalendarAction::PreviousMonth,
            CalendarView::Month => CalendarAction::PreviousYear,
            CalendarView::Year => CalendarAction::PreviousYearBlock,
        };
        self.navigation_target(&action).is_some()
    }

    /// Whether the header's "next" control can move the active view.
    pub fn can_go_next(&self) -> bool {
        let action = match self.view {
            CalendarView::Day => CalendarAction::NextMonth,
            CalendarView::Month => CalendarAction::NextYear,
            CalendarView::Year => CalendarAction::NextYearBlock,
        };
        self.navigation_target(&action).is_some()
    }

    /// Applies an action and returns the effects for the host.
    pub fn apply(&mut self, action: CalendarAction) -> Vec<CalendarEffect> {
        let effects = match action {
            CalendarAction::SelectDate(date) => self.select_date(date),
            CalendarAction::SelectMonth(month) => self.select_month(month),
            CalendarAction::SelectYear(year) => self.select_year(year),
            CalendarAction::Hover(date) => {
                if self.hovered != Some(date) {
                    self.hovered = Some(date);
                    self.dirty = true;
                }
                Vec::new()
            }
            CalendarAction::ClearHover => {
                if self.hovered.take().is_some() {
                    self.dirty = true;
                }
                Vec::new()
            }
            CalendarAction::PreviousMonth
            | CalendarAction::NextMonth
            | CalendarAction::PreviousYear
            | CalendarAction::NextYear
            | CalendarAction::PreviousYearBlock
            | CalendarAction::NextYearBlock => {
                if let Some(target) = self.navigation_target(&action) {
                    self.set_anchor(target);
                }
                Vec::new()
            }
            CalendarAction::SetView(view) => {
                self.set_view(view);
                Vec::new()
            }
            CalendarAction::GoToToday => {
                let today = clamp_to_bounds(self.adapter.today(), self.bounds());
                self.set_anchor(today);
                self.set_view(self.config.calendar_type.initial_view());
                Vec::new()
            }
            CalendarAction::SetTime(time) => self.set_time(time),
            CalendarAction::Clear => {
                self.selection = SelectionState::Empty;
                self.time = None;
                self.hovered = None;
                self.dirty = true;
                self.emit_value(false)
            }
            CalendarAction::WriteValue(input) => {
                self.write_value(input);
                Vec::new()
            }
            CalendarAction::Key(key) => self.handle_key(key),
            CalendarAction::FocusCell(index) => {
                self.focused = Some(index);
                Vec::new()
            }
            CalendarAction::SetCalendarType {
                calendar_type,
                selection_mode,
            } => {
                let config = CalendarConfig {
                    calendar_type,
                    selection_mode,
                    ..self.config.clone()
                };
                self.reconfigure(config);
                Vec::new()
            }
            CalendarAction::Reconfigure(config) => {
                self.reconfigure(config);
                Vec::new()
            }
        };
        self.refresh();
        effects
    }

    fn refresh(&mut self) {
        if !self.dirty {
            return;
        }
        self.dirty = false;
        let snapshot = SelectionSnapshot::from_state(&self.selection);
        let options = GridOptions {
            disabled_dates: &self.config.disabled_dates,
            bounds: self.bounds(),
            selection: Some(&snapshot),
            hovered: self.hovered,
            status_fn: self.status_fn.as_deref(),
            enabled_fn: self.enabled_fn.as_deref(),
        };
        self.days = build_calendar_days(
            self.adapter.as_ref(),
            self.anchor,
            self.config.first_day_of_week,
            &options,
            &self.translator,
        );
    }

    fn bounds(&self) -> DateBounds {
        self.config.bounds()
    }

    fn is_date_disabled(&self, date: NaiveDate) -> bool {
        GridOptions {
            disabled_dates: &self.config.disabled_dates,
            bounds: self.bounds(),
            enabled_fn: self.enabled_fn.as_deref(),
            ..GridOptions::default()
        }
        .is_disabled(date)
    }

    fn month_excluded(&self, month: MonthValue) -> bool {
        match NaiveDate::from_ymd_opt(month.year, month.month, 1) {
            Some(start) => self
                .bounds()
                .excludes_span(start, self.adapter.end_of_month(start)),
            None => true,
        }
    }

    fn year_excluded(&self, year: i32) -> bool {
        match (
            NaiveDate::from_ymd_opt(year, 1, 1),
            NaiveDate::from_ymd_opt(year, 12, 31),
        ) {
            (Some(start), Some(end)) => self.bounds().excludes_span(start, end),
            _ => true,
        }
    }

    fn set_anchor(&mut self, anchor: NaiveDate) {
        if self.anchor != anchor {
            self.anchor = anchor;
            self.dirty = true;
        }
    }

    fn set_view(&mut self, view: CalendarView) {
        let allowed = match self.config.calendar_type {
            CalendarType::Day | CalendarType::Week | CalendarType::Range => true,
            CalendarType::Month => view != CalendarView::Day,
            CalendarType::Year => view == CalendarView::Year,
        };
        if !allowed {
            logging::warn!(
                "calendar ignored {} view for a {} calendar",
                view.token(),
                self.config.calendar_type.token()
            );
            return;
        }
        if self.view != view {
            self.view = view;
            self.focused = None;
        }
    }

    /// Target anchor for a navigation action, or `None` when the bounds forbid it.
    fn navigation_target(&self, action: &CalendarAction) -> Option<NaiveDate> {
        let adapter = self.adapter.as_ref();
        let bounds = self.bounds();
        let (target, span_start, span_end) = match action {
            CalendarAction::PreviousMonth | CalendarAction::NextMonth => {
                let delta = if *action == CalendarAction::PreviousMonth { -1 } else { 1 };
                let target = adapter.add_months(self.anchor, delta);
                (target, adapter.start_of_month(target), adapter.end_of_month(target))
            }
            CalendarAction::PreviousYear | CalendarAction::NextYear => {
                let delta = if *action == CalendarAction::PreviousYear { -1 } else { 1 };
                let target = adapter.add_years(self.anchor, delta);
                (target, adapter.start_of_year(target), adapter.end_of_year(target))
            }
            CalendarAction::PreviousYearBlock | CalendarAction::NextYearBlock => {
                let delta = if *action == CalendarAction::PreviousYearBlock {
                    -self.config.year_block_size
                } else {
                    self.config.year_block_size
                };
                let target = adapter.add_years(self.anchor, delta);
                let block_start = year_block_start(target.year());
                (
                    target,
                    NaiveDate::from_ymd_opt(block_start, 1, 1)?,
                    NaiveDate::from_ymd_opt(
                        block_start + self.config.year_block_size - 1,
                        12,
                        31,
                    )?,
                )
            }
            _ => return None,
        };
        if target == self.anchor || bounds.excludes_span(span_start, span_end) {
            return None;
        }
        Some(clamp_to_bounds(target, bounds))
    }

    fn select_date(&mut self, date: NaiveDate) -> Vec<CalendarEffect> {
        if self.is_date_disabled(date) {
            logging::warn!("calendar ignored selection of disabled date {date}");
            return Vec::new();
        }
        let adapter = self.adapter.as_ref();
        let selection = match (self.config.calendar_type, self.config.effective_mode()) {
            (CalendarType::Day, SelectionMode::Single) => SelectionState::Day(date),
            (CalendarType::Day, SelectionMode::Multiple) => {
                let mut dates = match &self.selection {
                    SelectionState::Days(dates) => dates.clone(),
                    _ => Vec::new(),
                };
                toggle_sorted(&mut dates, date);
                SelectionState::Days(dates)
            }
            (CalendarType::Range, _) => match self.selection {
                SelectionState::Range(DateRange { start, end: None }) => {
                    SelectionState::Range(DateRange::ordered(start, date))
                }
                _ => SelectionState::Range(DateRange { start: date, end: None }),
            },
            (CalendarType::Week, _) => {
                let first_day = self.config.first_day_of_week;
                SelectionState::Week(WeekRange {
                    start: adapter.start_of_week(date, first_day),
                    end: adapter.end_of_week(date, first_day),
                })
            }
            (CalendarType::Month | CalendarType::Year, _) => {
                logging::warn!(
                    "calendar ignored day selection on a {} calendar",
                    self.config.calendar_type.token()
                );
                return Vec::new();
            }
        };
        if let SelectionState::Range(range) = &selection {
            if range.is_complete() {
                self.hovered = None;
            }
        }
        if !adapter.is_same_month(date, self.anchor) {
            self.anchor = adapter.start_of_month(date);
        }
        self.selection = selection;
        self.focused = self.index_of(date);
        self.keyboard_origin = None;
        self.dirty = true;
        self.emit_value(true)
    }

    fn select_month(&mut self, month: MonthValue) -> Vec<CalendarEffect> {
        if MonthValue::new(month.month, month.year).is_none() || self.month_excluded(month) {
            logging::warn!(
                "calendar ignored month {}/{} outside the selectable range",
                month.month,
                month.year
            );
            return Vec::new();
        }
        let adapter = self.adapter.as_ref();
        let anchor = adapter.set_month(adapter.set_year(self.anchor, month.year), month.month as i32);
        let anchor = clamp_to_bounds(anchor, self.bounds());
        self.set_anchor(anchor);
        self.keyboard_origin = None;
        self.focused = None;

        if self.config.calendar_type != CalendarType::Month {
            // Month picker used as navigation: drill back down to the day grid.
            self.set_view(CalendarView::Day);
            return Vec::new();
        }
        self.selection = match (self.config.effective_mode(), &self.selection) {
            (SelectionMode::Single, _) => SelectionState::Month(month),
            (SelectionMode::Multiple, SelectionState::Months(months)) => {
                let mut months = months.clone();
                toggle_sorted(&mut months, month);
                SelectionState::Months(months)
            }
            (SelectionMode::Multiple, _) => SelectionState::Months(vec![month]),
        };
        self.dirty = true;
        self.emit_value(true)
    }

    fn select_year(&mut self, year: i32) -> Vec<CalendarEffect> {
        if self.year_excluded(year) {
            logging::warn!("calendar ignored year {year} outside the selectable range");
            return Vec::new();
        }
        let anchor = clamp_to_bounds(self.adapter.set_year(self.anchor, year), self.bounds());
        self.set_anchor(anchor);
        self.keyboard_origin = None;
        self.focused = None;

        if self.config.calendar_type != CalendarType::Year {
            // Year picker used as navigation: continue with the month picker.
            self.set_view(CalendarView::Month);
            return Vec::new();
        }
        self.selection = match (self.config.effective_mode(), &self.selection) {
            (SelectionMode::Single, _) => SelectionState::Year(year),
            (SelectionMode::Multiple, SelectionState::Years(years)) => {
                let mut years = years.clone();
                toggle_sorted(&mut years, year);
                SelectionState::Years(years)
            }
            (SelectionMode::Multiple, _) => SelectionState::Years(vec![year]),
        };
        self.dirty = true;
        self.emit_value(true)
    }

    fn set_time(&mut self, time: TimeValue) -> Vec<CalendarEffect> {
        if !self.config.show_time {
            logging::warn!("calendar ignored time input: time selection is disabled");
            return Vec::new();
        }
        if let Err(err) = TimeValue::new(time.hour, time.minute, time.period, self.config.hour_format) {
            logging::warn!("calendar ignored time input: {err}");
            return Vec::new();
        }
        self.time = Some(time);
        match self.selection {
            SelectionState::Day(_) => self.emit_value(true),
            _ => Vec::new(),
        }
    }

    fn value_time(&self) -> Option<TimeValue> {
        let single_day = self.config.calendar_type == CalendarType::Day
            && self.config.effective_mode() == SelectionMode::Single;
        if self.config.show_time && single_day {
            self.time
        } else {
            None
        }
    }

    /// Auto-close rules per calendar type. Month and year single selections close as soon as any
    /// value exists; multiple selections never close.
    fn should_auto_close(&self) -> bool {
        if !self.config.auto_close || self.config.effective_mode() == SelectionMode::Multiple {
            return false;
        }
        match (&self.selection, self.config.calendar_type) {
            (SelectionState::Day(_), CalendarType::Day) => {
                !self.config.show_time || self.time.is_some()
            }
            (SelectionState::Range(range), CalendarType::Range) => range.is_complete(),
            (SelectionState::Week(_), CalendarType::Week)
            | (SelectionState::Month(_), CalendarType::Month)
            | (SelectionState::Year(_), CalendarType::Year) => true,
            _ => false,
        }
    }

    fn emit_value(&self, committed: bool) -> Vec<CalendarEffect> {
        let value = match self.value() {
            Ok(value) => value,
            Err(err) => {
                logging::error!("calendar value build failed: {err}");
                return Vec::new();
            }
        };
        let form_value = value.form_value();
        let mut effects = vec![
            CalendarEffect::ValueChanged(value),
            CalendarEffect::FormValueChanged(form_value),
        ];
        if committed {
            effects.push(CalendarEffect::SelectionFinished);
            if self.should_auto_close() {
                effects.push(CalendarEffect::AutoClose);
            }
        }
        effects
    }

    fn reconfigure(&mut self, config: CalendarConfig) {
        let shape_changed = config.calendar_type != self.config.calendar_type
            || config.effective_mode() != self.config.effective_mode();
        let first_day_changed = config.first_day_of_week != self.config.first_day_of_week;
        self.config = config;
        if shape_changed {
            self.selection = SelectionState::Empty;
            self.time = None;
            self.hovered = None;
            self.view = self.config.calendar_type.initial_view();
        } else if first_day_changed {
            // Re-derive around mid-week so the old week mostly survives the shift.
            if let SelectionState::Week(week) = self.selection {
                self.selection = self.week_containing(self.adapter.add_days(week.start, 3));
            }
        }
        self.anchor = clamp_to_bounds(self.anchor, self.bounds());
        self.focused = None;
        self.keyboard_origin = None;
        self.dirty = true;
    }

    fn week_containing(&self, date: NaiveDate) -> SelectionState {
        let first_day = self.config.first_day_of_week;
        SelectionState::Week(WeekRange {
            start: self.adapter.start_of_week(date, first_day),
            end: self.adapter.end_of_week(date, first_day),
        })
    }

    fn to_date(&self, text: &str) -> Option<NaiveDate> {
        self.adapter.convert_to_date(DateLike::Text(text))
    }

    fn input_dates(&self, input: &CalendarInput) -> Option<Vec<NaiveDate>> {
        match input {
            CalendarInput::Date(date) => Some(vec![*date]),
            CalendarInput::Text(text) => self.to_date(text).map(|date| vec![date]),
            CalendarInput::Dates(dates) => Some(dates.clone()),
            CalendarInput::Texts(texts) => texts.iter().map(|text| self.to_date(text)).collect(),
            _ => None,
        }
    }

    /// Maps any accepted input shape onto the slot for the configured type and cardinality.
    fn normalize_input(&self, input: &CalendarInput) -> Option<SelectionState> {
        let mode = self.config.effective_mode();
        let state = match self.config.calendar_type {
            CalendarType::Day => {
                let mut dates = self.input_dates(input)?;
                match mode {
                    SelectionMode::Single if dates.len() == 1 => SelectionState::Day(dates[0]),
                    SelectionMode::Single => return None,
                    SelectionMode::Multiple => {
                        dates.sort_unstable();
                        dates.dedup();
                        SelectionState::Days(dates)
                    }
                }
            }
            CalendarType::Range => {
                let (start, end) = match input {
                    CalendarInput::Range { start, end } => {
                        let start = self.to_date(start.as_deref()?)?;
                        let end = match end.as_deref() {
                            Some(text) => Some(self.to_date(text)?),
                            None => None,
                        };
                        (start, end)
                    }
                    other => match self.input_dates(other)?.as_slice() {
                        [start] => (*start, None),
                        [start, end] => (*start, Some(*end)),
                        _ => return None,
                    },
                };
                SelectionState::Range(match end {
                    Some(end) => DateRange::ordered(start, end),
                    None => DateRange { start, end: None },
                })
            }
            CalendarType::Week => {
                let date = match input {
                    CalendarInput::Range { start, .. } => self.to_date(start.as_deref()?)?,
                    other => *self.input_dates(other)?.first()?,
                };
                self.week_containing(date)
            }
            CalendarType::Month => {
                let mut months: Vec<MonthValue> = match input {
                    CalendarInput::Month { month, year } => vec![MonthValue::new(*month, *year)?],
                    CalendarInput::Months(months) => months
                        .iter()
                        .map(|value| MonthValue::new(value.month, value.year))
                        .collect::<Option<_>>()?,
                    other => self
                        .input_dates(other)?
                        .into_iter()
                        .map(|date| MonthValue {
                            year: date.year(),
                            month: date.month(),
                        })
                        .collect(),
                };
                months.sort_unstable();
                months.dedup();
                match mode {
                    SelectionMode::Single if months.len() == 1 => SelectionState::Month(months[0]),
                    SelectionMode::Single => return None,
                    SelectionMode::Multiple => SelectionState::Months(months),
                }
            }
            CalendarType::Year => {
                let mut years: Vec<i32> = match input {
                    CalendarInput::Year(year) => vec![*year],
                    CalendarInput::Years(years) => years.clone(),
                    other => self
                        .input_dates(other)?
                        .into_iter()
                        .map(|date| date.year())
                        .collect(),
                };
                years.sort_unstable();
                years.dedup();
                match mode {
                    SelectionMode::Single if years.len() == 1 => SelectionState::Year(years[0]),
                    SelectionMode::Single => return None,
                    SelectionMode::Multiple => SelectionState::Years(years),
                }
            }
        };
        Some(state)
    }

    fn selection_in_bounds(&self, state: &SelectionState) -> bool {
        match state {
            SelectionState::Empty => true,
            SelectionState::Day(date) => !self.is_date_disabled(*date),
            SelectionState::Days(dates) => dates.iter().all(|date| !self.is_date_disabled(*date)),
            SelectionState::Range(range) => {
                !self.is_date_disabled(range.start)
                    && range.end.map_or(true, |end| !self.is_date_disabled(end))
            }
            SelectionState::Week(week) => self.bounds().contains(week.start) || self.bounds().contains(week.end),
            SelectionState::Month(month) => !self.month_excluded(*month),
            SelectionState::Months(months) => months.iter().all(|month| !self.month_excluded(*month)),
            SelectionState::Year(year) => !self.year_excluded(*year),
            SelectionState::Years(years) => years.iter().all(|year| !self.year_excluded(*year)),
        }
    }

    fn write_value(&mut self, input: Option<CalendarInput>) {
        let Some(input) = input.filter(|input| !is_empty_list(input)) else {
            self.selection = SelectionState::Empty;
            self.time = None;
            self.dirty = true;
            return;
        };
        let Some(state) = self.normalize_input(&input) else {
            logging::warn!(
                "calendar ignored value {input:?} for a {}/{} calendar",
                self.config.calendar_type.token(),
                self.config.effective_mode().token()
            );
            return;
        };
        if !self.selection_in_bounds(&state) {
            logging::warn!("calendar ignored out-of-bounds value {input:?}");
            return;
        }
        let focus_date = match &state {
            SelectionState::Day(date) => Some(*date),
            SelectionState::Days(dates) => dates.first().copied(),
            SelectionState::Range(range) => Some(range.start),
            SelectionState::Week(week) => Some(week.start),
            SelectionState::Month(month) => NaiveDate::from_ymd_opt(month.year, month.month, 1),
            SelectionState::Months(months) => months
                .first()
                .and_then(|month| NaiveDate::from_ymd_opt(month.year, month.month, 1)),
            SelectionState::Year(year) => NaiveDate::from_ymd_opt(*year, 1, 1),
            SelectionState::Years(years) => years
                .first()
                .and_then(|year| NaiveDate::from_ymd_opt(*year, 1, 1)),
            SelectionState::Empty => None,
        };
        if let Some(date) = focus_date {
            let anchor = clamp_to_bounds(date, self.bounds());
            self.set_anchor(anchor);
        }
        self.selection = state;
        self.dirty = true;
    }

    fn index_of(&self, date: NaiveDate) -> Option<usize> {
        let grid_start = self.adapter.start_of_week(
            self.adapter.start_of_month(self.anchor),
            self.config.first_day_of_week,
        );
        let offset = (date - grid_start).num_days();
        (0..DAY_GRID.len as i64)
            .contains(&offset)
            .then_some(offset as usize)
    }

    fn default_day_focus(&self) -> usize {
        let selected = match &self.selection {
            SelectionState::Day(date) => Some(*date),
            SelectionState::Days(dates) => dates.first().copied(),
            SelectionState::Range(range) => Some(range.start),
            SelectionState::Week(week) => Some(week.start),
            _ => None,
        };
        let today = self.adapter.today();
        [selected, Some(today)]
            .into_iter()
            .flatten()
            .filter(|date| self.adapter.is_same_month(*date, self.anchor))
            .find_map(|date| self.index_of(date))
            .or_else(|| {
                self.days
                    .iter()
                    .position(|day| day.is_current_month && !day.is_disabled)
            })
            .unwrap_or(0)
    }

    fn handle_key(&mut self, key: NavKey) -> Vec<CalendarEffect> {
        if self.keyboard_origin.is_none() {
            self.keyboard_origin = Some((self.anchor, self.view));
        }
        match self.view {
            CalendarView::Day => self.handle_day_key(key),
            CalendarView::Month => self.handle_month_key(key),
            CalendarView::Year => self.handle_year_key(key),
        }
    }

    fn cancel_navigation(&mut self) -> Vec<CalendarEffect> {
        if let Some((anchor, view)) = self.keyboard_origin.take() {
            self.set_anchor(anchor);
            self.view = view;
        }
        self.focused = None;
        Vec::new()
    }

    fn focus(&mut self, index: usize) -> Vec<CalendarEffect> {
        self.focused = Some(index);
        vec![CalendarEffect::FocusCell(index)]
    }

    fn handle_day_key(&mut self, key: NavKey) -> Vec<CalendarEffect> {
        let index = self.keyboard_index();
        let enabled: Vec<bool> = self.days.iter().map(|day| !day.is_disabled).collect();
        let Some(current) = self.days.get(index).map(|day| day.date) else {
            return Vec::new();
        };
        match keyboard::navigate(key, index, DAY_GRID, &enabled) {
            KeyOutcome::Focus(next) => self.focus(next),
            KeyOutcome::PreviousPage(_) | KeyOutcome::NextPage(_) => {
                let adapter = self.adapter.as_ref();
                let target = match key {
                    NavKey::Left => adapter.add_days(current, -1),
                    NavKey::Right => adapter.add_days(current, 1),
                    NavKey::Up => adapter.add_days(current, -7),
                    NavKey::Down => adapter.add_days(current, 7),
                    NavKey::PageUp => adapter.add_months(current, -1),
                    NavKey::PageDown => adapter.add_months(current, 1),
                    _ => return Vec::new(),
                };
                let target_month = adapter.start_of_month(target);
                if self
                    .bounds()
                    .excludes_span(target_month, adapter.end_of_month(target_month))
                {
                    return Vec::new();
                }
                self.set_anchor(target_month);
                self.refresh();
                match self.index_of(target) {
                    Some(next) => self.focus(next),
                    None => Vec::new(),
                }
            }
            KeyOutcome::Commit(_) => self.select_date(current),
            KeyOutcome::Cancel => self.cancel_navigation(),
            KeyOutcome::Ignored => Vec::new(),
        }
    }

    fn handle_month_key(&mut self, key: NavKey) -> Vec<CalendarEffect> {
        let cells = self.month_cells();
        let index = self.keyboard_index();
        let enabled: Vec<bool> = cells.iter().map(|cell| !cell.is_disabled).collect();
        let outcome = keyboard::navigate(key, index, MONTH_GRID, &enabled);
        match outcome {
            KeyOutcome::Focus(next) => self.focus(next),
            KeyOutcome::PreviousPage(next) | KeyOutcome::NextPage(next) => {
                let action = if matches!(outcome, KeyOutcome::PreviousPage(_)) {
                    CalendarAction::PreviousYear
                } else {
                    CalendarAction::NextYear
                };
                match self.navigation_target(&action) {
                    Some(target) => {
                        self.set_anchor(target);
                        self.focus(next)
                    }
                    None => Vec::new(),
                }
            }
            KeyOutcome::Commit(next) => self.select_month(MonthValue {
                year: self.anchor.year(),
                month: next as u32 + 1,
            }),
            KeyOutcome::Cancel => self.cancel_navigation(),
            KeyOutcome::Ignored => Vec::new(),
        }
    }

    fn handle_year_key(&mut self, key: NavKey) -> Vec<CalendarEffect> {
        let cells = self.year_cells();
        let index = self.keyboard_index();
        let enabled: Vec<bool> = cells.iter().map(|cell| !cell.is_disabled).collect();
        let outcome = keyboard::navigate(key, index, YEAR_GRID, &enabled);
        match outcome {
            KeyOutcome::Focus(next) => self.focus(next),
            KeyOutcome::PreviousPage(next) | KeyOutcome::NextPage(next) => {
                let action = if matches!(outcome, KeyOutcome::PreviousPage(_)) {
                    CalendarAction::PreviousYearBlock
                } else {
                    CalendarAction::NextYearBlock
                };
                match self.navigation_target(&action) {
                    Some(target) => {
                        let year = year_block_start(target.year()) + next as i32;
                        self.set_anchor(self.adapter.set_year(target, year));
                        self.focus(next)
                    }
                    None => Vec::new(),
                }
            }
            KeyOutcome::Commit(next) => {
                self.select_year(year_block_start(self.anchor.year()) + next as i32)
            }
            KeyOutcome::Cancel => self.cancel_navigation(),
            KeyOutcome::Ignored => Vec::new(),
        }
    }
}

fn clamp_to_bounds(date: NaiveDate, bounds: DateBounds) -> NaiveDate {
    match (bounds.min, bounds.max) {
        (Some(min), _) if date < min => min,
        (_, Some(max)) if date > max => max,
        _ => date,
    }
}

/// `[]` deserializes as an empty year list whatever the calendar type.
fn is_empty_list(input: &CalendarInput) -> bool {
    match input {
        CalendarInput::Years(years) => years.is_empty(),
        CalendarInput::Months(months) => months.is_empty(),
        CalendarInput::Texts(texts) => texts.is_empty(),
        CalendarInput::Dates(dates) => dates.is_empty(),
        _ => false,
    }
}

fn toggle_sorted<T: Ord>(values: &mut Vec<T>, value: T) {
    match values.binary_search(&value) {
        Ok(index) => {
            values.remove(index);
        }
        Err(index) => values.insert(index, value),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::config::{CalendarDefaults, CalendarOptions};
    use crate::date_adapter::FixedDateAdapter;
    use crate::model::{FormValue, HourFormat, Period};

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    fn controller(options: CalendarOptions) -> CalendarController {
        let config = CalendarConfig::resolve(&options, &CalendarDefaults::default());
        CalendarController::new(
            config,
            Rc::new(FixedDateAdapter::new(ymd(2024, 3, 15))),
            Translator::default(),
        )
    }

    fn typed(calendar_type: CalendarType, selection_mode: SelectionMode) -> CalendarController {
        controller(CalendarOptions {
            calendar_type: Some(calendar_type),
            selection_mode: Some(selection_mode),
            ..CalendarOptions::default()
        })
    }

    fn input(value: serde_json::Value) -> Option<CalendarInput> {
        Some(serde_json::from_value(value).expect("input shape"))
    }

    #[test]
    fn range_clicks_in_reverse_order_are_normalized() {
        let mut calendar = typed(CalendarType::Range, SelectionMode::Single);

        let first = calendar.apply(CalendarAction::SelectDate(ymd(2024, 1, 10)));
        assert_eq!(
            first,
            vec![
                CalendarEffect::ValueChanged(CalendarValue::Range {
                    range: Some(DateRange {
                        start: ymd(2024, 1, 10),
                        end: None,
                    }),
                }),
                CalendarEffect::FormValueChanged(FormValue::Dates(vec![ymd(2024, 1, 10)])),
                CalendarEffect::SelectionFinished,
            ]
        );
        assert_eq!(calendar.anchor(), ymd(2024, 1, 1));

        let second = calendar.apply(CalendarAction::SelectDate(ymd(2024, 1, 5)));
        assert_eq!(
            calendar.selection(),
            &SelectionState::Range(DateRange {
                start: ymd(2024, 1, 5),
                end: Some(ymd(2024, 1, 10)),
            })
        );
        assert_eq!(second.last(), Some(&CalendarEffect::AutoClose));

        let third = calendar.apply(CalendarAction::SelectDate(ymd(2024, 1, 20)));
        assert_eq!(
            calendar.selection(),
            &SelectionState::Range(DateRange {
                start: ymd(2024, 1, 20),
                end: None,
            })
        );
        assert!(!third.contains(&CalendarEffect::AutoClose));
    }

    #[test]
    fn multiple_days_toggle_and_never_auto_close() {
        let mut calendar = typed(CalendarType::Day, SelectionMode::Multiple);
        calendar.apply(CalendarAction::SelectDate(ymd(2024, 3, 1)));
        calendar.apply(CalendarAction::SelectDate(ymd(2024, 3, 2)));
        let effects = calendar.apply(CalendarAction::SelectDate(ymd(2024, 3, 1)));

        assert_eq!(calendar.selection(), &SelectionState::Days(vec![ymd(2024, 3, 2)]));
        assert_eq!(
            effects,
            vec![
                CalendarEffect::ValueChanged(CalendarValue::Days {
                    dates: vec![ymd(2024, 3, 2)],
                }),
                CalendarEffect::FormValueChanged(FormValue::Dates(vec![ymd(2024, 3, 2)])),
                CalendarEffect::SelectionFinished,
            ]
        );
    }

    #[test]
    fn single_day_auto_closes_unless_disabled() {
        let mut calendar = typed(CalendarType::Day, SelectionMode::Single);
        let effects = calendar.apply(CalendarAction::SelectDate(ymd(2024, 3, 20)));
        assert_eq!(effects.last(), Some(&CalendarEffect::AutoClose));

        let mut calendar = controller(CalendarOptions {
            auto_close: Some(false),
            ..CalendarOptions::default()
        });
        let effects = calendar.apply(CalendarAction::SelectDate(ymd(2024, 3, 20)));
        assert_eq!(effects.last(), Some(&CalendarEffect::SelectionFinished));
    }

    #[test]
    fn min_date_blocks_navigation_before_its_month() {
        let mut calendar = controller(CalendarOptions {
            min_date: Some(ymd(2024, 1, 15)),
            ..CalendarOptions::default()
        });
        calendar.apply(CalendarAction::PreviousMonth);
        calendar.apply(CalendarAction::PreviousMonth);
        assert_eq!(calendar.anchor(), ymd(2024, 1, 15));
        assert!(!calendar.can_go_previous());

        calendar.apply(CalendarAction::PreviousMonth);
        assert_eq!(calendar.anchor(), ymd(2024, 1, 15));
        assert!(calendar.days()[..15].iter().all(|day| day.is_disabled));
        assert!(!calendar.days()[15].is_disabled);
        assert!(calendar.can_go_next());
    }

    #[test]
    fn disabled_dates_cannot_be_selected() {
        let mut calendar = controller(CalendarOptions {
            disabled_dates: Some(vec![ymd(2024, 3, 20)]),
            ..CalendarOptions::default()
        });
        assert_eq!(calendar.apply(CalendarAction::SelectDate(ymd(2024, 3, 20))), vec![]);
        assert_eq!(calendar.selection(), &SelectionState::Empty);

        let fridays_only: SharedEnabledFn =
            Rc::new(|date: NaiveDate| date.weekday().num_days_from_sunday() == 5);
        let mut calendar = calendar.with_enabled_fn(fridays_only);
        assert_eq!(calendar.apply(CalendarAction::SelectDate(ymd(2024, 3, 21))), vec![]);
        calendar.apply(CalendarAction::SelectDate(ymd(2024, 3, 22)));
        assert_eq!(calendar.selection(), &SelectionState::Day(ymd(2024, 3, 22)));
    }

    #[test]
    fn week_selection_uses_first_day_of_week() {
        let mut calendar = controller(CalendarOptions {
            calendar_type: Some(CalendarType::Week),
            first_day_of_week: Some(1),
            ..CalendarOptions::default()
        });
        let effects = calendar.apply(CalendarAction::SelectDate(ymd(2024, 3, 13)));
        assert_eq!(
            calendar.selection(),
            &SelectionState::Week(WeekRange {
                start: ymd(2024, 3, 11),
                end: ymd(2024, 3, 17),
            })
        );
        assert_eq!(effects.last(), Some(&CalendarEffect::AutoClose));
        let highlighted: Vec<NaiveDate> = calendar
            .days()
            .iter()
            .filter(|day| day.is_in_range)
            .map(|day| day.date)
            .collect();
        assert_eq!(highlighted.first(), Some(&ymd(2024, 3, 11)));
        assert_eq!(highlighted.len(), 7);
    }

    #[test]
    fn hover_previews_without_changing_the_selection() {
        let mut calendar = typed(CalendarType::Range, SelectionMode::Single);
        calendar.apply(CalendarAction::SelectDate(ymd(2024, 3, 10)));
        calendar.apply(CalendarAction::Hover(ymd(2024, 3, 14)));

        let previewed = calendar.days().iter().filter(|day| day.is_in_range).count();
        assert_eq!(previewed, 5);
        assert_eq!(
            calendar.selection(),
            &SelectionState::Range(DateRange {
                start: ymd(2024, 3, 10),
                end: None,
            })
        );

        calendar.apply(CalendarAction::ClearHover);
        assert_eq!(calendar.days().iter().filter(|day| day.is_in_range).count(), 0);
    }

    #[test]
    fn month_and_year_selection_replace_or_toggle() {
        let mut months = typed(CalendarType::Month, SelectionMode::Single);
        assert_eq!(months.view(), CalendarView::Month);
        let effects = months.apply(CalendarAction::SelectMonth(MonthValue { year: 2024, month: 6 }));
        assert_eq!(effects.last(), Some(&CalendarEffect::AutoClose));
        months.apply(CalendarAction::SelectMonth(MonthValue { year: 2024, month: 2 }));
        assert_eq!(
            months.selection(),
            &SelectionState::Month(MonthValue { year: 2024, month: 2 })
        );

        let mut years = typed(CalendarType::Year, SelectionMode::Multiple);
        years.apply(CalendarAction::SelectYear(2030));
        years.apply(CalendarAction::SelectYear(2021));
        let effects = years.apply(CalendarAction::SelectYear(2030));
        assert_eq!(years.selection(), &SelectionState::Years(vec![2021]));
        assert!(!effects.contains(&CalendarEffect::AutoClose));
    }

    #[test]
    fn year_outside_bounds_is_ignored() {
        let mut calendar = controller(CalendarOptions {
            calendar_type: Some(CalendarType::Year),
            max_date: Some(ymd(2025, 6, 30)),
            ..CalendarOptions::default()
        });
        assert_eq!(calendar.apply(CalendarAction::SelectYear(2026)), vec![]);
        assert_eq!(calendar.selection(), &SelectionState::Empty);
        assert!(calendar.year_cells().iter().any(|cell| cell.year == 2026 && cell.is_disabled));
    }

    #[test]
    fn drilling_through_pickers_preserves_the_anchor() {
        let mut calendar = typed(CalendarType::Day, SelectionMode::Single);
        calendar.apply(CalendarAction::SetView(CalendarView::Year));
        assert_eq!(calendar.anchor(), ymd(2024, 3, 15));
        assert_eq!(calendar.header_label(), "2020 - 2039");

        assert_eq!(calendar.apply(CalendarAction::SelectYear(2030)), vec![]);
        assert_eq!(calendar.view(), CalendarView::Month);
        assert_eq!(calendar.anchor(), ymd(2030, 3, 15));

        calendar.apply(CalendarAction::SelectMonth(MonthValue { year: 2030, month: 2 }));
        assert_eq!(calendar.view(), CalendarView::Day);
        assert_eq!(calendar.anchor(), ymd(2030, 2, 15));
        assert_eq!(calendar.header_label(), "February 2030");
        assert_eq!(calendar.selection(), &SelectionState::Empty);

        calendar.apply(CalendarAction::GoToToday);
        assert_eq!(calendar.anchor(), ymd(2024, 3, 15));
    }

    #[test]
    fn month_calendars_cannot_open_the_day_view() {
        let mut calendar = typed(CalendarType::Month, SelectionMode::Single);
        calendar.apply(CalendarAction::SetView(CalendarView::Day));
        assert_eq!(calendar.view(), CalendarView::Month);
        calendar.apply(CalendarAction::SetView(CalendarView::Year));
        assert_eq!(calendar.view(), CalendarView::Year);
    }

    #[test]
    fn switching_calendar_type_resets_the_selection() {
        let mut calendar = typed(CalendarType::Day, SelectionMode::Single);
        calendar.apply(CalendarAction::SelectDate(ymd(2024, 3, 20)));

        calendar.apply(CalendarAction::SetCalendarType {
            calendar_type: CalendarType::Month,
            selection_mode: SelectionMode::Single,
        });
        assert_eq!(calendar.selection(), &SelectionState::Empty);
        assert_eq!(calendar.view(), CalendarView::Month);
        assert_eq!(calendar.value(), Ok(CalendarValue::Month { month: None }));
    }

    #[test]
    fn reconfiguring_bounds_keeps_the_selection() {
        let mut calendar = controller(CalendarOptions {
            calendar_type: Some(CalendarType::Week),
            ..CalendarOptions::default()
        });
        calendar.apply(CalendarAction::SelectDate(ymd(2024, 3, 13)));

        let config = CalendarConfig {
            first_day_of_week: 1,
            max_date: Some(ymd(2024, 3, 31)),
            ..calendar.config().clone()
        };
        calendar.apply(CalendarAction::Reconfigure(config));
        assert_eq!(
            calendar.selection(),
            &SelectionState::Week(WeekRange {
                start: ymd(2024, 3, 11),
                end: ymd(2024, 3, 17),
            })
        );
        assert!(!calendar.can_go_next());
    }

    #[test]
    fn write_value_normalizes_every_input_shape() {
        let mut day = typed(CalendarType::Day, SelectionMode::Single);
        assert_eq!(day.apply(CalendarAction::WriteValue(Some("2024-05-02".into()))), vec![]);
        assert_eq!(day.selection(), &SelectionState::Day(ymd(2024, 5, 2)));
        assert_eq!(day.anchor(), ymd(2024, 5, 2));
        day.apply(CalendarAction::WriteValue(Some("not a date".into())));
        assert_eq!(day.selection(), &SelectionState::Day(ymd(2024, 5, 2)));

        let mut range = typed(CalendarType::Range, SelectionMode::Single);
        range.apply(CalendarAction::WriteValue(input(
            json!({ "start": "2024-01-10", "end": "2024-01-05" }),
        )));
        assert_eq!(
            range.selection(),
            &SelectionState::Range(DateRange::ordered(ymd(2024, 1, 5), ymd(2024, 1, 10)))
        );

        let mut days = typed(CalendarType::Day, SelectionMode::Multiple);
        days.apply(CalendarAction::WriteValue(input(json!([
            "2024-03-02",
            "2024-03-01",
            "2024-03-02"
        ]))));
        assert_eq!(
            days.selection(),
            &SelectionState::Days(vec![ymd(2024, 3, 1), ymd(2024, 3, 2)])
        );
        days.apply(CalendarAction::WriteValue(input(json!(["2024-03-05", "nope"]))));
        assert_eq!(
            days.selection(),
            &SelectionState::Days(vec![ymd(2024, 3, 1), ymd(2024, 3, 2)])
        );
        days.apply(CalendarAction::WriteValue(input(json!([]))));
        assert_eq!(days.selection(), &SelectionState::Empty);

        let mut month = typed(CalendarType::Month, SelectionMode::Single);
        month.apply(CalendarAction::WriteValue(input(json!({ "month": 6, "year": 2024 }))));
        assert_eq!(
            month.selection(),
            &SelectionState::Month(MonthValue { year: 2024, month: 6 })
        );

        let mut years = typed(CalendarType::Year, SelectionMode::Multiple);
        years.apply(CalendarAction::WriteValue(input(json!([2022, 2020, 2022]))));
        assert_eq!(years.selection(), &SelectionState::Years(vec![2020, 2022]));
    }

    #[test]
    fn write_value_ignores_mismatched_and_out_of_bounds_values() {
        let mut calendar = controller(CalendarOptions {
            min_date: Some(ymd(2024, 1, 15)),
            ..CalendarOptions::default()
        });
        calendar.apply(CalendarAction::WriteValue(Some("2024-01-01".into())));
        assert_eq!(calendar.selection(), &SelectionState::Empty);

        calendar.apply(CalendarAction::WriteValue(input(json!({ "month": 6, "year": 2024 }))));
        assert_eq!(calendar.selection(), &SelectionState::Empty);

        calendar.apply(CalendarAction::WriteValue(Some(ymd(2024, 2, 1).into())));
        calendar.apply(CalendarAction::WriteValue(None));
        assert_eq!(calendar.selection(), &SelectionState::Empty);
    }

    #[test]
    fn time_requires_show_time_and_completes_auto_close() {
        let mut plain = typed(CalendarType::Day, SelectionMode::Single);
        let nine = TimeValue::new(9, 30, None, HourFormat::H24).expect("time");
        assert_eq!(plain.apply(CalendarAction::SetTime(nine)), vec![]);
        assert_eq!(plain.time(), None);

        let mut calendar = controller(CalendarOptions {
            show_time: Some(true),
            hour_format: Some(HourFormat::H12),
            ..CalendarOptions::default()
        });
        let effects = calendar.apply(CalendarAction::SelectDate(ymd(2024, 3, 20)));
        assert!(!effects.contains(&CalendarEffect::AutoClose));

        assert_eq!(calendar.apply(CalendarAction::SetTime(nine)), vec![]);
        let evening = TimeValue::new(7, 15, Some(Period::Pm), HourFormat::H12).expect("time");
        let effects = calendar.apply(CalendarAction::SetTime(evening));
        assert_eq!(
            effects.first(),
            Some(&CalendarEffect::ValueChanged(CalendarValue::Day {
                date: Some(ymd(2024, 3, 20)),
                time: Some(evening),
            }))
        );
        assert_eq!(effects.last(), Some(&CalendarEffect::AutoClose));
    }

    #[test]
    fn clear_emits_the_empty_value() {
        let mut calendar = typed(CalendarType::Day, SelectionMode::Multiple);
        calendar.apply(CalendarAction::SelectDate(ymd(2024, 3, 1)));
        assert_eq!(
            calendar.apply(CalendarAction::Clear),
            vec![
                CalendarEffect::ValueChanged(CalendarValue::Days { dates: vec![] }),
                CalendarEffect::FormValueChanged(FormValue::Empty),
            ]
        );
    }

    #[test]
    fn keyboard_index_follows_written_value_and_pointer_focus() {
        let mut calendar = typed(CalendarType::Day, SelectionMode::Single);
        calendar.apply(CalendarAction::WriteValue(input(json!("2024-03-20"))));
        let index = calendar.keyboard_index();
        assert_eq!(calendar.days()[index].date, ymd(2024, 3, 20));
        assert_eq!(
            calendar.apply(CalendarAction::Key(NavKey::Right)),
            vec![CalendarEffect::FocusCell(index + 1)]
        );
        assert_eq!(calendar.days()[index + 1].date, ymd(2024, 3, 21));

        let today = calendar
            .days()
            .iter()
            .position(|day| day.date == ymd(2024, 3, 15))
            .expect("today in grid");
        calendar.apply(CalendarAction::FocusCell(today));
        assert_eq!(calendar.keyboard_index(), today);
        let effects = calendar.apply(CalendarAction::Key(NavKey::Right));
        assert_eq!(effects, vec![CalendarEffect::FocusCell(today + 1)]);
        assert_eq!(calendar.days()[today + 1].date, ymd(2024, 3, 16));
    }

    #[test]
    fn keyboard_index_starts_pickers_on_the_anchor() {
        let mut calendar = typed(CalendarType::Day, SelectionMode::Single);
        calendar.apply(CalendarAction::SetView(CalendarView::Month));
        assert_eq!(calendar.keyboard_index(), 2);
        calendar.apply(CalendarAction::SetView(CalendarView::Year));
        assert_eq!(calendar.keyboard_index(), 4);
    }

    #[test]
    fn arrow_keys_cross_months_and_escape_restores_the_anchor() {
        let mut calendar = typed(CalendarType::Day, SelectionMode::Single);
        assert_eq!(
            calendar.apply(CalendarAction::Key(NavKey::Up)),
            vec![CalendarEffect::FocusCell(12)]
        );

        calendar.apply(CalendarAction::FocusCell(5));
        assert_eq!(calendar.days()[5].date, ymd(2024, 3, 1));
        assert_eq!(
            calendar.apply(CalendarAction::Key(NavKey::Up)),
            vec![CalendarEffect::FocusCell(26)]
        );
        assert_eq!(calendar.anchor(), ymd(2024, 2, 1));
        assert_eq!(calendar.days()[26].date, ymd(2024, 2, 23));

        assert_eq!(calendar.apply(CalendarAction::Key(NavKey::Escape)), vec![]);
        assert_eq!(calendar.anchor(), ymd(2024, 3, 15));
        assert_eq!(calendar.focused(), None);

        let effects = calendar.apply(CalendarAction::Key(NavKey::Enter));
        assert_eq!(calendar.selection(), &SelectionState::Day(ymd(2024, 3, 15)));
        assert_eq!(effects.last(), Some(&CalendarEffect::AutoClose));
    }

    #[test]
    fn page_down_keeps_the_day_of_month() {
        let mut calendar = typed(CalendarType::Day, SelectionMode::Single);
        calendar.apply(CalendarAction::FocusCell(19));
        assert_eq!(
            calendar.apply(CalendarAction::Key(NavKey::PageDown)),
            vec![CalendarEffect::FocusCell(15)]
        );
        assert_eq!(calendar.days()[15].date, ymd(2024, 4, 15));
    }

    #[test]
    fn year_keys_wrap_into_the_previous_block() {
        let mut calendar = typed(CalendarType::Year, SelectionMode::Single);
        calendar.apply(CalendarAction::FocusCell(0));
        assert_eq!(
            calendar.apply(CalendarAction::Key(NavKey::Left)),
            vec![CalendarEffect::FocusCell(19)]
        );
        assert_eq!(calendar.anchor().year(), 2019);
        assert_eq!(calendar.header_label(), "2000 - 2019");

        let effects = calendar.apply(CalendarAction::Key(NavKey::Enter));
        assert_eq!(calendar.selection(), &SelectionState::Year(2019));
        assert_eq!(effects.last(), Some(&CalendarEffect::AutoClose));
    }

    #[test]
    fn month_keys_stop_at_the_max_bound() {
        let mut calendar = controller(CalendarOptions {
            calendar_type: Some(CalendarType::Month),
            max_date: Some(ymd(2024, 12, 31)),
            ..CalendarOptions::default()
        });
        calendar.apply(CalendarAction::FocusCell(11));
        assert_eq!(calendar.apply(CalendarAction::Key(NavKey::Down)), vec![]);
        assert_eq!(calendar.anchor(), ymd(2024, 3, 15));
        assert!(!calendar.can_go_next());
    }
}
