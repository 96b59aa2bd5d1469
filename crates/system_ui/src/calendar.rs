//! Leptos calendar and date picker widgets driven by [`CalendarController`].
//!
//! The widgets own no selection logic. Every interaction becomes a [`CalendarAction`] applied to
//! the controller held in an `RwSignal`, and the returned [`CalendarEffect`]s are routed to the
//! host callbacks.

use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};

use calendar_engine::{
    CalendarAction, CalendarConfig, CalendarController, CalendarDefaults, CalendarEffect,
    CalendarInput, CalendarOptions, CalendarValue, CalendarView, DateAdapter, DateRange,
    FormValue, HourFormat, MonthValue, NavKey, Period, SharedEnabledFn, SharedStatusFn,
    SystemDateAdapter, TimeValue, TranslationKey, TranslationSource, Translator,
};
use leptos::ev::KeyboardEvent;
use leptos::*;

use crate::a11y::focus_calendar_cell;
use crate::primitives::{bool_token, merge_layout_class};
use crate::{Button, ButtonSize, ButtonVariant, IconButton, IconName, Popover};

static NEXT_CALENDAR_ID: AtomicUsize = AtomicUsize::new(1);

/// Viewport width below which the calendar switches to its compact layout.
const COMPACT_BREAKPOINT_PX: f64 = 480.0;

fn next_calendar_id() -> String {
    format!(
        "ui-calendar-{}",
        NEXT_CALENDAR_ID.fetch_add(1, Ordering::Relaxed)
    )
}

#[derive(Clone, Default)]
/// Application-wide calendar settings provided by [`CalendarProvider`].
pub struct CalendarHostContext {
    /// Global option layer between per-instance options and built-in defaults.
    pub defaults: CalendarDefaults,
    /// Global translation layer between per-instance translations and built-in English.
    pub translations: Option<Rc<dyn TranslationSource>>,
}

#[component]
/// Provides [`CalendarHostContext`] to every calendar below it.
pub fn CalendarProvider(
    /// Global option layer.
    #[prop(optional)]
    defaults: CalendarDefaults,
    /// Global translation layer.
    #[prop(optional)]
    translations: Option<Rc<dyn TranslationSource>>,
    children: Children,
) -> impl IntoView {
    provide_context(CalendarHostContext {
        defaults,
        translations,
    });
    children().into_view()
}

fn viewport_is_compact() -> bool {
    window()
        .inner_width()
        .ok()
        .and_then(|width| width.as_f64())
        .is_some_and(|width| width < COMPACT_BREAKPOINT_PX)
}

fn host_translator(explicit: Option<Rc<dyn TranslationSource>>) -> Translator {
    let global = use_context::<CalendarHostContext>().and_then(|host| host.translations);
    Translator::new(explicit, global)
}

/// Text shown in the date picker trigger for a committed value.
pub fn display_text(
    value: &CalendarValue,
    adapter: &dyn DateAdapter,
    translator: &Translator,
    pattern: &str,
) -> String {
    let date_text = |date| adapter.format(date, pattern);
    let month_text = |value: &MonthValue| {
        format!(
            "{} {}",
            translator.text(TranslationKey::MonthName(value.month)),
            value.year
        )
    };
    match value {
        CalendarValue::Day {
            date: Some(day),
            time,
        } => match time {
            Some(time) => format!("{} {}", date_text(*day), time_text(time)),
            None => date_text(*day),
        },
        CalendarValue::Days { dates } => dates
            .iter()
            .map(|day| date_text(*day))
            .collect::<Vec<_>>()
            .join(", "),
        CalendarValue::Range {
            range: Some(DateRange { start, end }),
        } => format!(
            "{} - {}",
            date_text(*start),
            end.map(date_text).unwrap_or_default()
        ),
        CalendarValue::Week { week: Some(week) } => {
            format!("{} - {}", date_text(week.start), date_text(week.end))
        }
        CalendarValue::Month { month: Some(value) } => month_text(value),
        CalendarValue::Months { months } => months
            .iter()
            .map(month_text)
            .collect::<Vec<_>>()
            .join(", "),
        CalendarValue::Year { year: Some(year) } => year.to_string(),
        CalendarValue::Years { years } => years
            .iter()
            .map(i32::to_string)
            .collect::<Vec<_>>()
            .join(", "),
        _ => String::new(),
    }
}

fn time_text(time: &TimeValue) -> String {
    match time.period {
        Some(Period::Am) => format!("{}:{:02} AM", time.hour, time.minute),
        Some(Period::Pm) => format!("{}:{:02} PM", time.hour, time.minute),
        None => format!("{:02}:{:02}", time.hour, time.minute),
    }
}

fn previous_action(view: CalendarView) -> (CalendarAction, TranslationKey, IconName) {
    match view {
        CalendarView::Day => (
            CalendarAction::PreviousMonth,
            TranslationKey::PreviousMonth,
            IconName::ChevronLeft,
        ),
        CalendarView::Month => (
            CalendarAction::PreviousYear,
            TranslationKey::PreviousYear,
            IconName::ChevronLeft,
        ),
        CalendarView::Year => (
            CalendarAction::PreviousYearBlock,
            TranslationKey::PreviousYears,
            IconName::ChevronDoubleLeft,
        ),
    }
}

fn next_action(view: CalendarView) -> (CalendarAction, TranslationKey, IconName) {
    match view {
        CalendarView::Day => (
            CalendarAction::NextMonth,
            TranslationKey::NextMonth,
            IconName::ChevronRight,
        ),
        CalendarView::Month => (
            CalendarAction::NextYear,
            TranslationKey::NextYear,
            IconName::ChevronRight,
        ),
        CalendarView::Year => (
            CalendarAction::NextYearBlock,
            TranslationKey::NextYears,
            IconName::ChevronDoubleRight,
        ),
    }
}

/// Next coarser picker reached from the header title, if any.
fn zoom_out(view: CalendarView) -> Option<(CalendarView, TranslationKey)> {
    match view {
        CalendarView::Day => Some((CalendarView::Month, TranslationKey::ChooseMonth)),
        CalendarView::Month => Some((CalendarView::Year, TranslationKey::ChooseYear)),
        CalendarView::Year => None,
    }
}

#[component]
/// Inline calendar with day, month and year pickers.
///
/// Options resolve once at mount against the [`CalendarHostContext`] defaults. `value` is the
/// form binding: every change is written into the controller without echoing `on_change`.
pub fn Calendar(
    /// Explicit per-instance options.
    #[prop(optional)]
    options: CalendarOptions,
    /// Date backend; the local clock when omitted.
    #[prop(optional)]
    adapter: Option<Rc<dyn DateAdapter>>,
    /// Explicit translation layer.
    #[prop(optional_no_strip)]
    translations: Option<Rc<dyn TranslationSource>>,
    /// Business status per date.
    #[prop(optional_no_strip)]
    status_fn: Option<SharedStatusFn>,
    /// Predicate that replaces the static disabled list.
    #[prop(optional_no_strip)]
    enabled_fn: Option<SharedEnabledFn>,
    /// Host-written value.
    #[prop(optional_no_strip)]
    value: Option<Signal<Option<CalendarInput>>>,
    /// Mirror of the current output value, updated after every action.
    #[prop(optional)]
    current_value: Option<RwSignal<Option<CalendarValue>>>,
    #[prop(optional)] on_change: Option<Callback<CalendarValue>>,
    #[prop(optional)] on_form_change: Option<Callback<FormValue>>,
    #[prop(optional)] on_selection_finished: Option<Callback<()>>,
    #[prop(optional)] on_auto_close: Option<Callback<()>>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
) -> impl IntoView {
    let defaults = use_context::<CalendarHostContext>()
        .map(|host| host.defaults)
        .unwrap_or_default();
    let config = CalendarConfig::resolve(&options, &defaults);
    let adapter = adapter.unwrap_or_else(|| Rc::new(SystemDateAdapter));
    let mut initial = CalendarController::new(config, adapter, host_translator(translations));
    initial.set_status_fn(status_fn);
    initial.set_enabled_fn(enabled_fn);
    let controller = create_rw_signal(initial);

    let root_id = id.unwrap_or_else(next_calendar_id);
    let focus_root = root_id.clone();

    let dispatch = Callback::new(move |action: CalendarAction| {
        let mut next = controller.get_untracked();
        let effects = next.apply(action);
        let output = next.value().ok();
        controller.set(next);
        if let Some(current_value) = current_value {
            if current_value.get_untracked() != output {
                current_value.set(output);
            }
        }

        for effect in effects {
            match effect {
                CalendarEffect::ValueChanged(value) => {
                    if let Some(on_change) = on_change.as_ref() {
                        on_change.call(value);
                    }
                }
                CalendarEffect::FormValueChanged(value) => {
                    if let Some(on_form_change) = on_form_change.as_ref() {
                        on_form_change.call(value);
                    }
                }
                CalendarEffect::SelectionFinished => {
                    if let Some(on_selection_finished) = on_selection_finished.as_ref() {
                        on_selection_finished.call(());
                    }
                }
                CalendarEffect::AutoClose => {
                    if let Some(on_auto_close) = on_auto_close.as_ref() {
                        on_auto_close.call(());
                    }
                }
                CalendarEffect::FocusCell(index) => {
                    let root = focus_root.clone();
                    request_animation_frame(move || {
                        let _ = focus_calendar_cell(&root, index);
                    });
                }
            }
        }
    });

    if let Some(value) = value {
        create_effect(move |_| {
            let input = value.get();
            dispatch.call(CalendarAction::WriteValue(input));
        });
    }

    let compact = create_rw_signal(viewport_is_compact());
    let resize_handle = window_event_listener(ev::resize, move |_| {
        let next = viewport_is_compact();
        if compact.get_untracked() != next {
            compact.set(next);
        }
    });
    on_cleanup(move || resize_handle.remove());

    let on_keydown = move |ev: KeyboardEvent| {
        let Some(key) = NavKey::from_key(&ev.key()) else {
            return;
        };
        ev.prevent_default();
        dispatch.call(CalendarAction::Key(key));
    };

    let text = move |key: TranslationKey| {
        controller.with_untracked(|calendar| calendar.translator().text(key))
    };
    let active_view = create_memo(move |_| controller.with(|calendar| calendar.view()));
    let show_time = controller.with_untracked(|calendar| calendar.config().show_time);

    view! {
        <div
            class=merge_layout_class("ui-calendar", layout_class)
            id=root_id
            data-ui-primitive="true"
            data-ui-kind="calendar"
            data-ui-type=move || controller.with(|calendar| calendar.config().calendar_type.token())
            data-ui-view=move || active_view.get().token()
            data-ui-layout=move || if compact.get() { "compact" } else { "regular" }
        >
            <div class="ui-calendar-header" data-ui-slot="header">
                {move || {
                    let (action, label, icon) = previous_action(active_view.get());
                    view! {
                        <IconButton
                            icon
                            ui_slot="previous"
                            aria_label=text(label)
                            disabled=Signal::derive(move || {
                                !controller.with(|calendar| calendar.can_go_previous())
                            })
                            on_click=Callback::new(move |_| dispatch.call(action.clone()))
                        />
                    }
                }}
                {move || {
                    let zoom = zoom_out(active_view.get());
                    let label = zoom.map(|(_, key)| text(key)).unwrap_or_default();
                    view! {
                        <Button
                            variant=ButtonVariant::Quiet
                            size=ButtonSize::Sm
                            ui_slot="title"
                            aria_label=label
                            disabled=zoom.is_none()
                            on_click=Callback::new(move |_| {
                                if let Some((view, _)) = zoom {
                                    dispatch.call(CalendarAction::SetView(view));
                                }
                            })
                        >
                            {move || controller.with(|calendar| calendar.header_label())}
                        </Button>
                    }
                }}
                {move || {
                    let (action, label, icon) = next_action(active_view.get());
                    view! {
                        <IconButton
                            icon
                            ui_slot="next"
                            aria_label=text(label)
                            disabled=Signal::derive(move || {
                                !controller.with(|calendar| calendar.can_go_next())
                            })
                            on_click=Callback::new(move |_| dispatch.call(action.clone()))
                        />
                    }
                }}
            </div>
            <div class="ui-calendar-body" data-ui-slot="body" on:keydown=on_keydown>
                {move || match active_view.get() {
                    CalendarView::Day => view! { <DayGrid controller dispatch /> }.into_view(),
                    CalendarView::Month => view! { <MonthGrid controller dispatch /> }.into_view(),
                    CalendarView::Year => view! { <YearGrid controller dispatch /> }.into_view(),
                }}
            </div>
            <div class="ui-calendar-footer" data-ui-slot="footer">
                {show_time.then(|| view! { <TimeField controller dispatch /> })}
                <Button
                    variant=ButtonVariant::Quiet
                    size=ButtonSize::Sm
                    ui_slot="today"
                    on_click=Callback::new(move |_| dispatch.call(CalendarAction::GoToToday))
                >
                    {move || text(TranslationKey::Today)}
                </Button>
                <Button
                    variant=ButtonVariant::Quiet
                    size=ButtonSize::Sm
                    ui_slot="clear"
                    leading_icon=IconName::Dismiss
                    on_click=Callback::new(move |_| dispatch.call(CalendarAction::Clear))
                >
                    {move || text(TranslationKey::Clear)}
                </Button>
            </div>
        </div>
    }
}

/// Reactive `true`/`false` token for one flag of cell `index`.
fn cell_flag<T: 'static>(
    cells: Memo<Vec<T>>,
    index: usize,
    read: fn(&T) -> bool,
) -> impl Fn() -> &'static str {
    move || bool_token(cells.with(|cells| cells.get(index).is_some_and(read)))
}

/// Roving tab stop: only the controller's keyboard cell is reachable with Tab.
fn tab_index(controller: RwSignal<CalendarController>, index: usize) -> impl Fn() -> i32 {
    move || {
        if controller.with(|calendar| calendar.keyboard_index()) == index {
            0
        } else {
            -1
        }
    }
}

/// Reports pointer or Tab focus so arrow keys continue from the focused cell.
fn report_focus(
    controller: RwSignal<CalendarController>,
    dispatch: Callback<CalendarAction>,
    index: usize,
) {
    if controller.with_untracked(|calendar| calendar.focused()) != Some(index) {
        dispatch.call(CalendarAction::FocusCell(index));
    }
}

#[component]
fn DayGrid(
    controller: RwSignal<CalendarController>,
    dispatch: Callback<CalendarAction>,
) -> impl IntoView {
    let days = create_memo(move |_| controller.with(|calendar| calendar.days().to_vec()));
    let page = create_memo(move |_| days.with(|days| days.first().map(|day| day.date)));
    let headers = move || {
        controller
            .with(|calendar| calendar.weekday_headers())
            .into_iter()
            .map(|header| view! { <span role="columnheader">{header}</span> })
            .collect_view()
    };
    // Buttons are rebuilt per page only, so focus and click targets survive state changes.
    let cells = move || {
        let _ = page.get();
        days
            .get_untracked()
            .into_iter()
            .enumerate()
            .map(|(index, day)| {
                let date = day.date;
                view! {
                    <button
                        type="button"
                        role="gridcell"
                        class="ui-calendar-day"
                        data-calendar-cell=index.to_string()
                        tabindex=tab_index(controller, index)
                        aria-label=move || {
                            days.with(|days| days.get(index).map(|day| day.aria_label.clone()))
                        }
                        aria-selected=cell_flag(days, index, |day| day.is_selected)
                        aria-disabled=cell_flag(days, index, |day| day.is_disabled)
                        data-ui-current-month=bool_token(day.is_current_month)
                        data-ui-today=cell_flag(days, index, |day| day.is_today)
                        data-ui-weekend=bool_token(day.is_weekend)
                        data-ui-selected=cell_flag(days, index, |day| day.is_selected)
                        data-ui-in-range=cell_flag(days, index, |day| day.is_in_range)
                        data-ui-hovered=cell_flag(days, index, |day| day.is_hovered)
                        data-ui-disabled=cell_flag(days, index, |day| day.is_disabled)
                        data-ui-status=move || {
                            days.with(|days| {
                                days.get(index)
                                    .and_then(|day| day.status)
                                    .map(|status| status.token())
                            })
                        }
                        on:focus=move |_| report_focus(controller, dispatch, index)
                        on:click=move |_| dispatch.call(CalendarAction::SelectDate(date))
                        on:mouseenter=move |_| {
                            if controller.with_untracked(|calendar| calendar.hovered()) != Some(date) {
                                dispatch.call(CalendarAction::Hover(date));
                            }
                        }
                    >
                        {day.day_number}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <div class="ui-calendar-weekdays" role="row">{headers}</div>
        <div
            class="ui-calendar-grid"
            role="grid"
            data-ui-grid="day"
            on:mouseleave=move |_| {
                if controller.with_untracked(|calendar| calendar.hovered()).is_some() {
                    dispatch.call(CalendarAction::ClearHover);
                }
            }
        >
            {cells}
        </div>
    }
}

#[component]
fn MonthGrid(
    controller: RwSignal<CalendarController>,
    dispatch: Callback<CalendarAction>,
) -> impl IntoView {
    let months = create_memo(move |_| controller.with(|calendar| calendar.month_cells()));
    let page = create_memo(move |_| months.with(|cells| cells.first().map(|cell| cell.year)));
    let cells = move || {
        let _ = page.get();
        months
            .get_untracked()
            .into_iter()
            .enumerate()
            .map(|(index, cell)| {
                let month = MonthValue {
                    year: cell.year,
                    month: cell.month,
                };
                view! {
                    <button
                        type="button"
                        role="gridcell"
                        class="ui-calendar-month"
                        data-calendar-cell=index.to_string()
                        tabindex=tab_index(controller, index)
                        aria-selected=cell_flag(months, index, |cell| cell.is_selected)
                        aria-disabled=cell_flag(months, index, |cell| cell.is_disabled)
                        data-ui-current=cell_flag(months, index, |cell| cell.is_current)
                        data-ui-selected=cell_flag(months, index, |cell| cell.is_selected)
                        data-ui-disabled=cell_flag(months, index, |cell| cell.is_disabled)
                        on:focus=move |_| report_focus(controller, dispatch, index)
                        on:click=move |_| dispatch.call(CalendarAction::SelectMonth(month))
                    >
                        {cell.label}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <div class="ui-calendar-grid" role="grid" data-ui-grid="month">
            {cells}
        </div>
    }
}

#[component]
fn YearGrid(
    controller: RwSignal<CalendarController>,
    dispatch: Callback<CalendarAction>,
) -> impl IntoView {
    let years = create_memo(move |_| controller.with(|calendar| calendar.year_cells()));
    let page = create_memo(move |_| years.with(|cells| cells.first().map(|cell| cell.year)));
    let cells = move || {
        let _ = page.get();
        years
            .get_untracked()
            .into_iter()
            .enumerate()
            .map(|(index, cell)| {
                let year = cell.year;
                view! {
                    <button
                        type="button"
                        role="gridcell"
                        class="ui-calendar-year"
                        data-calendar-cell=index.to_string()
                        tabindex=tab_index(controller, index)
                        aria-selected=cell_flag(years, index, |cell| cell.is_selected)
                        aria-disabled=cell_flag(years, index, |cell| cell.is_disabled)
                        data-ui-current=cell_flag(years, index, |cell| cell.is_current)
                        data-ui-selected=cell_flag(years, index, |cell| cell.is_selected)
                        data-ui-disabled=cell_flag(years, index, |cell| cell.is_disabled)
                        on:focus=move |_| report_focus(controller, dispatch, index)
                        on:click=move |_| dispatch.call(CalendarAction::SelectYear(year))
                    >
                        {year}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <div class="ui-calendar-grid" role="grid" data-ui-grid="year">
            {cells}
        </div>
    }
}

#[component]
fn TimeField(
    controller: RwSignal<CalendarController>,
    dispatch: Callback<CalendarAction>,
) -> impl IntoView {
    let format = controller.with_untracked(|calendar| calendar.config().hour_format);
    let initial = controller.with_untracked(|calendar| calendar.time());
    let (min_hour, max_hour) = match format {
        HourFormat::H12 => (1, 12),
        HourFormat::H24 => (0, 23),
    };
    let hour = create_rw_signal(initial.map_or(min_hour, |time| time.hour));
    let minute = create_rw_signal(initial.map_or(0, |time| time.minute));
    let period = create_rw_signal(initial.and_then(|time| time.period).unwrap_or(Period::Am));

    let commit = move || {
        let meridiem = (format == HourFormat::H12).then(|| period.get_untracked());
        match TimeValue::new(hour.get_untracked(), minute.get_untracked(), meridiem, format) {
            Ok(time) => dispatch.call(CalendarAction::SetTime(time)),
            Err(err) => logging::warn!("calendar time input rejected: {err}"),
        }
    };
    let parse_into = move |signal: RwSignal<u8>, raw: String| match raw.trim().parse::<u8>() {
        Ok(parsed) => {
            signal.set(parsed);
            commit();
        }
        Err(_) => logging::warn!("calendar time input rejected: {raw:?} is not a number"),
    };

    let format_token = match format {
        HourFormat::H12 => "12",
        HourFormat::H24 => "24",
    };

    view! {
        <div class="ui-calendar-time" data-ui-slot="time" data-ui-hour-format=format_token>
            <input
                type="number"
                class="ui-calendar-time-hour"
                min=min_hour
                max=max_hour
                prop:value=move || hour.get().to_string()
                on:change=move |ev| parse_into(hour, event_target_value(&ev))
            />
            <span aria-hidden="true">":"</span>
            <input
                type="number"
                class="ui-calendar-time-minute"
                min=0
                max=59
                prop:value=move || format!("{:02}", minute.get())
                on:change=move |ev| parse_into(minute, event_target_value(&ev))
            />
            {(format == HourFormat::H12).then(|| view! {
                <select
                    class="ui-calendar-time-period"
                    prop:value=move || match period.get() {
                        Period::Am => "AM",
                        Period::Pm => "PM",
                    }
                    on:change=move |ev| {
                        period.set(if event_target_value(&ev) == "PM" { Period::Pm } else { Period::Am });
                        commit();
                    }
                >
                    <option value="AM">"AM"</option>
                    <option value="PM">"PM"</option>
                </select>
            })}
        </div>
    }
}

#[component]
/// Trigger button plus popover hosting a [`Calendar`]; closes on the calendar's auto-close signal.
pub fn DatePicker(
    #[prop(optional)] options: CalendarOptions,
    #[prop(optional)] adapter: Option<Rc<dyn DateAdapter>>,
    #[prop(optional_no_strip)] translations: Option<Rc<dyn TranslationSource>>,
    #[prop(optional_no_strip)] status_fn: Option<SharedStatusFn>,
    #[prop(optional_no_strip)] enabled_fn: Option<SharedEnabledFn>,
    #[prop(optional_no_strip)] value: Option<Signal<Option<CalendarInput>>>,
    #[prop(optional)] on_change: Option<Callback<CalendarValue>>,
    #[prop(optional)] on_form_change: Option<Callback<FormValue>>,
    #[prop(optional, into)] placeholder: MaybeSignal<String>,
    /// strftime pattern for dates in the trigger text.
    #[prop(default = "%Y-%m-%d")]
    display_format: &'static str,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let adapter = adapter.unwrap_or_else(|| Rc::new(SystemDateAdapter));
    let display_adapter = adapter.clone();
    let display_translator = host_translator(translations.clone());
    let open = create_rw_signal(false);
    let current = create_rw_signal(None::<CalendarValue>);
    let calendar_id = next_calendar_id();
    let popover_id = format!("{calendar_id}-popover");

    let trigger_text = move || {
        let text = current.with(|value| {
            value
                .as_ref()
                .map(|value| display_text(value, display_adapter.as_ref(), &display_translator, display_format))
                .unwrap_or_default()
        });
        if text.is_empty() {
            placeholder.get()
        } else {
            text
        }
    };

    view! {
        <div
            class=merge_layout_class("ui-date-picker", layout_class)
            data-ui-primitive="true"
            data-ui-kind="date-picker"
            data-ui-state=move || if open.get() { "open" } else { "closed" }
        >
            <Button
                ui_slot="trigger"
                aria_haspopup="dialog"
                aria_controls=popover_id.clone()
                aria_expanded=Signal::derive(move || open.get())
                trailing_icon=IconName::Calendar
                on_click=Callback::new(move |_| open.update(|open| *open = !*open))
            >
                {trigger_text}
            </Button>
            <Popover
                id=popover_id
                open=open
                on_dismiss=Callback::new(move |_| open.set(false))
            >
                <Calendar
                    id=calendar_id
                    options
                    adapter
                    translations
                    status_fn
                    enabled_fn
                    value
                    current_value=current
                    on_change=Callback::new(move |value| {
                        if let Some(on_change) = on_change.as_ref() {
                            on_change.call(value);
                        }
                    })
                    on_form_change=Callback::new(move |value| {
                        if let Some(on_form_change) = on_form_change.as_ref() {
                            on_form_change.call(value);
                        }
                    })
                    on_auto_close=Callback::new(move |_| open.set(false))
                />
            </Popover>
        </div>
    }
}
