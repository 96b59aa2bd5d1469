//! Translation lookup with layered fallback.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::model::DayStatus;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Strings the calendar renders. Month numbers are 1-based, weekdays use 0 = Sunday.
pub enum TranslationKey {
    Today,
    Selected,
    InRange,
    Disabled,
    Status(DayStatus),
    PreviousMonth,
    NextMonth,
    PreviousYear,
    NextYear,
    PreviousYears,
    NextYears,
    ChooseMonth,
    ChooseYear,
    Clear,
    MonthName(u32),
    MonthShort(u32),
    WeekdayName(u32),
    WeekdayShort(u32),
}

impl TranslationKey {
    /// Stable dotted identifier used by map-backed sources.
    pub fn id(self) -> String {
        match self {
            Self::Today => "calendar.today".to_string(),
            Self::Selected => "calendar.selected".to_string(),
            Self::InRange => "calendar.inRange".to_string(),
            Self::Disabled => "calendar.disabled".to_string(),
            Self::Status(status) => format!("calendar.status.{}", status.token()),
            Self::PreviousMonth => "calendar.previousMonth".to_string(),
            Self::NextMonth => "calendar.nextMonth".to_string(),
            Self::PreviousYear => "calendar.previousYear".to_string(),
            Self::NextYear => "calendar.nextYear".to_string(),
            Self::PreviousYears => "calendar.previousYears".to_string(),
            Self::NextYears => "calendar.nextYears".to_string(),
            Self::ChooseMonth => "calendar.chooseMonth".to_string(),
            Self::ChooseYear => "calendar.chooseYear".to_string(),
            Self::Clear => "calendar.clear".to_string(),
            Self::MonthName(month) => format!("calendar.months.{month}"),
            Self::MonthShort(month) => format!("calendar.monthsShort.{month}"),
            Self::WeekdayName(day) => format!("calendar.weekdays.{day}"),
            Self::WeekdayShort(day) => format!("calendar.weekdaysShort.{day}"),
        }
    }

    fn default_text(self) -> String {
        let month_name = |month: u32| {
            MONTH_NAMES
                .get(month.wrapping_sub(1) as usize)
                .copied()
                .unwrap_or("")
        };
        let weekday_name = |day: u32| WEEKDAY_NAMES[(day % 7) as usize];
        match self {
            Self::Today => "today".to_string(),
            Self::Selected => "selected".to_string(),
            Self::InRange => "in range".to_string(),
            Self::Disabled => "disabled".to_string(),
            Self::Status(status) => status.token().to_string(),
            Self::PreviousMonth => "Previous month".to_string(),
            Self::NextMonth => "Next month".to_string(),
            Self::PreviousYear => "Previous year".to_string(),
            Self::NextYear => "Next year".to_string(),
            Self::PreviousYears => "Previous years".to_string(),
            Self::NextYears => "Next years".to_string(),
            Self::ChooseMonth => "Choose month".to_string(),
            Self::ChooseYear => "Choose year".to_string(),
            Self::Clear => "Clear".to_string(),
            Self::MonthName(month) => month_name(month).to_string(),
            Self::MonthShort(month) => month_name(month).chars().take(3).collect(),
            Self::WeekdayName(day) => weekday_name(day).to_string(),
            Self::WeekdayShort(day) => weekday_name(day).chars().take(2).collect(),
        }
    }
}

/// A source of translated strings. Returning `None` defers to the next layer.
pub trait TranslationSource {
    fn lookup(&self, key: TranslationKey) -> Option<String>;
}

impl TranslationSource for HashMap<String, String> {
    fn lookup(&self, key: TranslationKey) -> Option<String> {
        self.get(&key.id()).cloned()
    }
}

#[derive(Clone, Default)]
/// Resolves keys through the explicit source, then the global source, then built-in English.
pub struct Translator {
    explicit: Option<Rc<dyn TranslationSource>>,
    global: Option<Rc<dyn TranslationSource>>,
}

impl fmt::Debug for Translator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Translator")
            .field("explicit", &self.explicit.is_some())
            .field("global", &self.global.is_some())
            .finish()
    }
}

impl Translator {
    pub fn new(
        explicit: Option<Rc<dyn TranslationSource>>,
        global: Option<Rc<dyn TranslationSource>>,
    ) -> Self {
        Self { explicit, global }
    }

    pub fn text(&self, key: TranslationKey) -> String {
        self.explicit
            .as_ref()
            .and_then(|source| source.lookup(key))
            .or_else(|| self.global.as_ref().and_then(|source| source.lookup(key)))
            .unwrap_or_else(|| key.default_text())
    }
}
