//! Headless calendar selection engine.
//!
//! The crate owns date arithmetic behind a swappable [`DateAdapter`], the 42-cell day grid and
//! month/year picker view models, keyboard focus mapping, and the [`CalendarController`] that
//! turns user and host actions into selection state plus effects. Rendering lives in `system_ui`.

pub mod config;
pub mod date_adapter;
pub mod error;
pub mod i18n;
pub mod keyboard;
pub mod model;
pub mod selection;
pub mod view_model;

pub use chrono::NaiveDate;

pub use config::{CalendarConfig, CalendarDefaults, CalendarOptions};
pub use date_adapter::{DateAdapter, DateLike, FixedDateAdapter, SystemDateAdapter};
pub use error::{CalendarError, TimeError};
pub use i18n::{TranslationKey, TranslationSource, Translator};
pub use keyboard::{navigate, GridLayout, KeyOutcome, NavKey};
pub use model::*;
pub use selection::{
    CalendarAction, CalendarController, CalendarEffect, SharedEnabledFn, SharedStatusFn,
};
pub use view_model::{
    build_calendar_days, build_month_cells, build_year_cells, format_long_date, weekday_headers,
    year_block_start, DateBounds, GridOptions, SelectionSnapshot,
};
