//! Leptos calendar widgets and the small primitive set they are built from.
//!
//! Selection logic lives in `calendar_engine`; this crate renders its view models, translates DOM
//! events into [`calendar_engine::CalendarAction`]s, and exposes the stable `data-ui-*` DOM
//! contract the host stylesheet targets.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod a11y;
mod calendar;
mod icon;
mod primitives;

pub use calendar::{display_text, Calendar, CalendarHostContext, CalendarProvider, DatePicker};
pub use icon::{Icon, IconName, IconSize};
pub use primitives::{Button, ButtonShape, ButtonSize, ButtonVariant, IconButton, Popover};

/// Convenience imports for application crates embedding calendars.
pub mod prelude {
    pub use crate::{
        Button, ButtonShape, ButtonSize, ButtonVariant, Calendar, CalendarHostContext,
        CalendarProvider, DatePicker, Icon, IconButton, IconName, IconSize, Popover,
    };
    pub use calendar_engine::{
        CalendarInput, CalendarOptions, CalendarType, CalendarValue, FormValue, SelectionMode,
    };
}
