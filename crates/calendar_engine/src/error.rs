//! Error types for contract violations inside the calendar engine.
//!
//! User input never produces these: unparseable or out-of-bounds values are logged and ignored by
//! the controller. These errors surface only when a caller asks for something the engine cannot
//! represent.

use thiserror::Error;

use crate::model::{CalendarType, HourFormat, SelectionMode};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors raised when building an output value from inconsistent parts.
pub enum CalendarError {
    /// The selection slot does not match the requested calendar type and cardinality.
    #[error("cannot build a {calendar_type:?}/{selection_mode:?} value from a {slot} selection")]
    InconsistentValue {
        /// Calendar type the value was requested for.
        calendar_type: CalendarType,
        /// Cardinality the value was requested for.
        selection_mode: SelectionMode,
        /// Name of the selection slot that was actually active.
        slot: &'static str,
    },
    /// A time was supplied for a value shape that has no time component.
    #[error("time values are only supported for single-day selections")]
    UnexpectedTime,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
/// Validation failures for [`crate::model::TimeValue`].
pub enum TimeError {
    /// Hour outside the range allowed by the hour format.
    #[error("hour {hour} is out of range for {format:?}")]
    HourOutOfRange {
        /// Rejected hour.
        hour: u8,
        /// Active hour format.
        format: HourFormat,
    },
    /// Minute outside `0..=59`.
    #[error("minute {0} is out of range")]
    MinuteOutOfRange(u8),
    /// 12-hour times need an AM/PM period.
    #[error("12-hour times require a period")]
    MissingPeriod,
    /// 24-hour times must not carry a period.
    #[error("24-hour times must not carry a period")]
    UnexpectedPeriod,
}
