//! Single open/close events and their clock-text rendering.

use std::fmt;

use chrono::{NaiveTime, Timelike};
use serde::Deserialize;

use crate::{
    error::ScheduleError,
    traits::{ClockFormatter, TwelveHourClock},
};

/// Last valid second of a day (23:59:59).
pub const MAX_SECONDS_OF_DAY: i32 = 86_399;

/// Sentinel for an event with no configured time.
pub const UNSET_SECONDS: i32 = -1;

/// Kind of an opening-hours event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Open,
    Close,
    /// No event configured. Must never reach formatting.
    #[default]
    #[serde(rename = "")]
    Unset,
}

impl EventKind {
    /// Wire name of the kind (`"open"`, `"close"` or `""`).
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Open => "open",
            EventKind::Close => "close",
            EventKind::Unset => "",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An open or close marker at a second-of-day offset.
///
/// Missing fields deserialize to the unset placeholder (`type: ""`, `value: -1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct TimeEvent {
    #[serde(rename = "type", default)]
    pub kind: EventKind,
    #[serde(rename = "value", default = "unset_seconds")]
    pub seconds_of_day: i32,
}

fn unset_seconds() -> i32 {
    UNSET_SECONDS
}

impl Default for TimeEvent {
    fn default() -> Self {
        Self::unset()
    }
}

impl TimeEvent {
    pub fn new(kind: EventKind, seconds_of_day: i32) -> Self {
        Self {
            kind,
            seconds_of_day,
        }
    }

    pub fn open(seconds_of_day: i32) -> Self {
        Self::new(EventKind::Open, seconds_of_day)
    }

    pub fn close(seconds_of_day: i32) -> Self {
        Self::new(EventKind::Close, seconds_of_day)
    }

    /// The "no data provided" placeholder.
    pub fn unset() -> Self {
        Self::new(EventKind::Unset, UNSET_SECONDS)
    }

    /// True for events that must be filtered out before merging.
    pub fn is_unset(&self) -> bool {
        self.kind == EventKind::Unset || self.seconds_of_day < 0
    }

    /// Check that the value lies within `0..=86399`.
    ///
    /// A value above the maximum is corrupt data; a negative value is the
    /// unset sentinel and signals a caller that forgot to filter it.
    pub fn validate_range(&self) -> Result<(), ScheduleError> {
        if self.seconds_of_day > MAX_SECONDS_OF_DAY {
            Err(ScheduleError::OutOfRange {
                value: self.seconds_of_day,
            })
        } else if self.seconds_of_day < 0 {
            Err(ScheduleError::UnsetValue)
        } else {
            Ok(())
        }
    }

    /// Validated time of day for this event.
    pub fn clock_time(&self) -> Result<NaiveTime, ScheduleError> {
        self.validate_range()?;
        NaiveTime::from_num_seconds_from_midnight_opt(self.seconds_of_day as u32, 0).ok_or(
            ScheduleError::OutOfRange {
                value: self.seconds_of_day,
            },
        )
    }

    /// Render as 12-hour clock text, e.g. `"9 AM"`.
    pub fn to_clock_text(&self) -> Result<String, ScheduleError> {
        self.to_clock_text_with(&TwelveHourClock)
    }

    /// Render with a caller-supplied formatter.
    pub fn to_clock_text_with(&self, clock: &dyn ClockFormatter) -> Result<String, ScheduleError> {
        Ok(clock.format(self.clock_time()?))
    }
}

/// 12-hour rendering with the "Noon" convention.
///
/// Minutes are omitted when zero and are not zero-padded otherwise
/// (`21:05` renders as `"9:5 PM"`). Midnight is `"12 AM"`; the noon hour
/// keeps the "Noon" token, so `12:30` renders as `"12:30 Noon"`.
pub fn format_clock_time(time: NaiveTime) -> String {
    let (hour, minute) = (time.hour(), time.minute());

    let (display_hour, suffix) = match hour {
        0 => (12, "AM"),
        1..=11 => (hour, "AM"),
        12 if minute == 0 => return "Noon".to_string(),
        12 => (12, "Noon"),
        _ => (hour - 12, "PM"),
    };

    if minute == 0 {
        format!("{} {}", display_hour, suffix)
    } else {
        format!("{}:{} {}", display_hour, minute, suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clock(seconds: u32) -> String {
        format_clock_time(NaiveTime::from_num_seconds_from_midnight_opt(seconds, 0).unwrap())
    }

    // ==================== Clock Text Tests ====================

    #[test]
    fn test_format_midnight() {
        assert_eq!(clock(0), "12 AM");
    }

    #[test]
    fn test_format_morning() {
        assert_eq!(clock(32400), "9 AM");
    }

    #[test]
    fn test_format_noon() {
        assert_eq!(clock(43200), "Noon");
    }

    #[test]
    fn test_format_after_noon_with_minutes() {
        // 12:30
        assert_eq!(clock(45000), "12:30 Noon");
    }

    #[test]
    fn test_format_afternoon() {
        assert_eq!(clock(61200), "5 PM");
    }

    #[test]
    fn test_format_minutes_not_zero_padded() {
        // 21:05
        assert_eq!(clock(75900), "9:5 PM");
    }

    #[test]
    fn test_format_ignores_seconds() {
        // 10:30:45
        assert_eq!(clock(37845), "10:30 AM");
    }

    #[test]
    fn test_format_last_second_of_day() {
        assert_eq!(clock(86399), "11:59 PM");
    }

    // ==================== Range Validation Tests ====================

    #[test]
    fn test_validate_range_accepts_bounds() {
        assert!(TimeEvent::open(0).validate_range().is_ok());
        assert!(TimeEvent::close(MAX_SECONDS_OF_DAY).validate_range().is_ok());
    }

    #[test]
    fn test_validate_range_rejects_above_max() {
        let result = TimeEvent::open(86400).validate_range();
        assert!(matches!(
            result,
            Err(ScheduleError::OutOfRange { value: 86400 })
        ));
    }

    #[test]
    fn test_validate_range_rejects_sentinel() {
        let result = TimeEvent::unset().validate_range();
        assert!(matches!(result, Err(ScheduleError::UnsetValue)));
    }

    #[test]
    fn test_to_clock_text_validates_first() {
        assert!(matches!(
            TimeEvent::close(-5).to_clock_text(),
            Err(ScheduleError::UnsetValue)
        ));
        assert_eq!(TimeEvent::close(64800).to_clock_text().unwrap(), "6 PM");
    }

    // ==================== Deserialization Tests ====================

    #[test]
    fn test_deserialize_open_event() {
        let event: TimeEvent = serde_json::from_str(r#"{"type": "open", "value": 32400}"#).unwrap();
        assert_eq!(event, TimeEvent::open(32400));
    }

    #[test]
    fn test_deserialize_empty_object_is_placeholder() {
        let event: TimeEvent = serde_json::from_str("{}").unwrap();
        assert_eq!(event, TimeEvent::unset());
        assert!(event.is_unset());
    }

    #[test]
    fn test_deserialize_empty_type_string() {
        let event: TimeEvent = serde_json::from_str(r#"{"type": "", "value": -1}"#).unwrap();
        assert_eq!(event.kind, EventKind::Unset);
    }

    #[test]
    fn test_deserialize_unknown_type_fails() {
        let result: Result<TimeEvent, _> =
            serde_json::from_str(r#"{"type": "lunch", "value": 100}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_event_kind_display() {
        assert_eq!(EventKind::Open.to_string(), "open");
        assert_eq!(EventKind::Close.to_string(), "close");
        assert_eq!(EventKind::Unset.to_string(), "");
    }

    // ==================== Property-Based Tests ====================

    mod proptest_tests {
        use proptest::prelude::*;

        use super::*;

        proptest! {
            #[test]
            fn clock_text_has_valid_suffix(seconds in 0u32..86400) {
                let text = clock(seconds);
                prop_assert!(
                    text == "Noon"
                        || text.ends_with(" Noon")
                        || text.ends_with(" AM")
                        || text.ends_with(" PM"),
                    "unexpected clock text {:?} for {}", text, seconds
                );
            }

            #[test]
            fn clock_hour_is_between_one_and_twelve(seconds in 0u32..86400) {
                let text = clock(seconds);
                if text != "Noon" {
                    let hour: u32 = text
                        .split([':', ' '])
                        .next()
                        .and_then(|h| h.parse().ok())
                        .unwrap();
                    prop_assert!((1..=12).contains(&hour));
                }
            }

            #[test]
            fn in_range_events_always_render(seconds in 0i32..=MAX_SECONDS_OF_DAY) {
                prop_assert!(TimeEvent::open(seconds).to_clock_text().is_ok());
            }

            #[test]
            fn out_of_range_events_never_render(seconds in (MAX_SECONDS_OF_DAY + 1)..i32::MAX) {
                prop_assert!(TimeEvent::close(seconds).to_clock_text().is_err());
            }
        }
    }
}
