//! Per-day merge of open/close events into a report line.
//!
//! Events are sorted by time and walked as a two-state machine: after an
//! OPEN the next event must be a CLOSE and vice versa. A leading CLOSE is the
//! tail of yesterday's range and is skipped. A trailing OPEN borrows the
//! following day's first event, which must be a CLOSE.

use chrono::Weekday;

use crate::{
    error::ScheduleError,
    schedule::{weekday_key, weekday_name},
    time::{EventKind, TimeEvent},
    traits::ClockFormatter,
};

const RANGE_SEPARATOR: char = ',';

/// Format one day's events as `"<Day>: <ranges>\n"`.
///
/// `lookahead` is the following day's first event, used only when this day
/// ends with an unmatched OPEN.
pub fn format_day(
    day: Weekday,
    events: &[TimeEvent],
    lookahead: Option<&TimeEvent>,
    clock: &dyn ClockFormatter,
) -> Result<String, ScheduleError> {
    let mut sorted: Vec<&TimeEvent> = events.iter().collect();
    sorted.sort_by_key(|event| event.seconds_of_day);

    let key = weekday_key(day);
    let mut line = format!("{}:", weekday_name(day));
    // The kind that may not come next. Starts as CLOSE so the first event must open.
    let mut forbidden = EventKind::Close;
    let last = sorted.len().saturating_sub(1);

    for (index, event) in sorted.iter().enumerate() {
        tracing::trace!(
            day = key,
            kind = %event.kind,
            seconds = event.seconds_of_day,
            "merging event"
        );

        if index == 0 && event.kind == EventKind::Close {
            // Already used to close yesterday's range.
            continue;
        }
        if event.kind == forbidden {
            return Err(ScheduleError::ConsecutiveEvent {
                day: key,
                kind: event.kind,
            });
        }

        match event.kind {
            EventKind::Close => {
                line.push_str(&format!(
                    " - {}{}",
                    event.to_clock_text_with(clock)?,
                    RANGE_SEPARATOR
                ));
                forbidden = EventKind::Close;
            }
            EventKind::Open if index == last => match lookahead {
                Some(next) if next.kind == EventKind::Close => {
                    line.push_str(&format!(
                        " {} - {}{}",
                        event.to_clock_text_with(clock)?,
                        next.to_clock_text_with(clock)?,
                        RANGE_SEPARATOR
                    ));
                    forbidden = EventKind::Open;
                }
                _ => return Err(ScheduleError::MissingClosingTime { day: key }),
            },
            EventKind::Open => {
                line.push_str(&format!(" {}", event.to_clock_text_with(clock)?));
                forbidden = EventKind::Open;
            }
            EventKind::Unset => {
                return Err(ScheduleError::UnknownEventType {
                    day: key,
                    kind: event.kind,
                });
            }
        }
    }

    if line.ends_with(RANGE_SEPARATOR) {
        line.pop();
    }
    line.push('\n');
    Ok(line)
}
