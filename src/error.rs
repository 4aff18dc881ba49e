use thiserror::Error;

use crate::time::{EventKind, MAX_SECONDS_OF_DAY};

/// Typed errors for opening-hours processing.
///
/// Every variant aborts the whole weekly report. There is no partial-result mode.
#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("Wrong time value {value} specified. It exceeds the maximum value of {max}.", max = MAX_SECONDS_OF_DAY)]
    OutOfRange { value: i32 },
    #[error("This is a default value, implying that this event shouldn't be processed.")]
    UnsetValue,
    #[error("Two consecutive {kind} times on {day}.")]
    ConsecutiveEvent { day: &'static str, kind: EventKind },
    #[error("Expecting closing time for {day} on the next day, but no such closing time specified.")]
    MissingClosingTime { day: &'static str },
    #[error("Wrong type \"{kind}\" specified on {day}.")]
    UnknownEventType { day: &'static str, kind: EventKind },
    #[error("Invalid opening hours input: {0}")]
    Parse(#[from] serde_json::Error),
}
