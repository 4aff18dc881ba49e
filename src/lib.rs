//! Opening Hours Library
//!
//! Turns a weekly opening-hours description (per-day lists of open/close
//! events, possibly crossing midnight) into a human-readable schedule such as
//! `"Monday: 9 AM - 5 PM"`.

pub mod config;
pub mod error;
pub mod merge;
pub mod schedule;
pub mod time;
pub mod traits;

// Re-export commonly used types
pub use config::AppConfig;
pub use error::ScheduleError;
pub use merge::format_day;
pub use schedule::{DayPlan, DaySchedule, WEEK, WeeklySchedule, weekday_key, weekday_name};
pub use time::{EventKind, MAX_SECONDS_OF_DAY, TimeEvent, format_clock_time};
pub use traits::{ClockFormatter, MockClockFormatter, TwelveHourClock};
